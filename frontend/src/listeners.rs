//! Page-level listeners that sit outside the form's state machine.
//!
//! - Window resize, debounced: one notification per burst of resize events.
//! - Smooth scrolling for in-page anchors (`a[href^="#"]`).
//!
//! Both are removed from the DOM when `PageListeners` is dropped.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{
    Element, MouseEvent, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, Window,
};
use yew::Callback;

pub const RESIZE_DEBOUNCE_MS: u32 = 250;

pub struct PageListeners {
    window: Option<Window>,
    resize: Closure<dyn FnMut()>,
    // Dropping the pending timeout cancels it.
    _pending_resize: Rc<RefCell<Option<Timeout>>>,
    anchors: Vec<(Element, Closure<dyn FnMut(MouseEvent)>)>,
}

impl PageListeners {
    pub fn register(on_resize: Callback<()>) -> Self {
        let window = web_sys::window();
        let pending = Rc::new(RefCell::new(None::<Timeout>));

        let resize = {
            let pending = Rc::clone(&pending);
            Closure::<dyn FnMut()>::new(move || {
                let on_resize = on_resize.clone();
                let timeout = Timeout::new(RESIZE_DEBOUNCE_MS, move || on_resize.emit(()));
                // Replacing the previous timeout cancels it.
                pending.borrow_mut().replace(timeout);
            })
        };
        if let Some(window) = &window {
            window
                .add_event_listener_with_callback("resize", resize.as_ref().unchecked_ref())
                .ok();
        }

        let anchors = window
            .as_ref()
            .and_then(|w| w.document())
            .map(|document| register_anchor_scrolling(&document))
            .unwrap_or_default();

        Self {
            window,
            resize,
            _pending_resize: pending,
            anchors,
        }
    }
}

fn register_anchor_scrolling(
    document: &web_sys::Document,
) -> Vec<(Element, Closure<dyn FnMut(MouseEvent)>)> {
    let Ok(nodes) = document.query_selector_all("a[href^=\"#\"]") else {
        return Vec::new();
    };

    let mut anchors = Vec::new();
    for index in 0..nodes.length() {
        let Some(anchor) = nodes.get(index).and_then(|n| n.dyn_into::<Element>().ok()) else {
            continue;
        };
        let target_document = document.clone();
        let href_source = anchor.clone();
        let on_click = Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
            event.prevent_default();
            let target = href_source
                .get_attribute("href")
                .and_then(|href| target_document.query_selector(&href).ok().flatten());
            if let Some(target) = target {
                let options = ScrollIntoViewOptions::new();
                options.set_behavior(ScrollBehavior::Smooth);
                options.set_block(ScrollLogicalPosition::Start);
                target.scroll_into_view_with_scroll_into_view_options(&options);
            }
        });
        anchor
            .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
            .ok();
        anchors.push((anchor, on_click));
    }
    anchors
}

impl Drop for PageListeners {
    fn drop(&mut self) {
        if let Some(window) = &self.window {
            window
                .remove_event_listener_with_callback("resize", self.resize.as_ref().unchecked_ref())
                .ok();
        }
        for (anchor, on_click) in &self.anchors {
            anchor
                .remove_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
                .ok();
        }
    }
}
