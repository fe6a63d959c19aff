//! SMS submission form: root module wiring the Yew `Component` implementation
//! with submodules for state, update logic, view rendering, and helpers.
//!
//! Responsibilities
//! - Re-export selected types (`Msg`, `SmsFormProps`, `SmsFormComponent`).
//! - Provide the `Component` implementation that delegates to `update::update` and `view::view`.
//! - On first render, register the page listeners (debounced resize, smooth
//!   anchor scrolling). They are released when the component is dropped.

use yew::prelude::*;

mod helpers;
mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::SmsFormProps;
pub use state::SmsFormComponent;

use crate::listeners::PageListeners;

impl Component for SmsFormComponent {
    type Message = Msg;
    type Properties = SmsFormProps;

    fn create(_ctx: &Context<Self>) -> Self {
        SmsFormComponent::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && self.listeners.is_none() {
            self.listeners = Some(PageListeners::register(
                ctx.link().callback(|_| Msg::Resized),
            ));
        }
    }
}
