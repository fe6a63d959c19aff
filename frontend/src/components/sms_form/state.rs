//! State of the SMS form component.
//!
//! `FormViewModel` is the view binding handed to the `FormController`: the
//! controller writes into it, `view.rs` renders from it. Nothing here touches
//! the DOM directly.

use common::controller::{FormController, FormView, ResultPanel, SubmitLabel};

use crate::listeners::PageListeners;

/// Render state of every element the controller drives.
#[derive(Clone, Debug, PartialEq)]
pub struct FormViewModel {
    pub loading: bool,
    pub progress_visible: bool,
    pub progress: u8,
    pub controls_enabled: bool,
    pub submit_label: SubmitLabel,
    pub cancel_visible: bool,
    /// `None` keeps the result section hidden.
    pub result: Option<ResultPanel>,
}

impl Default for FormViewModel {
    fn default() -> Self {
        Self {
            loading: false,
            progress_visible: false,
            progress: 0,
            controls_enabled: true,
            submit_label: SubmitLabel::Ready,
            cancel_visible: false,
            result: None,
        }
    }
}

impl FormView for FormViewModel {
    fn show_loading(&mut self, visible: bool) {
        self.loading = visible;
    }

    fn show_progress(&mut self, visible: bool) {
        self.progress_visible = visible;
    }

    fn set_progress(&mut self, percent: u8) {
        self.progress = percent.min(100);
    }

    fn set_controls_enabled(&mut self, enabled: bool) {
        self.controls_enabled = enabled;
    }

    fn set_submit_label(&mut self, label: SubmitLabel) {
        self.submit_label = label;
    }

    fn show_cancel(&mut self, visible: bool) {
        self.cancel_visible = visible;
    }

    fn hide_result(&mut self) {
        self.result = None;
    }

    fn render_result(&mut self, panel: ResultPanel) {
        self.result = Some(panel);
    }
}

/// Component state: raw field values plus the controller that owns the UI
/// state machine.
pub struct SmsFormComponent {
    pub phone: String,
    pub count: String,
    pub controller: FormController<FormViewModel>,
    /// Resize and anchor listeners, registered on first render.
    pub listeners: Option<PageListeners>,
}

impl SmsFormComponent {
    pub fn new() -> Self {
        Self {
            phone: String::new(),
            count: String::new(),
            controller: FormController::new(FormViewModel::default()),
            listeners: None,
        }
    }

    pub fn view_model(&self) -> &FormViewModel {
        self.controller.view()
    }
}
