use super::state::{ResultPanel, SubmitLabel};

/// View binding driven by [`super::FormController`].
///
/// The controller receives an implementation at construction and never looks
/// elements up on its own. In the browser this is a plain view model that the
/// component renders.
#[cfg_attr(test, mockall::automock)]
pub trait FormView {
    /// Loading indicator shown while a request is outstanding.
    fn show_loading(&mut self, visible: bool);
    fn show_progress(&mut self, visible: bool);
    fn set_progress(&mut self, percent: u8);
    /// Enables or disables every form control, the submit button included.
    fn set_controls_enabled(&mut self, enabled: bool);
    fn set_submit_label(&mut self, label: SubmitLabel);
    fn show_cancel(&mut self, visible: bool);
    fn hide_result(&mut self);
    /// Reveals the result section with `panel`, replacing any previous one.
    fn render_result(&mut self, panel: ResultPanel);
}
