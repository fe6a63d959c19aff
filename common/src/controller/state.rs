//! UI state owned by the form controller and the panels it renders.

use crate::model::submission::SubmissionResult;

/// Error text used when the dispatch service rejects a submission without
/// saying why.
pub const DEFAULT_FAILURE_MESSAGE: &str = "An error occurred while sending SMS";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResultKind {
    Success,
    Error,
}

/// Lifecycle of the form.
///
/// `Idle --submit--> Sending --settle--> Result(_) --submit--> Sending`.
/// An invalid submission never enters `Sending`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UiState {
    Idle,
    Sending,
    Result(ResultKind),
}

/// Affordance shown on the submit button.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitLabel {
    #[default]
    Ready,
    Sending,
}

impl SubmitLabel {
    pub fn text(self) -> &'static str {
        match self {
            SubmitLabel::Ready => "START SENDING",
            SubmitLabel::Sending => "SENDING...",
        }
    }
}

/// Render model of a successful dispatch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SuccessPanel {
    pub successes: u32,
    pub total: u32,
    pub success_rate: u32,
    /// Per-message lines from the service, shown as plain text.
    pub results: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ResultPanel {
    Success(SuccessPanel),
    Error(String),
}

impl ResultPanel {
    pub fn kind(&self) -> ResultKind {
        match self {
            ResultPanel::Success(_) => ResultKind::Success,
            ResultPanel::Error(_) => ResultKind::Error,
        }
    }
}

impl From<SubmissionResult> for ResultPanel {
    fn from(result: SubmissionResult) -> Self {
        if !result.success {
            return ResultPanel::Error(
                result
                    .message
                    .unwrap_or_else(|| DEFAULT_FAILURE_MESSAGE.to_string()),
            );
        }
        let success_rate = result.success_rate();
        ResultPanel::Success(SuccessPanel {
            successes: result.successes.unwrap_or(0),
            total: result.total.unwrap_or(0),
            success_rate,
            results: result.results.unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn success_result_becomes_success_panel() {
        let panel = ResultPanel::from(SubmissionResult {
            success: true,
            total: Some(10),
            successes: Some(7),
            results: Some(vec!["a".into(), "<b>b</b>".into()]),
            ..Default::default()
        });
        assert_eq!(
            panel,
            ResultPanel::Success(SuccessPanel {
                successes: 7,
                total: 10,
                success_rate: 70,
                results: vec!["a".to_string(), "<b>b</b>".to_string()],
            })
        );
        assert_eq!(panel.kind(), ResultKind::Success);
    }

    #[test]
    fn rejected_result_uses_server_message() {
        let panel = ResultPanel::from(SubmissionResult {
            success: false,
            message: Some("Daily limit reached".into()),
            ..Default::default()
        });
        assert_eq!(panel, ResultPanel::Error("Daily limit reached".to_string()));
    }

    #[test]
    fn rejected_result_without_message_uses_default() {
        let panel = ResultPanel::from(SubmissionResult::default());
        assert_eq!(panel, ResultPanel::Error(DEFAULT_FAILURE_MESSAGE.to_string()));
        assert_eq!(panel.kind(), ResultKind::Error);
    }
}
