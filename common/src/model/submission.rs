use serde::{Deserialize, Serialize};

/// Result line shown when the user stops a submission before it settles.
pub const STOPPED_BY_USER: &str = "Sending stopped by user";

/// Response body returned by the SMS dispatch endpoint.
///
/// A successful dispatch looks like
/// `{"success": true, "total": 10, "successes": 7, "results": ["..."]}`,
/// a rejected one like `{"success": false, "message": "..."}`. The controller
/// only reads it: it is rendered once and then dropped.
///
/// A body without `success` is read as `success: false`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionResult {
    #[serde(default)]
    pub success: bool,
    pub message: Option<String>,
    pub total: Option<u32>,
    pub successes: Option<u32>,
    pub results: Option<Vec<String>>,
}

impl SubmissionResult {
    /// Percentage of successful dispatches, rounded to the nearest integer.
    ///
    /// Returns 0 when `total` is 0 or missing.
    pub fn success_rate(&self) -> u32 {
        let total = self.total.unwrap_or(0);
        if total == 0 {
            return 0;
        }
        let successes = self.successes.unwrap_or(0);
        (f64::from(successes) / f64::from(total) * 100.0).round() as u32
    }

    /// The synthetic result rendered when the user cancels a submission.
    pub fn stopped_by_user() -> Self {
        Self {
            success: true,
            message: None,
            total: Some(0),
            successes: Some(0),
            results: Some(vec![STOPPED_BY_USER.to_string()]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn success_rate_rounds_to_nearest_percent() {
        let result = SubmissionResult {
            success: true,
            total: Some(10),
            successes: Some(7),
            results: Some(vec!["a".into(), "b".into()]),
            ..Default::default()
        };
        assert_eq!(result.success_rate(), 70);

        let result = SubmissionResult {
            success: true,
            total: Some(3),
            successes: Some(2),
            ..Default::default()
        };
        assert_eq!(result.success_rate(), 67);

        let result = SubmissionResult {
            success: true,
            total: Some(8),
            successes: Some(1),
            ..Default::default()
        };
        // 12.5 rounds up
        assert_eq!(result.success_rate(), 13);
    }

    #[test]
    fn success_rate_is_zero_without_total() {
        let result = SubmissionResult {
            success: true,
            total: Some(0),
            successes: Some(5),
            ..Default::default()
        };
        assert_eq!(result.success_rate(), 0);
        assert_eq!(SubmissionResult::default().success_rate(), 0);
    }

    #[test]
    fn deserializes_success_body() {
        let result: SubmissionResult = serde_json::from_str(
            r#"{"success": true, "total": 10, "successes": 7, "results": ["a", "b"]}"#,
        )
        .unwrap();
        assert_eq!(
            result,
            SubmissionResult {
                success: true,
                message: None,
                total: Some(10),
                successes: Some(7),
                results: Some(vec!["a".to_string(), "b".to_string()]),
            }
        );
    }

    #[test]
    fn deserializes_failure_body() {
        let result: SubmissionResult =
            serde_json::from_str(r#"{"success": false, "message": "quota exceeded"}"#).unwrap();
        assert!(!result.success);
        assert_eq!(result.message.as_deref(), Some("quota exceeded"));
        assert_eq!(result.results, None);
    }

    #[test]
    fn missing_success_flag_reads_as_failure() {
        let result: SubmissionResult = serde_json::from_str(r#"{"total": 3}"#).unwrap();
        assert!(!result.success);
    }

    #[test]
    fn stopped_by_user_reports_nothing_sent() {
        let result = SubmissionResult::stopped_by_user();
        assert!(result.success);
        assert_eq!(result.successes, Some(0));
        assert_eq!(result.total, Some(0));
        assert_eq!(result.success_rate(), 0);
        assert_eq!(result.results, Some(vec![STOPPED_BY_USER.to_string()]));
    }
}
