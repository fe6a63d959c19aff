use log::warn;

use super::dispatch::{DispatchOutcome, SubmissionId, TransportError};

/// Scoped guard over one pending submission.
///
/// The report closure runs exactly once: with the outcome passed to
/// [`SettleGuard::complete`], or with [`TransportError::Abandoned`] when the
/// guard is dropped first (the task was dropped or unwound).
pub struct SettleGuard<F>
where
    F: FnOnce(SubmissionId, DispatchOutcome),
{
    id: SubmissionId,
    report: Option<F>,
}

impl<F> SettleGuard<F>
where
    F: FnOnce(SubmissionId, DispatchOutcome),
{
    pub fn new(id: SubmissionId, report: F) -> Self {
        Self {
            id,
            report: Some(report),
        }
    }

    pub fn id(&self) -> SubmissionId {
        self.id
    }

    pub fn complete(mut self, outcome: DispatchOutcome) {
        if let Some(report) = self.report.take() {
            report(self.id, outcome);
        }
    }
}

impl<F> Drop for SettleGuard<F>
where
    F: FnOnce(SubmissionId, DispatchOutcome),
{
    fn drop(&mut self) {
        if let Some(report) = self.report.take() {
            warn!("submission {} ended without a response", self.id);
            report(
                self.id,
                DispatchOutcome::TransportFailed(TransportError::Abandoned),
            );
        }
    }
}
