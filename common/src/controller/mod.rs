//! Form controller: owns the UI state of the submission form and drives its
//! view binding through validation, sending, and result display.
//!
//! The browser component feeds user events into [`FormController`], spawns
//! [`run_submission`] for every ticket it gets back, and routes the task's
//! report into [`FormController::settle`]. Cleanup (`on_settled`) runs exactly
//! once per submission: either from `settle` or from `cancel`, whichever comes
//! first. Later reports for the same submission are stale and ignored.

mod dispatch;
mod settle;
mod state;
mod view;

use futures_util::future::AbortHandle;
use log::{debug, info, warn};

pub use dispatch::{
    decode_response, run_submission, DispatchOutcome, DispatchService, SubmissionId,
    SubmissionTicket, TransportError,
};
pub use settle::SettleGuard;
pub use state::{
    ResultKind, ResultPanel, SubmitLabel, SuccessPanel, UiState, DEFAULT_FAILURE_MESSAGE,
};
pub use view::FormView;

pub use crate::validation::{validate, ValidationError};

use crate::model::submission::SubmissionResult;

struct PendingSubmission {
    id: SubmissionId,
    abort: AbortHandle,
}

pub struct FormController<V: FormView> {
    view: V,
    state: UiState,
    pending: Option<PendingSubmission>,
    next_id: SubmissionId,
}

impl<V: FormView> FormController<V> {
    pub fn new(view: V) -> Self {
        Self {
            view,
            state: UiState::Idle,
            pending: None,
            next_id: 1,
        }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn state(&self) -> UiState {
        self.state
    }

    pub fn is_sending(&self) -> bool {
        self.pending.is_some()
    }

    /// Validates the raw fields and, when they are valid, moves the form into
    /// `Sending` and returns the ticket to dispatch.
    ///
    /// Invalid input renders an error panel and leaves the form in `Idle`.
    /// A submission while another one is pending is refused.
    pub fn submit(&mut self, phone: &str, count_raw: &str) -> Option<SubmissionTicket> {
        if let Some(pending) = &self.pending {
            warn!("submission {} still pending, ignoring submit", pending.id);
            return None;
        }

        let request = match validate(phone, count_raw) {
            Ok(request) => request,
            Err(err) => {
                debug!("rejected submission: {:?}", err);
                self.view.render_result(ResultPanel::Error(err.to_string()));
                self.state = UiState::Idle;
                return None;
            }
        };

        let id = self.next_id;
        self.next_id += 1;
        let (ticket, abort) = SubmissionTicket::new(id, request);

        self.view.show_progress(true);
        self.view.set_progress(0);
        self.view.set_controls_enabled(false);
        self.view.set_submit_label(SubmitLabel::Sending);
        self.view.show_cancel(true);
        self.view.hide_result();
        self.view.show_loading(true);

        self.pending = Some(PendingSubmission { id, abort });
        self.state = UiState::Sending;
        info!("submission {} started", id);

        Some(ticket)
    }

    /// Renders a response from the dispatch service.
    pub fn on_response(&mut self, result: SubmissionResult) {
        let panel = ResultPanel::from(result);
        self.state = UiState::Result(panel.kind());
        self.view.render_result(panel);
    }

    pub fn on_transport_failure(&mut self, error: &TransportError) {
        self.state = UiState::Result(ResultKind::Error);
        self.view
            .render_result(ResultPanel::Error(format!("Network error: {}", error)));
    }

    /// Returns the form to an actionable state after a submission ends.
    pub fn on_settled(&mut self) {
        self.view.show_loading(false);
        self.view.set_controls_enabled(true);
        self.view.set_submit_label(SubmitLabel::Ready);
        self.view.show_cancel(false);
        self.view.show_progress(false);
    }

    /// Applies the report of submission `id`. Returns `false` for a stale
    /// report, which changes nothing.
    pub fn settle(&mut self, id: SubmissionId, outcome: DispatchOutcome) -> bool {
        if self.pending.as_ref().map(|pending| pending.id) != Some(id) {
            debug!("ignoring stale report for submission {}", id);
            return false;
        }
        self.pending = None;

        match outcome {
            DispatchOutcome::Delivered(result) => self.on_response(result),
            DispatchOutcome::TransportFailed(err) => {
                warn!("submission {} failed: {}", id, err);
                self.on_transport_failure(&err);
            }
            DispatchOutcome::Cancelled => self.state = UiState::Idle,
        }
        self.on_settled();
        info!("submission {} settled as {:?}", id, self.state);

        true
    }

    /// Stops the pending submission: aborts its request, restores the form,
    /// and shows an empty "stopped by user" result.
    ///
    /// Returns `false` when nothing is pending.
    pub fn cancel(&mut self) -> bool {
        let Some(pending) = self.pending.take() else {
            return false;
        };
        pending.abort.abort();
        info!("submission {} stopped by user", pending.id);

        self.on_settled();
        self.on_response(SubmissionResult::stopped_by_user());

        true
    }
}
