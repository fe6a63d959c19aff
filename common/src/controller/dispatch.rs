//! Seam to the external SMS dispatch service and the task body that drives one
//! submission through it.

use async_trait::async_trait;
use futures_util::future::{AbortHandle, AbortRegistration, Abortable};
use log::{debug, info};
use thiserror::Error;

use super::settle::SettleGuard;
use crate::model::submission::SubmissionResult;
use crate::requests::SubmissionRequest;

/// Identifies one submission from validated input to settled UI state.
pub type SubmissionId = u64;

/// Failure to obtain a usable response from the dispatch service.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum TransportError {
    #[error("{0}")]
    Network(String),
    #[error("server responded with HTTP {0}")]
    Status(u16),
    #[error("malformed response: {0}")]
    Decode(String),
    #[error("request ended without a response")]
    Abandoned,
}

/// How a submission task ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// The service answered; `success` may still be false.
    Delivered(SubmissionResult),
    TransportFailed(TransportError),
    /// The request was aborted through its handle.
    Cancelled,
}

/// Client of the `/send_sms` contract.
///
/// Futures stay on the browser's single thread, hence `?Send`.
#[async_trait(?Send)]
pub trait DispatchService {
    async fn send(&self, request: &SubmissionRequest) -> Result<SubmissionResult, TransportError>;
}

/// Turns an HTTP reply from the dispatch endpoint into a result.
///
/// Any non-2xx status is a transport failure, whatever the body says. A 2xx
/// body that is not a `SubmissionResult` is a decode failure.
pub fn decode_response(status: u16, body: &str) -> Result<SubmissionResult, TransportError> {
    if !(200..300).contains(&status) {
        return Err(TransportError::Status(status));
    }
    serde_json::from_str(body).map_err(|err| TransportError::Decode(err.to_string()))
}

/// A validated submission that has entered the `Sending` state.
///
/// Handed out by [`super::FormController::submit`] and consumed by
/// [`run_submission`]. The matching abort handle stays with the controller.
#[derive(Debug)]
pub struct SubmissionTicket {
    id: SubmissionId,
    request: SubmissionRequest,
    registration: AbortRegistration,
}

impl SubmissionTicket {
    pub(crate) fn new(id: SubmissionId, request: SubmissionRequest) -> (Self, AbortHandle) {
        let (handle, registration) = AbortHandle::new_pair();
        let ticket = Self {
            id,
            request,
            registration,
        };
        (ticket, handle)
    }

    pub fn id(&self) -> SubmissionId {
        self.id
    }

    pub fn request(&self) -> &SubmissionRequest {
        &self.request
    }
}

/// Sends the ticket's request and reports how it ended.
///
/// `report` is called exactly once, even if this future is dropped before it
/// completes. Aborting the ticket's handle stops the request and reports
/// [`DispatchOutcome::Cancelled`].
pub async fn run_submission<S, F>(service: &S, ticket: SubmissionTicket, report: F)
where
    S: DispatchService + ?Sized,
    F: FnOnce(SubmissionId, DispatchOutcome),
{
    let SubmissionTicket {
        id,
        request,
        registration,
    } = ticket;
    let guard = SettleGuard::new(id, report);

    info!(
        "submission {}: sending {} message(s) to {}",
        id,
        request.count(),
        request.phone()
    );
    let outcome = match Abortable::new(service.send(&request), registration).await {
        Ok(Ok(result)) => DispatchOutcome::Delivered(result),
        Ok(Err(err)) => DispatchOutcome::TransportFailed(err),
        Err(_aborted) => DispatchOutcome::Cancelled,
    };
    debug!("submission {}: {:?}", id, outcome);

    guard.complete(outcome);
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::validation::validate;
    use futures_util::FutureExt;
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Dispatch service answering every request with the same reply.
    pub(crate) struct FixedDispatch {
        pub(crate) reply: Result<SubmissionResult, TransportError>,
        pub(crate) seen: RefCell<Vec<SubmissionRequest>>,
    }

    impl FixedDispatch {
        pub(crate) fn new(reply: Result<SubmissionResult, TransportError>) -> Self {
            Self {
                reply,
                seen: RefCell::new(Vec::new()),
            }
        }
    }

    #[async_trait(?Send)]
    impl DispatchService for FixedDispatch {
        async fn send(
            &self,
            request: &SubmissionRequest,
        ) -> Result<SubmissionResult, TransportError> {
            self.seen.borrow_mut().push(request.clone());
            self.reply.clone()
        }
    }

    /// Dispatch service that never answers.
    pub(crate) struct SilentDispatch;

    #[async_trait(?Send)]
    impl DispatchService for SilentDispatch {
        async fn send(
            &self,
            _request: &SubmissionRequest,
        ) -> Result<SubmissionResult, TransportError> {
            futures_util::future::pending().await
        }
    }

    type Reports = Rc<RefCell<Vec<(SubmissionId, DispatchOutcome)>>>;

    fn reports() -> Reports {
        Rc::new(RefCell::new(Vec::new()))
    }

    fn sink(reports: &Reports) -> impl FnOnce(SubmissionId, DispatchOutcome) + use<> {
        let reports = Rc::clone(reports);
        move |id, outcome| reports.borrow_mut().push((id, outcome))
    }

    fn ticket(id: SubmissionId) -> (SubmissionTicket, AbortHandle) {
        SubmissionTicket::new(id, validate("9811111111", "3").unwrap())
    }

    #[test]
    fn delivered_response_is_reported() {
        let reply = SubmissionResult {
            success: true,
            total: Some(3),
            successes: Some(3),
            ..Default::default()
        };
        let service = FixedDispatch::new(Ok(reply.clone()));
        let seen = reports();
        let (ticket, _handle) = ticket(1);

        tokio_test::block_on(run_submission(&service, ticket, sink(&seen)));

        assert_eq!(*seen.borrow(), vec![(1, DispatchOutcome::Delivered(reply))]);
        assert_eq!(service.seen.borrow()[0].phone(), "9811111111");
        assert_eq!(service.seen.borrow()[0].count(), 3);
    }

    #[test]
    fn transport_failure_is_reported() {
        let service = FixedDispatch::new(Err(TransportError::Status(502)));
        let seen = reports();
        let (ticket, _handle) = ticket(2);

        tokio_test::block_on(run_submission(&service, ticket, sink(&seen)));

        assert_eq!(
            *seen.borrow(),
            vec![(
                2,
                DispatchOutcome::TransportFailed(TransportError::Status(502))
            )]
        );
    }

    #[test]
    fn aborted_request_reports_cancelled() {
        let seen = reports();
        let (ticket, handle) = ticket(3);
        handle.abort();

        tokio_test::block_on(run_submission(&SilentDispatch, ticket, sink(&seen)));

        assert_eq!(*seen.borrow(), vec![(3, DispatchOutcome::Cancelled)]);
    }

    #[test]
    fn dropped_task_reports_abandoned() {
        let seen = reports();
        let (ticket, _handle) = ticket(4);

        let polled = run_submission(&SilentDispatch, ticket, sink(&seen)).now_or_never();

        assert!(polled.is_none());
        assert_eq!(
            *seen.borrow(),
            vec![(
                4,
                DispatchOutcome::TransportFailed(TransportError::Abandoned)
            )]
        );
    }

    #[test]
    fn error_status_is_a_transport_failure_even_with_json_body() {
        let body = r#"{"success": true, "total": 1, "successes": 1, "results": []}"#;
        assert_eq!(decode_response(500, body), Err(TransportError::Status(500)));
        assert_eq!(decode_response(404, ""), Err(TransportError::Status(404)));
        assert_eq!(decode_response(302, body), Err(TransportError::Status(302)));
    }

    #[test]
    fn malformed_body_is_a_decode_failure() {
        assert!(matches!(
            decode_response(200, "not json"),
            Err(TransportError::Decode(_))
        ));
        assert!(matches!(
            decode_response(200, r#"{"success": "yes"}"#),
            Err(TransportError::Decode(_))
        ));
    }

    #[test]
    fn well_formed_body_is_decoded() {
        let result = decode_response(
            200,
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

        let rejected = decode_response(201, r#"{"success": false, "message": "busy"}"#).unwrap();
        assert!(!rejected.success);
        assert_eq!(rejected.message.as_deref(), Some("busy"));
    }

    #[test]
    fn transport_errors_read_as_messages() {
        assert_eq!(
            TransportError::Network("Failed to fetch".into()).to_string(),
            "Failed to fetch"
        );
        assert_eq!(
            TransportError::Status(500).to_string(),
            "server responded with HTTP 500"
        );
    }
}
