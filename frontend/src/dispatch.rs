use async_trait::async_trait;
use common::controller::{decode_response, DispatchService, TransportError};
use common::model::submission::SubmissionResult;
use common::requests::SubmissionRequest;
use gloo_net::http::Request;

/// `DispatchService` over HTTP: posts the request as JSON to `endpoint`.
pub struct HttpDispatch {
    endpoint: String,
}

impl HttpDispatch {
    pub fn new(endpoint: String) -> Self {
        Self { endpoint }
    }
}

#[async_trait(?Send)]
impl DispatchService for HttpDispatch {
    async fn send(&self, request: &SubmissionRequest) -> Result<SubmissionResult, TransportError> {
        // `json` sets `Content-Type: application/json`.
        let response = Request::post(&self.endpoint)
            .json(request)
            .map_err(|err| TransportError::Network(err.to_string()))?
            .send()
            .await
            .map_err(|err| TransportError::Network(err.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|err| TransportError::Network(err.to_string()))?;

        decode_response(status, &body)
    }
}
