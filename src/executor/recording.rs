//! In-memory transport for unit tests.

use crate::executor::{RequestError, Transport};
use crate::models::request::HttpRequest;
use crate::models::response::HttpResponse;
use std::sync::Mutex;

type Responder = Box<dyn Fn(&HttpRequest) -> Result<HttpResponse, RequestError> + Send + Sync>;

/// Records every request it sees and answers with a canned response.
pub(crate) struct RecordingTransport {
    requests: Mutex<Vec<HttpRequest>>,
    responder: Responder,
}

impl RecordingTransport {
    /// Answers every request with `200 OK` and the given body.
    pub(crate) fn with_body(body: &str) -> Self {
        let body = body.as_bytes().to_vec();
        Self::with_responder(move |_| {
            let mut response = HttpResponse::new(200, "OK".to_string());
            response.add_header("content-type".to_string(), "application/json".to_string());
            response.set_body(body.clone());
            Ok(response)
        })
    }

    /// Answers every request with `204 No Content` and an empty body.
    pub(crate) fn no_content() -> Self {
        Self::with_responder(|_| Ok(HttpResponse::new(204, "No Content".to_string())))
    }

    /// Answers with the request body echoed back.
    pub(crate) fn echo() -> Self {
        Self::with_responder(|request| {
            let mut response = HttpResponse::new(200, "OK".to_string());
            response.set_body(request.body.clone().unwrap_or_default().into_bytes());
            Ok(response)
        })
    }

    pub(crate) fn with_responder<F>(responder: F) -> Self
    where
        F: Fn(&HttpRequest) -> Result<HttpResponse, RequestError> + Send + Sync + 'static,
    {
        Self {
            requests: Mutex::new(Vec::new()),
            responder: Box::new(responder),
        }
    }

    pub(crate) fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// The single request recorded so far. Panics if there is not exactly one.
    pub(crate) fn only_request(&self) -> HttpRequest {
        let requests = self.requests();
        assert_eq!(requests.len(), 1, "expected exactly one request");
        requests.into_iter().next().unwrap()
    }
}

impl Transport for RecordingTransport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, RequestError> {
        self.requests.lock().unwrap().push(request.clone());
        (self.responder)(request)
    }
}
