//! Mock transport for tests.
//!
//! Allows tests to inject specific transport outcomes and capture the
//! requests the client dispatched.

use std::sync::{Arc, Mutex};
use std::sync::atomic::{AtomicUsize, Ordering};

use super::{HttpClient, HttpError, HttpRequest, HttpResponse};

/// A mock implementation of [`HttpClient`].
///
/// Outcomes are played back in order, one per call.
#[derive(Debug)]
pub struct MockClient {
    responses: Mutex<Vec<Result<HttpResponse, HttpError>>>,
    requests: Mutex<Vec<HttpRequest>>,
    call_count: AtomicUsize,
}

impl MockClient {
    /// Creates a mock that plays back the given outcomes in order.
    #[must_use]
    pub fn new(responses: Vec<Result<HttpResponse, HttpError>>) -> Self {
        Self {
            responses: Mutex::new(responses),
            requests: Mutex::new(Vec::new()),
            call_count: AtomicUsize::new(0),
        }
    }

    /// Creates a mock that answers once with the given status and JSON body.
    #[must_use]
    pub fn json(status: http::StatusCode, body: &str) -> Self {
        Self::new(vec![Ok(HttpResponse::new(
            status,
            http::HeaderMap::new(),
            body.as_bytes().to_vec(),
        ))])
    }

    /// Creates a mock that answers once with a bare status and no body.
    #[must_use]
    pub fn status_only(status: http::StatusCode) -> Self {
        Self::new(vec![Ok(HttpResponse::new(
            status,
            http::HeaderMap::new(),
            vec![],
        ))])
    }

    /// Returns how many requests the mock has served.
    #[must_use]
    pub fn calls(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }

    /// Returns the requests dispatched so far, in order.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned (only in test code).
    #[must_use]
    pub fn captured_requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl HttpClient for MockClient {
    async fn request(&self, req: HttpRequest) -> Result<HttpResponse, HttpError> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push(req);
        self.responses.lock().unwrap().remove(0)
    }
}

// Tests keep a handle on the mock to inspect captured requests after
// handing it to the client.
impl HttpClient for Arc<MockClient> {
    async fn request(&self, req: HttpRequest) -> Result<HttpResponse, HttpError> {
        (**self).request(req).await
    }
}
