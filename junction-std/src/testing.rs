//! Testing utilities for Junction.
//!
//! This module makes it easier to test routers, handlers and interceptors.
//!
//! # Features
//!
//! - [`request`]: build a bodiless `GET` request for a path
//! - [`RecordingHandler`]: a handler that records every request it receives
//! - [`RecordingInterceptor`]: an interceptor that records every request it sees

use junction_core::{
    BoxError, Handler, Interceptor, Outcome, Params, Request, RequestView, Response,
};
use parking_lot::Mutex;
use std::sync::Arc;

/// Build a `GET` request for `path` with an empty body.
///
/// # Panics
///
/// If `path` is not a valid request target.
pub fn request(path: &str) -> Request {
    match http::Request::builder().uri(path).body(Default::default()) {
        Ok(request) => request,
        Err(e) => panic!("invalid request path `{path}`: {e}"),
    }
}

// ============================================================================
// Recording Handler
// ============================================================================

/// One call observed by a [`RecordingHandler`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hit {
    /// The request path.
    pub path: String,
    /// The pattern that matched.
    pub pattern: String,
    /// The captures of that pattern.
    pub params: Params,
}

/// A handler that records every request it receives.
///
/// Returns a fixed [`Outcome`] and optionally writes a fixed body, so it can
/// stand in for both the handler that ends dispatch and the one that passes.
///
/// # Example
///
/// ```rust
/// use junction_std::{dispatch::Router, testing::{RecordingHandler, request}};
///
/// # futures::executor::block_on(async {
/// let users = RecordingHandler::new();
/// let mut router = Router::new();
/// router.register("/users/:id", users.clone()).unwrap();
///
/// let mut res = junction_core::Response::new();
/// router.route(&mut res, &request("/users/7")).await.unwrap();
///
/// assert_eq!(users.count(), 1);
/// assert_eq!(users.hits()[0].params.get("id"), Some("7"));
/// # });
/// ```
#[derive(Clone)]
pub struct RecordingHandler {
    hits: Arc<Mutex<Vec<Hit>>>,
    outcome: Outcome,
    body: Option<&'static str>,
}

impl RecordingHandler {
    /// Create a recording handler that handles every request.
    pub fn new() -> Self {
        Self::with_outcome(Outcome::Handled)
    }

    /// Create a recording handler that declines every request.
    pub fn declining() -> Self {
        Self::with_outcome(Outcome::Decline)
    }

    /// Create a recording handler returning `outcome`.
    pub fn with_outcome(outcome: Outcome) -> Self {
        Self {
            hits: Arc::new(Mutex::new(Vec::new())),
            outcome,
            body: None,
        }
    }

    /// Also append `body` to the response on every call.
    pub fn writing(mut self, body: &'static str) -> Self {
        self.body = Some(body);
        self
    }

    /// Get a clone of the recorded calls.
    pub fn hits(&self) -> Vec<Hit> {
        self.hits.lock().clone()
    }

    /// Get the number of recorded calls.
    pub fn count(&self) -> usize {
        self.hits.lock().len()
    }

    /// Clear all recorded calls.
    pub fn clear(&self) {
        self.hits.lock().clear();
    }
}

impl Default for RecordingHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl Handler for RecordingHandler {
    async fn call(
        &self,
        request: &RequestView<'_>,
        response: &mut Response,
    ) -> Result<Outcome, BoxError> {
        self.hits.lock().push(Hit {
            path: request.path().to_owned(),
            pattern: request.pattern().to_owned(),
            params: request.params().clone(),
        });
        if let Some(body) = self.body {
            response.write(body);
        }
        Ok(self.outcome)
    }
}

// ============================================================================
// Recording Interceptor
// ============================================================================

/// An interceptor that records the path of every request it sees.
#[derive(Clone)]
pub struct RecordingInterceptor {
    paths: Arc<Mutex<Vec<String>>>,
    outcome: Outcome,
}

impl RecordingInterceptor {
    /// Create a recording interceptor that lets every request through.
    pub fn new() -> Self {
        Self::with_outcome(Outcome::Decline)
    }

    /// Create a recording interceptor that halts every request.
    pub fn halting() -> Self {
        Self::with_outcome(Outcome::Handled)
    }

    /// Create a recording interceptor returning `outcome`.
    pub fn with_outcome(outcome: Outcome) -> Self {
        Self {
            paths: Arc::new(Mutex::new(Vec::new())),
            outcome,
        }
    }

    /// Get a clone of the recorded paths.
    pub fn paths(&self) -> Vec<String> {
        self.paths.lock().clone()
    }

    /// Get the number of recorded requests.
    pub fn count(&self) -> usize {
        self.paths.lock().len()
    }
}

impl Default for RecordingInterceptor {
    fn default() -> Self {
        Self::new()
    }
}

impl Interceptor for RecordingInterceptor {
    async fn intercept(
        &self,
        request: &Request,
        _response: &mut Response,
    ) -> Result<Outcome, BoxError> {
        self.paths.lock().push(request.uri().path().to_owned());
        Ok(self.outcome)
    }
}
