//! Timeout wrapper for time-limited links.

use junction_core::{BoxError, Handler, Interceptor, Outcome, Request, RequestView, Response};
use std::time::Duration;
use thiserror::Error;
use tokio::time::timeout;

/// Error returned when a wrapped link runs past its deadline.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("link timed out after {0:?}")]
pub struct TimeoutError(
    /// The deadline that passed.
    pub Duration,
);

/// Bounds a handler or an interceptor with a deadline.
///
/// A link that does not finish in time is dropped and dispatch fails with a
/// [`TimeoutError`]. Whatever it wrote to the response before that stays there.
#[derive(Debug, Clone)]
pub struct Timeout<T> {
    inner: T,
    duration: Duration,
}

impl<T> Timeout<T> {
    /// Wrap `inner` with a deadline of `duration`.
    pub fn new(inner: T, duration: Duration) -> Self {
        Self { inner, duration }
    }

    /// The deadline.
    pub fn duration(&self) -> Duration {
        self.duration
    }
}

impl<H: Handler> Handler for Timeout<H> {
    async fn call(
        &self,
        request: &RequestView<'_>,
        response: &mut Response,
    ) -> Result<Outcome, BoxError> {
        match timeout(self.duration, self.inner.call(request, response)).await {
            Ok(result) => result,
            Err(_) => Err(Box::new(TimeoutError(self.duration))),
        }
    }
}

impl<I: Interceptor> Interceptor for Timeout<I> {
    async fn intercept(
        &self,
        request: &Request,
        response: &mut Response,
    ) -> Result<Outcome, BoxError> {
        match timeout(self.duration, self.inner.intercept(request, response)).await {
            Ok(result) => result,
            Err(_) => Err(Box::new(TimeoutError(self.duration))),
        }
    }
}
