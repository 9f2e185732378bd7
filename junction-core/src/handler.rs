//! # Route Handlers
//!
//! A handler is bound to a pattern and runs when that pattern matches. It
//! receives a [`RequestView`] (the request plus its captured parameters) and
//! the response sink, and returns an [`Outcome`]:
//!
//! - `Handled` ends dispatch for the request.
//! - `Decline` hands the request to the next matching route in priority order.
//!
//! # Usage Patterns
//!
//! 1. **Struct implementation**: `impl Handler for MyHandler` with an `async fn`
//! 2. **Synchronous closure**: [`handler_fn`]`(|req, res| { ... })`
//!
//! # Static vs Dynamic Dispatch
//!
//! [`Handler`] uses native `async fn` in traits. The route table stores
//! handlers behind the object-safe [`DynHandler`], which every `Handler`
//! implements through a blanket impl.

use crate::{
    error::BoxError,
    outcome::{IntoOutcome, Outcome},
    request::RequestView,
    response::Response,
};
use futures::future::BoxFuture;
use std::{future::Future, sync::Arc};

/// The endpoint bound to a route pattern.
///
/// # Example
///
/// ```rust
/// use junction_core::{BoxError, Handler, Outcome, RequestView, Response};
///
/// struct Hello;
///
/// impl Handler for Hello {
///     async fn call(
///         &self,
///         request: &RequestView<'_>,
///         response: &mut Response,
///     ) -> Result<Outcome, BoxError> {
///         match request.param("name") {
///             Some(name) => {
///                 response.send("text/plain", format!("hello, {name}"));
///                 Ok(Outcome::Handled)
///             }
///             // Let a more general route have a go.
///             None => Ok(Outcome::Decline),
///         }
///     }
/// }
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a route `Handler`",
    label = "missing `Handler` implementation",
    note = "Implement `Handler` or wrap a closure with `handler_fn`."
)]
pub trait Handler: Send + Sync + 'static {
    /// Handle a request matched by this handler's pattern.
    fn call(
        &self,
        request: &RequestView<'_>,
        response: &mut Response,
    ) -> impl Future<Output = Result<Outcome, BoxError>> + Send;
}

/// Dynamic object-safe version of [`Handler`].
///
/// Use this trait when you need runtime polymorphism (e.g., in a route table).
pub trait DynHandler: Send + Sync + 'static {
    /// Handle a request (dynamic dispatch version).
    fn call_dyn<'a>(
        &'a self,
        request: &'a RequestView<'a>,
        response: &'a mut Response,
    ) -> BoxFuture<'a, Result<Outcome, BoxError>>;
}

// Blanket implementation: Any type implementing Handler implements DynHandler automatically.
impl<T: Handler> DynHandler for T {
    fn call_dyn<'a>(
        &'a self,
        request: &'a RequestView<'a>,
        response: &'a mut Response,
    ) -> BoxFuture<'a, Result<Outcome, BoxError>> {
        Box::pin(self.call(request, response))
    }
}

// Lets one handler instance back several patterns.
impl<H: Handler> Handler for Arc<H> {
    async fn call(
        &self,
        request: &RequestView<'_>,
        response: &mut Response,
    ) -> Result<Outcome, BoxError> {
        self.as_ref().call(request, response).await
    }
}

/// A [`Handler`] built from a synchronous closure. See [`handler_fn`].
#[derive(Clone)]
pub struct HandlerFn<F> {
    func: F,
}

/// Wrap a synchronous closure as a [`Handler`].
///
/// The closure may return anything implementing [`IntoOutcome`]: `()` means
/// handled, `Outcome::Decline` (or `false`, or `None`) passes the request on.
///
/// ```rust
/// use junction_core::{handler_fn, Outcome};
///
/// let teapot = handler_fn(|_req, res| {
///     res.set_status(http::StatusCode::IM_A_TEAPOT);
///     Outcome::Handled
/// });
/// # let _ = teapot;
/// ```
pub fn handler_fn<F, O>(func: F) -> HandlerFn<F>
where
    F: Fn(&RequestView<'_>, &mut Response) -> O + Send + Sync + 'static,
    O: IntoOutcome,
{
    HandlerFn { func }
}

impl<F, O> Handler for HandlerFn<F>
where
    F: Fn(&RequestView<'_>, &mut Response) -> O + Send + Sync + 'static,
    O: IntoOutcome,
{
    async fn call(
        &self,
        request: &RequestView<'_>,
        response: &mut Response,
    ) -> Result<Outcome, BoxError> {
        (self.func)(request, response).into_outcome()
    }
}
