//! # Pre-dispatch Interceptors
//!
//! Interceptors run in registration order before any route is matched. Each
//! one sees the raw request and the response sink and decides whether the
//! request proceeds:
//!
//! - `Decline` lets the request through to the next interceptor, and after
//!   the last one, to route matching.
//! - `Handled` halts: the request counts as handled and no route handler runs.
//!
//! Typical uses are access checks, request logging and serving static files
//! ahead of the route table.

use crate::{
    error::BoxError,
    outcome::{IntoOutcome, Outcome},
    request::Request,
    response::Response,
};
use futures::future::BoxFuture;
use std::{future::Future, sync::Arc};

/// A link of the pre-dispatch chain.
///
/// # Example
///
/// ```rust
/// use junction_core::{BoxError, Interceptor, Outcome, Request, Response};
///
/// struct RequireToken;
///
/// impl Interceptor for RequireToken {
///     async fn intercept(
///         &self,
///         request: &Request,
///         response: &mut Response,
///     ) -> Result<Outcome, BoxError> {
///         if request.headers().contains_key("x-token") {
///             return Ok(Outcome::Decline);
///         }
///         response.set_status(http::StatusCode::UNAUTHORIZED);
///         Ok(Outcome::Handled)
///     }
/// }
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not an `Interceptor`",
    label = "missing `Interceptor` implementation",
    note = "Implement `Interceptor` or wrap a closure with `interceptor_fn`."
)]
pub trait Interceptor: Send + Sync + 'static {
    /// Inspect a request before routing.
    fn intercept(
        &self,
        request: &Request,
        response: &mut Response,
    ) -> impl Future<Output = Result<Outcome, BoxError>> + Send;
}

/// Dynamic object-safe version of [`Interceptor`].
pub trait DynInterceptor: Send + Sync + 'static {
    /// Inspect a request before routing (dynamic dispatch version).
    fn intercept_dyn<'a>(
        &'a self,
        request: &'a Request,
        response: &'a mut Response,
    ) -> BoxFuture<'a, Result<Outcome, BoxError>>;
}

impl<T: Interceptor> DynInterceptor for T {
    fn intercept_dyn<'a>(
        &'a self,
        request: &'a Request,
        response: &'a mut Response,
    ) -> BoxFuture<'a, Result<Outcome, BoxError>> {
        Box::pin(self.intercept(request, response))
    }
}

impl<I: Interceptor> Interceptor for Arc<I> {
    async fn intercept(
        &self,
        request: &Request,
        response: &mut Response,
    ) -> Result<Outcome, BoxError> {
        self.as_ref().intercept(request, response).await
    }
}

/// An [`Interceptor`] built from a synchronous closure. See [`interceptor_fn`].
#[derive(Clone)]
pub struct InterceptorFn<F> {
    func: F,
}

/// Wrap a synchronous closure as an [`Interceptor`].
///
/// Return `Outcome::Decline` (or `false`) to let the request through.
pub fn interceptor_fn<F, O>(func: F) -> InterceptorFn<F>
where
    F: Fn(&Request, &mut Response) -> O + Send + Sync + 'static,
    O: IntoOutcome,
{
    InterceptorFn { func }
}

impl<F, O> Interceptor for InterceptorFn<F>
where
    F: Fn(&Request, &mut Response) -> O + Send + Sync + 'static,
    O: IntoOutcome,
{
    async fn intercept(
        &self,
        request: &Request,
        response: &mut Response,
    ) -> Result<Outcome, BoxError> {
        (self.func)(request, response).into_outcome()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;
    use http::StatusCode;

    fn request(path: &str) -> Request {
        http::Request::builder().uri(path).body(Bytes::new()).unwrap()
    }

    #[tokio::test]
    async fn test_interceptor_fn_halts() {
        let deny = interceptor_fn(|req, res| {
            if req.uri().path().starts_with("/admin") {
                res.set_status(StatusCode::FORBIDDEN);
                return Outcome::Handled;
            }
            Outcome::Decline
        });

        let mut res = Response::new();
        let outcome = deny.intercept(&request("/admin/users"), &mut res).await.unwrap();
        assert_eq!(outcome, Outcome::Handled);
        assert_eq!(res.status(), StatusCode::FORBIDDEN);

        let mut res = Response::new();
        let outcome = deny.intercept(&request("/public"), &mut res).await.unwrap();
        assert_eq!(outcome, Outcome::Decline);
        assert!(!res.is_written());
    }

    #[tokio::test]
    async fn test_dyn_interceptor() {
        let boxed: Box<dyn DynInterceptor> = Box::new(interceptor_fn(|_req, _res| false));
        let mut res = Response::new();
        let outcome = boxed.intercept_dyn(&request("/"), &mut res).await.unwrap();
        assert_eq!(outcome, Outcome::Decline);
    }
}
