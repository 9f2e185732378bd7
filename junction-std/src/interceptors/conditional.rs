//! Conditional interceptor for predicate-gated links.

use junction_core::{BoxError, Interceptor, Outcome, Request, Response};

/// Runs the inner interceptor only for requests matching a predicate.
///
/// Requests the predicate rejects are declined without touching the inner
/// interceptor.
///
/// # Example
///
/// ```rust
/// use junction_core::{Outcome, interceptor_fn};
/// use junction_std::interceptors::ConditionalInterceptor;
///
/// let admin_only = ConditionalInterceptor::new(
///     |req: &junction_core::Request| req.uri().path().starts_with("/admin"),
///     interceptor_fn(|_req, res| {
///         res.set_status(http::StatusCode::UNAUTHORIZED);
///         Outcome::Handled
///     }),
/// );
/// # let _ = admin_only;
/// ```
#[derive(Debug, Clone)]
pub struct ConditionalInterceptor<C, I> {
    predicate: C,
    inner: I,
}

impl<C, I> ConditionalInterceptor<C, I> {
    /// Gate `inner` behind `predicate`.
    pub fn new(predicate: C, inner: I) -> Self {
        Self { predicate, inner }
    }

    /// The gated interceptor.
    pub fn inner(&self) -> &I {
        &self.inner
    }
}

impl<C, I> Interceptor for ConditionalInterceptor<C, I>
where
    C: Fn(&Request) -> bool + Send + Sync + 'static,
    I: Interceptor,
{
    async fn intercept(
        &self,
        request: &Request,
        response: &mut Response,
    ) -> Result<Outcome, BoxError> {
        if (self.predicate)(request) {
            self.inner.intercept(request, response).await
        } else {
            Ok(Outcome::Decline)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use junction_core::interceptor_fn;

    fn request(path: &str) -> Request {
        http::Request::builder().uri(path).body(Default::default()).unwrap()
    }

    #[tokio::test]
    async fn test_gate() {
        let gated = ConditionalInterceptor::new(
            |req: &Request| req.headers().contains_key("x-debug"),
            interceptor_fn(|_req, res| res.write("debug")),
        );

        let mut res = Response::new();
        let outcome = gated.intercept(&request("/"), &mut res).await.unwrap();
        assert_eq!(outcome, Outcome::Decline);
        assert!(!res.is_written());

        let debug: Request = http::Request::builder()
            .uri("/")
            .header("x-debug", "1")
            .body(Default::default())
            .unwrap();
        let mut res = Response::new();
        let outcome = gated.intercept(&debug, &mut res).await.unwrap();
        assert_eq!(outcome, Outcome::Handled);
        assert_eq!(res.body(), b"debug");
    }
}
