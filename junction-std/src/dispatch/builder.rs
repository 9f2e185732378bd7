//! Builder for constructing a [`Router`].

use super::router::Router;
use junction_core::{
    Handler, Interceptor, IntoOutcome, JunctionError, PatternError, Request, RequestView,
    Response,
};

/// Chained, by-value registration ending in [`RouterBuilder::build`].
///
/// Registration errors do not interrupt the chain; the first one is kept
/// and returned by `build`.
///
/// # Example
///
/// ```rust
/// use junction_core::Outcome;
/// use junction_std::dispatch::Router;
///
/// let router = Router::builder()
///     .interceptor_fn(|_req, _res| Outcome::Decline)
///     .route_fn("/", |_req, res| res.write("home"))
///     .route_fn("*", |_req, res| res.set_status(http::StatusCode::NOT_FOUND))
///     .build()
///     .unwrap();
///
/// assert_eq!(router.list_patterns().len(), 2);
/// ```
#[derive(Default)]
pub struct RouterBuilder {
    router: Router,
    error: Option<PatternError>,
}

impl RouterBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `handler` to `pattern`.
    pub fn route<H: Handler>(mut self, pattern: &str, handler: H) -> Self {
        if self.error.is_none()
            && let Err(e) = self.router.register(pattern, handler)
        {
            self.error = Some(e);
        }
        self
    }

    /// Bind a synchronous closure to `pattern`.
    pub fn route_fn<F, O>(mut self, pattern: &str, func: F) -> Self
    where
        F: Fn(&RequestView<'_>, &mut Response) -> O + Send + Sync + 'static,
        O: IntoOutcome,
    {
        if self.error.is_none()
            && let Err(e) = self.router.handle_fn(pattern, func)
        {
            self.error = Some(e);
        }
        self
    }

    /// Append an interceptor.
    pub fn interceptor<I: Interceptor>(mut self, interceptor: I) -> Self {
        self.router.register_interceptor(interceptor);
        self
    }

    /// Append a synchronous closure as an interceptor.
    pub fn interceptor_fn<F, O>(mut self, func: F) -> Self
    where
        F: Fn(&Request, &mut Response) -> O + Send + Sync + 'static,
        O: IntoOutcome,
    {
        self.router.intercept_fn(func);
        self
    }

    /// Build the router.
    ///
    /// # Errors
    ///
    /// Returns the first pattern rejected during registration.
    pub fn build(self) -> Result<Router, JunctionError> {
        match self.error {
            Some(e) => Err(e.into()),
            None => Ok(self.router),
        }
    }
}
