//! The dispatcher.

use super::{builder::RouterBuilder, chain::InterceptorChain};
use crate::routing::{Pattern, RouteTable};
use junction_core::{
    BoxError, DispatchError, DynHandler, Handler, Interceptor, IntoOutcome, Outcome,
    PatternError, Request, RequestView, Response, handler_fn, interceptor_fn, request_path,
};
use std::sync::Arc;

/// How a request left the dispatcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
    /// The interceptor at this index handled the request; no route ran.
    Intercepted(usize),
    /// The handler bound to this pattern handled the request.
    Handled(Pattern),
    /// Nothing matched, or every matching handler declined.
    Unhandled,
}

impl Dispatch {
    /// True unless the request went unhandled.
    pub fn is_handled(&self) -> bool {
        !matches!(self, Dispatch::Unhandled)
    }
}

/// An HTTP request router.
///
/// Holds the route table and the interceptor chain. Build it once, then share
/// it (`Arc<Router>`) across concurrently dispatched requests; for registration
/// while serving, see [`SharedRouter`](super::SharedRouter).
///
/// # Example
///
/// ```rust
/// use junction_core::{Request, Response};
/// use junction_std::dispatch::{Dispatch, Router};
///
/// # futures::executor::block_on(async {
/// let mut router = Router::new();
/// router
///     .handle_fn("/users/:id", |req, res| {
///         res.send("text/plain", format!("user {}", req.param("id").unwrap_or_default()));
///     })
///     .unwrap();
///
/// let request: Request = http::Request::builder().uri("/users/7").body(Default::default()).unwrap();
/// let mut response = Response::new();
/// let dispatch = router.route(&mut response, &request).await.unwrap();
///
/// assert!(matches!(dispatch, Dispatch::Handled(_)));
/// assert_eq!(response.body(), b"user 7");
/// # });
/// ```
#[derive(Clone, Default)]
pub struct Router {
    table: RouteTable,
    interceptors: InterceptorChain,
}

impl Router {
    /// Create a router with no routes and no interceptors.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start building a router by chaining registrations.
    pub fn builder() -> RouterBuilder {
        RouterBuilder::new()
    }

    /// Bind `handler` to `pattern`.
    ///
    /// Re-registering a pattern replaces its handler.
    ///
    /// # Errors
    ///
    /// Returns a [`PatternError`] if the pattern is malformed; the router is
    /// left unchanged.
    pub fn register<H: Handler>(&mut self, pattern: &str, handler: H) -> Result<(), PatternError> {
        let _registered = self.table.register(pattern, handler)?;
        #[cfg(feature = "tracing")]
        {
            tracing::debug!(pattern = %_registered, "route registered");
        }
        Ok(())
    }

    /// Bind a synchronous closure to `pattern`. See [`handler_fn`].
    ///
    /// # Errors
    ///
    /// Same as [`Router::register`].
    pub fn handle_fn<F, O>(&mut self, pattern: &str, func: F) -> Result<(), PatternError>
    where
        F: Fn(&RequestView<'_>, &mut Response) -> O + Send + Sync + 'static,
        O: IntoOutcome,
    {
        self.register(pattern, handler_fn(func))
    }

    /// Append an interceptor to the pre-dispatch chain.
    pub fn register_interceptor<I: Interceptor>(&mut self, interceptor: I) {
        self.interceptors.push(interceptor);
        #[cfg(feature = "tracing")]
        {
            tracing::debug!(interceptors = self.interceptors.len(), "interceptor registered");
        }
    }

    /// Append a synchronous closure to the pre-dispatch chain. See [`interceptor_fn`].
    pub fn intercept_fn<F, O>(&mut self, func: F)
    where
        F: Fn(&Request, &mut Response) -> O + Send + Sync + 'static,
        O: IntoOutcome,
    {
        self.register_interceptor(interceptor_fn(func));
    }

    /// Exact-string lookup of the handler bound to `pattern`; no matching.
    pub fn lookup(&self, pattern: &str) -> Option<&Arc<dyn DynHandler>> {
        self.table.lookup(pattern)
    }

    /// Registered patterns in the order they are tried.
    pub fn list_patterns(&self) -> &[Pattern] {
        self.table.ordered_patterns()
    }

    /// The route table.
    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    /// The interceptor chain.
    pub fn interceptors(&self) -> &InterceptorChain {
        &self.interceptors
    }

    /// Dispatch one request.
    ///
    /// Interceptors run first, in registration order; the first one to
    /// handle the request ends dispatch. Otherwise every route whose pattern
    /// matches is tried in priority order until a handler handles it.
    ///
    /// The router itself never writes to `response`: an unhandled request
    /// leaves it untouched, and a 404 is up to the caller (or a `*` route).
    ///
    /// # Errors
    ///
    /// The first error raised by an interceptor or handler aborts dispatch
    /// and is returned together with the failing link.
    pub async fn route(
        &self,
        response: &mut Response,
        request: &Request,
    ) -> Result<Dispatch, DispatchError> {
        let path = request_path(request);

        if let Some(index) = self.interceptors.run(request, response).await? {
            #[cfg(feature = "tracing")]
            {
                tracing::debug!(index, path, "interceptor halted dispatch");
            }
            return Ok(Dispatch::Intercepted(index));
        }

        for (route, params) in self.table.matches(path) {
            let pattern = route.pattern();
            let view = RequestView::new(request, pattern.as_str(), params);
            let outcome = route
                .handler()
                .call_dyn(&view, response)
                .await
                .map_err(|source| DispatchError::Handler {
                    pattern: pattern.to_string(),
                    source,
                })?;

            match outcome {
                Outcome::Handled => {
                    #[cfg(feature = "tracing")]
                    {
                        tracing::debug!(%pattern, path, "route handled request");
                    }
                    return Ok(Dispatch::Handled(pattern.clone()));
                }
                Outcome::Decline => {
                    #[cfg(feature = "tracing")]
                    {
                        tracing::trace!(%pattern, path, "route declined");
                    }
                }
            }
        }

        #[cfg(feature = "tracing")]
        {
            tracing::debug!(path, "no route handled request");
        }
        Ok(Dispatch::Unhandled)
    }
}

impl std::fmt::Debug for Router {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Router")
            .field("routes", &self.table)
            .field("interceptors", &self.interceptors.len())
            .finish()
    }
}

// Router as Interceptor
//
// A router can be mounted in front of another router's routes:
// - any handled dispatch (intercepted or routed) → `Handled`
// - unhandled → `Decline`, so the outer router carries on
impl Interceptor for Router {
    async fn intercept(
        &self,
        request: &Request,
        response: &mut Response,
    ) -> Result<Outcome, BoxError> {
        let dispatch = self.route(response, request).await?;
        Ok(if dispatch.is_handled() {
            Outcome::Handled
        } else {
            Outcome::Decline
        })
    }
}
