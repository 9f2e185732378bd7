//! A router that accepts registrations while serving.

use super::router::{Dispatch, Router};
use arc_swap::ArcSwap;
use junction_core::{DispatchError, Handler, Interceptor, PatternError, Request, Response};
use parking_lot::Mutex;
use std::sync::Arc;

/// Single-writer, many-readers wrapper around a [`Router`].
///
/// Readers load the current router without locking. A writer clones it,
/// registers into the clone (which re-sorts the clone's table in full) and
/// then publishes the clone in one atomic swap, so an in-flight dispatch only
/// ever sees a completely sorted table. Writers are serialized so that no
/// registration is lost to a concurrent one.
pub struct SharedRouter {
    current: ArcSwap<Router>,
    writer: Mutex<()>,
}

impl SharedRouter {
    /// Start serving `router`.
    pub fn new(router: Router) -> Self {
        Self {
            current: ArcSwap::from_pointee(router),
            writer: Mutex::new(()),
        }
    }

    /// The router currently being served.
    pub fn snapshot(&self) -> Arc<Router> {
        self.current.load_full()
    }

    /// Apply `update` to a copy of the current router and publish it.
    ///
    /// If `update` fails, nothing is published.
    ///
    /// # Errors
    ///
    /// Whatever `update` returns.
    pub fn update<T, E>(&self, update: impl FnOnce(&mut Router) -> Result<T, E>) -> Result<T, E> {
        let _guard = self.writer.lock();
        let mut next = Router::clone(&self.current.load());
        let value = update(&mut next)?;
        self.current.store(Arc::new(next));
        Ok(value)
    }

    /// Bind `handler` to `pattern` in the served router.
    ///
    /// # Errors
    ///
    /// Returns a [`PatternError`] if the pattern is malformed.
    pub fn register<H: Handler>(&self, pattern: &str, handler: H) -> Result<(), PatternError> {
        self.update(|router| router.register(pattern, handler))
    }

    /// Append an interceptor to the served router.
    pub fn register_interceptor<I: Interceptor>(&self, interceptor: I) {
        let _ = self.update(|router| {
            router.register_interceptor(interceptor);
            Ok::<_, std::convert::Infallible>(())
        });
    }

    /// Dispatch one request against the current snapshot.
    ///
    /// Registrations published while the request is in flight do not affect it.
    ///
    /// # Errors
    ///
    /// See [`Router::route`].
    pub async fn route(
        &self,
        response: &mut Response,
        request: &Request,
    ) -> Result<Dispatch, DispatchError> {
        let router = self.snapshot();
        router.route(response, request).await
    }
}

impl Default for SharedRouter {
    fn default() -> Self {
        Self::new(Router::new())
    }
}

impl From<Router> for SharedRouter {
    fn from(router: Router) -> Self {
        Self::new(router)
    }
}

impl std::fmt::Debug for SharedRouter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("SharedRouter")
            .field(&*self.current.load())
            .finish()
    }
}
