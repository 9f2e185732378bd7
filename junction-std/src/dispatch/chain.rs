//! The pre-dispatch interceptor chain.

use junction_core::{DispatchError, DynInterceptor, Interceptor, Outcome, Request, Response};
use std::{fmt, sync::Arc};

/// Interceptors in registration order.
///
/// The chain only grows; there is no way to remove or reorder a link.
#[derive(Clone, Default)]
pub struct InterceptorChain {
    links: Vec<Arc<dyn DynInterceptor>>,
}

impl InterceptorChain {
    /// Create an empty chain.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an interceptor.
    pub fn push<I: Interceptor>(&mut self, interceptor: I) {
        self.links.push(Arc::new(interceptor));
    }

    /// Append an already shared interceptor.
    pub fn push_shared(&mut self, interceptor: Arc<dyn DynInterceptor>) {
        self.links.push(interceptor);
    }

    /// Number of interceptors.
    pub fn len(&self) -> usize {
        self.links.len()
    }

    /// True if no interceptor is registered.
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    /// Interceptors in the order they run.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<dyn DynInterceptor>> {
        self.links.iter()
    }

    /// Run every interceptor in order until one handles the request.
    ///
    /// Returns the index of the interceptor that halted the chain, or `None`
    /// if all of them declined.
    ///
    /// # Errors
    ///
    /// The first interceptor error aborts the chain and is returned with the
    /// failing interceptor's index.
    pub async fn run(
        &self,
        request: &Request,
        response: &mut Response,
    ) -> Result<Option<usize>, DispatchError> {
        for (index, link) in self.links.iter().enumerate() {
            let outcome = link
                .intercept_dyn(request, response)
                .await
                .map_err(|source| DispatchError::Interceptor { index, source })?;
            match outcome {
                Outcome::Handled => return Ok(Some(index)),
                Outcome::Decline => continue,
            }
        }
        Ok(None)
    }
}

impl fmt::Debug for InterceptorChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InterceptorChain")
            .field("len", &self.links.len())
            .finish()
    }
}
