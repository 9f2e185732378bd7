//! Logging interceptor for request observation.

#[cfg(feature = "tracing")]
use junction_core::request_path;
use junction_core::{BoxError, Interceptor, Outcome, Request, Response};
use std::borrow::Cow;

/// An interceptor that logs every request and lets it through.
///
/// Logs at `debug` level through `tracing` when the `tracing` feature is
/// enabled; otherwise it only declines.
#[derive(Debug, Clone, Default)]
pub struct LoggingInterceptor {
    name: Option<Cow<'static, str>>,
}

impl LoggingInterceptor {
    /// Create an unnamed logging interceptor.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a logging interceptor whose records carry `name`.
    pub fn named(name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            name: Some(name.into()),
        }
    }

    /// The name given to [`LoggingInterceptor::named`].
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

impl Interceptor for LoggingInterceptor {
    async fn intercept(
        &self,
        request: &Request,
        _response: &mut Response,
    ) -> Result<Outcome, BoxError> {
        #[cfg(feature = "tracing")]
        {
            tracing::debug!(
                name = self.name(),
                method = %request.method(),
                path = request_path(request),
                "request"
            );
        }
        #[cfg(not(feature = "tracing"))]
        {
            let _ = request;
        }
        Ok(Outcome::Decline)
    }
}
