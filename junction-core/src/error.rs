//! Error types for Junction.
//!
//! This module provides a structured error hierarchy using `thiserror`:
//!
//! - [`JunctionError`] - Top-level error type for all Junction operations
//! - [`PatternError`] - Rejected route patterns, reported at registration
//! - [`DispatchError`] - Failures raised by interceptors or handlers

use thiserror::Error;

/// A boxed error type for dynamic error handling.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Top-level error type for all Junction operations.
#[derive(Error, Debug)]
pub enum JunctionError {
    /// A route pattern was rejected.
    #[error("pattern error: {0}")]
    Pattern(#[from] PatternError),

    /// A link failed while a request was dispatched.
    #[error("dispatch error: {0}")]
    Dispatch(#[from] DispatchError),
}

/// A malformed route pattern.
///
/// Patterns are validated eagerly so that a bad pattern fails at startup
/// instead of silently never matching.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    /// A capture segment without a name, e.g. `/users/:/`.
    #[error("capture without a name in pattern `{pattern}`")]
    EmptyParameter {
        /// The offending pattern.
        pattern: String,
    },

    /// The same capture name appears twice.
    #[error("parameter `{name}` captured twice in pattern `{pattern}`")]
    DuplicateParameter {
        /// The offending pattern.
        pattern: String,
        /// The repeated name.
        name: String,
    },

    /// A `:` that does not start a segment, e.g. `/user:id/`.
    #[error("`:` must start a segment in pattern `{pattern}`")]
    MisplacedCapture {
        /// The offending pattern.
        pattern: String,
    },

    /// A `*` that is not a whole segment, e.g. `/files*/`.
    #[error("`*` must be a whole segment in pattern `{pattern}`")]
    MisplacedWildcard {
        /// The offending pattern.
        pattern: String,
    },

    /// Two consecutive slashes.
    #[error("empty segment in pattern `{pattern}`")]
    EmptySegment {
        /// The offending pattern.
        pattern: String,
    },
}

/// Errors raised by a link of the dispatch chain.
#[derive(Error, Debug)]
pub enum DispatchError {
    /// An interceptor returned an error.
    #[error("interceptor #{index} failed")]
    Interceptor {
        /// Position of the interceptor in the chain.
        index: usize,
        /// The underlying error.
        #[source]
        source: BoxError,
    },

    /// A route handler returned an error.
    #[error("handler for `{pattern}` failed")]
    Handler {
        /// The pattern the failing handler is bound to.
        pattern: String,
        /// The underlying error.
        #[source]
        source: BoxError,
    },
}

impl DispatchError {
    /// Borrow the error raised by the failing link.
    pub fn inner(&self) -> &(dyn std::error::Error + Send + Sync + 'static) {
        match self {
            DispatchError::Interceptor { source, .. } | DispatchError::Handler { source, .. } => {
                source.as_ref()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_error_display() {
        let err = PatternError::DuplicateParameter {
            pattern: "/:id/:id/".into(),
            name: "id".into(),
        };
        assert_eq!(
            err.to_string(),
            "parameter `id` captured twice in pattern `/:id/:id/`"
        );

        let top: JunctionError = err.into();
        assert!(top.to_string().starts_with("pattern error: "));
    }

    #[test]
    fn test_dispatch_error_keeps_source() {
        let err = DispatchError::Handler {
            pattern: "/a/".into(),
            source: "disk on fire".into(),
        };
        assert_eq!(err.to_string(), "handler for `/a/` failed");
        assert_eq!(err.inner().to_string(), "disk on fire");
        assert!(std::error::Error::source(&err).is_some());
    }
}
