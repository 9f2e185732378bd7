//! # junction-core
//!
//! Core types and traits for the Junction HTTP request router.
//!
//! This crate has minimal dependencies and is meant to be imported by code that
//! writes handlers or interceptors without needing the routing implementation
//! in `junction-std`.
//!
//! # Dispatch Model
//!
//! A request flows through two chains of links, and every link answers with an
//! [`Outcome`]:
//!
//! ## Interceptors ([`Interceptor`])
//!
//! Run in registration order before routing. `Decline` lets the request
//! through, `Handled` ends dispatch before any route is looked at.
//!
//! ## Handlers ([`Handler`])
//!
//! Bound to route patterns and tried in priority order. A handler sees a
//! [`RequestView`] carrying the [`Params`] captured by its pattern. `Decline`
//! passes the request to the next matching route, `Handled` ends dispatch.
//!
//! ## Response Sink ([`Response`])
//!
//! Links write into a buffered sink. The router never writes to it itself, so
//! a request nobody handled leaves it untouched.
//!
//! # Error Types
//!
//! - [`JunctionError`] - Top-level error type
//! - [`PatternError`] - Malformed route patterns
//! - [`DispatchError`] - Failures raised by links during dispatch

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod error;
mod handler;
mod interceptor;
mod outcome;
mod params;
mod request;
mod response;

// Re-exports
pub use error::{BoxError, DispatchError, JunctionError, PatternError};
pub use handler::{DynHandler, Handler, HandlerFn, handler_fn};
pub use interceptor::{DynInterceptor, Interceptor, InterceptorFn, interceptor_fn};
pub use outcome::{IntoOutcome, Outcome};
pub use params::Params;
pub use request::{Request, RequestView, request_path};
pub use response::Response;
