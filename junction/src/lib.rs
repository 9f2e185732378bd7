//! # junction - Embeddable HTTP Request Router
//!
//! `junction` maps a request path to a handler using a small pattern language,
//! runs a chain of interceptors first, and lets a matched handler pass the
//! request on to the next matching route instead of ending dispatch.
//!
//! ## Quick Start
//!
//! ```rust
//! use junction::prelude::*;
//!
//! # futures::executor::block_on(async {
//! let router = Router::builder()
//!     .interceptor(LoggingInterceptor::named("access"))
//!     .route_fn("/users/new", |_req, res| res.write("signup form"))
//!     .route_fn("/users/:id", |req, res| {
//!         res.send("text/plain", format!("user {}", req.param("id").unwrap_or_default()));
//!     })
//!     .route_fn("*", |_req, res| res.set_status(http::StatusCode::NOT_FOUND))
//!     .build()
//!     .unwrap();
//!
//! let request: Request = http::Request::builder().uri("/users/42").body(Default::default()).unwrap();
//! let mut response = Response::new();
//! router.route(&mut response, &request).await.unwrap();
//! assert_eq!(response.body(), b"user 42");
//! # });
//! ```
//!
//! ## Pattern Syntax
//!
//! | Segment | Matches |
//! |---------|---------|
//! | `users` | the literal segment `users` |
//! | `:id`   | exactly one non-empty segment, captured as `id` |
//! | `*` (last) | everything that remains, available as `Params::wildcard` |
//! | `*` (inner) | exactly one non-empty segment, not captured |
//! | `*` (whole pattern) | every path, tried last |
//!
//! Patterns are normalized to start and end with `/`.
//!
//! ## Precedence
//!
//! Overlapping patterns are tried most specific first, whatever the
//! registration order: a longer literal prefix wins, then patterns without a
//! wildcard, then more literal segments, then deeper patterns.
//!
//! ## Continuation
//!
//! Handlers and interceptors return an [`Outcome`]. `Handled` ends dispatch;
//! `Decline` moves on to the next interceptor, or to the next matching route.

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

pub use junction_core::{
    // Error types
    BoxError,
    DispatchError,
    // Handler
    DynHandler,
    // Interceptor
    DynInterceptor,
    Handler,
    HandlerFn,
    Interceptor,
    InterceptorFn,
    // Continuation
    IntoOutcome,
    JunctionError,
    Outcome,
    // Request / Response
    Params,
    PatternError,
    Request,
    RequestView,
    Response,
    handler_fn,
    interceptor_fn,
    request_path,
};

// The request and response vocabulary
pub use http;

// Routing
pub use junction_std::routing::{Pattern, Route, RouteTable, compare, match_path};

// Dispatch
pub use junction_std::dispatch::{Dispatch, InterceptorChain, Router, RouterBuilder, SharedRouter};

// Standard interceptors
pub use junction_std::interceptors::{ConditionalInterceptor, LoggingInterceptor};

#[cfg(feature = "timeout")]
pub use junction_std::interceptors::{Timeout, TimeoutError};

// File helpers
#[cfg(feature = "fs")]
pub use junction_std::files::{StaticDir, download};

// Testing utilities
pub use junction_std::testing;

/// Prelude module for convenient imports.
///
/// ```rust
/// use junction::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        // Errors
        BoxError,
        DispatchError,
        // Dispatch
        Dispatch,
        // Core traits
        Handler,
        Interceptor,
        IntoOutcome,
        JunctionError,
        LoggingInterceptor,
        Outcome,
        Params,
        // Request / Response
        Request,
        RequestView,
        Response,
        Router,
        SharedRouter,
        handler_fn,
        interceptor_fn,
    };
}
