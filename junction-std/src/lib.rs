//! # junction-std
//!
//! Standard implementations for the Junction HTTP request router.
//!
//! This crate provides:
//! - **Routing**: [`Pattern`](routing::Pattern), [`match_path`](routing::match_path),
//!   route precedence and the [`RouteTable`](routing::RouteTable)
//! - **Dispatch**: [`Router`](dispatch::Router), [`RouterBuilder`](dispatch::RouterBuilder),
//!   [`SharedRouter`](dispatch::SharedRouter)
//! - **Standard interceptors**: Logging, Conditional, Timeout
//! - **File helpers**: `download`, `StaticDir` (feature `fs`)
//! - **Testing utilities**: recording handlers and interceptors

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core traits
pub use junction_core;

// Modules
pub mod dispatch;
#[cfg(feature = "fs")]
pub mod files;
pub mod interceptors;
pub mod routing;
pub mod testing;
