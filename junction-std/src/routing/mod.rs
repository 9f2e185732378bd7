//! # Routing
//!
//! Pattern parsing, path matching and route precedence.
//!
//! - [`Pattern`]: a normalized, validated route pattern (`/literal/:param/*`).
//! - [`match_path`]: matches a request path against one pattern.
//! - [`compare`]: decides which of two overlapping patterns is tried first.
//! - [`RouteTable`]: patterns bound to handlers, kept in priority order.

pub mod matcher;
pub mod order;
pub mod pattern;
pub mod table;

pub use matcher::match_path;
pub use order::{Specificity, compare};
pub use pattern::{Pattern, Segment, WILDCARD};
pub use table::{Route, RouteTable};
