//! # File Helpers
//!
//! Thin I/O wrappers writing files into a [`Response`](junction_core::Response).
//! Available with the `fs` feature.
//!
//! - [`download`]: send one file as an attachment.
//! - [`StaticDir`]: serve a directory tree, as an interceptor or as a route.

pub mod download;
pub mod static_dir;

pub use download::download;
pub use static_dir::StaticDir;
