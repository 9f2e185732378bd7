//! # Dispatch
//!
//! Runs a request through the interceptor chain and then through the
//! matching routes.
//!
//! | Type | Use Case |
//! |------|----------|
//! | [`Router`] | Routes fixed at startup, shared as `Arc<Router>` |
//! | [`RouterBuilder`] | Chained registration with a single error check |
//! | [`SharedRouter`] | Registering routes while requests are in flight |

pub mod builder;
pub mod chain;
pub mod router;
pub mod shared;

pub use builder::RouterBuilder;
pub use chain::InterceptorChain;
pub use router::{Dispatch, Router};
pub use shared::SharedRouter;
