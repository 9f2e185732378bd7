//! Standard interceptors and link wrappers.

pub mod conditional;
pub mod logging;
#[cfg(feature = "timeout")]
pub mod timeout;

pub use conditional::ConditionalInterceptor;
pub use logging::LoggingInterceptor;
#[cfg(feature = "timeout")]
pub use timeout::{Timeout, TimeoutError};
