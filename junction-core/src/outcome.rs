//! # Continuation Signal (Outcome)
//!
//! Every link of a dispatch chain, interceptor or route handler, reports back
//! whether the request is finished. This replaces the "call `next()` to
//! continue" callback idiom with a plain return value the dispatcher inspects.
//!
//! - [`Outcome::Handled`]: the link took care of the request; dispatch stops.
//! - [`Outcome::Decline`]: the link is not done with it; dispatch moves on to
//!   the next interceptor, or to the next matching route.
//! - `Err(_)`: the link failed; dispatch aborts with the error.

use crate::error::BoxError;

/// Result of running one link of the dispatch chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The request is fully handled; stop dispatching.
    Handled,
    /// Not done here; continue with the next candidate.
    Decline,
}

impl Outcome {
    /// Returns true if dispatch should stop after this link.
    pub const fn is_handled(self) -> bool {
        matches!(self, Outcome::Handled)
    }
}

/// Trait for converting a link's return value into an [`Outcome`].
///
/// # Default Implementations
///
/// - `()` → `Handled`
/// - `bool` → `true` = `Handled`, `false` = `Decline`
/// - `Outcome` → As is
/// - `Option<T>` → `None` = `Decline`, `Some(t)` delegates to `t`
/// - `Result<T, E>` → Delegates to inner `T` or boxes the error
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be turned into an `Outcome`",
    label = "missing `IntoOutcome` implementation",
    note = "Return `Outcome`, `()`, `bool`, `Option<_>` or `Result<_, _>` from handlers and interceptors."
)]
pub trait IntoOutcome {
    /// Convert the value into a continuation signal or an error.
    fn into_outcome(self) -> Result<Outcome, BoxError>;
}

impl IntoOutcome for () {
    fn into_outcome(self) -> Result<Outcome, BoxError> {
        Ok(Outcome::Handled)
    }
}

impl IntoOutcome for bool {
    fn into_outcome(self) -> Result<Outcome, BoxError> {
        Ok(if self {
            Outcome::Handled
        } else {
            Outcome::Decline
        })
    }
}

impl IntoOutcome for Outcome {
    fn into_outcome(self) -> Result<Outcome, BoxError> {
        Ok(self)
    }
}

impl<T: IntoOutcome> IntoOutcome for Option<T> {
    fn into_outcome(self) -> Result<Outcome, BoxError> {
        match self {
            Some(t) => t.into_outcome(),
            None => Ok(Outcome::Decline),
        }
    }
}

impl<T, E> IntoOutcome for Result<T, E>
where
    T: IntoOutcome,
    E: Into<BoxError>,
{
    fn into_outcome(self) -> Result<Outcome, BoxError> {
        match self {
            Ok(t) => t.into_outcome(),
            Err(e) => Err(e.into()),
        }
    }
}
