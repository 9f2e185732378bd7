//! Captured route parameters.

use std::collections::HashMap;

/// Values captured while matching a request path against a pattern.
///
/// Named captures (`:name` segments) map to the exact path segment they
/// matched. A trailing `*` segment records the remainder of the path it
/// absorbed, available through [`Params::wildcard`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    named: HashMap<String, String>,
    wildcard: Option<String>,
}

impl Params {
    /// Create an empty set of parameters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the value captured for `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.named.get(name).map(String::as_str)
    }

    /// Record a captured value, replacing any earlier one with the same name.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.named.insert(name.into(), value.into());
    }

    /// The path remainder absorbed by a trailing wildcard, if any.
    pub fn wildcard(&self) -> Option<&str> {
        self.wildcard.as_deref()
    }

    /// Record the remainder absorbed by a trailing wildcard.
    pub fn set_wildcard(&mut self, rest: impl Into<String>) {
        self.wildcard = Some(rest.into());
    }

    /// Iterate over `(name, value)` pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.named.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of named captures.
    pub fn len(&self) -> usize {
        self.named.len()
    }

    /// True when nothing was captured, wildcard included.
    pub fn is_empty(&self) -> bool {
        self.named.is_empty() && self.wildcard.is_none()
    }
}
