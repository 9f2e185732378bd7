//! Route patterns: normalization, validation and segment access.
//!
//! Syntax: `/literal/:param/*`
//!
//! - `:name` captures exactly one path segment under `name`.
//! - `*` as a whole segment matches one segment, or everything that remains
//!   when it is the last segment.
//! - The bare token `*` matches every path.
//! - Anything else is compared byte for byte.

use junction_core::PatternError;
use std::{borrow::Borrow, borrow::Cow, collections::HashSet, fmt};

/// The match-everything token.
pub const WILDCARD: &str = "*";

/// A normalized, validated route pattern.
///
/// Normalization inserts a leading `/` and appends a trailing `/` when they
/// are missing, so `users/:id` and `/users/:id/` are the same pattern. The
/// empty string normalizes to the match-everything token [`WILDCARD`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pattern {
    source: String,
}

/// One `/`-delimited piece of a [`Pattern`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'p> {
    /// Compared byte for byte.
    Literal(&'p str),
    /// `:name`, holding the name.
    Capture(&'p str),
    /// `*`.
    Wildcard,
}

impl Pattern {
    /// Normalize and validate a raw pattern.
    ///
    /// # Errors
    ///
    /// Returns a [`PatternError`] for empty segments, unnamed or repeated
    /// captures, and `:`/`*` appearing anywhere other than a segment start.
    pub fn parse(raw: &str) -> Result<Self, PatternError> {
        let source = Self::normalize(raw).into_owned();
        let pattern = Self { source };
        if !pattern.is_catch_all() {
            pattern.validate()?;
        }
        Ok(pattern)
    }

    /// The pattern matching every path.
    pub fn catch_all() -> Self {
        Self {
            source: WILDCARD.to_owned(),
        }
    }

    /// Apply the registration-time normalization to a raw pattern string.
    ///
    /// This does not validate; it is what [`Pattern::parse`] and exact-string
    /// lookups use to agree on a key.
    pub fn normalize(raw: &str) -> Cow<'_, str> {
        if raw.is_empty() || raw == WILDCARD {
            return Cow::Borrowed(WILDCARD);
        }

        let leading = !raw.starts_with('/');
        let trailing = !raw.ends_with('/');
        if !leading && !trailing {
            return Cow::Borrowed(raw);
        }

        let mut normalized = String::with_capacity(raw.len() + 2);
        if leading {
            normalized.push('/');
        }
        normalized.push_str(raw);
        if trailing {
            normalized.push('/');
        }
        Cow::Owned(normalized)
    }

    /// The normalized pattern text.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// True for the match-everything token.
    pub fn is_catch_all(&self) -> bool {
        self.source == WILDCARD
    }

    /// Iterate over the segments, left to right.
    ///
    /// The root pattern `/` and the match-everything token have no segments.
    pub fn segments(&self) -> impl Iterator<Item = Segment<'_>> {
        let inner = if self.is_catch_all() {
            ""
        } else {
            self.source.trim_start_matches('/').trim_end_matches('/')
        };

        inner
            .split('/')
            .filter(move |_| !inner.is_empty())
            .map(|segment| match segment.strip_prefix(':') {
                Some(name) => Segment::Capture(name),
                None if segment == WILDCARD => Segment::Wildcard,
                None => Segment::Literal(segment),
            })
    }

    /// Names of the capture segments, left to right.
    pub fn param_names(&self) -> impl Iterator<Item = &str> {
        self.segments().filter_map(|segment| match segment {
            Segment::Capture(name) => Some(name),
            _ => None,
        })
    }

    fn validate(&self) -> Result<(), PatternError> {
        let pattern = || self.source.clone();

        // `trim_*_matches` in `segments` would hide runs of slashes at the edges.
        if self.source.starts_with("//") || (self.source.len() > 1 && self.source.ends_with("//"))
        {
            return Err(PatternError::EmptySegment { pattern: pattern() });
        }

        let mut seen = HashSet::new();
        for segment in self.segments() {
            match segment {
                Segment::Literal("") => {
                    return Err(PatternError::EmptySegment { pattern: pattern() });
                }
                Segment::Literal(text) if text.contains(':') => {
                    return Err(PatternError::MisplacedCapture { pattern: pattern() });
                }
                Segment::Literal(text) if text.contains('*') => {
                    return Err(PatternError::MisplacedWildcard { pattern: pattern() });
                }
                Segment::Capture("") => {
                    return Err(PatternError::EmptyParameter { pattern: pattern() });
                }
                Segment::Capture(name) if name.contains(':') => {
                    return Err(PatternError::MisplacedCapture { pattern: pattern() });
                }
                Segment::Capture(name) if name.contains('*') => {
                    return Err(PatternError::MisplacedWildcard { pattern: pattern() });
                }
                Segment::Capture(name) if !seen.insert(name) => {
                    return Err(PatternError::DuplicateParameter {
                        pattern: pattern(),
                        name: name.to_owned(),
                    });
                }
                Segment::Literal(_) | Segment::Capture(_) | Segment::Wildcard => {}
            }
        }
        Ok(())
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

impl AsRef<str> for Pattern {
    fn as_ref(&self) -> &str {
        &self.source
    }
}

// Lets the route table look patterns up by plain `&str`.
impl Borrow<str> for Pattern {
    fn borrow(&self) -> &str {
        &self.source
    }
}

impl std::str::FromStr for Pattern {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
