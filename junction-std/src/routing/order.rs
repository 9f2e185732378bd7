//! Route precedence.
//!
//! Overlapping patterns are tried most specific first, so a general prefix
//! registered early can never shadow a nested route registered later.
//! Specificity is read off the pattern's own structure:
//!
//! 1. longer literal prefix (bytes before the first capture or wildcard) first
//! 2. patterns without a wildcard segment before patterns with one
//! 3. more literal segments first
//! 4. more segments first
//! 5. pattern text, byte-wise, so that distinct patterns never tie
//!
//! The match-everything token `*` always comes last.

use super::pattern::{Pattern, Segment};
use std::cmp::{Ordering, Reverse};

/// Structural rank of a pattern; smaller sorts earlier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Specificity {
    catch_all: bool,
    literal_prefix: Reverse<usize>,
    wildcard: bool,
    literal_segments: Reverse<usize>,
    depth: Reverse<usize>,
}

impl Specificity {
    /// Compute the rank of `pattern`.
    pub fn of(pattern: &Pattern) -> Self {
        if pattern.is_catch_all() {
            return Self {
                catch_all: true,
                literal_prefix: Reverse(0),
                wildcard: true,
                literal_segments: Reverse(0),
                depth: Reverse(0),
            };
        }

        let source = pattern.as_str();
        let literal_prefix = source.find([':', '*']).unwrap_or(source.len());

        let mut wildcard = false;
        let mut literal_segments = 0;
        let mut depth = 0;
        for segment in pattern.segments() {
            depth += 1;
            match segment {
                Segment::Literal(_) => literal_segments += 1,
                Segment::Wildcard => wildcard = true,
                Segment::Capture(_) => {}
            }
        }

        Self {
            catch_all: false,
            literal_prefix: Reverse(literal_prefix),
            wildcard,
            literal_segments: Reverse(literal_segments),
            depth: Reverse(depth),
        }
    }
}

/// Decide which of two patterns is tried first.
///
/// `Ordering::Less` means `a` takes precedence over `b`. The order is total:
/// it only returns `Equal` for identical patterns.
pub fn compare(a: &Pattern, b: &Pattern) -> Ordering {
    Specificity::of(a)
        .cmp(&Specificity::of(b))
        .then_with(|| a.as_str().cmp(b.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(raw: &[&str]) -> Vec<String> {
        let mut patterns: Vec<Pattern> = raw.iter().map(|r| Pattern::parse(r).unwrap()).collect();
        patterns.sort_by(compare);
        patterns.into_iter().map(|p| p.as_str().to_owned()).collect()
    }

    #[test]
    fn test_nested_literal_before_wildcard() {
        assert_eq!(sorted(&["/a/*", "/a/b"]), vec!["/a/b/", "/a/*/"]);
        assert_eq!(sorted(&["/a/b", "/a/*"]), vec!["/a/b/", "/a/*/"]);
    }

    #[test]
    fn test_catch_all_last() {
        assert_eq!(
            sorted(&["*", "/", "/a/*", "/:x"]),
            vec!["/a/*/", "/:x/", "/", "*"]
        );
        assert_eq!(sorted(&["/", "*"]), vec!["/", "*"]);
    }

    #[test]
    fn test_literal_before_capture() {
        assert_eq!(
            sorted(&["/users/:id", "/users/new"]),
            vec!["/users/new/", "/users/:id/"]
        );
    }

    #[test]
    fn test_capture_before_trailing_wildcard() {
        assert_eq!(
            sorted(&["/a/*", "/a/:x/:y"]),
            vec!["/a/:x/:y/", "/a/*/"]
        );
    }

    #[test]
    fn test_deeper_prefix_first() {
        assert_eq!(
            sorted(&["/", "/api/*", "/api/v1/*", "/api/v1/users"]),
            vec!["/api/v1/users/", "/api/v1/*/", "/api/*/", "/"]
        );
    }

    #[test]
    fn test_order_independent_of_input() {
        let a = sorted(&["/x/:id", "/x/y", "*", "/x/*", "/"]);
        let b = sorted(&["/", "/x/*", "*", "/x/y", "/x/:id"]);
        assert_eq!(a, b);
    }

    #[test]
    fn test_total() {
        let a = Pattern::parse("/a/:x").unwrap();
        let b = Pattern::parse("/a/:y").unwrap();
        assert_ne!(compare(&a, &b), Ordering::Equal);
        assert_eq!(compare(&a, &b), compare(&b, &a).reverse());
        assert_eq!(compare(&a, &a), Ordering::Equal);
    }
}
