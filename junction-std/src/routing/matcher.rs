//! Path matching.
//!
//! A single left-to-right scan with one cursor over the request path and one
//! over the pattern. Literal bytes advance both cursors in lockstep; a capture
//! or wildcard moves each cursor to the end of its own segment at once. There
//! is no backtracking: a capture or wildcard always extends to the next `/`,
//! so the first mismatch is final.
//!
//! The request path gets a trailing `/` before scanning, so every segment,
//! including the last, is closed by a `/` on both sides.

use super::pattern::{Pattern, WILDCARD};
use junction_core::Params;
use std::borrow::Cow;

/// Match `path` against `pattern`, returning the captures on success.
///
/// # Example
///
/// ```rust
/// use junction_std::routing::{Pattern, match_path};
///
/// let pattern = Pattern::parse("/users/:id").unwrap();
/// let params = match_path(&pattern, "/users/42").unwrap();
/// assert_eq!(params.get("id"), Some("42"));
///
/// assert!(match_path(&pattern, "/users/").is_none());
/// ```
pub fn match_path(pattern: &Pattern, path: &str) -> Option<Params> {
    if pattern.is_catch_all() {
        return Some(Params::new());
    }
    scan(pattern.as_str(), &terminate(path))
}

/// `path` with a guaranteed trailing `/`; the empty path becomes `/`.
fn terminate(path: &str) -> Cow<'_, str> {
    if path.ends_with('/') {
        Cow::Borrowed(path)
    } else {
        Cow::Owned(format!("{path}/"))
    }
}

/// Offset of the next `/` at or after `from`.
fn segment_end(bytes: &[u8], from: usize) -> Option<usize> {
    bytes[from..]
        .iter()
        .position(|&b| b == b'/')
        .map(|offset| from + offset)
}

fn scan(pattern: &str, path: &str) -> Option<Params> {
    let pat = pattern.as_bytes();
    let url = path.as_bytes();
    let mut params = Params::new();

    let mut p = 0;
    let mut u = 0;
    while u < url.len() {
        match *pat.get(p)? {
            b':' => {
                // Both cursors sit right after a `/`: the name runs to the
                // next `/` in the pattern, the value to the next `/` in the path.
                let name_end = segment_end(pat, p)?;
                let value_end = segment_end(url, u)?;
                if value_end == u {
                    return None;
                }
                params.insert(&pattern[p + 1..name_end], &path[u..value_end]);
                p = name_end;
                u = value_end;
            }
            b'*' if pat.len() - p == WILDCARD.len() + 1 => {
                // Trailing wildcard: absorb the rest, minus the closing `/`.
                let rest = &path[u..url.len() - 1];
                if rest.is_empty() {
                    return None;
                }
                params.set_wildcard(rest);
                return Some(params);
            }
            b'*' => {
                let end = segment_end(url, u)?;
                if end == u {
                    return None;
                }
                p += 1;
                u = end;
            }
            expected => {
                if url[u] != expected {
                    return None;
                }
                p += 1;
                u += 1;
            }
        }
    }

    // Both sides must run out together.
    (p == pat.len()).then_some(params)
}
