//! Request types seen by interceptors and handlers.

use crate::params::Params;
use bytes::Bytes;
use std::ops::Deref;

/// An already-parsed inbound request, as handed over by the transport.
///
/// The router only reads `uri().path()`. Transport-level identity (connection
/// ids, peer addresses) travels in the request's extensions.
pub type Request = http::Request<Bytes>;

/// The path the router matches against.
///
/// An empty path (authority-form URIs) is treated as `/`.
pub fn request_path(request: &Request) -> &str {
    match request.uri().path() {
        "" => "/",
        path => path,
    }
}

/// A read-only view of a request matched by a route.
///
/// Bundles the original request with the parameters captured by the pattern
/// that matched it. Derefs to the underlying [`Request`].
///
/// # Example
///
/// ```rust
/// use junction_core::{Params, Request, RequestView};
///
/// let request: Request = http::Request::builder().uri("/users/42").body(Default::default()).unwrap();
/// let mut params = Params::new();
/// params.insert("id", "42");
///
/// let view = RequestView::new(&request, "/users/:id/", params);
/// assert_eq!(view.param("id"), Some("42"));
/// assert_eq!(view.uri().path(), "/users/42");
/// ```
#[derive(Debug)]
pub struct RequestView<'r> {
    request: &'r Request,
    pattern: &'r str,
    params: Params,
}

impl<'r> RequestView<'r> {
    /// Wrap a request together with the captures of its matching pattern.
    pub fn new(request: &'r Request, pattern: &'r str, params: Params) -> Self {
        Self {
            request,
            pattern,
            params,
        }
    }

    /// The wrapped request.
    pub fn request(&self) -> &'r Request {
        self.request
    }

    /// The normalized pattern that matched.
    pub fn pattern(&self) -> &'r str {
        self.pattern
    }

    /// The matched request path.
    pub fn path(&self) -> &'r str {
        request_path(self.request)
    }

    /// All captured parameters.
    pub fn params(&self) -> &Params {
        &self.params
    }

    /// Shorthand for `params().get(name)`.
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name)
    }
}

impl Deref for RequestView<'_> {
    type Target = Request;

    fn deref(&self) -> &Self::Target {
        self.request
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(uri: &str) -> Request {
        http::Request::builder().uri(uri).body(Bytes::new()).unwrap()
    }

    #[test]
    fn test_request_path_ignores_query() {
        let req = request("/search?q=rust");
        assert_eq!(request_path(&req), "/search");
    }

    #[test]
    fn test_absolute_form_uses_path() {
        let req = request("http://example.org/a/b?x=1");
        assert_eq!(request_path(&req), "/a/b");
    }

    #[test]
    fn test_view_derefs_to_request() {
        let req = request("/files/a/b");
        let mut params = Params::new();
        params.set_wildcard("a/b");

        let view = RequestView::new(&req, "/files/*/", params);
        assert_eq!(view.method(), &http::Method::GET);
        assert_eq!(view.path(), "/files/a/b");
        assert_eq!(view.pattern(), "/files/*/");
        assert_eq!(view.params().wildcard(), Some("a/b"));
    }
}
