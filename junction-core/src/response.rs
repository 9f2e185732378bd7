//! Buffered response sink.

use bytes::{Bytes, BytesMut};
use http::{HeaderMap, HeaderName, HeaderValue, StatusCode, header};

/// The response sink links write into.
///
/// The router never touches it on its own; only interceptors and handlers do.
/// A request that nobody handled is recognised by [`Response::is_written`]
/// staying `false`. The transport turns the sink into its own response type
/// with [`Response::into_http`].
#[derive(Debug, Default)]
pub struct Response {
    status: StatusCode,
    headers: HeaderMap,
    body: BytesMut,
    written: bool,
}

impl Response {
    /// Create an empty `200 OK` sink that nothing has written to yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current status code.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Set the status code.
    pub fn set_status(&mut self, status: StatusCode) {
        self.status = status;
        self.written = true;
    }

    /// Response headers.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Mutable access to the headers; counts as a write.
    pub fn headers_mut(&mut self) -> &mut HeaderMap {
        self.written = true;
        &mut self.headers
    }

    /// Insert a header, replacing previous values of the same name.
    pub fn insert_header(&mut self, name: HeaderName, value: HeaderValue) {
        self.headers_mut().insert(name, value);
    }

    /// Append bytes to the body.
    pub fn write(&mut self, chunk: impl AsRef<[u8]>) {
        self.body.extend_from_slice(chunk.as_ref());
        self.written = true;
    }

    /// Replace the body.
    pub fn set_body(&mut self, body: impl AsRef<[u8]>) {
        self.body.clear();
        self.write(body);
    }

    /// Replace the body and set its content type.
    pub fn send(&mut self, content_type: &'static str, body: impl AsRef<[u8]>) {
        self.insert_header(header::CONTENT_TYPE, HeaderValue::from_static(content_type));
        self.set_body(body);
    }

    /// Body written so far.
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Whether any link has written status, headers or body.
    pub fn is_written(&self) -> bool {
        self.written
    }

    /// Convert into an `http::Response` for the transport.
    pub fn into_http(self) -> http::Response<Bytes> {
        let mut response = http::Response::new(self.body.freeze());
        *response.status_mut() = self.status;
        *response.headers_mut() = self.headers;
        response
    }
}
