//! Sending a file as the response body.

use http::{HeaderValue, header};
use junction_core::Response;
use std::{io, path::Path, time::SystemTime};
use tokio::fs;

/// Write the file at `path` to `response` as an attachment.
///
/// Sets `Content-Type` (guessed from the extension, falling back to
/// `application/octet-stream`), `Content-Length`, `Last-Modified` and
/// `Content-Disposition: attachment; filename="<file name>"`, and replaces the
/// body with the file's contents.
///
/// # Errors
///
/// Any error reading the file. The response is left untouched in that case.
pub async fn download(response: &mut Response, path: impl AsRef<Path>) -> io::Result<()> {
    let path = path.as_ref();
    let modified = fs::metadata(path).await?.modified().ok();
    let body = fs::read(path).await?;
    write_file(response, path, &body, modified, true)
}

/// Write an already read file, with headers derived from its path and mtime.
pub(crate) fn write_file(
    response: &mut Response,
    path: &Path,
    body: &[u8],
    modified: Option<SystemTime>,
    attachment: bool,
) -> io::Result<()> {
    let content_type = mime_guess::from_path(path).first_or_octet_stream();
    let content_type = HeaderValue::from_str(content_type.as_ref()).map_err(io::Error::other)?;
    let disposition = if attachment {
        Some(content_disposition(path)?)
    } else {
        None
    };

    response.insert_header(header::CONTENT_TYPE, content_type);
    response.insert_header(header::CONTENT_LENGTH, HeaderValue::from(body.len()));
    if let Some(modified) = modified {
        let value = HeaderValue::from_str(&httpdate::fmt_http_date(modified))
            .map_err(io::Error::other)?;
        response.insert_header(header::LAST_MODIFIED, value);
    }
    if let Some(disposition) = disposition {
        response.insert_header(header::CONTENT_DISPOSITION, disposition);
    }
    response.set_body(body);
    Ok(())
}

fn content_disposition(path: &Path) -> io::Result<HeaderValue> {
    // Quotes, backslashes and control characters would break the quoted string.
    let name: String = path
        .file_name()
        .map(|name| name.to_string_lossy())
        .unwrap_or_default()
        .chars()
        .map(|c| if c == '"' || c == '\\' || c.is_control() { '_' } else { c })
        .collect();

    HeaderValue::from_bytes(format!("attachment; filename=\"{name}\"").as_bytes())
        .map_err(io::Error::other)
}
