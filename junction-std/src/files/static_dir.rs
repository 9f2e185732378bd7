//! Serving a directory tree.

use super::download::write_file;
use junction_core::{
    BoxError, Handler, Interceptor, Outcome, Request, RequestView, Response, request_path,
};
use std::{
    io,
    path::{Component, Path, PathBuf},
};
use tokio::fs;

/// Serves regular files found under a root directory.
///
/// Mounted as an [`Interceptor`], the whole request path is looked up under
/// the root. Mounted as a [`Handler`], the text absorbed by the pattern's
/// trailing wildcard is looked up instead (`/static/*` serving
/// `/static/css/site.css` reads `<root>/css/site.css`), or the whole path
/// when the pattern has no wildcard.
///
/// A found regular file is written to the response and the request counts as
/// handled. A missing file or a directory declines, so dispatch carries on.
/// Paths with `..`, or that would otherwise leave the root, always decline.
/// The request path is used as it is; percent-escapes are not decoded.
///
/// # Example
///
/// ```rust,no_run
/// use junction_std::{dispatch::Router, files::StaticDir};
///
/// let mut router = Router::new();
/// router.register("/assets/*", StaticDir::new("./public")).unwrap();
/// // Or ahead of every route:
/// router.register_interceptor(StaticDir::new("./public"));
/// ```
#[derive(Debug, Clone)]
pub struct StaticDir {
    root: PathBuf,
    attachment: bool,
}

impl StaticDir {
    /// Serve files under `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            attachment: false,
        }
    }

    /// Send every file as a download (`Content-Disposition: attachment`).
    pub fn as_attachments(mut self) -> Self {
        self.attachment = true;
        self
    }

    /// The served directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Map a request path onto the file system, or `None` if it would leave
    /// the root.
    pub fn resolve(&self, path: &str) -> Option<PathBuf> {
        let relative = Path::new(path.trim_start_matches('/'));
        let contained = relative
            .components()
            .all(|component| matches!(component, Component::Normal(_) | Component::CurDir));
        contained.then(|| self.root.join(relative))
    }

    async fn serve(&self, path: &str, response: &mut Response) -> Result<Outcome, BoxError> {
        let Some(file) = self.resolve(path) else {
            return Ok(Outcome::Decline);
        };

        let metadata = match fs::metadata(&file).await {
            Ok(metadata) => metadata,
            Err(e) if is_missing(&e) => return Ok(Outcome::Decline),
            Err(e) => return Err(e.into()),
        };
        if !metadata.is_file() {
            return Ok(Outcome::Decline);
        }

        let body = fs::read(&file).await?;
        write_file(response, &file, &body, metadata.modified().ok(), self.attachment)?;
        Ok(Outcome::Handled)
    }
}

fn is_missing(error: &io::Error) -> bool {
    matches!(
        error.kind(),
        io::ErrorKind::NotFound | io::ErrorKind::NotADirectory
    )
}

impl Interceptor for StaticDir {
    async fn intercept(
        &self,
        request: &Request,
        response: &mut Response,
    ) -> Result<Outcome, BoxError> {
        self.serve(request_path(request), response).await
    }
}

impl Handler for StaticDir {
    async fn call(
        &self,
        request: &RequestView<'_>,
        response: &mut Response,
    ) -> Result<Outcome, BoxError> {
        let path = request.params().wildcard().unwrap_or_else(|| request.path());
        self.serve(path, response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::header;
    use junction_core::Params;
    use tempfile::TempDir;

    fn site() -> TempDir {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("public/css")).unwrap();
        std::fs::write(dir.path().join("public/index.html"), "<h1>hi</h1>").unwrap();
        std::fs::write(dir.path().join("public/css/site.css"), "body{}").unwrap();
        std::fs::write(dir.path().join("secret.txt"), "nope").unwrap();
        dir
    }

    fn request(path: &str) -> Request {
        http::Request::builder().uri(path).body(Default::default()).unwrap()
    }

    async fn intercept(files: &StaticDir, path: &str) -> (Outcome, Response) {
        let mut res = Response::new();
        let outcome = files.intercept(&request(path), &mut res).await.unwrap();
        (outcome, res)
    }

    #[tokio::test]
    async fn test_serves_file() {
        let dir = site();
        let files = StaticDir::new(dir.path().join("public"));

        let (outcome, res) = intercept(&files, "/css/site.css").await;
        assert_eq!(outcome, Outcome::Handled);
        assert_eq!(res.body(), b"body{}");
        assert_eq!(res.headers()[header::CONTENT_TYPE], "text/css");
        assert!(res.headers().get(header::CONTENT_DISPOSITION).is_none());
        assert!(res.headers().contains_key(header::LAST_MODIFIED));
    }

    #[tokio::test]
    async fn test_declines_missing_and_directories() {
        let dir = site();
        let files = StaticDir::new(dir.path().join("public"));

        for path in ["/missing.html", "/css", "/", "/index.html/more"] {
            let (outcome, res) = intercept(&files, path).await;
            assert_eq!(outcome, Outcome::Decline, "{path}");
            assert!(!res.is_written(), "{path}");
        }
    }

    #[tokio::test]
    async fn test_never_leaves_root() {
        let dir = site();
        let files = StaticDir::new(dir.path().join("public"));

        let (outcome, res) = intercept(&files, "/../secret.txt").await;
        assert_eq!(outcome, Outcome::Decline);
        assert!(!res.is_written());
        assert!(files.resolve("/css/../../secret.txt").is_none());
        assert!(files.resolve("/css/./site.css").is_some());
    }

    #[tokio::test]
    async fn test_handler_serves_wildcard_remainder() {
        let dir = site();
        let files = StaticDir::new(dir.path().join("public")).as_attachments();

        let req = request("/static/css/site.css");
        let mut params = Params::new();
        params.set_wildcard("css/site.css");
        let view = RequestView::new(&req, "/static/*/", params);
        let mut res = Response::new();

        let outcome = files.call(&view, &mut res).await.unwrap();
        assert_eq!(outcome, Outcome::Handled);
        assert_eq!(res.body(), b"body{}");
        assert_eq!(
            res.headers()[header::CONTENT_DISPOSITION],
            "attachment; filename=\"site.css\""
        );
    }
}
