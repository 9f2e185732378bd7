//! The route table.

use super::{matcher::match_path, order::compare, pattern::Pattern};
use junction_core::{DynHandler, Handler, Params, PatternError};
use std::{collections::HashMap, fmt, sync::Arc};

/// A registered pattern and the handler bound to it.
#[derive(Clone)]
pub struct Route {
    pattern: Pattern,
    handler: Arc<dyn DynHandler>,
}

impl Route {
    /// The normalized pattern.
    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    /// The bound handler.
    pub fn handler(&self) -> &Arc<dyn DynHandler> {
        &self.handler
    }
}

impl fmt::Debug for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Route")
            .field("pattern", &self.pattern)
            .finish_non_exhaustive()
    }
}

/// Patterns and their handlers, kept in dispatch-priority order.
///
/// The ordered sequence and the map's key set always hold the same patterns;
/// the sequence is re-sorted right after each insertion, so readers never see
/// a partially sorted table.
#[derive(Clone, Default)]
pub struct RouteTable {
    order: Vec<Pattern>,
    routes: HashMap<Pattern, Route>,
}

impl RouteTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `handler` to `pattern`.
    ///
    /// Registering a pattern that is already present (after normalization)
    /// replaces its handler in place; the pattern keeps a single slot in the
    /// ordered sequence.
    ///
    /// # Errors
    ///
    /// Returns a [`PatternError`] if the pattern is malformed.
    pub fn register<H: Handler>(
        &mut self,
        pattern: &str,
        handler: H,
    ) -> Result<&Pattern, PatternError> {
        let pattern = Pattern::parse(pattern)?;
        Ok(self.insert(pattern, Arc::new(handler)))
    }

    /// Bind an already shared handler to an already parsed pattern.
    pub fn insert(&mut self, pattern: Pattern, handler: Arc<dyn DynHandler>) -> &Pattern {
        if let Some(route) = self.routes.get_mut(&pattern) {
            route.handler = handler;
        } else {
            self.order.push(pattern.clone());
            self.order.sort_by(compare);
            self.routes.insert(
                pattern.clone(),
                Route {
                    pattern: pattern.clone(),
                    handler,
                },
            );
        }
        // The key was inserted above.
        &self.routes[&pattern].pattern
    }

    /// Exact-string lookup of the handler bound to `pattern`; no matching.
    ///
    /// The key is normalized the same way registration normalizes it, so
    /// `"/a"` and `"/a/"` find the same route.
    pub fn lookup(&self, pattern: &str) -> Option<&Arc<dyn DynHandler>> {
        let key = Pattern::normalize(pattern);
        self.routes.get(&*key).map(Route::handler)
    }

    /// Patterns in the order they are tried.
    pub fn ordered_patterns(&self) -> &[Pattern] {
        &self.order
    }

    /// Routes in the order they are tried.
    pub fn iter(&self) -> impl Iterator<Item = &Route> {
        self.order.iter().map(|pattern| &self.routes[pattern])
    }

    /// Routes whose pattern matches `path`, in priority order, with their captures.
    pub fn matches<'t>(&'t self, path: &'t str) -> impl Iterator<Item = (&'t Route, Params)> {
        self.iter().filter_map(move |route| {
            match_path(&route.pattern, path).map(|params| (route, params))
        })
    }

    /// Number of registered routes.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// True if no route is registered.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

impl fmt::Debug for RouteTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.order).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use junction_core::{Outcome, Request, RequestView, Response, handler_fn};

    fn names(table: &RouteTable) -> Vec<&str> {
        table.ordered_patterns().iter().map(Pattern::as_str).collect()
    }

    fn noop() -> impl Handler {
        handler_fn(|_req, _res| Outcome::Handled)
    }

    #[test]
    fn test_register_keeps_priority_order() {
        let mut table = RouteTable::new();
        table.register("/a/*", noop()).unwrap();
        table.register("*", noop()).unwrap();
        table.register("/a/b", noop()).unwrap();

        assert_eq!(names(&table), vec!["/a/b/", "/a/*/", "*"]);
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn test_reregister_overwrites_in_place() {
        let mut table = RouteTable::new();
        table.register("/a", handler_fn(|_req, res| res.write("first"))).unwrap();
        table.register("/a/", handler_fn(|_req, res| res.write("second"))).unwrap();

        assert_eq!(names(&table), vec!["/a/"]);
        assert_eq!(table.iter().count(), 1);
    }

    #[tokio::test]
    async fn test_lookup_returns_latest_handler() {
        let mut table = RouteTable::new();
        table.register("/a", handler_fn(|_req, res| res.write("first"))).unwrap();
        table.register("/a", handler_fn(|_req, res| res.write("second"))).unwrap();

        let handler = table.lookup("/a/").unwrap();
        let req: Request = http::Request::builder().uri("/a").body(Default::default()).unwrap();
        let view = RequestView::new(&req, "/a/", Params::new());
        let mut res = Response::new();
        handler.call_dyn(&view, &mut res).await.unwrap();

        assert_eq!(res.body(), b"second");
        assert!(table.lookup("/a").is_some());
        assert!(table.lookup("/b").is_none());
    }

    #[test]
    fn test_register_rejects_malformed() {
        let mut table = RouteTable::new();
        assert!(table.register("/a/:", noop()).is_err());
        assert!(table.is_empty());
    }

    #[test]
    fn test_matches_in_priority_order() {
        let mut table = RouteTable::new();
        table.register("*", noop()).unwrap();
        table.register("/a/:x", noop()).unwrap();
        table.register("/a/b", noop()).unwrap();
        table.register("/c", noop()).unwrap();

        let hits: Vec<_> = table
            .matches("/a/b")
            .map(|(route, params)| (route.pattern().as_str(), params.get("x").map(str::to_owned)))
            .collect();
        assert_eq!(
            hits,
            vec![
                ("/a/b/", None),
                ("/a/:x/", Some("b".to_owned())),
                ("*", None),
            ]
        );
    }
}
