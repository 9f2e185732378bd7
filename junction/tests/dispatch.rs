//! Dispatch behavior: interceptors, fall-through and precedence.

mod common;

use common::{body, dispatch, dispatch_shared, handled_by};
use junction::{
    Dispatch, DispatchError, Outcome, Router, SharedRouter,
    testing::{RecordingHandler, RecordingInterceptor},
};

#[tokio::test]
async fn test_nested_route_wins_over_earlier_prefix() {
    let wildcard = RecordingHandler::new().writing("wildcard");
    let exact = RecordingHandler::new().writing("exact");

    let mut router = Router::new();
    router.register("/a/*", wildcard.clone()).unwrap();
    router.register("/a/b/", exact.clone()).unwrap();

    let (outcome, res) = dispatch(&router, "/a/b/").await;
    assert_eq!(handled_by(&outcome), Some("/a/b/"));
    assert_eq!(body(&res), "exact");
    assert_eq!(wildcard.count(), 0);

    let (outcome, _) = dispatch(&router, "/a/c").await;
    assert_eq!(handled_by(&outcome), Some("/a/*/"));
}

#[tokio::test]
async fn test_declining_handler_falls_through() {
    let specific = RecordingHandler::declining().writing("specific,");
    let general = RecordingHandler::new().writing("general");

    let mut router = Router::new();
    router.register("/users/:id", specific.clone()).unwrap();
    router.register("*", general.clone()).unwrap();

    let (outcome, res) = dispatch(&router, "/users/7").await;
    assert_eq!(outcome, Dispatch::Handled(junction::Pattern::catch_all()));
    assert_eq!(body(&res), "specific,general");

    let hit = &specific.hits()[0];
    assert_eq!(hit.pattern, "/users/:id/");
    assert_eq!(hit.params.get("id"), Some("7"));
    assert!(general.hits()[0].params.is_empty());
}

#[tokio::test]
async fn test_all_declining_is_unhandled() {
    let first = RecordingHandler::declining();
    let second = RecordingHandler::declining();

    let mut router = Router::new();
    router.register("/a/:x", first.clone()).unwrap();
    router.register("/a/*", second.clone()).unwrap();

    let (outcome, res) = dispatch(&router, "/a/b").await;
    assert_eq!(outcome, Dispatch::Unhandled);
    assert!(!res.is_written());
    assert_eq!((first.count(), second.count()), (1, 1));
}

#[tokio::test]
async fn test_no_match_is_unhandled() {
    let mut router = Router::new();
    router.register("/only", RecordingHandler::new()).unwrap();

    let (outcome, res) = dispatch(&router, "/other").await;
    assert_eq!(outcome, Dispatch::Unhandled);
    assert!(!res.is_written());
}

#[tokio::test]
async fn test_halting_interceptor_blocks_every_route() {
    let passing = RecordingInterceptor::new();
    let halting = RecordingInterceptor::halting();
    let after = RecordingInterceptor::new();
    let route = RecordingHandler::new();

    let mut router = Router::new();
    router.register_interceptor(passing.clone());
    router.register_interceptor(halting.clone());
    router.register_interceptor(after.clone());
    router.register("*", route.clone()).unwrap();

    for path in ["/", "/a", "/a/b/c"] {
        let (outcome, _) = dispatch(&router, path).await;
        assert_eq!(outcome, Dispatch::Intercepted(1));
    }

    assert_eq!(passing.paths(), vec!["/", "/a", "/a/b/c"]);
    assert_eq!(halting.count(), 3);
    assert_eq!(after.count(), 0);
    assert_eq!(route.count(), 0);
}

#[tokio::test]
async fn test_reregistration_replaces_handler() {
    let old = RecordingHandler::new().writing("old");
    let new = RecordingHandler::new().writing("new");

    let mut router = Router::new();
    router.register("/page", old.clone()).unwrap();
    router.register("page/", new.clone()).unwrap();

    assert_eq!(router.list_patterns().len(), 1);
    assert!(router.lookup("/page").is_some());

    let (_, res) = dispatch(&router, "/page").await;
    assert_eq!(body(&res), "new");
    assert_eq!(old.count(), 0);
}

#[tokio::test]
async fn test_registration_order_does_not_matter() {
    let patterns = ["*", "/", "/api/*", "/api/:version/users", "/api/v1/users"];

    let mut forward = Router::new();
    for pattern in patterns {
        forward.register(pattern, RecordingHandler::new()).unwrap();
    }
    let mut backward = Router::new();
    for pattern in patterns.iter().rev() {
        backward.register(pattern, RecordingHandler::new()).unwrap();
    }

    assert_eq!(forward.list_patterns(), backward.list_patterns());

    for path in ["/", "/api/v1/users", "/api/v2/users", "/api/x", "/elsewhere"] {
        let (a, _) = dispatch(&forward, path).await;
        let (b, _) = dispatch(&backward, path).await;
        assert_eq!(a, b, "{path}");
    }

    let (outcome, _) = dispatch(&forward, "/api/v1/users").await;
    assert_eq!(handled_by(&outcome), Some("/api/v1/users/"));
    let (outcome, _) = dispatch(&forward, "/api/v2/users").await;
    assert_eq!(handled_by(&outcome), Some("/api/:version/users/"));
}

#[tokio::test]
async fn test_handler_error_aborts_dispatch() {
    let fallback = RecordingHandler::new();

    let mut router = Router::new();
    router
        .handle_fn("/fail", |_req, _res| -> Result<Outcome, std::io::Error> {
            Err(std::io::Error::other("backend down"))
        })
        .unwrap();
    router.register("*", fallback.clone()).unwrap();

    let mut res = junction::Response::new();
    let err = router
        .route(&mut res, &junction::testing::request("/fail"))
        .await
        .unwrap_err();

    assert!(matches!(err, DispatchError::Handler { ref pattern, .. } if pattern == "/fail/"));
    assert_eq!(err.inner().to_string(), "backend down");
    assert_eq!(fallback.count(), 0);
}

#[tokio::test]
async fn test_shared_router_picks_up_new_routes() {
    let shared = SharedRouter::from(
        Router::builder()
            .route("*", RecordingHandler::new().writing("fallback"))
            .build()
            .unwrap(),
    );

    let (_, res) = dispatch_shared(&shared, "/new").await;
    assert_eq!(body(&res), "fallback");

    shared
        .register("/new", RecordingHandler::new().writing("fresh"))
        .unwrap();

    let (outcome, res) = dispatch_shared(&shared, "/new").await;
    assert_eq!(handled_by(&outcome), Some("/new/"));
    assert_eq!(body(&res), "fresh");
}
