#![allow(dead_code)]

use junction::{Dispatch, Response, Router, SharedRouter, testing::request};

// ============================================================================
// Dispatch helpers
// ============================================================================

pub async fn dispatch(router: &Router, path: &str) -> (Dispatch, Response) {
    let mut res = Response::new();
    let dispatch = router.route(&mut res, &request(path)).await.unwrap();
    (dispatch, res)
}

pub async fn dispatch_shared(router: &SharedRouter, path: &str) -> (Dispatch, Response) {
    let mut res = Response::new();
    let dispatch = router.route(&mut res, &request(path)).await.unwrap();
    (dispatch, res)
}

pub fn body(res: &Response) -> &str {
    std::str::from_utf8(res.body()).unwrap()
}

pub fn handled_by(dispatch: &Dispatch) -> Option<&str> {
    match dispatch {
        Dispatch::Handled(pattern) => Some(pattern.as_str()),
        _ => None,
    }
}
