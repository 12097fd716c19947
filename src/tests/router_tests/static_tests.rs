// src/tests/router_tests/static_tests.rs

use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{get, test_state};

#[test]
fn serves_stylesheets() {
    let state = test_state();
    let resp = handle(get("/static/css/main.css"), &state).unwrap();

    assert_eq!(resp.status(), 200);
    assert_eq!(resp.headers().get("Content-Type").unwrap(), "text/css; charset=utf-8");
}

#[test]
fn refuses_to_leave_the_static_dir() {
    let state = test_state();

    assert!(matches!(
        handle(get("/static/../Cargo.toml"), &state),
        Err(ServerError::NotFound)
    ));
    assert!(matches!(
        handle(get("/static/css/missing.css"), &state),
        Err(ServerError::NotFound)
    ));
}
