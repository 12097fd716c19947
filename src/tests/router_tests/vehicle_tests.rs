// src/tests/router_tests/vehicle_tests.rs

use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{body_string, get, test_state};

#[test]
fn vehicle_page_shows_details_and_contact_links() {
    let state = test_state();
    let resp = handle(get("/vehicles/1"), &state).unwrap();

    assert_eq!(resp.status(), 200);
    let body = body_string(resp);
    assert!(body.contains("2021 Toyota Camry"));
    assert!(body.contains("$28,000"));
    assert!(body.contains("Apple CarPlay"));
    assert!(body.contains("https://wa.me/233244964880?text="));
    assert!(body.contains("/vehicles/1/quote"));
}

#[test]
fn unknown_vehicle_is_not_found() {
    let state = test_state();

    assert!(matches!(handle(get("/vehicles/999"), &state), Err(ServerError::NotFound)));
    assert!(matches!(
        handle(get("/vehicles/999/quote"), &state),
        Err(ServerError::NotFound)
    ));
}

#[test]
fn quote_page_renders_the_form() {
    let state = test_state();
    let body = body_string(handle(get("/vehicles/3/quote"), &state).unwrap());

    assert!(body.contains("quote-form"));
    assert!(body.contains("2020 Ford F-150"));
}

#[test]
fn unknown_routes_are_not_found() {
    let state = test_state();
    assert!(matches!(handle(get("/admin"), &state), Err(ServerError::NotFound)));
}
