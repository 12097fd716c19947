// src/tests/router_tests/form_tests.rs

use crate::router::handle;
use crate::tests::utils::{body_string, get, post_form, test_state};

const CONTACT: &str =
    "name=Ama+Mensah&phone=0244964880&email=ama%40example.com&subject=sales&message=Is+the+Camry+available%3F";

#[test]
fn form_pages_render() {
    let state = test_state();
    for (uri, id) in [
        ("/contact", "contact-form"),
        ("/service", "service-booking-form"),
        ("/rentals", "rental-search-form"),
    ] {
        let resp = handle(get(uri), &state).unwrap();
        assert_eq!(resp.status(), 200);
        assert!(body_string(resp).contains(id), "{uri} should render {id}");
    }
}

#[test]
fn valid_contact_redirects_to_whatsapp() {
    let state = test_state();
    let resp = handle(post_form("/contact", CONTACT, false), &state).unwrap();

    assert_eq!(resp.status(), 303);
    let location = resp.headers().get("Location").unwrap().to_str().unwrap();
    assert!(location.starts_with("https://wa.me/233244964880?text=New+Contact+Form+Submission"));
}

#[test]
fn invalid_contact_comes_back_with_errors() {
    let state = test_state();
    let resp = handle(post_form("/contact", "name=A", true), &state).unwrap();

    assert_eq!(resp.status(), 422);
    let body = body_string(resp);
    assert!(!body.contains("<html"));
    assert!(body.contains("Minimum 2 characters required"));
    assert!(body.contains("This field is required"));
}

#[test]
fn invalid_contact_without_htmx_gets_the_full_page() {
    let state = test_state();
    let resp = handle(post_form("/contact", "", false), &state).unwrap();

    assert_eq!(resp.status(), 422);
    assert!(body_string(resp).contains("<html"));
}

#[test]
fn htmx_quote_confirms_and_links_to_the_listing_line() {
    let state = test_state();
    let resp = handle(
        post_form(
            "/vehicles/2/quote",
            "name=Kofi&phone=0244964880&email=kofi%40example.com&financing=yes",
            true,
        ),
        &state,
    )
    .unwrap();

    assert_eq!(resp.status(), 200);
    assert_eq!(resp.headers().get("HX-Trigger-After-Settle").unwrap(), "formSubmitted");
    let body = body_string(resp);
    assert!(body.contains("Quote request submitted successfully!"));
    assert!(body.contains("https://wa.me/0201234567?text=New+Quote+Request"));
}

#[test]
fn generic_forms_forward_whatever_was_posted() {
    let state = test_state();
    let resp = handle(post_form("/forms/newsletter", "email=a%40b.co", false), &state).unwrap();

    assert_eq!(resp.status(), 303);
    let location = resp.headers().get("Location").unwrap().to_str().unwrap();
    assert!(location.contains("text=Form+Submission"));
}
