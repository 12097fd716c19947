// src/tests/router_tests/inventory_tests.rs

use crate::config::SiteConfig;
use crate::inventory::InventoryStore;
use crate::router::handle;
use crate::state::AppState;
use crate::tests::utils::{body_string, get, get_htmx, test_state};
use scraper::{Html, Selector};
use std::time::Duration;

#[test]
fn home_shows_featured_vehicles() {
    let state = test_state();
    let resp = handle(get("/"), &state).unwrap();

    assert_eq!(resp.status(), 200);
    let body = body_string(resp);
    assert!(body.contains("Featured Vehicles"));
    assert!(body.contains("2021 Toyota Camry"));
    assert!(body.contains("2022 Toyota RAV4"));
    assert!(!body.contains("2018 Honda Civic"));
}

#[test]
fn inventory_page_lists_everything_by_default() {
    let state = test_state();
    let body = body_string(handle(get("/inventory"), &state).unwrap());

    assert!(body.contains("<html"));
    assert!(body.contains("5 vehicles found"));
    assert!(body.contains("lazy-manifest"));
}

#[test]
fn inventory_page_honours_query_criteria() {
    let state = test_state();
    let body = body_string(handle(get("/inventory?category=used"), &state).unwrap());

    assert!(body.contains("3 vehicles found"));
    let doc = Html::parse_document(&body);
    let active = Selector::parse("#category-buttons button.active").unwrap();
    let tags: Vec<_> = doc
        .select(&active)
        .filter_map(|b| b.value().attr("data-filter"))
        .collect();
    assert_eq!(tags, vec!["used"]);
}

#[test]
fn category_click_returns_a_fragment() {
    let state = test_state();
    let resp = handle(
        get_htmx("/inventory/results?category=all&event=category&value=used"),
        &state,
    )
    .unwrap();

    assert_eq!(resp.headers().get("HX-Push-Url").unwrap(), "/inventory?category=used");
    let body = body_string(resp);
    assert!(!body.contains("<html"));
    assert!(body.contains("3 vehicles found"));
    assert!(body.contains(r#"hx-swap-oob="true""#));
}

#[test]
fn select_change_keeps_the_other_criteria() {
    let state = test_state();
    let resp = handle(
        get_htmx("/inventory/results?category=used&event=price&price=10000-20000"),
        &state,
    )
    .unwrap();

    assert_eq!(
        resp.headers().get("HX-Push-Url").unwrap(),
        "/inventory?category=used&price=10000-20000"
    );
    let body = body_string(resp);
    assert!(body.contains("1 vehicle found"));
    assert!(body.contains("C300"));
    assert!(!body.contains(r#"hx-swap-oob="true""#));
}

#[test]
fn search_narrows_results() {
    let state = test_state();
    let body = body_string(
        handle(get_htmx("/inventory/results?event=search&search=honda"), &state).unwrap(),
    );

    assert!(body.contains("1 vehicle found"));
    assert!(body.contains("Civic"));
}

#[test]
fn search_without_matches_shows_the_empty_state() {
    let state = test_state();
    let body = body_string(
        handle(get_htmx("/inventory/results?event=search&search=zzz"), &state).unwrap(),
    );

    assert!(body.contains("0 vehicles found"));
    assert!(body.contains("No vehicles found"));
    assert!(body.contains("reset-filters-view"));
}

#[test]
fn reset_restores_the_full_inventory() {
    let state = test_state();
    let resp = handle(
        get_htmx("/inventory/reset?category=used&search=honda"),
        &state,
    )
    .unwrap();

    assert_eq!(resp.headers().get("HX-Push-Url").unwrap(), "/inventory");
    let body = body_string(resp);
    assert!(body.contains("5 vehicles found"));

    let doc = Html::parse_fragment(&body);
    let active = Selector::parse("#category-buttons button.active").unwrap();
    let tags: Vec<_> = doc
        .select(&active)
        .filter_map(|b| b.value().attr("data-filter"))
        .collect();
    assert_eq!(tags, vec!["all"]);

    let search = Selector::parse("#search-cars").unwrap();
    let input = doc.select(&search).next().unwrap();
    assert_eq!(input.value().attr("value"), Some(""));
}

#[test]
fn failed_inventory_load_warns_visitors() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.json");
    let store = InventoryStore::load_or_empty(missing.to_str().unwrap(), Duration::from_secs(1));
    let state = AppState::new(SiteConfig::default(), store);

    let body = body_string(handle(get("/inventory"), &state).unwrap());

    assert!(body.contains("0 vehicles found"));
    assert!(body.contains("Our inventory is temporarily unavailable"));
}

#[test]
fn filter_fragments_carry_no_toasts() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.json");
    let store = InventoryStore::load_or_empty(missing.to_str().unwrap(), Duration::from_secs(1));
    let state = AppState::new(SiteConfig::default(), store);

    let body = body_string(
        handle(get_htmx("/inventory/results?event=condition&condition=New"), &state).unwrap(),
    );

    assert!(body.contains("0 vehicles found"));
    assert!(!body.contains("notifications"));
    assert!(!body.contains("temporarily unavailable"));
}
