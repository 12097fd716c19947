// templates/pages/home.rs

use crate::render::{LazyImages, ResultsVm};
use crate::templates::{
    components::{card, results::lazy_manifest, vehicle_card},
    desktop_layout, SiteChrome,
};
use maud::{html, Markup};

pub fn home_page(chrome: &SiteChrome<'_>, featured: &ResultsVm, lazy: &LazyImages) -> Markup {
    desktop_layout(
        "Home",
        chrome,
        html! {
            section class="hero" {
                h1 { "Quality vehicles, honest prices" }
                p class="lead" { "New, used and imported cars ready to drive away." }
                a href="/inventory" class="btn btn-primary btn-large" { "Browse Inventory" }
            }

            section class="featured-cars" {
                h2 { "Featured Vehicles" }
                div id="featured-cars-container" class="cars-grid" {
                    @for c in &featured.cards {
                        (vehicle_card(c))
                    }
                }
                (lazy_manifest(lazy))
            }

            (card(&format!("Why buy from {}", chrome.dealer_name), html! {
                p { "We inspect every vehicle, handle imports end to end, and service what we sell." }
                a href="/contact" { "Talk to our team" }
            }))
        },
    )
}
