use crate::render::{LazyImages, ResultsVm};
use crate::templates::components::vehicle_card;
use maud::{html, Markup, PreEscaped};

pub const RESULTS_ID: &str = "inventory-results";

/// Result grid, count label and the lazy-image manifest for the cards in it.
pub fn results_fragment(vm: &ResultsVm, lazy: &LazyImages) -> Markup {
    html! {
        section id=(RESULTS_ID) class="inventory-results" {
            p id="inventory-count" class="inventory-count" { (vm.count_label) }

            div id="inventory-container" class="cars-grid" {
                @if vm.is_empty() {
                    (empty_state())
                } @else {
                    @for card in &vm.cards {
                        (vehicle_card(card))
                    }
                }
            }

            (lazy_manifest(lazy))
        }
    }
}

/// JSON handed to `lazy.js`; nothing is emitted when no image was registered.
pub fn lazy_manifest(lazy: &LazyImages) -> Markup {
    html! {
        @if !lazy.images.is_empty() {
            script type="application/json" class="lazy-manifest" {
                (PreEscaped(escape_script_json(&lazy.manifest_json())))
            }
        }
    }
}

pub fn empty_state() -> Markup {
    html! {
        div class="no-results" {
            i class="fas fa-car fa-4x" {}
            h3 { "No vehicles found" }
            p { "Try adjusting your search filters" }
            button
                id="reset-filters-view"
                type="button"
                class="btn btn-primary"
                hx-get="/inventory/reset"
                hx-target="#inventory-app"
                hx-swap="outerHTML"
                hx-push-url="/inventory"
            {
                "Reset All Filters"
            }
        }
    }
}

// `</script>` inside a JSON string would end the element early.
fn escape_script_json(json: &str) -> String {
    json.replace("</", "<\\/")
}
