use crate::filters::FilterCriteria;
use crate::render::{LazyImages, ResultsVm};
use crate::templates::components::{filter_controls, results_fragment};
use crate::templates::{desktop_layout, SiteChrome};
use maud::{html, Markup};
use std::time::Duration;

pub struct InventoryVm<'a> {
    pub criteria: &'a FilterCriteria,
    pub results: ResultsVm,
    pub lazy: LazyImages,
    pub search_debounce: Duration,
}

pub fn inventory_page(chrome: &SiteChrome<'_>, vm: &InventoryVm<'_>) -> Markup {
    desktop_layout(
        "Inventory",
        chrome,
        html! {
            main class="container" {
                h1 { "Our Inventory" }
                (inventory_app(vm))
            }
        },
    )
}

/// Filter panel and results together; the unit swapped back in on reset.
pub fn inventory_app(vm: &InventoryVm<'_>) -> Markup {
    html! {
        div id="inventory-app" {
            (filter_controls(vm.criteria, vm.search_debounce))
            (results_fragment(&vm.results, &vm.lazy))
        }
    }
}

/// htmx response for a filter gesture: the new results plus the
/// out-of-band category buttons when they changed.
pub fn results_update(vm: &InventoryVm<'_>, oob: Option<Markup>) -> Markup {
    html! {
        (results_fragment(&vm.results, &vm.lazy))
        @if let Some(extra) = oob {
            (extra)
        }
    }
}
