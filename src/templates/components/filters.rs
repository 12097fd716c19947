use crate::filters::{CategoryFilter, FilterCriteria};
use maud::{html, Markup};
use std::time::Duration;

pub const PRICE_BANDS: &[(&str, &str)] = &[
    ("all", "Any Price"),
    ("0-10000", "Under $10,000"),
    ("10000-20000", "$10,000 - $20,000"),
    ("20000-50000", "$20,000 - $50,000"),
    ("50000-", "$50,000+"),
];

pub const CONDITIONS: &[(&str, &str)] = &[("all", "Any Condition"), ("New", "New"), ("Used", "Used")];

pub const BODY_TYPES: &[(&str, &str)] = &[
    ("all", "All Types"),
    ("Sedan", "Sedan"),
    ("SUV", "SUV"),
    ("Truck", "Truck"),
    ("Coupe", "Coupe"),
    ("Hatchback", "Hatchback"),
    ("Van", "Van"),
];

const RESULTS_TARGET: &str = "#inventory-results";

/// The filter panel. Every control reports which criterion it changed via
/// the `event` value so the server can apply exactly that update.
pub fn filter_controls(criteria: &FilterCriteria, debounce: Duration) -> Markup {
    let price = criteria.price.as_query();
    let condition = criteria.condition.as_deref().unwrap_or("all");
    let body_type = criteria.body_type.as_deref().unwrap_or("all");
    let search_trigger = format!("input changed delay:{}ms, search", debounce.as_millis());

    html! {
        form id="filter-form" class="filters" onsubmit="return false;" {
            (category_buttons(criteria.category, false))

            div class="filter-selects" {
                select
                    id="price-filter"
                    name="price"
                    class="form-select"
                    hx-get="/inventory/results"
                    hx-trigger="change"
                    hx-include="#filter-form"
                    hx-vals=r#"{"event": "price"}"#
                    hx-target=(RESULTS_TARGET)
                    hx-swap="outerHTML"
                {
                    (options(PRICE_BANDS, &price))
                }

                select
                    id="condition-filter"
                    name="condition"
                    class="form-select"
                    hx-get="/inventory/results"
                    hx-trigger="change"
                    hx-include="#filter-form"
                    hx-vals=r#"{"event": "condition"}"#
                    hx-target=(RESULTS_TARGET)
                    hx-swap="outerHTML"
                {
                    (options(CONDITIONS, condition))
                }

                select
                    id="type-filter"
                    name="type"
                    class="form-select"
                    hx-get="/inventory/results"
                    hx-trigger="change"
                    hx-include="#filter-form"
                    hx-vals=r#"{"event": "type"}"#
                    hx-target=(RESULTS_TARGET)
                    hx-swap="outerHTML"
                {
                    (options(BODY_TYPES, body_type))
                }

                input
                    id="search-cars"
                    type="search"
                    name="search"
                    class="form-input"
                    placeholder="Search make, model, year..."
                    value=(criteria.search)
                    autocomplete="off"
                    hx-get="/inventory/results"
                    hx-trigger=(search_trigger)
                    hx-include="#filter-form"
                    hx-vals=r#"{"event": "search"}"#
                    hx-target=(RESULTS_TARGET)
                    hx-swap="outerHTML";

                button
                    id="reset-filters"
                    type="button"
                    class="btn btn-secondary"
                    hx-get="/inventory/reset"
                    hx-target="#inventory-app"
                    hx-swap="outerHTML"
                    hx-push-url="/inventory"
                {
                    "Reset Filters"
                }
            }
        }
    }
}

/// Mutually exclusive category buttons plus the hidden field carrying the
/// active tag. Sent out-of-band after a category click.
pub fn category_buttons(active: CategoryFilter, oob: bool) -> Markup {
    html! {
        div id="category-buttons" class="filter-buttons" hx-swap-oob=[oob.then_some("true")] {
            input type="hidden" name="category" value=(active.tag());
            @for cat in CategoryFilter::ALL_TAGS {
                button.filter-btn.active[cat == active]
                    type="button"
                    data-filter=(cat.tag())
                    hx-get="/inventory/results"
                    hx-include="#filter-form"
                    hx-vals=(format!(r#"{{"event": "category", "value": "{}"}}"#, cat.tag()))
                    hx-target=(RESULTS_TARGET)
                    hx-swap="outerHTML"
                {
                    (cat.label())
                }
            }
        }
    }
}

fn options(choices: &[(&str, &str)], selected: &str) -> Markup {
    html! {
        @for (value, label) in choices {
            option value=(value) selected[*value == selected] { (label) }
        }
    }
}
