use maud::{html, Markup};

pub mod error;
pub mod filters;
pub mod form;
pub mod results;
pub mod toast;
pub mod vehicle_card;

pub use error::html_error_response;
pub use filters::filter_controls;
pub use form::form_view;
pub use results::results_fragment;
pub use toast::{toast, toast_oob};
pub use vehicle_card::vehicle_card;

pub fn card(title: &str, body: Markup) -> Markup {
    html! {
        div class="card" {
            h2 { (title) }
            div class="card-body" {
                (body)
            }
        }
    }
}
