use crate::forms::{FieldErrors, FormKind, FormValues, Submission};
use crate::templates::components::form::FormClock;
use crate::templates::components::{form_view, toast_oob};
use crate::templates::{desktop_layout, SiteChrome};
use maud::{html, Markup};

/// Where each site form posts to.
pub fn form_action(kind: FormKind) -> String {
    match kind {
        FormKind::Contact => "/contact".to_string(),
        FormKind::ServiceBooking => "/service".to_string(),
        FormKind::RentalSearch => "/rentals".to_string(),
        other => format!("/forms/{}", other.id()),
    }
}

pub fn form_page(
    chrome: &SiteChrome<'_>,
    kind: FormKind,
    values: &FormValues,
    errors: &FieldErrors,
    clock: FormClock,
) -> Markup {
    desktop_layout(
        kind.title(),
        chrome,
        html! {
            main class="container narrow" {
                h1 { (kind.title()) }
                (form_view(kind, &form_action(kind), values, errors, clock))
            }
        },
    )
}

/// Replaces a submitted form for htmx clients: confirmation, a fallback
/// link in case the popup was blocked, and the success toast.
pub fn submitted_fragment(submission: &Submission) -> Markup {
    html! {
        div class="form-submitted fade-in" {
            h3 { "Thanks! Your message is ready." }
            p {
                "WhatsApp should open in a new tab. If it didn't, "
                a href=(submission.whatsapp_url) target="_blank" rel="noopener" { "open it here" }
                "."
            }
        }
        (toast_oob(&submission.notification))
    }
}
