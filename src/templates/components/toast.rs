use crate::notify::{Notification, DISMISS_AFTER_MS};
use maud::{html, Markup};

pub fn toast(note: &Notification) -> Markup {
    html! {
        div
            class={ "notification notification-" (note.kind.as_str()) }
            style={ "background-color: " (note.kind.color()) ";" }
            role="status"
            data-dismiss-ms=(DISMISS_AFTER_MS)
        {
            (note.message)
        }
    }
}

/// Appends the toast to `#notifications` from inside any htmx response.
pub fn toast_oob(note: &Notification) -> Markup {
    html! {
        div hx-swap-oob="beforeend:#notifications" {
            (toast(note))
        }
    }
}
