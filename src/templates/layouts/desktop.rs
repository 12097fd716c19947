use crate::messaging::{default_chat_message, whatsapp_url};
use crate::notify::Notification;
use crate::templates::components::toast;
use maud::{html, Markup, DOCTYPE};

/// Dealer identity shown in the header, footer and chat button.
pub struct SiteChrome<'a> {
    pub dealer_name: &'a str,
    pub dealer_phone: &'a str,
    /// Toasts shown once when the page loads.
    pub notices: Vec<Notification>,
}

pub fn desktop_layout(title: &str, chrome: &SiteChrome<'_>, content: Markup) -> Markup {
    let year = chrono::Local::now().format("%Y").to_string();
    let chat_href = whatsapp_url(chrome.dealer_phone, &default_chat_message(chrome.dealer_name));

    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " | " (chrome.dealer_name) }
                link rel="stylesheet" href="/static/css/main.css";
                link rel="stylesheet" href="https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.1/css/all.min.css";
                script src="https://unpkg.com/htmx.org@1.9.12" defer {}
                script src="/static/js/site.js" defer {}
                script src="/static/js/lazy.js" defer {}
            }
            body {
                header class="header" {
                    a href="/" class="logo" { (chrome.dealer_name) }
                    nav class="nav-menu" {
                        ul {
                            li { a href="/" { "Home" } }
                            li { a href="/inventory" { "Inventory" } }
                            li { a href="/service" { "Service" } }
                            li { a href="/rentals" { "Rentals" } }
                            li { a href="/contact" { "Contact" } }
                        }
                    }
                }

                div id="notifications" aria-live="polite" {
                    @for note in &chrome.notices {
                        (toast(note))
                    }
                }

                (content)

                a class="whatsapp-float" href=(chat_href) target="_blank" rel="noopener" aria-label="Chat on WhatsApp" {
                    i class="fab fa-whatsapp" {}
                }

                footer class="footer" {
                    p { "© " span id="currentYear" { (year) } " " (chrome.dealer_name) ". All rights reserved." }
                }
            }
        }
    }
}
