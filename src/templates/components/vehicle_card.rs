use crate::render::VehicleCard;
use maud::{html, Markup};

pub fn vehicle_card(card: &VehicleCard) -> Markup {
    html! {
        div class="car-card fade-in" data-id=(card.id) {
            div class="car-image-container" {
                img
                    id=(card.image_id)
                    src=(card.placeholder_src)
                    data-src=(card.image_src)
                    alt=(card.alt)
                    class="car-image lazy-image"
                    loading="lazy";
                @if card.featured {
                    span class="featured-badge" { "Featured" }
                }
                @if card.imported {
                    span class="imported-badge" { "Imported" }
                }
            }
            div class="car-details" {
                div class="car-title" {
                    h3 class="car-name" { (card.title) }
                    span class="car-price" { (card.price) }
                }
                p class="car-specs" { (card.specs) }
                p class="car-description" { (card.description) }
                div class="car-actions" {
                    @if let Some(href) = &card.call_href {
                        a class="btn btn-primary btn-call" href=(href) {
                            i class="fas fa-phone" {} " Call Now"
                        }
                    }
                    a class="btn btn-whatsapp btn-inquire" href=(card.whatsapp_href) target="_blank" rel="noopener" {
                        i class="fab fa-whatsapp" {} " WhatsApp"
                    }
                    a class="btn btn-secondary btn-details" href=(card.details_href) {
                        i class="fas fa-info-circle" {} " Details"
                    }
                }
            }
        }
    }
}
