use crate::format::{format_currency, format_mileage, format_phone_number};
use crate::forms::{FieldErrors, FormKind, FormValues};
use crate::inventory::VehicleRecord;
use crate::messaging::{tel_href, vehicle_inquiry_url};
use crate::templates::components::form::FormClock;
use crate::templates::components::form_view;
use crate::templates::{desktop_layout, SiteChrome};
use maud::{html, Markup};

const GALLERY_THUMBNAILS: usize = 4;

pub fn vehicle_page(chrome: &SiteChrome<'_>, car: &VehicleRecord) -> Markup {
    let mileage = match car.mileage() {
        Some(m) => format!("{} miles", format_mileage(m)),
        None => "New".to_string(),
    };
    let phone = car.contact_phone.as_deref().unwrap_or(chrome.dealer_phone);

    let specs: [(&str, String); 6] = [
        ("Condition", car.condition.clone()),
        ("Mileage", mileage),
        ("Transmission", car.transmission.clone().unwrap_or_default()),
        ("Fuel Type", car.fuel_type.clone().unwrap_or_default()),
        ("Engine", car.engine.clone().unwrap_or_default()),
        ("Color", car.color.clone().unwrap_or_default()),
    ];

    desktop_layout(
        &car.title(),
        chrome,
        html! {
            main class="container car-details-page" {
                div class="car-gallery" {
                    div class="main-image" {
                        img src=(car.primary_image()) alt={ (car.make) " " (car.model) };
                    }
                    div class="thumbnails" {
                        @for (i, src) in car.images.iter().skip(1).take(GALLERY_THUMBNAILS).enumerate() {
                            img src=(src) alt={ (car.make) " " (car.model) " - Image " (i + 2) } class="thumbnail";
                        }
                    }
                }

                div class="car-info" {
                    h1 { (car.title()) }
                    div class="car-price-large" { (format_currency(car.price)) }

                    div class="car-specs-grid" {
                        @for (label, value) in &specs {
                            @if !value.is_empty() {
                                div class="spec-item-detail" {
                                    span { (label) ":" }
                                    span { (value) }
                                }
                            }
                        }
                    }

                    div class="car-description-full" {
                        h3 { "Description" }
                        p { (car.description) }
                    }

                    @if !car.features.is_empty() {
                        div class="car-features" {
                            h3 { "Features" }
                            ul class="features-list" {
                                @for feature in &car.features {
                                    li { i class="fas fa-check" {} " " (feature) }
                                }
                            }
                        }
                    }

                    div class="car-actions-modal" {
                        a class="btn btn-primary btn-large" href=(tel_href(phone)) {
                            i class="fas fa-phone" {} " Call " (format_phone_number(phone))
                        }
                        a class="btn btn-whatsapp btn-large" href=(vehicle_inquiry_url(car, chrome.dealer_phone)) target="_blank" rel="noopener" {
                            i class="fab fa-whatsapp" {} " WhatsApp Inquiry"
                        }
                        a class="btn btn-secondary btn-large" href={ "/vehicles/" (car.id) "/quote" } {
                            i class="fas fa-file-invoice-dollar" {} " Request Quote"
                        }
                    }
                }
            }
        },
    )
}

pub fn quote_page(
    chrome: &SiteChrome<'_>,
    car: &VehicleRecord,
    values: &FormValues,
    errors: &FieldErrors,
    clock: FormClock,
) -> Markup {
    desktop_layout(
        "Request a Quote",
        chrome,
        html! {
            main class="container narrow" {
                h1 { "Request Quote for " (car.title()) }
                p class="lead" { (format_currency(car.price)) }
                (quote_form(car, values, errors, clock))
            }
        },
    )
}

pub fn quote_form(
    car: &VehicleRecord,
    values: &FormValues,
    errors: &FieldErrors,
    clock: FormClock,
) -> Markup {
    form_view(
        FormKind::Quote,
        &format!("/vehicles/{}/quote", car.id),
        values,
        errors,
        clock,
    )
}
