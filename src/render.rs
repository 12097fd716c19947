// src/render.rs
//
// Pure projection from a filtered view to display units. Markup lives in
// templates::components; nothing here touches HTML.

use crate::filters::FilteredView;
use crate::format::{format_currency, format_mileage, truncate_description};
use crate::inventory::VehicleRecord;
use crate::messaging::{tel_href, vehicle_inquiry_url};
use serde::Serialize;

pub const PLACEHOLDER_SRC: &str = "/static/images/placeholder.svg";
pub const DESCRIPTION_PREVIEW_CHARS: usize = 100;
const SPEC_SEPARATOR: &str = " • ";

/// Capability for deferring work until an element is about to scroll into view.
pub trait VisibilityObserver {
    fn observe(&mut self, element_id: &str, deferred_src: &str);
}

/// One registration per lazily loaded image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LazyImage {
    pub id: String,
    pub src: String,
}

/// Browser-side implementation: collected registrations become a JSON
/// manifest read by `static/js/lazy.js`.
#[derive(Debug, Clone, Serialize)]
pub struct LazyImages {
    #[serde(rename = "rootMargin")]
    pub root_margin: String,
    pub images: Vec<LazyImage>,
}

impl LazyImages {
    pub fn new(root_margin: impl Into<String>) -> Self {
        Self {
            root_margin: root_margin.into(),
            images: Vec::new(),
        }
    }

    pub fn manifest_json(&self) -> String {
        // Vec<struct of Strings> cannot fail to serialize
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}

impl VisibilityObserver for LazyImages {
    fn observe(&mut self, element_id: &str, deferred_src: &str) {
        self.images.push(LazyImage {
            id: element_id.to_string(),
            src: deferred_src.to_string(),
        });
    }
}

/// Display unit for one listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VehicleCard {
    pub id: String,
    pub image_id: String,
    pub title: String,
    pub alt: String,
    pub image_src: String,
    pub placeholder_src: &'static str,
    pub price: String,
    pub specs: String,
    pub description: String,
    pub featured: bool,
    pub imported: bool,
    pub call_href: Option<String>,
    pub whatsapp_href: String,
    pub details_href: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultsVm {
    pub cards: Vec<VehicleCard>,
    pub count: usize,
    pub count_label: String,
}

impl ResultsVm {
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

pub fn count_label(n: usize) -> String {
    if n == 1 {
        format!("{n} vehicle found")
    } else {
        format!("{n} vehicles found")
    }
}

/// year • transmission • fuel • mileage-or-New • condition, skipping blanks.
pub fn specs_line(car: &VehicleRecord) -> String {
    let mileage = match car.mileage() {
        Some(m) => format!("{} mi", format_mileage(m)),
        None => "New".to_string(),
    };

    [
        Some(car.year.to_string()),
        car.transmission.clone(),
        car.fuel_type.clone(),
        Some(mileage),
        Some(car.condition.clone()),
    ]
    .into_iter()
    .flatten()
    .filter(|part| !part.trim().is_empty())
    .collect::<Vec<_>>()
    .join(SPEC_SEPARATOR)
}

pub fn vehicle_card(car: &VehicleRecord, dealer_phone: &str) -> VehicleCard {
    VehicleCard {
        id: car.id.clone(),
        image_id: format!("car-image-{}", dom_id(&car.id)),
        title: car.title(),
        alt: format!("{} {}", car.make, car.model),
        image_src: car.primary_image().to_string(),
        placeholder_src: PLACEHOLDER_SRC,
        price: format_currency(car.price),
        specs: specs_line(car),
        description: truncate_description(&car.description, DESCRIPTION_PREVIEW_CHARS),
        featured: car.featured,
        imported: car.imported,
        call_href: car.contact_phone.as_deref().map(tel_href),
        whatsapp_href: vehicle_inquiry_url(car, dealer_phone),
        details_href: format!("/vehicles/{}", car.id),
    }
}

fn dom_id(raw: &str) -> String {
    raw.chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
        .collect()
}

/// Builds the cards in view order and registers each card image exactly once.
pub fn project(
    view: &FilteredView<'_>,
    dealer_phone: &str,
    observer: &mut dyn VisibilityObserver,
) -> ResultsVm {
    project_records(view.iter(), dealer_phone, observer)
}

pub fn project_records<'a>(
    records: impl IntoIterator<Item = &'a VehicleRecord>,
    dealer_phone: &str,
    observer: &mut dyn VisibilityObserver,
) -> ResultsVm {
    let cards: Vec<VehicleCard> = records
        .into_iter()
        .map(|car| {
            let card = vehicle_card(car, dealer_phone);
            observer.observe(&card.image_id, &card.image_src);
            card
        })
        .collect();

    ResultsVm {
        count: cards.len(),
        count_label: count_label(cards.len()),
        cards,
    }
}
