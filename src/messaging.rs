// src/messaging.rs
use crate::format::format_currency;
use crate::inventory::VehicleRecord;
use url::Url;

/// `https://wa.me/<phone>?text=<message>`; the phone is reduced to digits.
pub fn whatsapp_url(phone: &str, message: &str) -> String {
    let digits: String = phone.chars().filter(char::is_ascii_digit).collect();
    let base = format!("https://wa.me/{digits}");

    match Url::parse_with_params(&base, &[("text", message)]) {
        Ok(url) => url.to_string(),
        // digits-only paths always parse; keep a usable link regardless
        Err(_) => base,
    }
}

pub fn tel_href(phone: &str) -> String {
    let dialable: String = phone
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect();
    format!("tel:{dialable}")
}

pub fn inquiry_message(car: &VehicleRecord) -> String {
    format!(
        "Hello, I'm interested in the {} {} {} (ID: {}). Price: {}. Could you provide more details?",
        car.year,
        car.make,
        car.model,
        car.id,
        format_currency(car.price)
    )
}

/// WhatsApp inquiry for a listing, sent to the listing's own line when it has one.
pub fn vehicle_inquiry_url(car: &VehicleRecord, dealer_phone: &str) -> String {
    let phone = car.contact_phone.as_deref().unwrap_or(dealer_phone);
    whatsapp_url(phone, &inquiry_message(car))
}

pub fn default_chat_message(dealer_name: &str) -> String {
    format!("Hello {dealer_name}, I'm interested in your services.")
}
