// src/forms/submit.rs
use crate::format::format_currency;
use crate::forms::{validate_field, FieldKind, FormKind};
use crate::inventory::VehicleRecord;
use crate::messaging::whatsapp_url;
use crate::notify::Notification;
use std::collections::BTreeMap;

/// Opening hours offered by the time pickers.
pub const TIME_SLOTS: &[&str] = &[
    "08:00", "09:00", "10:00", "11:00", "12:00", "13:00", "14:00", "15:00", "16:00", "17:00",
];

/// Field name -> first error message for that field.
pub type FieldErrors = BTreeMap<&'static str, String>;

/// Posted values in submission order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues {
    pairs: Vec<(String, String)>,
}

impl FormValues {
    pub fn new(pairs: Vec<(String, String)>) -> Self {
        Self { pairs }
    }

    /// Missing fields read as the empty string.
    pub fn get(&self, name: &str) -> &str {
        self.pairs
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
            .unwrap_or("")
    }

    /// Browsers only post checked boxes.
    pub fn checked(&self, name: &str) -> bool {
        self.pairs.iter().any(|(k, v)| k == name && v != "off")
    }

    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub whatsapp_url: String,
    pub message: String,
    pub notification: Notification,
}

pub fn parse_form_body(body: &[u8]) -> FormValues {
    FormValues::new(url::form_urlencoded::parse(body).into_owned().collect())
}

pub fn validate_form(kind: FormKind, values: &FormValues) -> Result<(), FieldErrors> {
    let errors: FieldErrors = kind
        .fields()
        .iter()
        .filter(|spec| spec.kind != FieldKind::Checkbox)
        .filter_map(|spec| {
            validate_field(spec, values.get(spec.name))
                .err()
                .map(|msg| (spec.name, msg))
        })
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

pub fn format_message(kind: FormKind, values: &FormValues, vehicle: Option<&VehicleRecord>) -> String {
    let v = |name: &str| values.get(name).trim().to_string();

    match kind {
        FormKind::Contact => format!(
            "New Contact Form Submission:\n\nName: {}\nPhone: {}\nEmail: {}\nSubject: {}\nMessage: {}",
            v("name"),
            v("phone"),
            v("email"),
            v("subject"),
            v("message")
        ),
        FormKind::ServiceBooking => format!(
            "Service Booking Request:\n\nService Type: {}\nVehicle: {}\nDate: {}\nTime: {}\nName: {}\nPhone: {}\nNotes: {}\nEmergency: {}",
            v("serviceType"),
            v("vehicleDetails"),
            v("serviceDate"),
            v("serviceTime"),
            v("customerName"),
            v("customerPhone"),
            v("serviceNotes"),
            if values.checked("emergencyService") { "Yes" } else { "No" }
        ),
        FormKind::RentalSearch => format!(
            "Rental Inquiry:\n\nPick-up: {} on {} at {}\nReturn: {} on {} at {}\nCar Type: {}\nDriver Age: {}",
            v("pickupLocation"),
            v("pickupDate"),
            v("pickupTime"),
            v("returnLocation"),
            v("returnDate"),
            v("returnTime"),
            v("carType"),
            v("driverAge")
        ),
        FormKind::Quote => match vehicle {
            Some(car) => format!(
                "New Quote Request:\n\nCar: {}\nPrice: {}\nName: {}\nPhone: {}\nEmail: {}\nFinancing: {}\nTrade-in: {}\nMessage: {}",
                car.title(),
                format_currency(car.price),
                v("name"),
                v("phone"),
                v("email"),
                v("financing"),
                v("tradeIn"),
                v("message")
            ),
            None => format!(
                "Quote Request:\n\nCar: {}\nName: {}\nPhone: {}\nEmail: {}\nFinancing: {}\nTrade-in: {}\nMessage: {}",
                v("car"),
                v("name"),
                v("phone"),
                v("email"),
                v("financing"),
                v("tradeIn"),
                v("message")
            ),
        },
        FormKind::Generic => {
            let mut message = String::from("Form Submission:\n\n");
            for (key, value) in values.pairs() {
                message.push_str(&format!("{key}: {value}\n"));
            }
            message
        }
    }
}

/// Validates and turns a form into an outbound WhatsApp link.
/// Quote requests go to the listing's own line when it has one.
pub fn submit(
    kind: FormKind,
    values: &FormValues,
    dealer_phone: &str,
    vehicle: Option<&VehicleRecord>,
) -> Result<Submission, FieldErrors> {
    validate_form(kind, values)?;

    let message = format_message(kind, values, vehicle);
    let phone = vehicle
        .and_then(|car| car.contact_phone.as_deref())
        .unwrap_or(dealer_phone);

    Ok(Submission {
        whatsapp_url: whatsapp_url(phone, &message),
        message,
        notification: Notification::success(kind.success_message()),
    })
}

/// First slot at or after the next full hour, if the shop is still open.
pub fn default_time_slot(current_hour: u32) -> Option<&'static str> {
    let next_hour = current_hour + 1;
    TIME_SLOTS.iter().copied().find(|slot| {
        slot.split(':')
            .next()
            .and_then(|h| h.parse::<u32>().ok())
            .map_or(false, |h| h >= next_hour)
    })
}
