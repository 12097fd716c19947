// src/forms/kinds.rs
use crate::forms::{FieldKind, FieldSpec};
use regex::Regex;
use std::sync::LazyLock;

static TWO_DIGITS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{2}$").expect("driver age regex is valid"));

fn two_digits() -> &'static Regex {
    &TWO_DIGITS
}

const SUBJECTS: &[(&str, &str)] = &[
    ("sales", "Vehicle Sales"),
    ("service", "Service & Repairs"),
    ("rental", "Car Rental"),
    ("import", "Vehicle Import"),
    ("other", "Other"),
];

const SERVICE_TYPES: &[(&str, &str)] = &[
    ("maintenance", "Routine Maintenance"),
    ("repair", "Repair"),
    ("diagnostics", "Diagnostics"),
    ("bodywork", "Body Work"),
    ("inspection", "Inspection"),
];

const CAR_TYPES: &[(&str, &str)] = &[
    ("economy", "Economy"),
    ("sedan", "Sedan"),
    ("suv", "SUV"),
    ("luxury", "Luxury"),
    ("van", "Van"),
];

const FINANCING: &[(&str, &str)] = &[
    ("no", "No, I'll pay cash"),
    ("yes", "Yes, I need financing"),
    ("maybe", "Not sure yet"),
];

const CONTACT_FIELDS: &[FieldSpec] = &[
    FieldSpec::new("name", "Full Name", FieldKind::Text).required().min_length(2),
    FieldSpec::new("phone", "Phone Number", FieldKind::Phone).required(),
    FieldSpec::new("email", "Email Address", FieldKind::Email).required(),
    FieldSpec::new("subject", "Subject", FieldKind::Select).required().options(SUBJECTS),
    FieldSpec::new("message", "Message", FieldKind::TextArea)
        .required()
        .min_length(10)
        .max_length(1000),
];

const SERVICE_BOOKING_FIELDS: &[FieldSpec] = &[
    FieldSpec::new("serviceType", "Service Type", FieldKind::Select)
        .required()
        .options(SERVICE_TYPES),
    FieldSpec::new("vehicleDetails", "Vehicle (Year, Make, Model)", FieldKind::Text).required(),
    FieldSpec::new("serviceDate", "Preferred Date", FieldKind::Date).required(),
    FieldSpec::new("serviceTime", "Preferred Time", FieldKind::Time).required(),
    FieldSpec::new("customerName", "Full Name", FieldKind::Text).required().min_length(2),
    FieldSpec::new("customerPhone", "Phone Number", FieldKind::Phone).required(),
    FieldSpec::new("serviceNotes", "Notes", FieldKind::TextArea).max_length(1000),
    FieldSpec::new("emergencyService", "Emergency service", FieldKind::Checkbox),
];

const RENTAL_SEARCH_FIELDS: &[FieldSpec] = &[
    FieldSpec::new("pickupLocation", "Pick-up Location", FieldKind::Text).required(),
    FieldSpec::new("pickupDate", "Pick-up Date", FieldKind::Date).required(),
    FieldSpec::new("pickupTime", "Pick-up Time", FieldKind::Time).required(),
    FieldSpec::new("returnLocation", "Return Location", FieldKind::Text).required(),
    FieldSpec::new("returnDate", "Return Date", FieldKind::Date).required(),
    FieldSpec::new("returnTime", "Return Time", FieldKind::Time).required(),
    FieldSpec::new("carType", "Car Type", FieldKind::Select).options(CAR_TYPES),
    FieldSpec::new("driverAge", "Driver Age", FieldKind::Number)
        .required()
        .pattern(two_digits, "Driver age must be a two-digit number"),
];

const QUOTE_FIELDS: &[FieldSpec] = &[
    FieldSpec::new("name", "Full Name", FieldKind::Text).required(),
    FieldSpec::new("phone", "Phone Number", FieldKind::Phone).required(),
    FieldSpec::new("email", "Email Address", FieldKind::Email).required(),
    FieldSpec::new("financing", "Financing Required?", FieldKind::Select).options(FINANCING),
    FieldSpec::new("tradeIn", "Trade-In Vehicle", FieldKind::Text).max_length(120),
    FieldSpec::new("message", "Additional Information", FieldKind::TextArea).max_length(1000),
];

/// Forms on the site, keyed by their element id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    Contact,
    ServiceBooking,
    RentalSearch,
    Quote,
    Generic,
}

impl FormKind {
    pub fn from_id(id: &str) -> Self {
        match id {
            "contact-form" => FormKind::Contact,
            "service-booking-form" => FormKind::ServiceBooking,
            "rental-search-form" => FormKind::RentalSearch,
            "quote-form" => FormKind::Quote,
            _ => FormKind::Generic,
        }
    }

    pub fn id(&self) -> &'static str {
        match self {
            FormKind::Contact => "contact-form",
            FormKind::ServiceBooking => "service-booking-form",
            FormKind::RentalSearch => "rental-search-form",
            FormKind::Quote => "quote-form",
            FormKind::Generic => "general",
        }
    }

    /// Generic forms carry no rules: whatever was posted is forwarded.
    pub fn fields(&self) -> &'static [FieldSpec] {
        match self {
            FormKind::Contact => CONTACT_FIELDS,
            FormKind::ServiceBooking => SERVICE_BOOKING_FIELDS,
            FormKind::RentalSearch => RENTAL_SEARCH_FIELDS,
            FormKind::Quote => QUOTE_FIELDS,
            FormKind::Generic => &[],
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            FormKind::Contact => "Contact Us",
            FormKind::ServiceBooking => "Book a Service",
            FormKind::RentalSearch => "Find a Rental",
            FormKind::Quote => "Request a Quote",
            FormKind::Generic => "Send us a message",
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self {
            FormKind::Contact => "Send Message",
            FormKind::ServiceBooking => "Book Service",
            FormKind::RentalSearch => "Search Rentals",
            FormKind::Quote => "Submit Quote Request",
            FormKind::Generic => "Submit",
        }
    }

    pub fn success_message(&self) -> &'static str {
        match self {
            FormKind::Quote => "Quote request submitted successfully!",
            _ => "Form submitted successfully! We'll contact you soon.",
        }
    }
}
