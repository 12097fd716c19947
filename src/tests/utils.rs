use crate::config::SiteConfig;
use crate::inventory::{InventoryStore, VehicleRecord};
use crate::state::AppState;
use astra::{Body, Response};
use http::{Method, Request};
use std::io::Read;

/// Minimal record; tests fill in whatever else they care about.
pub fn vehicle(id: &str, make: &str, model: &str, condition: &str, price: u64) -> VehicleRecord {
    VehicleRecord {
        id: id.to_string(),
        make: make.to_string(),
        model: model.to_string(),
        year: 2020,
        price,
        condition: condition.to_string(),
        description: format!("A {make} {model} in great shape."),
        category: None,
        transmission: None,
        fuel_type: None,
        engine: None,
        color: None,
        mileage: None,
        contact_phone: None,
        images: vec![format!("/static/images/cars/{id}.jpg")],
        features: Vec::new(),
        featured: false,
        imported: false,
    }
}

/// Five listings covering every filter dimension.
pub fn sample_records() -> Vec<VehicleRecord> {
    let mut camry = vehicle("1", "Toyota", "Camry", "New", 28000);
    camry.year = 2021;
    camry.category = Some("Sedan".into());
    camry.transmission = Some("Automatic".into());
    camry.fuel_type = Some("Petrol".into());
    camry.contact_phone = Some("+233 24 496 4880".into());
    camry.featured = true;
    camry.features = vec!["Adaptive Cruise Control".into(), "Apple CarPlay".into()];
    camry.description = "Reliable family sedan with adaptive cruise control.".into();

    let mut civic = vehicle("2", "Honda", "Civic", "Used", 8000);
    civic.year = 2018;
    civic.category = Some("Sedan".into());
    civic.transmission = Some("Manual".into());
    civic.fuel_type = Some("Petrol".into());
    civic.mileage = Some(45000);
    civic.imported = true;
    civic.contact_phone = Some("0201234567".into());
    civic.description = "Well kept compact car, one owner.".into();

    let mut f150 = vehicle("3", "Ford", "F-150", "Used", 35000);
    f150.category = Some("Truck".into());
    f150.transmission = Some("Automatic".into());
    f150.fuel_type = Some("Diesel".into());
    f150.mileage = Some(30000);
    f150.description = "Tough pickup ready for work and play.".into();

    let mut rav4 = vehicle("4", "Toyota", "RAV4", "New", 52000);
    rav4.year = 2022;
    rav4.category = Some("SUV".into());
    rav4.fuel_type = Some("Hybrid".into());
    rav4.featured = true;
    rav4.imported = true;
    rav4.description = "Hybrid SUV with panoramic roof.".into();

    let mut c300 = vehicle("5", "Mercedes-Benz", "C300", "Used", 18500);
    c300.year = 2019;
    c300.category = Some("Sedan".into());
    c300.mileage = Some(60000);
    c300.imported = true;
    c300.description = "Luxury sedan imported from Germany.".into();

    vec![camry, civic, f150, rav4, c300]
}

pub fn test_state() -> AppState {
    AppState::new(
        SiteConfig::default(),
        InventoryStore::from_records(sample_records()),
    )
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn get_htmx(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .header("HX-Request", "true")
        .body(Body::empty())
        .unwrap()
}

pub fn post_form(uri: &str, body: &str, htmx: bool) -> Request<Body> {
    let mut builder = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("Content-Type", "application/x-www-form-urlencoded");
    if htmx {
        builder = builder.header("HX-Request", "true");
    }
    builder.body(Body::from(body.as_bytes().to_vec())).unwrap()
}

pub fn body_string(resp: Response) -> String {
    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    body
}

pub fn ids(view: &crate::filters::FilteredView<'_>) -> Vec<String> {
    view.ids().into_iter().map(str::to_string).collect()
}
