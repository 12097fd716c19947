use crate::inventory::{InventoryStore, LoadError, PLACEHOLDER_IMAGE};
use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread::{self, JoinHandle};
use std::time::Duration;

const TIMEOUT: Duration = Duration::from_secs(2);

const BARE: &str = r#"[
    {"id": 1, "make": "Toyota", "model": "Corolla", "year": 2021, "price": 20000,
     "condition": "New", "images": ["a.jpg"], "description": "Compact sedan",
     "fuelType": "Petrol", "contactPhone": "0244000000", "featured": true},
    {"id": "B-2", "make": "Honda", "model": "Fit", "year": 2017, "price": 8000,
     "condition": "Used", "images": [], "description": "City car", "mileage": 52000}
]"#;

#[test]
fn loads_a_bare_array() {
    let store = InventoryStore::from_json(BARE).unwrap();

    assert_eq!(store.len(), 2);
    let corolla = store.get("1").unwrap();
    assert_eq!(corolla.fuel_type.as_deref(), Some("Petrol"));
    assert_eq!(corolla.contact_phone.as_deref(), Some("0244000000"));
    assert_eq!(store.featured().len(), 1);

    let fit = store.get("B-2").unwrap();
    assert_eq!(fit.mileage(), Some(52000));
    assert_eq!(fit.images, vec![PLACEHOLDER_IMAGE.to_string()]);
}

#[test]
fn loads_an_object_with_cars() {
    let wrapped = format!(r#"{{"dealer": "x", "cars": {BARE}}}"#);
    let store = InventoryStore::from_json(&wrapped).unwrap();

    assert_eq!(store.len(), 2);
    assert!(store.load_error().is_none());
}

#[test]
fn rejects_documents_without_a_vehicle_list() {
    assert!(matches!(
        InventoryStore::from_json(r#"{"vehicles": []}"#),
        Err(LoadError::Shape(_))
    ));
    assert!(matches!(
        InventoryStore::from_json(r#"{"cars": {}}"#),
        Err(LoadError::Shape(_))
    ));
    assert!(matches!(InventoryStore::from_json("42"), Err(LoadError::Shape(_))));
    assert!(matches!(
        InventoryStore::from_json("[{\"id\": 1,"),
        Err(LoadError::Json(_))
    ));
}

#[test]
fn drops_duplicate_ids_and_bad_years() {
    let json = r#"[
        {"id": 7, "make": "Kia", "model": "Rio", "year": 2019, "price": 1, "condition": "Used", "description": ""},
        {"id": "7", "make": "Kia", "model": "Soul", "year": 2020, "price": 2, "condition": "Used", "description": ""},
        {"id": 8, "make": "Kia", "model": "Pride", "year": 99, "price": 3, "condition": "Used", "description": ""}
    ]"#;
    let store = InventoryStore::from_json(json).unwrap();

    assert_eq!(store.len(), 1);
    assert_eq!(store.get("7").unwrap().model, "Rio");
    assert!(store.get("8").is_none());
}

#[test]
fn malformed_listings_are_skipped_one_by_one() {
    let json = r#"[
        {"id": 1, "make": "Kia", "model": "Rio", "year": 2019, "price": 1, "condition": "Used", "description": ""},
        {"id": 2, "make": "Kia", "model": "Soul", "year": 70000, "price": 2, "condition": "Used", "description": ""},
        {"id": 3, "make": "Kia", "model": "Niro", "year": 2021, "price": -5, "condition": "New", "description": ""},
        {"id": 4, "make": "Kia", "model": "Ceed", "year": "2020", "price": 4, "condition": "Used", "description": ""},
        {"id": 5, "make": "Kia", "model": "Stonic", "year": 2022, "price": 5, "condition": "New", "description": ""}
    ]"#;
    let store = InventoryStore::from_json(json).unwrap();

    let ids: Vec<&str> = store.all().iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "5"]);
}

#[test]
fn loads_from_a_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(BARE.as_bytes()).unwrap();

    let store = InventoryStore::load(file.path().to_str().unwrap(), TIMEOUT).unwrap();
    assert_eq!(store.len(), 2);
}

#[test]
fn failed_load_leaves_an_empty_store() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("inventory.json");

    let store = InventoryStore::load_or_empty(missing.to_str().unwrap(), TIMEOUT);

    assert!(store.is_empty());
    assert!(store.all().is_empty());
    assert!(store.load_error().unwrap().contains("IO error"));
}

#[test]
fn unreachable_url_is_a_network_error() {
    // port 9 (discard) is closed on test machines
    let result = InventoryStore::load("http://127.0.0.1:9/inventory.json", TIMEOUT);
    assert!(matches!(result, Err(LoadError::Network(_))));
}

/// Answers exactly one HTTP request with `status` and `body`.
fn serve_once(status: &str, body: &str) -> (String, JoinHandle<()>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let url = format!("http://{}/inventory.json", listener.local_addr().unwrap());
    let response = format!(
        "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    );

    let handle = thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = stream.read(&mut buf).unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buf[..n]);
        }
        stream.write_all(response.as_bytes()).unwrap();
    });

    (url, handle)
}

#[test]
fn error_status_is_a_load_failure() {
    let (url, server) = serve_once("500 Internal Server Error", "oops");

    let result = InventoryStore::load(&url, TIMEOUT);

    server.join().unwrap();
    assert!(matches!(result, Err(LoadError::Status(500))));
}

#[test]
fn loads_from_a_url() {
    let body = format!(r#"{{"cars": {BARE}}}"#);
    let (url, server) = serve_once("200 OK", &body);

    let store = InventoryStore::load(&url, TIMEOUT).unwrap();

    server.join().unwrap();
    assert_eq!(store.len(), 2);
    assert_eq!(store.get("B-2").unwrap().model, "Fit");
}
