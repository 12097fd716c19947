// store.rs
use crate::inventory::{LoadError, VehicleRecord};
use reqwest::blocking::Client;
use serde_json::Value;
use std::collections::HashSet;
use std::time::Duration;

/// Read-only snapshot of the dealership inventory for the lifetime of the process.
#[derive(Debug, Default, Clone)]
pub struct InventoryStore {
    records: Vec<VehicleRecord>,
    load_error: Option<String>,
}

impl InventoryStore {
    /// Normalizes records and enforces the store invariants:
    /// unique ids (first one wins) and four digit years.
    pub fn from_records(records: Vec<VehicleRecord>) -> Self {
        let mut seen = HashSet::new();
        let mut kept = Vec::with_capacity(records.len());

        for record in records {
            if !record.has_valid_year() {
                eprintln!(
                    "⚠️ Skipping vehicle {}: year {} is not a 4-digit year",
                    record.id, record.year
                );
                continue;
            }
            if !seen.insert(record.id.clone()) {
                eprintln!("⚠️ Skipping vehicle {}: duplicate id", record.id);
                continue;
            }
            kept.push(record.normalize());
        }

        Self {
            records: kept,
            load_error: None,
        }
    }

    /// Parses an inventory document. Accepts either a bare array of vehicles
    /// or an object carrying the array under `cars`.
    pub fn from_json(text: &str) -> Result<Self, LoadError> {
        let data: Value = serde_json::from_str(text)?;
        let records = Self::extract_records(data)?;
        Ok(Self::from_records(records))
    }

    /// Single fetch of the inventory document. No retry.
    pub fn load(source: &str, timeout: Duration) -> Result<Self, LoadError> {
        let text = fetch_document(source, timeout)?;
        Self::from_json(&text)
    }

    /// Like `load`, but a failure leaves an empty store behind instead of an error.
    /// The failure message is kept so pages can tell visitors about it.
    pub fn load_or_empty(source: &str, timeout: Duration) -> Self {
        match Self::load(source, timeout) {
            Ok(store) => {
                println!(
                    "✅ Loaded {} vehicles from {}",
                    store.len(),
                    source
                );
                store
            }
            Err(e) => {
                eprintln!("❌ Error loading inventory from {source}: {e}");
                Self {
                    records: Vec::new(),
                    load_error: Some(e.to_string()),
                }
            }
        }
    }

    pub fn all(&self) -> &[VehicleRecord] {
        &self.records
    }

    pub fn get(&self, id: &str) -> Option<&VehicleRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn featured(&self) -> Vec<&VehicleRecord> {
        self.records.iter().filter(|r| r.featured).collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn load_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }

    fn extract_records(data: Value) -> Result<Vec<VehicleRecord>, LoadError> {
        let arr = match data {
            Value::Array(items) => items,
            Value::Object(mut obj) => match obj.remove("cars") {
                Some(Value::Array(items)) => items,
                Some(_) => return Err(LoadError::Shape("`cars` is not an array".into())),
                None => return Err(LoadError::Shape("`cars` missing".into())),
            },
            _ => {
                return Err(LoadError::Shape(
                    "expected an array or an object with `cars`".into(),
                ))
            }
        };

        // Malformed listings are skipped one by one.
        let records = arr
            .into_iter()
            .filter_map(|item| {
                let id = match item.get("id") {
                    Some(Value::String(s)) => s.clone(),
                    Some(other) => other.to_string(),
                    None => "<no id>".to_string(),
                };
                match serde_json::from_value::<VehicleRecord>(item) {
                    Ok(record) => Some(record),
                    Err(e) => {
                        eprintln!("⚠️ Skipping vehicle {id}: {e}");
                        None
                    }
                }
            })
            .collect();

        Ok(records)
    }
}

fn fetch_document(source: &str, timeout: Duration) -> Result<String, LoadError> {
    if !(source.starts_with("http://") || source.starts_with("https://")) {
        return Ok(std::fs::read_to_string(source)?);
    }

    let client = Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| LoadError::Network(e.to_string()))?;

    let resp = client
        .get(source)
        .send()
        .map_err(|e| LoadError::Network(e.to_string()))?;

    let status = resp.status();
    if !status.is_success() {
        return Err(LoadError::Status(status.as_u16()));
    }

    resp.text().map_err(|e| LoadError::Network(e.to_string()))
}
