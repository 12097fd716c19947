use serde::{Deserialize, Deserializer};

/// Shown when a listing arrives without any image.
pub const PLACEHOLDER_IMAGE: &str = "/static/images/cars/default.svg";

// vehicle
//  ├── id, make, model, year, price, condition, description   (required)
//  ├── category, transmission, fuelType, engine, color        (optional text)
//  ├── mileage                                                 (optional, 0 / absent = new)
//  ├── contactPhone                                            (dealer line for this listing)
//  ├── images[], features[]
//  └── featured, imported

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleRecord {
    #[serde(deserialize_with = "id_as_string")]
    pub id: String,
    pub make: String,
    pub model: String,
    pub year: u16,
    pub price: u64,
    pub condition: String,
    pub description: String,

    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub transmission: Option<String>,
    #[serde(default)]
    pub fuel_type: Option<String>,
    #[serde(default)]
    pub engine: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub mileage: Option<u32>,
    #[serde(default)]
    pub contact_phone: Option<String>,

    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub imported: bool,
}

impl VehicleRecord {
    /// "2021 Toyota Camry"
    pub fn title(&self) -> String {
        format!("{} {} {}", self.year, self.make, self.model)
    }

    pub fn primary_image(&self) -> &str {
        self.images
            .first()
            .map(String::as_str)
            .unwrap_or(PLACEHOLDER_IMAGE)
    }

    /// Zero mileage is treated the same as no mileage.
    pub fn mileage(&self) -> Option<u32> {
        self.mileage.filter(|m| *m > 0)
    }

    pub fn has_valid_year(&self) -> bool {
        (1000..=9999).contains(&self.year)
    }

    /// Lower-cased haystack for free-text search.
    pub fn searchable_text(&self) -> String {
        format!(
            "{} {} {} {}",
            self.make, self.model, self.year, self.description
        )
        .to_lowercase()
    }

    pub(crate) fn normalize(mut self) -> Self {
        self.images.retain(|src| !src.trim().is_empty());
        if self.images.is_empty() {
            self.images.push(PLACEHOLDER_IMAGE.to_string());
        }
        self.contact_phone = self
            .contact_phone
            .take()
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty());
        self
    }
}

// ids show up both as numbers and as strings in the data file
fn id_as_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Number(i64),
        Text(String),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Number(n) => n.to_string(),
        RawId::Text(s) => s,
    })
}
