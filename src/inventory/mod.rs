mod load_error;
mod models;
mod store;

pub use load_error::LoadError;
pub use models::{VehicleRecord, PLACEHOLDER_IMAGE};
pub use store::InventoryStore;
