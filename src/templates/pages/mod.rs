pub mod forms;
pub mod home;
pub mod inventory;
pub mod vehicle;

pub use forms::{form_action, form_page, submitted_fragment};
pub use home::home_page;
pub use inventory::{inventory_app, inventory_page, results_update, InventoryVm};
pub use vehicle::{quote_form, quote_page, vehicle_page};
