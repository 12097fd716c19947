// src/state.rs
use crate::config::SiteConfig;
use crate::inventory::InventoryStore;
use crate::notify::Notification;
use crate::templates::SiteChrome;

/// Everything a request handler may read. Built once at startup, never mutated.
pub struct AppState {
    pub config: SiteConfig,
    pub inventory: InventoryStore,
}

impl AppState {
    pub fn new(config: SiteConfig, inventory: InventoryStore) -> Self {
        Self { config, inventory }
    }

    pub fn chrome(&self) -> SiteChrome<'_> {
        SiteChrome {
            dealer_name: &self.config.dealer_name,
            dealer_phone: &self.config.dealer_phone,
            notices: Vec::new(),
        }
    }

    /// Warning shown on inventory pages while the data source is down.
    pub fn inventory_notice(&self) -> Option<Notification> {
        self.inventory.load_error().map(|_| {
            Notification::warning("Our inventory is temporarily unavailable. Please try again later.")
        })
    }
}
