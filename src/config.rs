// src/config.rs
use std::net::SocketAddr;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var} is not valid: {reason}")]
    Invalid { var: &'static str, reason: String },
}

#[derive(Debug, Clone)]
pub struct SiteConfig {
    pub addr: SocketAddr,
    /// Filesystem path or http(s) URL of the inventory JSON document.
    pub inventory_source: String,
    pub static_dir: String,
    /// Fallback number for outbound WhatsApp links, digits only.
    pub dealer_phone: String,
    pub dealer_name: String,
    pub max_workers: usize,
    /// Quiescence window for the inventory search box.
    pub search_debounce: Duration,
    /// IntersectionObserver rootMargin used to start loading card images early.
    pub lazy_root_margin: String,
    pub fetch_timeout: Duration,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            inventory_source: "data/inventory.json".to_string(),
            static_dir: "static".to_string(),
            dealer_phone: "233244964880".to_string(),
            dealer_name: "DANFOPII VENTURES".to_string(),
            max_workers: 8,
            search_debounce: Duration::from_millis(300),
            lazy_root_margin: "200px".to_string(),
            fetch_timeout: Duration::from_secs(30),
        }
    }
}

impl SiteConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from any key lookup; unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();

        if let Some(v) = lookup("SHOWROOM_ADDR") {
            cfg.addr = v.parse().map_err(|e| ConfigError::Invalid {
                var: "SHOWROOM_ADDR",
                reason: format!("{e}"),
            })?;
        }
        if let Some(v) = lookup("SHOWROOM_INVENTORY") {
            cfg.inventory_source = v;
        }
        if let Some(v) = lookup("SHOWROOM_STATIC_DIR") {
            cfg.static_dir = v;
        }
        if let Some(v) = lookup("SHOWROOM_DEALER_PHONE") {
            let digits: String = v.chars().filter(char::is_ascii_digit).collect();
            if digits.is_empty() {
                return Err(ConfigError::Invalid {
                    var: "SHOWROOM_DEALER_PHONE",
                    reason: "no digits".into(),
                });
            }
            cfg.dealer_phone = digits;
        }
        if let Some(v) = lookup("SHOWROOM_DEALER_NAME") {
            cfg.dealer_name = v;
        }
        if let Some(v) = lookup("SHOWROOM_MAX_WORKERS") {
            cfg.max_workers = parse_number("SHOWROOM_MAX_WORKERS", &v)?;
        }
        if let Some(v) = lookup("SHOWROOM_SEARCH_DEBOUNCE_MS") {
            cfg.search_debounce =
                Duration::from_millis(parse_number("SHOWROOM_SEARCH_DEBOUNCE_MS", &v)?);
        }
        if let Some(v) = lookup("SHOWROOM_LAZY_ROOT_MARGIN") {
            cfg.lazy_root_margin = v;
        }
        if let Some(v) = lookup("SHOWROOM_FETCH_TIMEOUT_SECS") {
            cfg.fetch_timeout =
                Duration::from_secs(parse_number("SHOWROOM_FETCH_TIMEOUT_SECS", &v)?);
        }

        Ok(cfg)
    }
}

fn parse_number<T>(var: &'static str, raw: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
        var,
        reason: e.to_string(),
    })
}
