use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Inventory source answered HTTP {0}")]
    Status(u16),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unexpected data shape: {0}")]
    Shape(String),
}
