mod criteria;
mod engine;
mod session;

pub use criteria::{CategoryFilter, FilterCriteria, PriceBand};
pub use engine::{apply_filters, matches, FilteredView};
pub use session::{FilterEvent, FilterSession};
