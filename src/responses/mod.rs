pub mod assets;
pub mod html;
pub mod redirect;

pub use crate::errors::ResultResp;

// Normal HTML responses (full pages and htmx fragments)
pub use html::{fragment_response, html_response, html_response_with_status};
pub use redirect::see_other;
pub use assets::static_response;
