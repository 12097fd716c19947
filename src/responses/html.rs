use crate::errors::ServerError;
use crate::responses::ResultResp;
use astra::{Body, ResponseBuilder};
use maud::Markup;

pub fn html_response(markup: Markup) -> ResultResp {
    html_response_with_status(200, markup)
}

pub fn html_response_with_status(status: u16, markup: Markup) -> ResultResp {
    ResponseBuilder::new()
        .status(status)
        .header("Content-Type", "text/html; charset=utf-8")
        .body(Body::from(markup.into_string()))
        .map_err(|_| ServerError::InternalError)
}

/// Partial HTML for htmx swaps, plus any `HX-*` response headers.
pub fn fragment_response(markup: Markup, hx_headers: &[(&str, String)]) -> ResultResp {
    let mut builder = ResponseBuilder::new()
        .status(200)
        .header("Content-Type", "text/html; charset=utf-8");

    for (name, value) in hx_headers {
        builder = builder.header(*name, value.as_str());
    }

    builder
        .body(Body::from(markup.into_string()))
        .map_err(|_| ServerError::InternalError)
}
