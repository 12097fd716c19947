// responses/assets.rs
use crate::errors::ServerError;
use crate::responses::ResultResp;
use astra::{Body, ResponseBuilder};
use std::path::{Component, Path, PathBuf};

/// Serve a file from `static_dir`. `rel_path` is what follows `/static/`.
pub fn static_response(static_dir: &str, rel_path: &str) -> ResultResp {
    let path = resolve(static_dir, rel_path).ok_or(ServerError::NotFound)?;
    let bytes = std::fs::read(&path).map_err(|_| ServerError::NotFound)?;

    ResponseBuilder::new()
        .status(200)
        .header("Content-Type", content_type(&path).as_ref())
        .header("Cache-Control", "public, max-age=3600")
        .body(Body::from(bytes))
        .map_err(|_| ServerError::InternalError)
}

/// Rejects anything that could climb out of the static directory.
fn resolve(static_dir: &str, rel_path: &str) -> Option<PathBuf> {
    let rel = Path::new(rel_path);
    if rel_path.is_empty() || !rel.components().all(|c| matches!(c, Component::Normal(_))) {
        return None;
    }
    Some(Path::new(static_dir).join(rel))
}

pub fn content_type(path: &Path) -> mime::Mime {
    match path.extension().and_then(|e| e.to_str()).unwrap_or("") {
        "css" => mime::TEXT_CSS_UTF_8,
        "js" => mime::APPLICATION_JAVASCRIPT_UTF_8,
        "json" => mime::APPLICATION_JSON,
        "html" => mime::TEXT_HTML_UTF_8,
        "png" => mime::IMAGE_PNG,
        "jpg" | "jpeg" => mime::IMAGE_JPEG,
        "gif" => mime::IMAGE_GIF,
        "svg" => mime::IMAGE_SVG,
        "ico" => "image/x-icon".parse().unwrap_or(mime::APPLICATION_OCTET_STREAM),
        "woff2" => "font/woff2".parse().unwrap_or(mime::APPLICATION_OCTET_STREAM),
        _ => mime::APPLICATION_OCTET_STREAM,
    }
}
