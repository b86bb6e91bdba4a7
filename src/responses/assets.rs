use crate::errors::ServerError;
use crate::responses::ResultResp;
use astra::{Body, ResponseBuilder};
use std::fs;
use std::path::Path;

const STATIC_ROOT: &str = "static";

/// Serve a file from static/. `request_path` is the full URI path,
/// "/static/..." included.
pub fn static_response(request_path: &str) -> ResultResp {
    let rel = request_path.trim_start_matches("/static/");
    if rel.is_empty() || rel.split('/').any(|seg| seg.is_empty() || seg == "..") {
        return Err(ServerError::BadRequest(format!(
            "bad asset path: {request_path}"
        )));
    }

    let full = Path::new(STATIC_ROOT).join(rel);
    let bytes = fs::read(&full).map_err(|_| ServerError::NotFound)?;
    let content_type = mime_for(&full);

    ResponseBuilder::new()
        .status(200)
        .header("Content-Type", content_type.as_ref())
        .body(Body::from(bytes))
        .map_err(|_| ServerError::InternalError)
}

fn mime_for(path: &Path) -> mime::Mime {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("css") => mime::TEXT_CSS,
        Some("js") => mime::TEXT_JAVASCRIPT,
        Some("json") => mime::APPLICATION_JSON,
        Some("svg") => mime::IMAGE_SVG,
        Some("png") => mime::IMAGE_PNG,
        Some("jpg") | Some("jpeg") => mime::IMAGE_JPEG,
        Some("mp4") => "video/mp4".parse().unwrap_or(mime::APPLICATION_OCTET_STREAM),
        _ => mime::APPLICATION_OCTET_STREAM,
    }
}
