use crate::catalog::CatalogFile;
use crate::errors::ServerError;
use crate::responses::{html_response, static_response, ResultResp};
use crate::templates;
use astra::Request;

pub fn handle(req: Request, catalog: &CatalogFile) -> ResultResp {
    let method = req.method().as_str();
    let path = req.uri().path();

    match (method, path) {
        ("GET", "/") => {
            // A broken data file is fatal for rendering but not for the
            // request: log once and serve the empty shell.
            let loaded = match catalog.load() {
                Ok(catalog) => Some(catalog),
                Err(err) => {
                    eprintln!("❌ Could not load listings data: {err}");
                    None
                }
            };
            html_response(templates::pages::listings_page(loaded.as_ref()))
        }

        ("GET", path) if path.starts_with("/static/") => static_response(path),

        _ => Err(ServerError::NotFound),
    }
}
