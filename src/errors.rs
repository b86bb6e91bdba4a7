use astra::Response;
use std::fmt;

/// Errors originating from the routing layer. A data-file failure is not a
/// `ServerError`: the page is served in its empty pre-render state instead.
#[derive(Debug)]
pub enum ServerError {
    NotFound,
    BadRequest(String),
    InternalError,
}

// Type alias commonly used by route handlers.
pub type ResultResp = Result<Response, ServerError>;

impl fmt::Display for ServerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServerError::NotFound => write!(f, "Not Found"),
            ServerError::BadRequest(msg) => write!(f, "Bad Request: {msg}"),
            ServerError::InternalError => write!(f, "Internal Server Error"),
        }
    }
}

impl std::error::Error for ServerError {}
