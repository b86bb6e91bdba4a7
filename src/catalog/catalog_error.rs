use std::error::Error;
use std::fmt;

/// Failure to produce a `Catalog` from the data file. Both variants take the
/// same path: logged once by the route handler, never shown on the page.
#[derive(Debug)]
pub enum CatalogError {
    Unavailable(String),
    Malformed(String),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Unavailable(msg) => write!(f, "Data file unavailable: {msg}"),
            CatalogError::Malformed(msg) => write!(f, "Data file malformed: {msg}"),
        }
    }
}

impl Error for CatalogError {}
