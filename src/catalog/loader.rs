use crate::catalog::{Catalog, CatalogError};
use std::fs;
use std::path::PathBuf;

/// Handle on the listings document. Cloning is cheap (path only).
#[derive(Clone)]
pub struct CatalogFile {
    path: PathBuf,
}

impl CatalogFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Read and parse the whole document. Called once per page render; the
    /// data set is a handful of listings, so there is no caching layer.
    pub fn load(&self) -> Result<Catalog, CatalogError> {
        let bytes = fs::read(&self.path)
            .map_err(|e| CatalogError::Unavailable(format!("{}: {e}", self.path.display())))?;

        serde_json::from_slice(&bytes).map_err(|e| CatalogError::Malformed(e.to_string()))
    }
}
