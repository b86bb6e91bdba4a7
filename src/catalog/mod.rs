mod catalog_error;
mod loader;
mod models;

pub use catalog_error::CatalogError;
pub use loader::CatalogFile;
pub use models::{Catalog, CondominiumInfo, Feature, PropertyListing};
