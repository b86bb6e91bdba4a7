use crate::catalog::PropertyListing;

/// Listings shown inside the condominium section, in catalog order.
pub fn condo_listings(properties: &[PropertyListing]) -> Vec<&PropertyListing> {
    properties
        .iter()
        .filter(|p| p.is_condominium_property && p.available)
        .collect()
}

/// Stand-alone houses outside the condominium, in catalog order.
pub fn street_listings(properties: &[PropertyListing]) -> Vec<&PropertyListing> {
    properties
        .iter()
        .filter(|p| !p.is_condominium_property && p.available)
        .collect()
}
