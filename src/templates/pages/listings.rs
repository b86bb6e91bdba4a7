use crate::catalog::{Catalog, CondominiumInfo, PropertyListing};
use crate::domain::selection::{condo_listings, street_listings};
use crate::templates::components::{property_card, video_player};
use crate::templates::site_layout;
use maud::{html, Markup};

/// The whole listings page. `None` means the data file could not be loaded:
/// the shell is served with neither section, the page's pre-render state.
pub fn listings_page(catalog: Option<&Catalog>) -> Markup {
    site_layout(
        "Aluguel de Imóveis",
        html! {
            @if let Some(catalog) = catalog {
                (condo_section(&catalog.condominium, &catalog.properties))
                (street_section(&catalog.properties))
            }
        },
    )
}

/// Condominium region: descriptive block plus one card per available condo
/// listing. Emits nothing at all when there is no condo inventory, which is
/// the expected state, not an error.
fn condo_section(condo: &CondominiumInfo, properties: &[PropertyListing]) -> Markup {
    let listings = condo_listings(properties);
    if listings.is_empty() {
        return html! {};
    }

    html! {
        section id="condo-listings-section" class="listings-section" {
            div class="condo-info-box fade-in-section" {
                h2 id="condo-name" { (condo.name) }
                p id="condo-description" { (condo.description) }
                p id="condo-address" {
                    i class="fas fa-map-marker-alt" {} " " (condo.address)
                }
                @if let Some(map_url) = &condo.map_embed_url {
                    div id="condo-map-wrapper" class="map-wrapper" {
                        iframe src=(map_url) loading="lazy" referrerpolicy="no-referrer-when-downgrade" {}
                    }
                }
            }

            div class="rules-box fade-in-section" {
                h3 { "Regras do Condomínio" }
                p id="condo-rules" { (condo.rules) }
            }

            div class="condo-info-box fade-in-section" {
                h3 { "Áreas Comuns" }
                ul id="condo-amenities-list" {
                    @for amenity in &condo.amenities {
                        li { (amenity) }
                    }
                }
                @if let Some(video_url) = &condo.common_area_video_url {
                    div id="condo-video-container" class="video-container" {
                        // The only muted video on the page.
                        (video_player(Some(video_url), true))
                    }
                }
            }

            div id="condo-property-listings" class="property-grid" {
                @for listing in &listings {
                    (property_card(listing, false))
                }
            }
        }
    }
}

/// Stand-alone houses. Same no-inventory rule as the condominium section;
/// these cards carry their own map embed.
fn street_section(properties: &[PropertyListing]) -> Markup {
    let listings = street_listings(properties);
    if listings.is_empty() {
        return html! {};
    }

    html! {
        section id="other-listings-section" class="listings-section" {
            h2 { "Outras Casas Disponíveis" }
            div id="other-property-listings" class="property-grid" {
                @for listing in &listings {
                    (property_card(listing, true))
                }
            }
        }
    }
}
