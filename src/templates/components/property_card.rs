use crate::catalog::PropertyListing;
use crate::domain::price::format_brl;
use crate::domain::whatsapp::interest_link;
use crate::templates::components::video_player;
use maud::{html, Markup};

/// One listing card. Carries the fade-in class from construction, so cards
/// appended anywhere on the page animate in like the fixed sections do.
/// The map block only renders when the caller asks for it AND the listing
/// has an embed URL; condominium cards share the condominium-level map
/// instead.
pub fn property_card(listing: &PropertyListing, show_map: bool) -> Markup {
    html! {
        article class="property-card fade-in-section" {
            div class="video-container" {
                (video_player(listing.video_url.as_deref(), false))
            }
            div class="property-details" {
                h3 { (listing.title) }
                p { (listing.description) }
                p class="property-price" { (format_brl(listing.price)) " / mês" }
                ul class="features-list" {
                    @for feature in &listing.features {
                        li { i class=(feature.icon) {} " " (feature.text) }
                    }
                }
                @if show_map {
                    @if let Some(map_url) = &listing.map_embed_url {
                        div class="map-wrapper" {
                            iframe src=(map_url) loading="lazy" {}
                        }
                    }
                }
                a href=(interest_link(&listing.title)) target="_blank" class="property-cta-button" {
                    i class="fab fa-whatsapp" {} " Tenho Interesse"
                }
            }
        }
    }
}
