use serde::Deserialize;

// imoveis.json
//  ├── condominium
//  │    ├── name
//  │    ├── description
//  │    ├── address
//  │    ├── mapEmbedUrl
//  │    ├── rules
//  │    ├── amenities []
//  │    └── commonAreaVideoUrl
//  └── properties []
//       ├── title
//       ├── description
//       ├── price
//       ├── videoUrl
//       ├── mapEmbedUrl
//       ├── features [] ── icon, text
//       ├── isCondominiumProperty
//       └── available

#[derive(Debug, Deserialize)]
pub struct Catalog {
    pub condominium: CondominiumInfo,
    pub properties: Vec<PropertyListing>,
}

#[derive(Debug, Deserialize)]
pub struct PropertyListing {
    pub title: String,
    pub description: String,

    /// Monthly rent in BRL.
    pub price: f64,

    #[serde(rename = "videoUrl")]
    pub video_url: Option<String>,
    #[serde(rename = "mapEmbedUrl")]
    pub map_embed_url: Option<String>,

    #[serde(default)]
    pub features: Vec<Feature>,

    #[serde(rename = "isCondominiumProperty")]
    pub is_condominium_property: bool,
    pub available: bool,
}

/// One labeled entry in a card's feature list. `icon` is a Font Awesome class.
#[derive(Debug, Deserialize)]
pub struct Feature {
    pub icon: String,
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct CondominiumInfo {
    pub name: String,
    pub description: String,
    pub address: String,

    #[serde(rename = "mapEmbedUrl")]
    pub map_embed_url: Option<String>,

    pub rules: String,

    #[serde(default)]
    pub amenities: Vec<String>,

    #[serde(rename = "commonAreaVideoUrl")]
    pub common_area_video_url: Option<String>,
}
