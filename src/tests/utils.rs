use crate::catalog::CatalogFile;
use astra::{Body, Request, Response};
use http::Method;
use std::io::Read;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

/// Unique temp path so parallel tests never share a data file.
pub fn temp_json_path(tag: &str) -> PathBuf {
    std::env::temp_dir().join(format!(
        "imoveis_test_{tag}_{}.json",
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ))
}

/// Write a throwaway catalog document and return a handle on it.
pub fn write_catalog(tag: &str, json: &str) -> CatalogFile {
    let path = temp_json_path(tag);
    std::fs::write(&path, json).expect("write test catalog");
    CatalogFile::new(path)
}

/// Build a GET request the way astra's service receives it.
pub fn get(path: &str) -> Request {
    let mut req = Request::new(Body::empty());
    *req.method_mut() = Method::GET;
    *req.uri_mut() = path.parse().unwrap();
    req
}

pub fn body_string(resp: &mut Response) -> String {
    let mut bytes = Vec::new();
    resp.body_mut()
        .reader()
        .read_to_end(&mut bytes)
        .expect("read response body");
    String::from_utf8(bytes).expect("response body is utf-8")
}

/// Catalog used by most router tests.
///
/// Available condo listings, in order:   Casa 1, Casa 3
/// Available street listings, in order:  Casa Azul (no video, has map),
///                                       Casa Verde (video, no map)
/// Unavailable: Casa 2 (condo), Edícula da Rua Ipê (street)
pub fn sample_catalog() -> &'static str {
    r#"{
        "condominium": {
            "name": "Residencial Vila das Flores",
            "description": "Condomínio fechado com áreas verdes.",
            "address": "Rua das Hortênsias, 120",
            "mapEmbedUrl": "https://www.google.com/maps/embed?pb=condo",
            "rules": "Silêncio após as 22h.",
            "amenities": ["Portaria", "Salão de festas", "Playground"],
            "commonAreaVideoUrl": "/static/media/areas-comuns.mp4"
        },
        "properties": [
            {
                "title": "Casa 1",
                "description": "Térrea com quintal.",
                "price": 1800,
                "videoUrl": "/static/media/casa-1.mp4",
                "features": [{ "icon": "fas fa-bed", "text": "2 quartos" }],
                "isCondominiumProperty": true,
                "available": true
            },
            {
                "title": "Casa 2",
                "description": "Sobrado.",
                "price": 2300,
                "videoUrl": "/static/media/casa-2.mp4",
                "isCondominiumProperty": true,
                "available": false
            },
            {
                "title": "Casa 3",
                "description": "Casa de fundos.",
                "price": 1100,
                "mapEmbedUrl": "https://www.google.com/maps/embed?pb=casa3",
                "isCondominiumProperty": true,
                "available": true
            },
            {
                "title": "Casa Azul",
                "description": "Casa independente.",
                "price": 1500.5,
                "mapEmbedUrl": "https://www.google.com/maps/embed?pb=azul",
                "features": [{ "icon": "fas fa-bed", "text": "2 quartos" }],
                "isCondominiumProperty": false,
                "available": true
            },
            {
                "title": "Edícula da Rua Ipê",
                "description": "Compacta.",
                "price": 950,
                "videoUrl": "/static/media/edicula.mp4",
                "isCondominiumProperty": false,
                "available": false
            },
            {
                "title": "Casa Verde",
                "description": "Com jardim.",
                "price": 1700,
                "videoUrl": "/static/media/verde.mp4",
                "isCondominiumProperty": false,
                "available": true
            }
        ]
    }"#
}
