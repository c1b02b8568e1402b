//! Static page content.
//!
//! The bundled `content/site.json` is compiled in. A deployed page can
//! replace it without a rebuild by embedding
//! `<script id="site-content" type="application/json">` in `index.html`.

use gloo::console::{debug, warn};
use serde::Deserialize;
use web_sys::window;

use crate::error::ContentError;

pub const CONTENT_SCRIPT_ID: &str = "site-content";

const BUNDLED_JSON: &str = include_str!("../content/site.json");

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Slide {
    pub src: String,
    pub alt: String,
    pub title: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Equipment {
    pub icon: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: String,
    pub image: String,
    pub name: String,
    pub price_per_night: String,
    pub adults: u32,
    pub size: String,
    pub equipment: Vec<Equipment>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub icon: String,
    pub title: String,
    pub description: String,
    pub image: String,
    #[serde(default = "default_href")]
    pub href: String,
    #[serde(default = "default_link_text")]
    pub link_text: String,
}

fn default_href() -> String {
    "#".to_string()
}

fn default_link_text() -> String {
    "En savoir plus".to_string()
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NavItem {
    pub name: String,
    pub href: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub address: String,
    pub address_note: Option<String>,
    pub phone: String,
    pub email: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct About {
    pub subtitle: String,
    pub title: String,
    pub body: String,
    pub cta_label: String,
    pub cta_href: String,
    pub images: Vec<Slide>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteContent {
    pub nav: Vec<NavItem>,
    pub hero_slides: Vec<Slide>,
    pub about: About,
    pub rooms: Vec<Room>,
    pub gallery: Vec<Slide>,
    pub services: Vec<Service>,
    pub contact: Contact,
}

impl SiteContent {
    pub fn from_json(json: &str) -> Result<Self, ContentError> {
        Ok(serde_json::from_str(json)?)
    }

    fn bundled() -> Result<Self, ContentError> {
        Self::from_json(BUNDLED_JSON)
    }
}

/// Text of the embedded override script, if the page carries a non-blank one.
pub fn embedded_json(script_id: &str) -> Result<Option<String>, ContentError> {
    let document = window()
        .and_then(|w| w.document())
        .ok_or(ContentError::MissingWindow)?;
    Ok(document
        .get_element_by_id(script_id)
        .and_then(|el| el.text_content())
        .filter(|text| !text.trim().is_empty()))
}

/// Page content: embedded override if present and valid, else the bundled copy.
pub fn load() -> SiteContent {
    let embedded = embedded_json(CONTENT_SCRIPT_ID)
        .and_then(|json| json.map(|json| SiteContent::from_json(&json)).transpose());

    match embedded {
        Ok(Some(content)) => {
            debug!("content: using embedded override");
            content
        }
        Ok(None) => bundled_or_empty(),
        Err(e) => {
            warn!(format!("content: embedded override ignored: {e}"));
            bundled_or_empty()
        }
    }
}

fn bundled_or_empty() -> SiteContent {
    SiteContent::bundled().unwrap_or_else(|e| {
        warn!(format!("content: bundled site.json unreadable: {e}"));
        SiteContent::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_content_parses() {
        let content = SiteContent::bundled().expect("bundled site.json should parse");
        assert!(content.hero_slides.len() >= 2);
        assert!(!content.gallery.is_empty());
        assert!(!content.rooms.is_empty());
        assert_eq!(content.services.len(), 6);
        assert!(content.nav.iter().any(|item| item.href == "/"));
        assert!(!content.contact.email.is_empty());
    }

    #[test]
    fn room_keys_are_camel_case() {
        let json = r#"{
            "id": "suite",
            "image": "/img.jpg",
            "name": "Suite",
            "pricePerNight": "1 200 MAD",
            "adults": 2,
            "size": "30 m²",
            "equipment": [{ "icon": "📶", "name": "Wi-Fi" }]
        }"#;
        let room: Room = serde_json::from_str(json).unwrap();
        assert_eq!(room.price_per_night, "1 200 MAD");
        assert_eq!(room.equipment[0].name, "Wi-Fi");
    }

    #[test]
    fn service_link_defaults() {
        let json = r#"{ "icon": "x", "title": "t", "description": "d", "image": "i" }"#;
        let service: Service = serde_json::from_str(json).unwrap();
        assert_eq!(service.href, "#");
        assert_eq!(service.link_text, "En savoir plus");
    }

    #[test]
    fn slide_text_is_optional() {
        let slide: Slide = serde_json::from_str(r#"{ "src": "/a.jpg", "alt": "A" }"#).unwrap();
        assert_eq!(slide.title, None);
        assert_eq!(slide.description, None);
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = SiteContent::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ContentError::Parse(_)));
    }
}
