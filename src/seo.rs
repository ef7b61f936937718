//! Search and installability metadata: the schema.org `LocalBusiness` block
//! and the web app manifest, both built from typed structs so the emitted
//! JSON stays well-formed.

use serde::{Deserialize, Serialize};

use crate::util::assets;

pub const BUSINESS_NAME: &str = "Mamta Enterprises";
pub const TAGLINE: &str = "Jamshedpur's Local Transport Expert";
pub const CANONICAL_URL: &str = "https://mamta-enterprises-pwa.vercel.app/";
pub const TELEPHONE: &str = "+91-XXXXXXXXXX";
pub const MAPS_URL: &str = "https://www.google.com/maps?q=mamta+enterprises+jamshedpur";

pub const META_DESCRIPTION: &str = "Mamta Enterprises offers affordable and reliable local home shifting, office moving, and goods transport services in Jamshedpur.";
pub const META_KEYWORDS: &str = "home transport Jamshedpur, logistics Jamshedpur, office shifting, house movers, goods transport";

pub const PAGE_TITLE: &str = "Mamta Enterprises | Home Transport & Logistics in Jamshedpur";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostalAddress {
    #[serde(rename = "@type")]
    pub schema_type: String,
    pub street_address: String,
    pub address_locality: String,
    pub postal_code: String,
    pub address_country: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeoCoordinates {
    #[serde(rename = "@type")]
    pub schema_type: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// The JSON-LD block search engines read from the page head.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalBusiness {
    #[serde(rename = "@context")]
    pub context: String,
    #[serde(rename = "@type")]
    pub schema_type: String,
    pub name: String,
    pub image: String,
    pub url: String,
    pub telephone: String,
    pub address: PostalAddress,
    pub geo: GeoCoordinates,
    pub same_as: Vec<String>,
}

pub fn local_business() -> LocalBusiness {
    LocalBusiness {
        context: "https://schema.org".to_string(),
        schema_type: "LocalBusiness".to_string(),
        name: BUSINESS_NAME.to_string(),
        image: "https://source.unsplash.com/featured/?logistics".to_string(),
        url: CANONICAL_URL.to_string(),
        telephone: TELEPHONE.to_string(),
        address: PostalAddress {
            schema_type: "PostalAddress".to_string(),
            street_address: "Jamshedpur".to_string(),
            address_locality: "Jamshedpur".to_string(),
            postal_code: "831001".to_string(),
            address_country: "IN".to_string(),
        },
        geo: GeoCoordinates {
            schema_type: "GeoCoordinates".to_string(),
            latitude: 22.8046,
            longitude: 86.2029,
        },
        same_as: vec![MAPS_URL.to_string()],
    }
}

pub fn structured_data_json() -> String {
    serde_json::to_string_pretty(&local_business())
        .expect("LocalBusiness serializes to plain JSON")
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ManifestIcon {
    pub src: String,
    pub sizes: String,
    #[serde(rename = "type")]
    pub mime_type: String,
}

/// Installability descriptor; opaque to the rest of the app.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct WebManifest {
    pub name: String,
    pub short_name: String,
    pub start_url: String,
    pub display: String,
    pub background_color: String,
    pub theme_color: String,
    pub icons: Vec<ManifestIcon>,
}

pub fn manifest() -> WebManifest {
    WebManifest {
        name: BUSINESS_NAME.to_string(),
        short_name: "Mamta".to_string(),
        start_url: "/".to_string(),
        display: "standalone".to_string(),
        background_color: "#020617".to_string(),
        theme_color: "#172554".to_string(),
        icons: vec![
            ManifestIcon {
                src: "/icons/icon-192.png".to_string(),
                sizes: "192x192".to_string(),
                mime_type: "image/png".to_string(),
            },
            ManifestIcon {
                src: "/icons/icon-512.png".to_string(),
                sizes: "512x512".to_string(),
                mime_type: "image/png".to_string(),
            },
        ],
    }
}

pub fn manifest_json() -> String {
    serde_json::to_string(&manifest()).expect("WebManifest serializes to plain JSON")
}

/// The manifest link target. A data URI keeps the head self-contained; the
/// platform treats it like any other manifest URL.
pub fn manifest_data_uri() -> String {
    format!(
        "data:application/manifest+json;base64,{}",
        assets::encode_base64(manifest_json().as_bytes())
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn structured_data_keeps_schema_org_keys() {
        let json = structured_data_json();
        assert!(json.contains("\"@context\": \"https://schema.org\""));
        assert!(json.contains("\"@type\": \"LocalBusiness\""));
        assert!(json.contains("\"name\": \"Mamta Enterprises\""));
        assert!(json.contains("\"postalCode\": \"831001\""));
        assert!(json.contains("22.8046"));

        let parsed: LocalBusiness = serde_json::from_str(&json).expect("round trip");
        assert_eq!(parsed, local_business());
    }

    #[test]
    fn manifest_describes_the_installable_app() {
        let parsed: WebManifest =
            serde_json::from_str(&manifest_json()).expect("round trip");
        assert_eq!(parsed.name, BUSINESS_NAME);
        assert_eq!(parsed.start_url, "/");
        assert_eq!(parsed.icons.len(), 2);
    }

    #[test]
    fn manifest_link_is_a_data_uri() {
        assert!(manifest_data_uri().starts_with("data:application/manifest+json;base64,"));
    }
}
