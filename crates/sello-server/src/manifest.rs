//! PWA manifest projection.
//!
//! A pure projection of the resolved tenant configuration into the web
//! app manifest format; no independent logic.

use sello_core::models::config::ClientConfig;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct WebManifest {
    pub name: String,
    pub short_name: String,
    pub start_url: String,
    pub display: String,
    pub theme_color: String,
    pub background_color: String,
    pub icons: Vec<ManifestIcon>,
}

#[derive(Debug, Serialize)]
pub struct ManifestIcon {
    pub src: String,
    pub sizes: String,
    #[serde(rename = "type")]
    pub mime_type: String,
}

/// Project a resolved configuration into manifest fields.
pub fn manifest_from_config(config: &ClientConfig) -> WebManifest {
    WebManifest {
        name: config.name.clone(),
        short_name: config.name.clone(),
        start_url: "/".into(),
        display: "standalone".into(),
        theme_color: config.theme.primary_color.clone(),
        background_color: config.theme.secondary_color.clone(),
        icons: vec![
            ManifestIcon {
                src: config.assets.icon_192_url.clone(),
                sizes: "192x192".into(),
                mime_type: "image/png".into(),
            },
            ManifestIcon {
                src: config.assets.icon_512_url.clone(),
                sizes: "512x512".into(),
                mime_type: "image/png".into(),
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manifest_mirrors_config() {
        let mut config = ClientConfig::fallback();
        config.name = "Perezoso".into();
        config.theme.primary_color = "#F5A623".into();

        let manifest = manifest_from_config(&config);

        assert_eq!(manifest.name, "Perezoso");
        assert_eq!(manifest.theme_color, "#F5A623");
        assert_eq!(manifest.background_color, "#ffffff");
        assert_eq!(manifest.icons.len(), 2);
        assert_eq!(manifest.icons[0].sizes, "192x192");
    }
}
