//! Tenant configuration model.
//!
//! Each shop stores a partial configuration blob ([`ConfigPatch`]) which is
//! merged field-wise over the hardcoded fallback ([`ClientConfig::fallback`])
//! at resolution time. The merged result is validated before it reaches any
//! caller, so a [`ClientConfig`] in hand is always fully populated and its
//! reward threshold is always positive.

use serde::{Deserialize, Serialize};

use crate::error::{SelloError, SelloResult};

/// Fully-populated per-tenant configuration.
///
/// `code` and `name` are authoritative values taken from the shop row's
/// dedicated columns, never from the stored blob.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClientConfig {
    pub code: String,
    pub name: String,
    pub theme: Theme,
    pub texts: Texts,
    pub rules: Rules,
    pub assets: Assets,
    pub features: Features,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    pub primary_color: String,
    pub secondary_color: String,
    pub font_family: String,
}

/// Tenant-specific copy strings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Texts {
    pub welcome: String,
    pub card_title: String,
    pub reward_ready: String,
    pub footer: String,
}

/// Business rules.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Rules {
    /// Stamps required to unlock a reward. Invariant: `>= 1`.
    pub stamps_per_reward: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Assets {
    pub logo_url: String,
    pub favicon_url: String,
    pub icon_192_url: String,
    pub icon_512_url: String,
}

/// Flags gating optional UI surfaces.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Features {
    pub menu: bool,
    pub news_feed: bool,
    /// External shop link; `None` hides the buy button.
    pub buy_button_url: Option<String>,
}

impl ClientConfig {
    /// Hardcoded default configuration.
    ///
    /// Used both as the merge base for stored patches and as the degraded
    /// configuration when resolution fails entirely.
    pub fn fallback() -> Self {
        Self {
            code: "default".into(),
            name: "Coffee Card".into(),
            theme: Theme {
                primary_color: "#6F4E37".into(),
                secondary_color: "#ffffff".into(),
                font_family: "sans-serif".into(),
            },
            texts: Texts {
                welcome: "Welcome back!".into(),
                card_title: "Your stamp card".into(),
                reward_ready: "Your next coffee is on us!".into(),
                footer: "Thanks for stopping by.".into(),
            },
            rules: Rules {
                stamps_per_reward: 10,
            },
            assets: Assets {
                logo_url: "/icons/logo.png".into(),
                favicon_url: "/icons/favicon.ico".into(),
                icon_192_url: "/icons/icon-192.png".into(),
                icon_512_url: "/icons/icon-512.png".into(),
            },
            features: Features {
                menu: true,
                news_feed: false,
                buy_button_url: None,
            },
        }
    }

    /// Check the invariants a merged configuration must satisfy.
    pub fn validate(&self) -> SelloResult<()> {
        if self.code.is_empty() {
            return Err(SelloError::Validation {
                message: "config code must not be empty".into(),
            });
        }
        if self.name.is_empty() {
            return Err(SelloError::Validation {
                message: "config name must not be empty".into(),
            });
        }
        if self.rules.stamps_per_reward == 0 {
            return Err(SelloError::Validation {
                message: "rules.stampsPerReward must be a positive integer".into(),
            });
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Stored override blob
// ---------------------------------------------------------------------------

/// The per-tenant override blob as stored in the `shop.config` column.
///
/// Every section and field is optional; merging fills the gaps from the
/// fallback. A patch setting only `theme.primaryColor` keeps the default
/// `secondaryColor` and `fontFamily`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConfigPatch {
    pub theme: Option<ThemePatch>,
    pub texts: Option<TextsPatch>,
    pub rules: Option<RulesPatch>,
    pub assets: Option<AssetsPatch>,
    pub features: Option<FeaturesPatch>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ThemePatch {
    pub primary_color: Option<String>,
    pub secondary_color: Option<String>,
    pub font_family: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TextsPatch {
    pub welcome: Option<String>,
    pub card_title: Option<String>,
    pub reward_ready: Option<String>,
    pub footer: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RulesPatch {
    pub stamps_per_reward: Option<u32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AssetsPatch {
    pub logo_url: Option<String>,
    pub favicon_url: Option<String>,
    pub icon_192_url: Option<String>,
    pub icon_512_url: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FeaturesPatch {
    pub menu: Option<bool>,
    pub news_feed: Option<bool>,
    pub buy_button_url: Option<String>,
}

impl ConfigPatch {
    /// Merge this patch over a complete base configuration.
    ///
    /// `code` and `name` of the base are left untouched; the resolver
    /// overwrites them from the authoritative row columns afterwards.
    pub fn merge_over(self, base: ClientConfig) -> ClientConfig {
        let mut out = base;

        if let Some(theme) = self.theme {
            if let Some(v) = theme.primary_color {
                out.theme.primary_color = v;
            }
            if let Some(v) = theme.secondary_color {
                out.theme.secondary_color = v;
            }
            if let Some(v) = theme.font_family {
                out.theme.font_family = v;
            }
        }

        if let Some(texts) = self.texts {
            if let Some(v) = texts.welcome {
                out.texts.welcome = v;
            }
            if let Some(v) = texts.card_title {
                out.texts.card_title = v;
            }
            if let Some(v) = texts.reward_ready {
                out.texts.reward_ready = v;
            }
            if let Some(v) = texts.footer {
                out.texts.footer = v;
            }
        }

        if let Some(rules) = self.rules {
            if let Some(v) = rules.stamps_per_reward {
                out.rules.stamps_per_reward = v;
            }
        }

        if let Some(assets) = self.assets {
            if let Some(v) = assets.logo_url {
                out.assets.logo_url = v;
            }
            if let Some(v) = assets.favicon_url {
                out.assets.favicon_url = v;
            }
            if let Some(v) = assets.icon_192_url {
                out.assets.icon_192_url = v;
            }
            if let Some(v) = assets.icon_512_url {
                out.assets.icon_512_url = v;
            }
        }

        if let Some(features) = self.features {
            if let Some(v) = features.menu {
                out.features.menu = v;
            }
            if let Some(v) = features.news_feed {
                out.features.news_feed = v;
            }
            if let Some(v) = features.buy_button_url {
                out.features.buy_button_url = Some(v);
            }
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_is_valid() {
        ClientConfig::fallback().validate().unwrap();
    }

    #[test]
    fn partial_theme_patch_keeps_other_defaults() {
        let patch: ConfigPatch = serde_json::from_value(serde_json::json!({
            "theme": { "primaryColor": "#F5A623" }
        }))
        .unwrap();

        let merged = patch.merge_over(ClientConfig::fallback());

        assert_eq!(merged.theme.primary_color, "#F5A623");
        assert_eq!(merged.theme.secondary_color, "#ffffff");
        assert_eq!(merged.theme.font_family, "sans-serif");
        assert_eq!(merged.rules.stamps_per_reward, 10);
    }

    #[test]
    fn empty_patch_reproduces_fallback() {
        let merged = ConfigPatch::default().merge_over(ClientConfig::fallback());
        assert_eq!(merged, ClientConfig::fallback());
    }

    #[test]
    fn rules_patch_overrides_threshold() {
        let patch: ConfigPatch = serde_json::from_value(serde_json::json!({
            "rules": { "stampsPerReward": 8 },
            "features": { "newsFeed": true, "buyButtonUrl": "https://shop.example" }
        }))
        .unwrap();

        let merged = patch.merge_over(ClientConfig::fallback());

        assert_eq!(merged.rules.stamps_per_reward, 8);
        assert!(merged.features.news_feed);
        assert_eq!(
            merged.features.buy_button_url.as_deref(),
            Some("https://shop.example")
        );
    }

    #[test]
    fn zero_threshold_fails_validation() {
        let mut config = ClientConfig::fallback();
        config.rules.stamps_per_reward = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn type_malformed_blob_is_rejected_by_serde() {
        // stampsPerReward must be an integer, not a string.
        let result: Result<ConfigPatch, _> = serde_json::from_value(serde_json::json!({
            "rules": { "stampsPerReward": "ten" }
        }));
        assert!(result.is_err());
    }
}
