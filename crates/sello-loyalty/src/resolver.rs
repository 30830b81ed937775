//! Tenant configuration resolution.
//!
//! Resolution is request-scoped and stateless: every call re-fetches the
//! shop row, merges its override blob over the hardcoded defaults, and
//! validates the result. There is no caching and no retry; a failed
//! resolution is terminal for the current request and the caller decides
//! whether to degrade to [`ClientConfig::fallback`] or surface an error.

use sello_core::error::{SelloError, SelloResult};
use sello_core::models::config::{ClientConfig, ConfigPatch};
use sello_core::repository::ShopRepository;
use tracing::warn;

use crate::error::LoyaltyError;

/// Resolves a tenant code into a complete, validated [`ClientConfig`].
#[derive(Clone)]
pub struct ConfigResolver<S: ShopRepository> {
    shops: S,
}

impl<S: ShopRepository> ConfigResolver<S> {
    pub fn new(shops: S) -> Self {
        Self { shops }
    }

    /// Resolve a tenant code.
    ///
    /// Returns `NotFound` for absent codes, a validation error for
    /// malformed stored blobs, and never a partially-populated config.
    pub async fn resolve(&self, code: &str) -> SelloResult<ClientConfig> {
        if code.is_empty() {
            return Err(SelloError::Validation {
                message: "tenant code must not be empty".into(),
            });
        }

        let shop = self.shops.get_by_code(code).await?;

        // A type-malformed blob is rejected here, at load time, so bad
        // values never reach rendering or evaluation logic.
        let patch: ConfigPatch = serde_json::from_value(shop.config).map_err(|e| {
            warn!(code, error = %e, "Stored config blob is malformed");
            LoyaltyError::ConfigInvalid(e.to_string())
        })?;

        let mut config = patch.merge_over(ClientConfig::fallback());

        // `code` and `name` come from the row's dedicated columns so a
        // stale blob can never shadow them.
        config.code = shop.code;
        config.name = shop.name;

        config.validate()?;

        Ok(config)
    }
}
