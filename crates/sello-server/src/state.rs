//! Shared application state.

use sello_core::models::config::ClientConfig;
use sello_db::repository::{SurrealProfileRepository, SurrealShopRepository};
use sello_loyalty::resolver::ConfigResolver;
use sello_loyalty::service::LoyaltyService;
use surrealdb::{Connection, Surreal};
use tracing::warn;

/// Per-request dependencies, cloned into every handler.
///
/// Generic over the SurrealDB connection so tests can run against the
/// in-memory engine.
pub struct AppState<C: Connection> {
    pub resolver: ConfigResolver<SurrealShopRepository<C>>,
    pub loyalty: LoyaltyService<SurrealProfileRepository<C>>,
    pub tenant_code: String,
}

impl<C: Connection> Clone for AppState<C> {
    fn clone(&self) -> Self {
        Self {
            resolver: self.resolver.clone(),
            loyalty: self.loyalty.clone(),
            tenant_code: self.tenant_code.clone(),
        }
    }
}

impl<C: Connection> AppState<C> {
    pub fn new(db: Surreal<C>, tenant_code: String) -> Self {
        Self {
            resolver: ConfigResolver::new(SurrealShopRepository::new(db.clone())),
            loyalty: LoyaltyService::new(SurrealProfileRepository::new(db)),
            tenant_code,
        }
    }

    /// Resolve the active tenant's configuration, degrading to the
    /// hardcoded fallback when resolution fails. Branding fetches never
    /// take a page down.
    pub async fn resolve_or_fallback(&self) -> ClientConfig {
        match self.resolver.resolve(&self.tenant_code).await {
            Ok(config) => config,
            Err(e) => {
                warn!(
                    tenant = %self.tenant_code,
                    error = %e,
                    "Config resolution failed, serving fallback"
                );
                ClientConfig::fallback()
            }
        }
    }
}
