//! Shop domain model.
//!
//! A shop is one tenant of the platform. Its record key is the tenant
//! code; the `config` blob holds the partial configuration overrides
//! merged over defaults at resolution time.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Shop {
    /// Tenant code, unique across the platform (e.g., `perezoso_cafe`).
    pub code: String,
    /// Authoritative display name. Always wins over anything in `config`.
    pub name: String,
    /// Partial configuration overrides (see `models::config::ConfigPatch`).
    pub config: serde_json::Value,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields required to create a new shop.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateShop {
    pub code: String,
    pub name: String,
    pub config: Option<serde_json::Value>,
}

/// Fields that can be updated on an existing shop.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UpdateShop {
    pub name: Option<String>,
    pub config: Option<serde_json::Value>,
}
