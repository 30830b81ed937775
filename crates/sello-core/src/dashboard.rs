//! Admin dashboard variant dispatch.
//!
//! A few tenants ship a bespoke admin dashboard; everyone else gets the
//! generic one. The set of bespoke tenants is closed, so dispatch is an
//! exhaustive enum match rather than a string-keyed lookup.

use serde::{Deserialize, Serialize};

/// Which admin dashboard a tenant sees.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DashboardVariant {
    PerezosoCafe,
    CafeAurora,
    TuesteNorte,
    Generic,
}

impl DashboardVariant {
    /// Select the dashboard for a tenant code. Unknown codes fall through
    /// to the generic variant.
    pub fn for_code(code: &str) -> Self {
        match code {
            "perezoso_cafe" => DashboardVariant::PerezosoCafe,
            "cafe_aurora" => DashboardVariant::CafeAurora,
            "tueste_norte" => DashboardVariant::TuesteNorte,
            _ => DashboardVariant::Generic,
        }
    }
}
