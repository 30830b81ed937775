//! Profile domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ProfileRole {
    Customer,
    Staff,
    Admin,
}

impl ProfileRole {
    /// Whether this role may credit stamps and redeem rewards.
    pub fn is_staff(self) -> bool {
        matches!(self, ProfileRole::Staff | ProfileRole::Admin)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub id: Uuid,
    pub email: String,
    pub role: ProfileRole,
    /// Tenant code this profile belongs to. Every tenant-scoped operation
    /// must check this against the active tenant before acting.
    pub client_code: String,
    pub email_opt_in: bool,
    /// Current stamp balance, never negative.
    pub stamps: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields required to create a new profile.
///
/// New profiles start with zero stamps and email opt-in enabled.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateProfile {
    pub email: String,
    pub role: ProfileRole,
    pub client_code: String,
}

/// Fields that can be updated on an existing profile.
///
/// Stamp balances change only through the dedicated credit/debit
/// repository operations.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UpdateProfile {
    pub email: Option<String>,
    pub role: Option<ProfileRole>,
    pub client_code: Option<String>,
    pub email_opt_in: Option<bool>,
}
