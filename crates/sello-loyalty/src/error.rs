//! Loyalty service error types.

use sello_core::error::SelloError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoyaltyError {
    #[error("invalid tenant configuration: {0}")]
    ConfigInvalid(String),

    #[error("profile does not belong to tenant {tenant}")]
    TenantMismatch { tenant: String },

    #[error("{role} may not perform staff operations")]
    NotStaff { role: String },

    #[error("not enough stamps: {stamps} of {required}")]
    NotEligible { stamps: u32, required: u32 },

    #[error("invalid stamp count: {0}")]
    InvalidCount(String),

    #[error("invalid unsubscribe token: {0}")]
    TokenInvalid(String),
}

impl From<LoyaltyError> for SelloError {
    fn from(err: LoyaltyError) -> Self {
        match err {
            LoyaltyError::TenantMismatch { .. } | LoyaltyError::NotStaff { .. } => {
                SelloError::AuthorizationDenied {
                    reason: err.to_string(),
                }
            }
            LoyaltyError::ConfigInvalid(_)
            | LoyaltyError::NotEligible { .. }
            | LoyaltyError::InvalidCount(_)
            | LoyaltyError::TokenInvalid(_) => SelloError::Validation {
                message: err.to_string(),
            },
        }
    }
}
