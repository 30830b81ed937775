//! Sello Loyalty — request-scoped services over the core repositories.
//!
//! This crate provides:
//! - Tenant configuration resolution ([`resolver::ConfigResolver`])
//! - Stamp crediting, reward redemption, and unsubscribe flows
//!   ([`service::LoyaltyService`])
//! - The unsubscribe token codec ([`token`])
//!
//! Services are generic over the repository traits so this layer has no
//! dependency on the database crate.

pub mod error;
pub mod resolver;
pub mod service;
pub mod token;
