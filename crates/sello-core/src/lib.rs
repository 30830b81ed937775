//! Sello Core — domain models, repository traits, and pure loyalty logic.
//!
//! These are the core types shared across all crates. The storage
//! implementations live in `sello-db`; request-scoped services live in
//! `sello-loyalty`.

pub mod dashboard;
pub mod error;
pub mod loyalty;
pub mod models;
pub mod repository;
