//! Domain models for Sello.

pub mod config;
pub mod profile;
pub mod shop;
