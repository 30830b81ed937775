//! SurrealDB repository implementations.

mod profile;
mod shop;

pub use profile::SurrealProfileRepository;
pub use shop::SurrealShopRepository;
