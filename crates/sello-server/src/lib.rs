//! Sello Server — HTTP API for the stamp card PWA.
//!
//! One deployment serves one tenant, selected by configuration. Every
//! request re-resolves the tenant configuration from storage; there is no
//! process-wide config cache.

mod error;
mod handlers;
mod manifest;
mod state;

pub mod config;

use axum::Router;
use axum::routing::{get, post};
use surrealdb::Connection;

pub use error::ApiError;
pub use state::AppState;

/// Assemble the application router.
pub fn build_router<C: Connection>(state: AppState<C>) -> Router {
    Router::new()
        .route("/api/config", get(handlers::get_config::<C>))
        .route("/api/dashboard", get(handlers::get_dashboard::<C>))
        .route("/api/card/{profile_id}", get(handlers::get_card::<C>))
        .route(
            "/api/card/{profile_id}/redeem",
            post(handlers::redeem_reward::<C>),
        )
        .route("/api/admin/stamps", post(handlers::credit_stamps::<C>))
        .route("/manifest.webmanifest", get(handlers::get_manifest::<C>))
        .route("/unsubscribe", get(handlers::unsubscribe::<C>))
        .with_state(state)
}
