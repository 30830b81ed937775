//! HTTP handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::{StatusCode, header};
use axum::response::{Html, IntoResponse};
use sello_core::dashboard::DashboardVariant;
use sello_core::error::SelloError;
use sello_core::loyalty::RewardProgress;
use sello_core::models::config::ClientConfig;
use serde::{Deserialize, Serialize};
use surrealdb::Connection;
use uuid::Uuid;

use crate::error::ApiError;
use crate::manifest::manifest_from_config;
use crate::state::AppState;

/// Resolved tenant configuration for the frontend.
///
/// Degrades to the fallback configuration on resolution failure; a
/// branding fetch must never take the page down.
pub async fn get_config<C: Connection>(
    State(state): State<AppState<C>>,
) -> Json<ClientConfig> {
    Json(state.resolve_or_fallback().await)
}

/// PWA manifest projected from the resolved configuration.
pub async fn get_manifest<C: Connection>(State(state): State<AppState<C>>) -> impl IntoResponse {
    let config = state.resolve_or_fallback().await;
    (
        [(header::CONTENT_TYPE, "application/manifest+json")],
        Json(manifest_from_config(&config)),
    )
}

#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub variant: DashboardVariant,
}

/// Which admin dashboard variant the active tenant gets.
pub async fn get_dashboard<C: Connection>(
    State(state): State<AppState<C>>,
) -> Json<DashboardResponse> {
    Json(DashboardResponse {
        variant: DashboardVariant::for_code(&state.tenant_code),
    })
}

/// Stamp count and reward progress for one profile.
///
/// Unlike the branding endpoints, stamp operations never run on the
/// fallback ruleset: a wrong threshold would credit or debit the wrong
/// number of stamps, so resolution failures surface as errors.
pub async fn get_card<C: Connection>(
    State(state): State<AppState<C>>,
    Path(profile_id): Path<Uuid>,
) -> Result<Json<RewardProgress>, ApiError> {
    let config = state.resolver.resolve(&state.tenant_code).await?;
    let progress = state
        .loyalty
        .card_status(&state.tenant_code, profile_id, &config.rules)
        .await?;
    Ok(Json(progress))
}

#[derive(Debug, Deserialize)]
pub struct CreditStampsRequest {
    pub actor_id: Uuid,
    pub profile_id: Uuid,
    pub count: u32,
}

/// Staff credits stamps after scanning a customer's QR code.
pub async fn credit_stamps<C: Connection>(
    State(state): State<AppState<C>>,
    Json(req): Json<CreditStampsRequest>,
) -> Result<Json<RewardProgress>, ApiError> {
    let config = state.resolver.resolve(&state.tenant_code).await?;
    let progress = state
        .loyalty
        .credit_stamps(
            &state.tenant_code,
            req.actor_id,
            req.profile_id,
            req.count,
            &config.rules,
        )
        .await?;
    Ok(Json(progress))
}

#[derive(Debug, Deserialize)]
pub struct RedeemRequest {
    pub actor_id: Uuid,
}

/// Staff redeems a customer's reward.
pub async fn redeem_reward<C: Connection>(
    State(state): State<AppState<C>>,
    Path(profile_id): Path<Uuid>,
    Json(req): Json<RedeemRequest>,
) -> Result<Json<RewardProgress>, ApiError> {
    let config = state.resolver.resolve(&state.tenant_code).await?;
    let progress = state
        .loyalty
        .redeem_reward(&state.tenant_code, req.actor_id, profile_id, &config.rules)
        .await?;
    Ok(Json(progress))
}

// -----------------------------------------------------------------------
// Unsubscribe (HTML responder)
// -----------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct UnsubscribeParams {
    pub token: Option<String>,
}

/// One-click unsubscribe link target from marketing emails.
pub async fn unsubscribe<C: Connection>(
    State(state): State<AppState<C>>,
    Query(params): Query<UnsubscribeParams>,
) -> (StatusCode, Html<String>) {
    let Some(token) = params.token else {
        return (
            StatusCode::BAD_REQUEST,
            Html(error_page("Missing unsubscribe token.")),
        );
    };

    match state.loyalty.unsubscribe(&token).await {
        Ok(email) => (StatusCode::OK, Html(confirmation_page(&email))),
        Err(SelloError::Validation { .. }) => (
            StatusCode::BAD_REQUEST,
            Html(error_page("This unsubscribe link is not valid.")),
        ),
        Err(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Html(error_page("Something went wrong. Please try again later.")),
        ),
    }
}

fn confirmation_page(email: &str) -> String {
    format!(
        "<!DOCTYPE html>\
         <html><head><meta charset=\"utf-8\"><title>Unsubscribed</title></head>\
         <body><h1>You are unsubscribed</h1>\
         <p>{email} will no longer receive our emails.</p>\
         </body></html>"
    )
}

fn error_page(message: &str) -> String {
    format!(
        "<!DOCTYPE html>\
         <html><head><meta charset=\"utf-8\"><title>Unsubscribe failed</title></head>\
         <body><h1>Unsubscribe failed</h1>\
         <p>{message}</p>\
         </body></html>"
    )
}
