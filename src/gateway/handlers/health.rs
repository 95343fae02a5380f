//! Health check handler

use std::sync::Arc;

use axum::{Json, extract::State};
use utoipa::ToSchema;

use super::super::state::{AppState, now_ms};

/// Health check response data
#[derive(serde::Serialize, ToSchema)]
pub struct HealthResponse {
    /// Server timestamp in milliseconds
    #[schema(example = 1703494800000_u64)]
    pub timestamp_ms: u64,
    /// Milliseconds since startup
    pub uptime_ms: u64,
}

/// Health check endpoint
///
/// The service has no external dependencies, so health is simply
/// liveness: 200 OK with the server timestamp and uptime.
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service healthy", body = HealthResponse)
    ),
    tag = "System"
)]
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let now = now_ms();
    Json(HealthResponse {
        timestamp_ms: now,
        uptime_ms: now.saturating_sub(state.started_at_ms),
    })
}
