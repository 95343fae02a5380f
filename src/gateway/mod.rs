//! HTTP gateway: router assembly and server loop
//!
//! The gateway is a thin, stateless transport layer over the calculator
//! core: each request is validated, dispatched and answered in a single
//! pass with no suspension points beyond the socket itself.

pub mod handlers;
pub mod openapi;
pub mod state;
pub mod types;

use std::sync::Arc;

use axum::{
    Router,
    extract::Request,
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use futures::FutureExt;
use tokio::net::TcpListener;

use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use state::AppState;
use types::ApiError;

/// Axum middleware translating unclassified faults into 500 responses.
///
/// A panic anywhere below this layer becomes the generic
/// `{"detail": "An error occurred: <message>"}` body instead of a
/// dropped connection, so the caller never observes an unhandled fault.
async fn catch_faults(request: Request, next: Next) -> Response {
    match std::panic::AssertUnwindSafe(next.run(request))
        .catch_unwind()
        .await
    {
        Ok(response) => response,
        Err(panic) => {
            let message = if let Some(s) = panic.downcast_ref::<&str>() {
                (*s).to_string()
            } else if let Some(s) = panic.downcast_ref::<String>() {
                s.clone()
            } else {
                "unexpected fault".to_string()
            };
            tracing::error!("request handler panicked: {}", message);
            ApiError::internal(message).into_response()
        }
    }
}

/// Build the application router
///
/// Kept separate from [`run_server`] so integration tests can drive the
/// router in-process without binding a socket.
pub fn app() -> Router {
    let state = Arc::new(AppState::new());

    Router::new()
        .route("/", get(handlers::root))
        .route("/operations", get(handlers::list_operations))
        .route("/calculate", post(handlers::calculate))
        .route("/health", get(handlers::health_check))
        .with_state(state)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", openapi::ApiDoc::openapi()))
        .layer(middleware::from_fn(catch_faults))
}

/// Start the HTTP server
pub async fn run_server(host: &str, port: u16) -> anyhow::Result<()> {
    let addr = format!("{}:{}", host, port);
    let listener = match TcpListener::bind(&addr).await {
        Ok(l) => l,
        Err(e) => {
            anyhow::bail!(
                "Failed to bind to {}: {} (port {} may already be in use)",
                addr,
                e,
                port
            );
        }
    };

    println!("🚀 Calculator API listening on http://{}", addr);
    println!("📖 API Docs: http://{}/docs", addr);
    tracing::info!("gateway listening on {}", addr);

    axum::serve(listener, app()).await?;
    Ok(())
}
