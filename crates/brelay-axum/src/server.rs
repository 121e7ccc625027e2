//! Axum HTTP server for the completion relay.
//!
//! This module provides the router and the `serve()` function that runs
//! the server on a pre-bound `TcpListener`.

use std::sync::Arc;

use axum::{
    Json, Router,
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tracing::{debug, error, info};

use brelay_core::ports::InferencePort;

use crate::models::{CompletionRequest, CompletionResponse, ErrorResponse};

/// Shared application state for the relay server.
#[derive(Clone)]
pub struct AppState {
    /// Port for invoking the upstream model service.
    pub inference: Arc<dyn InferencePort>,
}

/// Build the router with all routes and shared state.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health_check))
        .route("/invoke", post(invoke))
        .layer(cors)
        .with_state(state)
}

/// Run the server until the listener fails or the process exits.
///
/// # Errors
///
/// Returns an error if the server fails to run.
pub async fn serve(listener: TcpListener, state: AppState) -> anyhow::Result<()> {
    let addr = listener.local_addr()?;
    info!("Relay listening on {addr}");

    axum::serve(listener, create_router(state)).await?;
    Ok(())
}

/// Health check endpoint.
async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy"
    }))
}

/// Handle a completion request: validate, default, invoke once, map.
async fn invoke(State(state): State<AppState>, body: Bytes) -> Response {
    debug!("POST /invoke");

    let request: CompletionRequest = match serde_json::from_slice(&body) {
        Ok(request) => request,
        Err(e) => {
            error!("Failed to parse request: {e}");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::new(format!("invalid request body: {e}"))),
            )
                .into_response();
        }
    };

    // Reject before any upstream call; "missing" and "empty" are the
    // same failure to callers.
    let Some(inference_request) = request.resolve() else {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new("prompt is required")),
        )
            .into_response();
    };

    let model = inference_request.model_id.clone();

    // Single attempt. Every failure kind collapses into one 500 shape.
    match state.inference.invoke(&inference_request).await {
        Ok(completion) => Json(CompletionResponse { completion, model }).into_response(),
        Err(e) => {
            error!("Completion request failed: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new(e.to_string())),
            )
                .into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_health_check() {
        let response = health_check().await.into_response();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
