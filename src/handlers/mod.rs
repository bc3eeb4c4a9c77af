//! HTTP handlers module
//!
//! This module wires the JSON API routes onto the service layer.

pub mod contacts;
pub mod error;
pub mod events;

use std::sync::Arc;
use axum::extract::State;
use axum::http::StatusCode;
use axum::middleware::from_fn;
use axum::routing::{get, patch, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use tower_http::cors::{Any, CorsLayer};
use crate::middleware::logging::log_requests;
use crate::services::ServiceFactory;

/// Shared state of every handler
pub type AppState = Arc<ServiceFactory>;

/// Build the application router
pub fn router(services: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health))
        .route("/events", get(events::list_events).post(events::create_event))
        .route(
            "/contacts",
            get(contacts::list_contacts)
                .post(contacts::import_contacts)
                .patch(contacts::bulk_review),
        )
        .route("/contacts/import", post(contacts::import_csv))
        .route(
            "/contacts/{id}",
            patch(contacts::update_contact).delete(contacts::delete_contact),
        )
        .layer(from_fn(log_requests))
        .layer(cors)
        .with_state(services)
}

/// `GET /health`
async fn health(State(services): State<AppState>) -> (StatusCode, Json<Value>) {
    let status = services.health_check().await;
    if status.is_healthy() {
        (StatusCode::OK, Json(json!({ "status": "ok" })))
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, Json(json!({ "status": "unavailable" })))
    }
}
