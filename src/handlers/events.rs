//! Event endpoints

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use crate::models::{CreateEventRequest, Event, EventSummary};
use crate::utils::errors::Result;
use super::AppState;

/// `GET /events`
pub async fn list_events(State(services): State<AppState>) -> Result<Json<Vec<EventSummary>>> {
    let events = services.event_service.list_events().await?;
    Ok(Json(events))
}

/// `POST /events`
pub async fn create_event(
    State(services): State<AppState>,
    payload: std::result::Result<Json<CreateEventRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Event>)> {
    let Json(request) = payload?;
    let event = services.event_service.create_event(request).await?;
    Ok((StatusCode::CREATED, Json(event)))
}
