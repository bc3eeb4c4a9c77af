//! Contact endpoints
//!
//! Listing, JSON and CSV import, single and bulk review updates, deletion.

use axum::body::Bytes;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};
use uuid::Uuid;
use crate::models::{
    BulkReviewOutcome, BulkReviewRequest, Contact, ContactListQuery, ImportContactsRequest,
    ImportResult, UpdateContactRequest,
};
use crate::utils::errors::{StovaSpotError, Result};
use crate::utils::helpers::is_csv_upload;
use super::AppState;

type JsonPayload<T> = std::result::Result<Json<T>, JsonRejection>;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportQuery {
    pub event_id: Option<String>,
}

fn parse_event_id(value: Option<&str>) -> Result<Uuid> {
    let value = value
        .filter(|v| !v.is_empty())
        .ok_or_else(|| StovaSpotError::validation("Event ID is required"))?;
    Uuid::parse_str(value).map_err(|_| StovaSpotError::validation(format!("Invalid event ID: {}", value)))
}

/// Unparseable ids cannot name a stored contact
fn parse_contact_id(value: &str) -> Result<Uuid> {
    Uuid::parse_str(value).map_err(|_| StovaSpotError::contact_not_found(value))
}

/// `GET /contacts?eventId=&isReviewed=`
pub async fn list_contacts(
    State(services): State<AppState>,
    Query(query): Query<ContactListQuery>,
) -> Result<Json<Vec<Contact>>> {
    let event_id = parse_event_id(query.event_id.as_deref())?;
    let contacts = services
        .event_service
        .list_contacts(event_id, query.reviewed_filter())
        .await?;
    Ok(Json(contacts))
}

/// `POST /contacts`
pub async fn import_contacts(
    State(services): State<AppState>,
    payload: JsonPayload<ImportContactsRequest>,
) -> Result<(StatusCode, Json<ImportResult>)> {
    let Json(request) = payload?;
    let event_id = parse_event_id(request.event_id.as_deref())?;
    let drafts = request.contacts.unwrap_or_default();

    let result = services.import_service.import_contacts(event_id, drafts).await?;
    Ok((StatusCode::CREATED, Json(result)))
}

/// `POST /contacts/import?eventId=` with a `text/csv` body
pub async fn import_csv(
    State(services): State<AppState>,
    Query(query): Query<ImportQuery>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<(StatusCode, Json<ImportResult>)> {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok());
    if !is_csv_upload(None, content_type) {
        return Err(StovaSpotError::UnsupportedMediaType(
            content_type.unwrap_or("none").to_string(),
        ));
    }

    let event_id = parse_event_id(query.event_id.as_deref())?;
    let body = String::from_utf8(body.to_vec())
        .map_err(|_| StovaSpotError::validation("CSV body must be valid UTF-8"))?;
    let result = services.import_service.import_csv(event_id, &body).await?;
    Ok((StatusCode::CREATED, Json(result)))
}

/// `PATCH /contacts`
pub async fn bulk_review(
    State(services): State<AppState>,
    payload: JsonPayload<BulkReviewRequest>,
) -> Result<Json<BulkReviewOutcome>> {
    let Json(request) = payload?;
    let is_reviewed = request
        .is_reviewed
        .ok_or_else(|| StovaSpotError::validation("isReviewed is required"))?;

    let outcome = services
        .review_service
        .bulk_set_reviewed(&request.ids, is_reviewed, request.mode)
        .await?;
    Ok(Json(outcome))
}

/// `PATCH /contacts/{id}`
pub async fn update_contact(
    State(services): State<AppState>,
    Path(id): Path<String>,
    payload: JsonPayload<UpdateContactRequest>,
) -> Result<Json<Contact>> {
    let contact_id = parse_contact_id(&id)?;
    let Json(request) = payload?;
    let is_reviewed = request
        .is_reviewed
        .ok_or_else(|| StovaSpotError::validation("isReviewed is required"))?;

    let contact = services.review_service.set_reviewed(contact_id, is_reviewed).await?;
    Ok(Json(contact))
}

/// `DELETE /contacts/{id}`
pub async fn delete_contact(
    State(services): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>> {
    let contact_id = parse_contact_id(&id)?;
    services.event_service.delete_contact(contact_id).await?;
    Ok(Json(json!({ "success": true })))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_event_id() {
        assert!(matches!(parse_event_id(None), Err(StovaSpotError::Validation(_))));
        assert!(matches!(parse_event_id(Some("")), Err(StovaSpotError::Validation(_))));
        assert!(matches!(parse_event_id(Some("42")), Err(StovaSpotError::Validation(_))));

        let id = Uuid::new_v4();
        assert_eq!(parse_event_id(Some(&id.to_string())).unwrap(), id);
    }

    #[test]
    fn test_malformed_contact_id_is_not_found() {
        assert!(matches!(
            parse_contact_id("not-an-id"),
            Err(StovaSpotError::ContactNotFound { .. })
        ));
    }
}
