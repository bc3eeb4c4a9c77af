//! Contact model

use serde::{Deserialize, Deserializer, Serialize};
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;
use crate::config::BulkMode;

/// A stored attendee record belonging to one event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub registration_date: Option<String>,
    pub last_modified_date: Option<String>,
    pub cancellation_date: Option<String>,
    pub attendee_category: Option<String>,
    pub registration_status: Option<String>,
    pub is_reviewed: bool,
    pub event_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl Contact {
    /// Materialize a draft as a new, unreviewed contact of `event_id`
    pub fn from_draft(event_id: Uuid, draft: ContactDraft, created_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            first_name: draft.first_name,
            last_name: draft.last_name,
            email: draft.email,
            registration_date: draft.registration_date,
            last_modified_date: draft.last_modified_date,
            cancellation_date: draft.cancellation_date,
            attendee_category: draft.attendee_category,
            registration_status: draft.registration_status,
            is_reviewed: false,
            event_id,
            created_at,
        }
    }
}

/// A normalized contact that has not been stored yet
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactDraft {
    #[serde(deserialize_with = "null_as_empty")]
    pub first_name: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub last_name: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub email: String,
    pub registration_date: Option<String>,
    pub last_modified_date: Option<String>,
    pub cancellation_date: Option<String>,
    pub attendee_category: Option<String>,
    pub registration_status: Option<String>,
}

/// Explicit `null` reads the same as a missing key
fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl ContactDraft {
    pub fn new(first_name: &str, last_name: &str, email: &str) -> Self {
        Self {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            email: email.to_string(),
            ..Default::default()
        }
    }

    /// Empty optional strings are stored as absent
    pub fn into_stored(self) -> Self {
        fn present(value: Option<String>) -> Option<String> {
            value.filter(|v| !v.is_empty())
        }

        Self {
            registration_date: present(self.registration_date),
            last_modified_date: present(self.last_modified_date),
            cancellation_date: present(self.cancellation_date),
            attendee_category: present(self.attendee_category),
            registration_status: present(self.registration_status),
            ..self
        }
    }
}

/// Body of `POST /contacts`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportContactsRequest {
    #[serde(default)]
    pub event_id: Option<String>,
    #[serde(default)]
    pub contacts: Option<Vec<ContactDraft>>,
}

/// Outcome of an import call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportResult {
    pub created_count: u64,
    pub new_count: usize,
    #[serde(rename = "duplicates")]
    pub duplicate_count: usize,
    pub message: String,
}

/// Query string of `GET /contacts`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactListQuery {
    pub event_id: Option<String>,
    pub is_reviewed: Option<String>,
}

impl ContactListQuery {
    /// Any present value other than `true` filters on unreviewed contacts
    pub fn reviewed_filter(&self) -> Option<bool> {
        self.is_reviewed.as_deref().map(|v| v == "true")
    }
}

/// Body of `PATCH /contacts/{id}`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateContactRequest {
    #[serde(default)]
    pub is_reviewed: Option<bool>,
}

/// Body of `PATCH /contacts`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkReviewRequest {
    #[serde(default)]
    pub ids: Vec<Uuid>,
    #[serde(default)]
    pub is_reviewed: Option<bool>,
    #[serde(default)]
    pub mode: Option<BulkMode>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkFailure {
    pub id: Uuid,
    pub error: String,
}

/// Result of a bulk review
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkReviewOutcome {
    pub is_reviewed: bool,
    pub updated: Vec<Uuid>,
    pub failed: Vec<BulkFailure>,
}

impl BulkReviewOutcome {
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}
