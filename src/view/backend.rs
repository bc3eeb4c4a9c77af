//! Remote side of the contact list controller

use async_trait::async_trait;
use uuid::Uuid;
use crate::models::{BulkReviewOutcome, Contact};
use crate::utils::errors::Result;

/// Where the controller loads contacts from and confirms review changes.
///
/// Implemented over HTTP by [`crate::client::ApiClient`] and in-process by
/// [`crate::services::ServiceFactory`].
#[async_trait]
pub trait ReviewBackend: Send + Sync {
    async fn list_contacts(&self, event_id: Uuid, is_reviewed: Option<bool>) -> Result<Vec<Contact>>;

    async fn set_reviewed(&self, contact_id: Uuid, is_reviewed: bool) -> Result<Contact>;

    /// All-or-nothing update of every id
    async fn set_reviewed_all(&self, contact_ids: &[Uuid], is_reviewed: bool) -> Result<BulkReviewOutcome>;
}
