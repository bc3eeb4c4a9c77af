//! Review service implementation
//!
//! This service flips the reviewed flag on single contacts and applies bulk
//! review requests either independently per contact or as one transaction.

use std::sync::Arc;
use futures::future::join_all;
use tracing::{debug, info};
use uuid::Uuid;
use crate::config::{BulkMode, ReviewConfig};
use crate::database::store::ContactStore;
use crate::models::{BulkFailure, BulkReviewOutcome, Contact};
use crate::utils::errors::{StovaSpotError, Result};
use crate::utils::logging::{log_bulk_review_failure, log_review_change};

#[derive(Clone)]
pub struct ReviewService {
    contacts: Arc<dyn ContactStore>,
    config: ReviewConfig,
}

impl ReviewService {
    pub fn new(contacts: Arc<dyn ContactStore>, config: ReviewConfig) -> Self {
        Self { contacts, config }
    }

    /// Bulk mode used when a request does not name one
    pub fn default_bulk_mode(&self) -> BulkMode {
        self.config.bulk_mode
    }

    /// Set the reviewed flag of one contact
    pub async fn set_reviewed(&self, contact_id: Uuid, is_reviewed: bool) -> Result<Contact> {
        let contact = self.contacts.set_reviewed(contact_id, is_reviewed).await?;
        log_review_change(contact_id, is_reviewed);
        Ok(contact)
    }

    /// Flip the reviewed flag of one contact
    pub async fn toggle(&self, contact_id: Uuid) -> Result<Contact> {
        let current = self
            .contacts
            .find_by_id(contact_id)
            .await?
            .ok_or_else(|| StovaSpotError::contact_not_found(contact_id))?;

        self.set_reviewed(contact_id, !current.is_reviewed).await
    }

    /// Move every contact in `contact_ids` to `is_reviewed`.
    ///
    /// In best-effort mode a failed update does not undo the others. In
    /// transactional mode any failure fails the whole call and nothing changes.
    pub async fn bulk_set_reviewed(
        &self,
        contact_ids: &[Uuid],
        is_reviewed: bool,
        mode: Option<BulkMode>,
    ) -> Result<BulkReviewOutcome> {
        if contact_ids.is_empty() {
            return Err(StovaSpotError::validation("Select at least one contact"));
        }

        let mode = mode.unwrap_or(self.config.bulk_mode);
        debug!(count = contact_ids.len(), is_reviewed = is_reviewed, mode = ?mode, "Applying bulk review");

        match mode {
            BulkMode::Transactional => {
                let updated = self.contacts.set_reviewed_many(contact_ids, is_reviewed).await?;
                info!(count = updated.len(), is_reviewed = is_reviewed, "Bulk review committed");

                Ok(BulkReviewOutcome {
                    is_reviewed,
                    updated: updated.into_iter().map(|c| c.id).collect(),
                    failed: Vec::new(),
                })
            }
            BulkMode::BestEffort => {
                let results = join_all(
                    contact_ids
                        .iter()
                        .map(|id| self.contacts.set_reviewed(*id, is_reviewed)),
                )
                .await;

                let mut outcome = BulkReviewOutcome {
                    is_reviewed,
                    updated: Vec::new(),
                    failed: Vec::new(),
                };
                for (id, result) in contact_ids.iter().zip(results) {
                    match result {
                        Ok(contact) => outcome.updated.push(contact.id),
                        Err(e) => outcome.failed.push(BulkFailure { id: *id, error: e.to_string() }),
                    }
                }

                if !outcome.is_complete() {
                    log_bulk_review_failure(contact_ids.len(), outcome.failed.len(), is_reviewed);
                }

                Ok(outcome)
            }
        }
    }
}
