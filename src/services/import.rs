//! Contact import service
//!
//! Partitions incoming drafts into new and already-known contacts of an event,
//! keyed by case-insensitive email, and stores only the new ones.

use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, info};
use uuid::Uuid;
use crate::config::ImportConfig;
use crate::database::store::{ContactStore, EventStore};
use crate::ingest;
use crate::models::{ContactDraft, ImportResult};
use crate::utils::errors::{StovaSpotError, Result};
use crate::utils::helpers::email_key;
use crate::utils::logging::log_import;

/// Drafts split by whether their email is already on file
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Partition {
    pub new: Vec<ContactDraft>,
    pub duplicates: Vec<ContactDraft>,
}

/// Split `drafts` against the emails already stored for the event.
///
/// With `within_batch` unset, two drafts sharing an email that is not yet on
/// file are both new. Empty emails are never matched against each other
/// inside a batch.
pub fn partition_drafts(existing_emails: &[String], drafts: Vec<ContactDraft>, within_batch: bool) -> Partition {
    let mut known: HashSet<String> = existing_emails.iter().map(|e| email_key(e)).collect();
    let mut partition = Partition::default();

    for draft in drafts {
        let key = email_key(&draft.email);
        if known.contains(&key) {
            partition.duplicates.push(draft);
            continue;
        }

        if within_batch && !key.is_empty() {
            known.insert(key);
        }
        partition.new.push(draft);
    }

    partition
}

fn summary_message(new_count: usize, duplicate_count: usize) -> String {
    format!(
        "Imported {} new contacts. {} duplicates ignored.",
        new_count, duplicate_count
    )
}

#[derive(Clone)]
pub struct ImportService {
    events: Arc<dyn EventStore>,
    contacts: Arc<dyn ContactStore>,
    config: ImportConfig,
}

impl ImportService {
    pub fn new(events: Arc<dyn EventStore>, contacts: Arc<dyn ContactStore>, config: ImportConfig) -> Self {
        Self { events, contacts, config }
    }

    /// Store the drafts that are not yet on file for `event_id`
    pub async fn import_contacts(&self, event_id: Uuid, drafts: Vec<ContactDraft>) -> Result<ImportResult> {
        if drafts.is_empty() {
            return Err(StovaSpotError::validation(
                "Contacts array is required and cannot be empty",
            ));
        }

        if self.events.find_by_id(event_id).await?.is_none() {
            return Err(StovaSpotError::event_not_found(event_id));
        }

        let received = drafts.len();
        let existing = self.contacts.emails_for_event(event_id).await?;
        debug!(event_id = %event_id, existing = existing.len(), received = received, "Deduplicating import");

        let Partition { new, duplicates } =
            partition_drafts(&existing, drafts, self.config.dedup_within_batch);
        let new_count = new.len();
        let duplicate_count = duplicates.len();

        let created_count = if new.is_empty() {
            0
        } else {
            self.contacts.insert_many(event_id, new).await?
        };

        log_import(event_id, received, created_count, duplicate_count);

        Ok(ImportResult {
            created_count,
            new_count,
            duplicate_count,
            message: summary_message(new_count, duplicate_count),
        })
    }

    /// Parse a CSV export and import its rows
    pub async fn import_csv(&self, event_id: Uuid, text: &str) -> Result<ImportResult> {
        let drafts = ingest::drafts_from_csv(text)?;
        info!(event_id = %event_id, drafts = drafts.len(), "CSV export normalized");
        self.import_contacts(event_id, drafts).await
    }
}
