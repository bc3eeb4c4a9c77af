//! In-memory store
//!
//! Backs the service when `database.backend = "memory"` and in tests.
//! Records live for the lifetime of the process only.

use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;
use crate::database::store::{ContactStore, EventStore};
use crate::models::{Contact, ContactDraft, CreateEventRequest, Event, EventSummary};
use crate::utils::errors::{StovaSpotError, Result};

#[derive(Debug, Default)]
struct MemoryState {
    /// Insertion order
    events: Vec<Event>,
    /// Insertion order
    contacts: Vec<Contact>,
}

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    state: Arc<RwLock<MemoryState>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EventStore for MemoryStore {
    async fn create(&self, request: CreateEventRequest) -> Result<Event> {
        let event = Event {
            id: Uuid::new_v4(),
            name: request.name.trim().to_string(),
            description: request.stored_description(),
            created_at: Utc::now(),
        };

        self.state.write().await.events.push(event.clone());
        Ok(event)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Event>> {
        let state = self.state.read().await;
        Ok(state.events.iter().find(|e| e.id == id).cloned())
    }

    async fn list_with_counts(&self) -> Result<Vec<EventSummary>> {
        let state = self.state.read().await;
        let summaries = state
            .events
            .iter()
            .rev()
            .map(|event| EventSummary {
                id: event.id,
                name: event.name.clone(),
                description: event.description.clone(),
                created_at: event.created_at,
                contact_count: state.contacts.iter().filter(|c| c.event_id == event.id).count() as i64,
            })
            .collect();

        Ok(summaries)
    }
}

#[async_trait]
impl ContactStore for MemoryStore {
    async fn list_by_event(&self, event_id: Uuid, is_reviewed: Option<bool>) -> Result<Vec<Contact>> {
        let state = self.state.read().await;
        let contacts = state
            .contacts
            .iter()
            .rev()
            .filter(|c| c.event_id == event_id)
            .filter(|c| is_reviewed.map_or(true, |flag| c.is_reviewed == flag))
            .cloned()
            .collect();

        Ok(contacts)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Contact>> {
        let state = self.state.read().await;
        Ok(state.contacts.iter().find(|c| c.id == id).cloned())
    }

    async fn emails_for_event(&self, event_id: Uuid) -> Result<Vec<String>> {
        let state = self.state.read().await;
        Ok(state
            .contacts
            .iter()
            .filter(|c| c.event_id == event_id)
            .map(|c| c.email.clone())
            .collect())
    }

    async fn insert_many(&self, event_id: Uuid, drafts: Vec<ContactDraft>) -> Result<u64> {
        let mut state = self.state.write().await;
        if !state.events.iter().any(|e| e.id == event_id) {
            return Err(StovaSpotError::event_not_found(event_id));
        }

        let created_at = Utc::now();
        let created = drafts.len() as u64;
        state.contacts.extend(
            drafts
                .into_iter()
                .map(|draft| Contact::from_draft(event_id, draft.into_stored(), created_at)),
        );

        Ok(created)
    }

    async fn set_reviewed(&self, id: Uuid, is_reviewed: bool) -> Result<Contact> {
        let mut state = self.state.write().await;
        let contact = state
            .contacts
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| StovaSpotError::contact_not_found(id))?;

        contact.is_reviewed = is_reviewed;
        Ok(contact.clone())
    }

    async fn set_reviewed_many(&self, ids: &[Uuid], is_reviewed: bool) -> Result<Vec<Contact>> {
        let mut state = self.state.write().await;

        // Check every id before touching anything so a miss changes nothing
        if let Some(missing) = ids.iter().find(|id| !state.contacts.iter().any(|c| c.id == **id)) {
            return Err(StovaSpotError::contact_not_found(missing));
        }

        let mut updated = Vec::with_capacity(ids.len());
        for id in ids {
            if let Some(contact) = state.contacts.iter_mut().find(|c| c.id == *id) {
                contact.is_reviewed = is_reviewed;
                updated.push(contact.clone());
            }
        }

        Ok(updated)
    }

    async fn delete(&self, id: Uuid) -> Result<()> {
        let mut state = self.state.write().await;
        let before = state.contacts.len();
        state.contacts.retain(|c| c.id != id);

        if state.contacts.len() == before {
            return Err(StovaSpotError::contact_not_found(id));
        }

        Ok(())
    }

    async fn health_check(&self) -> Result<()> {
        Ok(())
    }
}
