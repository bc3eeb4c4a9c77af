//! Storage traits shared by the PostgreSQL repositories and the in-memory store

use async_trait::async_trait;
use uuid::Uuid;
use crate::models::{Contact, ContactDraft, CreateEventRequest, Event, EventSummary};
use crate::utils::errors::Result;

#[async_trait]
pub trait EventStore: Send + Sync {
    /// Create a new event
    async fn create(&self, request: CreateEventRequest) -> Result<Event>;

    /// Find event by ID
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Event>>;

    /// All events with their contact counts, newest first
    async fn list_with_counts(&self) -> Result<Vec<EventSummary>>;
}

#[async_trait]
pub trait ContactStore: Send + Sync {
    /// Contacts of one event, newest first, optionally filtered on the reviewed flag
    async fn list_by_event(&self, event_id: Uuid, is_reviewed: Option<bool>) -> Result<Vec<Contact>>;

    /// Find contact by ID
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Contact>>;

    /// Emails of every contact of one event, as stored
    async fn emails_for_event(&self, event_id: Uuid) -> Result<Vec<String>>;

    /// Insert all drafts as unreviewed contacts of `event_id`, atomically.
    /// Returns the number of rows created.
    async fn insert_many(&self, event_id: Uuid, drafts: Vec<ContactDraft>) -> Result<u64>;

    /// Set the reviewed flag of one contact
    async fn set_reviewed(&self, id: Uuid, is_reviewed: bool) -> Result<Contact>;

    /// Set the reviewed flag of every contact in `ids`, all or nothing
    async fn set_reviewed_many(&self, ids: &[Uuid], is_reviewed: bool) -> Result<Vec<Contact>>;

    /// Delete one contact
    async fn delete(&self, id: Uuid) -> Result<()>;

    /// Check the store is reachable
    async fn health_check(&self) -> Result<()>;
}
