//! Event service implementation

use std::sync::Arc;
use tracing::{debug, info};
use uuid::Uuid;
use crate::database::store::{ContactStore, EventStore};
use crate::models::{Contact, CreateEventRequest, Event, EventSummary};
use crate::utils::errors::{StovaSpotError, Result};

#[derive(Clone)]
pub struct EventService {
    events: Arc<dyn EventStore>,
    contacts: Arc<dyn ContactStore>,
}

impl EventService {
    pub fn new(events: Arc<dyn EventStore>, contacts: Arc<dyn ContactStore>) -> Self {
        Self { events, contacts }
    }

    /// Create a new event; the name must not be blank
    pub async fn create_event(&self, request: CreateEventRequest) -> Result<Event> {
        if request.name.trim().is_empty() {
            return Err(StovaSpotError::validation("Event name is required"));
        }

        let event = self.events.create(request).await?;
        info!(event_id = %event.id, name = %event.name, "Event created");
        Ok(event)
    }

    /// All events with contact counts, newest first
    pub async fn list_events(&self) -> Result<Vec<EventSummary>> {
        self.events.list_with_counts().await
    }

    /// Contacts of an event, optionally filtered on the reviewed flag
    pub async fn list_contacts(&self, event_id: Uuid, is_reviewed: Option<bool>) -> Result<Vec<Contact>> {
        debug!(event_id = %event_id, is_reviewed = ?is_reviewed, "Listing contacts");
        self.contacts.list_by_event(event_id, is_reviewed).await
    }

    /// Delete one contact
    pub async fn delete_contact(&self, contact_id: Uuid) -> Result<()> {
        self.contacts.delete(contact_id).await?;
        info!(contact_id = %contact_id, "Contact deleted");
        Ok(())
    }

    /// Check the backing store is reachable
    pub async fn health_check(&self) -> Result<()> {
        self.contacts.health_check().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::MemoryStore;

    fn service() -> EventService {
        let store = MemoryStore::new();
        EventService::new(Arc::new(store.clone()), Arc::new(store))
    }

    #[tokio::test]
    async fn test_blank_name_is_rejected() {
        let result = service().create_event(CreateEventRequest::new("   ", None)).await;
        assert!(matches!(result, Err(StovaSpotError::Validation(_))));
    }

    #[tokio::test]
    async fn test_events_listed_newest_first() {
        let service = service();
        service.create_event(CreateEventRequest::new("First", Some(""))).await.unwrap();
        let second = service
            .create_event(CreateEventRequest::new("Second", Some("Autumn edition")))
            .await
            .unwrap();

        let events = service.list_events().await.unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].id, second.id);
        assert_eq!(events[0].description.as_deref(), Some("Autumn edition"));
        assert_eq!(events[1].description, None);
        assert_eq!(events[1].contact_count, 0);
    }
}
