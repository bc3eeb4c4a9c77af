//! Services module
//!
//! This module contains business logic services

pub mod event;
pub mod import;
pub mod review;

// Re-export commonly used services
pub use event::EventService;
pub use import::{ImportService, Partition, partition_drafts};
pub use review::ReviewService;

use std::sync::Arc;
use async_trait::async_trait;
use uuid::Uuid;
use crate::config::{BulkMode, Settings};
use crate::database::DatabaseService;
use crate::models::{BulkReviewOutcome, Contact};
use crate::utils::errors::Result;
use crate::view::{ContactListController, ReviewBackend};

/// Service factory for creating and managing all services
#[derive(Clone)]
pub struct ServiceFactory {
    pub event_service: EventService,
    pub import_service: ImportService,
    pub review_service: ReviewService,
    pub settings: Settings,
}

impl ServiceFactory {
    /// Create a new ServiceFactory with all services initialized
    pub fn new(database: DatabaseService, settings: Settings) -> Self {
        let event_service = EventService::new(database.events.clone(), database.contacts.clone());
        let import_service = ImportService::new(
            database.events.clone(),
            database.contacts.clone(),
            settings.import.clone(),
        );
        let review_service = ReviewService::new(database.contacts, settings.review.clone());

        Self {
            event_service,
            import_service,
            review_service,
            settings,
        }
    }

    /// Health check for the backing store
    pub async fn health_check(&self) -> ServiceHealthStatus {
        let store_healthy = match self.event_service.health_check().await {
            Ok(()) => true,
            Err(e) => {
                tracing::error!(error = %e, "Store health check failed");
                false
            }
        };

        ServiceHealthStatus { store_healthy }
    }

    /// In-process list controller for one event, configured from `[review]` and `[crm]`
    pub fn contact_list(self: &Arc<Self>, event_id: Uuid) -> ContactListController {
        ContactListController::new(self.clone(), event_id, self.settings.review.bulk_mode)
            .with_crm_portal(self.settings.crm.hubspot_portal_id.clone())
    }
}

/// Health status for all services
#[derive(Debug, Clone)]
pub struct ServiceHealthStatus {
    pub store_healthy: bool,
}

impl ServiceHealthStatus {
    /// Check if all critical services are healthy
    pub fn is_healthy(&self) -> bool {
        self.store_healthy
    }
}

/// In-process backend for the contact list controller
#[async_trait]
impl ReviewBackend for ServiceFactory {
    async fn list_contacts(&self, event_id: Uuid, is_reviewed: Option<bool>) -> Result<Vec<Contact>> {
        self.event_service.list_contacts(event_id, is_reviewed).await
    }

    async fn set_reviewed(&self, contact_id: Uuid, is_reviewed: bool) -> Result<Contact> {
        self.review_service.set_reviewed(contact_id, is_reviewed).await
    }

    async fn set_reviewed_all(&self, contact_ids: &[Uuid], is_reviewed: bool) -> Result<BulkReviewOutcome> {
        self.review_service
            .bulk_set_reviewed(contact_ids, is_reviewed, Some(BulkMode::Transactional))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ContactDraft, CreateEventRequest};

    #[tokio::test]
    async fn test_contact_list_uses_review_and_crm_settings() {
        let mut settings = Settings::default();
        settings.review.bulk_mode = BulkMode::Transactional;
        settings.crm.hubspot_portal_id = Some("123456".to_string());
        let services = Arc::new(ServiceFactory::new(DatabaseService::in_memory(), settings));

        let event = services
            .event_service
            .create_event(CreateEventRequest::new("Conf2025", None))
            .await
            .unwrap();
        services
            .import_service
            .import_contacts(event.id, vec![ContactDraft::new("Ana", "García", "ana@example.com")])
            .await
            .unwrap();

        let mut list = services.contact_list(event.id);
        list.load().await.unwrap();
        assert_eq!(list.bulk_mode(), BulkMode::Transactional);
        let url = list.crm_url(&list.contacts()[0]).unwrap();
        assert!(url.contains("123456"));
    }

    #[tokio::test]
    async fn test_contact_list_without_portal_has_no_crm_link() {
        let services = Arc::new(ServiceFactory::new(DatabaseService::in_memory(), Settings::default()));
        let event = services
            .event_service
            .create_event(CreateEventRequest::new("Conf2025", None))
            .await
            .unwrap();
        services
            .import_service
            .import_contacts(event.id, vec![ContactDraft::new("Ana", "García", "ana@example.com")])
            .await
            .unwrap();

        let mut list = services.contact_list(event.id);
        list.load().await.unwrap();
        assert_eq!(list.bulk_mode(), BulkMode::BestEffort);
        assert_eq!(list.crm_url(&list.contacts()[0]), None);
    }
}
