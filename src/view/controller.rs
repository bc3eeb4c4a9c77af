//! Contact list controller
//!
//! Holds one event's loaded contacts together with the view state and the
//! checkbox selection. Review changes are applied locally first and confirmed
//! against a [`ReviewBackend`]; a failed confirmation restores the local state.

use std::sync::Arc;
use futures::future::join_all;
use tracing::{debug, error, warn};
use uuid::Uuid;
use crate::config::BulkMode;
use crate::models::{BulkFailure, BulkReviewOutcome, Contact};
use crate::utils::errors::{StovaSpotError, Result};
use crate::utils::helpers::hubspot_search_url;
use super::backend::ReviewBackend;
use super::list::{visible_contacts, SortField, ViewState};
use super::selection::Selection;
use super::tentative::apply_tentatively;

fn set_flag(contacts: &mut [Contact], id: Uuid, is_reviewed: bool) {
    if let Some(contact) = contacts.iter_mut().find(|c| c.id == id) {
        contact.is_reviewed = is_reviewed;
    }
}

pub struct ContactListController {
    backend: Arc<dyn ReviewBackend>,
    event_id: Uuid,
    bulk_mode: BulkMode,
    contacts: Vec<Contact>,
    view: ViewState,
    selection: Selection,
    crm_portal_id: Option<String>,
}

impl ContactListController {
    pub fn new(backend: Arc<dyn ReviewBackend>, event_id: Uuid, bulk_mode: BulkMode) -> Self {
        Self {
            backend,
            event_id,
            bulk_mode,
            contacts: Vec::new(),
            view: ViewState::default(),
            selection: Selection::new(),
            crm_portal_id: None,
        }
    }

    /// Enable CRM search links for the given HubSpot portal
    pub fn with_crm_portal(mut self, portal_id: Option<String>) -> Self {
        self.crm_portal_id = portal_id;
        self
    }

    /// CRM search link for a contact, when a portal is configured
    pub fn crm_url(&self, contact: &Contact) -> Option<String> {
        let portal_id = self.crm_portal_id.as_deref()?;
        hubspot_search_url(portal_id, contact)
    }

    pub fn event_id(&self) -> Uuid {
        self.event_id
    }

    /// (Re)load every contact of the event and clear the search box
    pub async fn load(&mut self) -> Result<()> {
        let contacts = self.backend.list_contacts(self.event_id, None).await?;
        debug!(event_id = %self.event_id, count = contacts.len(), "Loaded contacts");

        self.contacts = contacts;
        self.view.search_term.clear();
        Ok(())
    }

    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn bulk_mode(&self) -> BulkMode {
        self.bulk_mode
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Contacts shown under the current view, in display order
    pub fn visible(&self) -> Vec<&Contact> {
        visible_contacts(&self.contacts, &self.view)
    }

    pub fn set_search_term(&mut self, term: &str) {
        self.view.search_term = term.to_string();
    }

    /// Switch between the reviewed and pending tabs
    pub fn show_reviewed(&mut self, show_reviewed: bool) {
        self.view.show_reviewed = show_reviewed;
    }

    pub fn toggle_sort(&mut self, field: SortField) {
        self.view.toggle_sort(field);
    }

    pub fn toggle_selected(&mut self, id: Uuid) {
        self.selection.toggle(id);
    }

    pub fn toggle_select_all(&mut self) {
        let visible: Vec<&Contact> = visible_contacts(&self.contacts, &self.view);
        self.selection.toggle_all(&visible);
    }

    /// Flip one contact's reviewed flag, restoring it if the backend refuses
    pub async fn toggle_reviewed(&mut self, contact_id: Uuid) -> Result<Contact> {
        let current = self
            .contacts
            .iter()
            .find(|c| c.id == contact_id)
            .map(|c| c.is_reviewed)
            .ok_or_else(|| StovaSpotError::contact_not_found(contact_id))?;
        let next = !current;

        let backend = Arc::clone(&self.backend);
        let result = apply_tentatively(
            &mut self.contacts,
            |contacts| set_flag(contacts, contact_id, next),
            |contacts| set_flag(contacts, contact_id, current),
            async move { backend.set_reviewed(contact_id, next).await },
        )
        .await;

        if let Err(e) = &result {
            error!(contact_id = %contact_id, error = %e, "Failed to update contact");
        }
        result
    }

    /// Move every selected contact to the opposite tab.
    ///
    /// The selection is cleared whatever the outcome. When any update fails the
    /// contact list is reloaded from the backend.
    pub async fn review_selected(&mut self) -> Result<BulkReviewOutcome> {
        if self.selection.is_empty() {
            return Err(StovaSpotError::validation("Select at least one contact"));
        }

        let target = !self.view.show_reviewed;
        let ids = self.selection.ids();
        for id in &ids {
            set_flag(&mut self.contacts, *id, target);
        }

        let result = match self.bulk_mode {
            BulkMode::Transactional => self.backend.set_reviewed_all(&ids, target).await,
            BulkMode::BestEffort => Ok(self.review_each(&ids, target).await),
        };
        self.selection.clear();

        match result {
            Ok(outcome) if outcome.is_complete() => Ok(outcome),
            Ok(outcome) => {
                warn!(
                    failed = outcome.failed.len(),
                    requested = ids.len(),
                    "Bulk review partially failed, reloading contacts"
                );
                self.reload_after_failure().await;
                Ok(outcome)
            }
            Err(e) => {
                error!(error = %e, requested = ids.len(), "Bulk review failed, reloading contacts");
                self.reload_after_failure().await;
                Err(e)
            }
        }
    }

    async fn review_each(&self, ids: &[Uuid], is_reviewed: bool) -> BulkReviewOutcome {
        let results = join_all(ids.iter().map(|id| self.backend.set_reviewed(*id, is_reviewed))).await;

        let mut outcome = BulkReviewOutcome {
            is_reviewed,
            updated: Vec::new(),
            failed: Vec::new(),
        };
        for (id, result) in ids.iter().zip(results) {
            match result {
                Ok(_) => outcome.updated.push(*id),
                Err(e) => outcome.failed.push(BulkFailure { id: *id, error: e.to_string() }),
            }
        }
        outcome
    }

    async fn reload_after_failure(&mut self) {
        if let Err(e) = self.load().await {
            error!(error = %e, "Failed to reload contacts");
        }
    }
}
