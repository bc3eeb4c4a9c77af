//! Contact repository implementation

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};
use std::time::Instant;
use chrono::Utc;
use uuid::Uuid;
use crate::database::store::ContactStore;
use crate::models::contact::{Contact, ContactDraft};
use crate::utils::errors::{StovaSpotError, Result};
use crate::utils::helpers::elapsed_ms;
use crate::utils::logging::log_database_operation;

const CONTACT_COLUMNS: &str = "id, first_name, last_name, email, registration_date, last_modified_date, \
     cancellation_date, attendee_category, registration_status, is_reviewed, event_id, created_at";

/// Postgres caps bind parameters per statement; 11 columns per row
const INSERT_CHUNK_ROWS: usize = 1000;

#[derive(Debug, Clone)]
pub struct ContactRepository {
    pool: PgPool,
}

impl ContactRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ContactStore for ContactRepository {
    async fn list_by_event(&self, event_id: Uuid, is_reviewed: Option<bool>) -> Result<Vec<Contact>> {
        let contacts = sqlx::query_as::<_, Contact>(&format!(
            "SELECT {} FROM contacts \
             WHERE event_id = $1 AND ($2::BOOLEAN IS NULL OR is_reviewed = $2) \
             ORDER BY created_at DESC, seq DESC",
            CONTACT_COLUMNS
        ))
        .bind(event_id)
        .bind(is_reviewed)
        .fetch_all(&self.pool)
        .await?;

        Ok(contacts)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Contact>> {
        let contact = sqlx::query_as::<_, Contact>(&format!(
            "SELECT {} FROM contacts WHERE id = $1",
            CONTACT_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(contact)
    }

    async fn emails_for_event(&self, event_id: Uuid) -> Result<Vec<String>> {
        let emails = sqlx::query_scalar::<_, String>("SELECT email FROM contacts WHERE event_id = $1")
            .bind(event_id)
            .fetch_all(&self.pool)
            .await?;

        Ok(emails)
    }

    async fn insert_many(&self, event_id: Uuid, drafts: Vec<ContactDraft>) -> Result<u64> {
        if drafts.is_empty() {
            return Ok(0);
        }

        let started = Instant::now();
        let created_at = Utc::now();
        let mut tx = self.pool.begin().await?;
        let mut created = 0;

        for chunk in drafts.chunks(INSERT_CHUNK_ROWS) {
            let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(
                "INSERT INTO contacts (id, first_name, last_name, email, registration_date, \
                 last_modified_date, cancellation_date, attendee_category, registration_status, \
                 event_id, created_at) ",
            );
            builder.push_values(chunk, |mut row, draft| {
                let draft = draft.clone().into_stored();
                row.push_bind(Uuid::new_v4())
                    .push_bind(draft.first_name)
                    .push_bind(draft.last_name)
                    .push_bind(draft.email)
                    .push_bind(draft.registration_date)
                    .push_bind(draft.last_modified_date)
                    .push_bind(draft.cancellation_date)
                    .push_bind(draft.attendee_category)
                    .push_bind(draft.registration_status)
                    .push_bind(event_id)
                    .push_bind(created_at);
            });

            let result = builder.build().execute(&mut *tx).await;
            match result {
                Ok(done) => created += done.rows_affected(),
                Err(e) => {
                    log_database_operation("insert_many", "contacts", elapsed_ms(started), false);
                    return Err(e.into());
                }
            }
        }

        tx.commit().await?;
        log_database_operation("insert_many", "contacts", elapsed_ms(started), true);
        Ok(created)
    }

    async fn set_reviewed(&self, id: Uuid, is_reviewed: bool) -> Result<Contact> {
        let contact = sqlx::query_as::<_, Contact>(&format!(
            "UPDATE contacts SET is_reviewed = $2 WHERE id = $1 RETURNING {}",
            CONTACT_COLUMNS
        ))
        .bind(id)
        .bind(is_reviewed)
        .fetch_optional(&self.pool)
        .await?;

        contact.ok_or_else(|| StovaSpotError::contact_not_found(id))
    }

    async fn set_reviewed_many(&self, ids: &[Uuid], is_reviewed: bool) -> Result<Vec<Contact>> {
        let started = Instant::now();
        let mut tx = self.pool.begin().await?;
        let mut updated = Vec::with_capacity(ids.len());

        for id in ids {
            let contact = sqlx::query_as::<_, Contact>(&format!(
                "UPDATE contacts SET is_reviewed = $2 WHERE id = $1 RETURNING {}",
                CONTACT_COLUMNS
            ))
            .bind(*id)
            .bind(is_reviewed)
            .fetch_optional(&mut *tx)
            .await?;

            match contact {
                Some(contact) => updated.push(contact),
                // Dropping the transaction rolls back the rows already updated
                None => {
                    log_database_operation("set_reviewed_many", "contacts", elapsed_ms(started), false);
                    return Err(StovaSpotError::contact_not_found(id));
                }
            }
        }

        tx.commit().await?;
        log_database_operation("set_reviewed_many", "contacts", elapsed_ms(started), true);
        Ok(updated)
    }

    async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM contacts WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StovaSpotError::contact_not_found(id));
        }

        Ok(())
    }

    async fn health_check(&self) -> Result<()> {
        crate::database::connection::health_check(&self.pool).await
    }
}
