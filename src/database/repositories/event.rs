//! Event repository implementation

use async_trait::async_trait;
use sqlx::PgPool;
use std::time::Instant;
use chrono::Utc;
use uuid::Uuid;
use crate::database::store::EventStore;
use crate::models::event::{Event, EventSummary, CreateEventRequest};
use crate::utils::errors::Result;
use crate::utils::helpers::elapsed_ms;
use crate::utils::logging::log_database_operation;

#[derive(Debug, Clone)]
pub struct EventRepository {
    pool: PgPool,
}

impl EventRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EventStore for EventRepository {
    async fn create(&self, request: CreateEventRequest) -> Result<Event> {
        let started = Instant::now();
        let description = request.stored_description();
        let result = sqlx::query_as::<_, Event>(
            r#"
            INSERT INTO events (id, name, description, created_at)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, description, created_at
            "#
        )
        .bind(Uuid::new_v4())
        .bind(request.name.trim())
        .bind(description)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await;

        log_database_operation("insert", "events", elapsed_ms(started), result.is_ok());
        Ok(result?)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Event>> {
        let event = sqlx::query_as::<_, Event>(
            "SELECT id, name, description, created_at FROM events WHERE id = $1"
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(event)
    }

    async fn list_with_counts(&self) -> Result<Vec<EventSummary>> {
        let events = sqlx::query_as::<_, EventSummary>(
            r#"
            SELECT e.id, e.name, e.description, e.created_at, COUNT(c.id) AS contact_count
            FROM events e
            LEFT JOIN contacts c ON c.event_id = e.id
            GROUP BY e.id, e.name, e.description, e.created_at
            ORDER BY e.created_at DESC
            "#
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(events)
    }
}
