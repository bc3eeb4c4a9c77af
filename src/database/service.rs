//! Database service layer
//!
//! This module picks the store implementation and hands out shared handles to it

use std::sync::Arc;
use tracing::info;
use crate::config::{DatabaseBackend, DatabaseConfig};
use crate::database::{create_pool, run_migrations, ContactRepository, EventRepository, MemoryStore};
use crate::database::store::{ContactStore, EventStore};
use crate::utils::errors::StovaSpotError;

#[derive(Clone)]
pub struct DatabaseService {
    pub events: Arc<dyn EventStore>,
    pub contacts: Arc<dyn ContactStore>,
}

impl DatabaseService {
    pub fn new(events: Arc<dyn EventStore>, contacts: Arc<dyn ContactStore>) -> Self {
        Self { events, contacts }
    }

    /// Connect to the configured backend, running migrations for PostgreSQL
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, StovaSpotError> {
        match config.backend {
            DatabaseBackend::Postgres => {
                info!("Connecting to database...");
                let pool = create_pool(config).await?;
                run_migrations(&pool).await?;

                Ok(Self::new(
                    Arc::new(EventRepository::new(pool.clone())),
                    Arc::new(ContactRepository::new(pool)),
                ))
            }
            DatabaseBackend::Memory => {
                info!("Using in-memory store; data is lost on shutdown");
                Ok(Self::in_memory())
            }
        }
    }

    /// Both stores backed by one shared in-memory state
    pub fn in_memory() -> Self {
        let store = MemoryStore::new();
        Self::new(Arc::new(store.clone()), Arc::new(store))
    }
}

impl std::fmt::Debug for DatabaseService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabaseService").finish_non_exhaustive()
    }
}
