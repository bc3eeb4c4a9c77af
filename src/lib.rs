//! StovaSpot
//!
//! Event attendee list manager. Contacts exported from an event registration
//! platform are imported per event as CSV or JSON, deduplicated by email and
//! tracked through a reviewed/pending workflow.

pub mod client;
pub mod config;
pub mod database;
pub mod handlers;
pub mod ingest;
pub mod middleware;
pub mod models;
pub mod services;
pub mod utils;
pub mod view;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{StovaSpotError, Result};

// Re-export main components for easy access
pub use client::ApiClient;
pub use database::DatabaseService;
pub use handlers::router;
pub use services::ServiceFactory;
pub use view::{ContactListController, ReviewBackend};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
