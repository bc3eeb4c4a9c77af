//! Logging configuration and setup
//!
//! This module provides logging initialization and structured logging utilities
//! for the StovaSpot application.

use tracing::{info, warn, debug, error};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use uuid::Uuid;
use crate::config::LoggingConfig;
use crate::utils::errors::{StovaSpotError, Result};

/// Initialize logging based on configuration.
///
/// The returned guard flushes the file writer on drop and must be kept alive
/// for the lifetime of the process.
pub fn init_logging(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    let filter = tracing_subscriber::EnvFilter::try_new(&config.level)
        .map_err(|e| StovaSpotError::Config(format!("Invalid log filter '{}': {}", config.level, e)))?;

    let json_layer = config
        .json
        .then(|| tracing_subscriber::fmt::layer().json().with_writer(std::io::stdout));
    let plain_layer = (!config.json)
        .then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stdout));

    let (file_layer, guard) = match &config.file_path {
        Some(dir) => {
            let file_appender = tracing_appender::rolling::daily(dir, "stovaspot.log");
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(non_blocking);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(json_layer)
        .with(plain_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| StovaSpotError::Config(format!("Logging already initialized: {}", e)))?;

    info!("Logging initialized with level: {}", config.level);
    Ok(guard)
}

/// Log the outcome of a contact import
pub fn log_import(event_id: Uuid, received: usize, created: u64, duplicates: usize) {
    info!(
        event_id = %event_id,
        received = received,
        created = created,
        duplicates = duplicates,
        "Contacts imported"
    );
}

/// Log a reviewed-flag change
pub fn log_review_change(contact_id: Uuid, is_reviewed: bool) {
    debug!(
        contact_id = %contact_id,
        is_reviewed = is_reviewed,
        "Contact review state changed"
    );
}

/// Log a bulk review that did not fully succeed
pub fn log_bulk_review_failure(requested: usize, failed: usize, is_reviewed: bool) {
    warn!(
        requested = requested,
        failed = failed,
        is_reviewed = is_reviewed,
        "Bulk review partially failed"
    );
}

/// Log database operations
pub fn log_database_operation(operation: &str, table: &str, duration_ms: u64, success: bool) {
    if success {
        debug!(
            operation = operation,
            table = table,
            duration_ms = duration_ms,
            "Database operation completed"
        );
    } else {
        error!(
            operation = operation,
            table = table,
            duration_ms = duration_ms,
            "Database operation failed"
        );
    }
}
