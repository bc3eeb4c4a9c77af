//! Error handling for StovaSpot
//!
//! This module defines the main error type used throughout the application
//! and maps each failure onto the HTTP status it is reported with.

use thiserror::Error;

/// Main error type for StovaSpot application
#[derive(Error, Debug)]
pub enum StovaSpotError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Database migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Configuration loading error: {0}")]
    ConfigLoad(#[from] config::ConfigError),

    #[error("{0}")]
    Validation(String),

    #[error("Event not found: {event_id}")]
    EventNotFound { event_id: String },

    #[error("Contact not found: {contact_id}")]
    ContactNotFound { contact_id: String },

    #[error("Error parsing CSV: {0}")]
    CsvParse(#[from] csv::Error),

    #[error("Unsupported media type: {0}")]
    UnsupportedMediaType(String),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("URL parsing error: {0}")]
    UrlParse(#[from] url::ParseError),
}

/// Result type alias for StovaSpot operations
pub type Result<T> = std::result::Result<T, StovaSpotError>;

impl StovaSpotError {
    /// Shorthand for a missing or empty required input
    pub fn validation(message: impl Into<String>) -> Self {
        StovaSpotError::Validation(message.into())
    }

    pub fn event_not_found(event_id: impl ToString) -> Self {
        StovaSpotError::EventNotFound { event_id: event_id.to_string() }
    }

    pub fn contact_not_found(contact_id: impl ToString) -> Self {
        StovaSpotError::ContactNotFound { contact_id: contact_id.to_string() }
    }

    /// HTTP status code this error is reported with
    pub fn status_code(&self) -> u16 {
        match self {
            StovaSpotError::Validation(_) => 400,
            StovaSpotError::CsvParse(_) => 400,
            StovaSpotError::Serialization(_) => 400,
            StovaSpotError::EventNotFound { .. } => 404,
            StovaSpotError::ContactNotFound { .. } => 404,
            StovaSpotError::UnsupportedMediaType(_) => 415,
            StovaSpotError::Api { status, .. } => *status,
            _ => 500,
        }
    }

    /// Whether the message may be shown to the caller as-is.
    /// Database and infrastructure failures are replaced by a generic message.
    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.status_code())
    }

    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            StovaSpotError::Database(_) => ErrorSeverity::Critical,
            StovaSpotError::Migration(_) => ErrorSeverity::Critical,
            StovaSpotError::Config(_) => ErrorSeverity::Critical,
            StovaSpotError::ConfigLoad(_) => ErrorSeverity::Critical,
            StovaSpotError::Validation(_) => ErrorSeverity::Info,
            StovaSpotError::CsvParse(_) => ErrorSeverity::Info,
            StovaSpotError::UnsupportedMediaType(_) => ErrorSeverity::Info,
            StovaSpotError::EventNotFound { .. } => ErrorSeverity::Warning,
            StovaSpotError::ContactNotFound { .. } => ErrorSeverity::Warning,
            _ => ErrorSeverity::Error,
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Info,
    Warning,
    Error,
    Critical,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Info => write!(f, "INFO"),
            ErrorSeverity::Warning => write!(f, "WARN"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(StovaSpotError::validation("eventId is required").status_code(), 400);
        assert_eq!(StovaSpotError::event_not_found("abc").status_code(), 404);
        assert_eq!(StovaSpotError::contact_not_found("abc").status_code(), 404);
        assert_eq!(StovaSpotError::UnsupportedMediaType("image/png".into()).status_code(), 415);
        assert_eq!(StovaSpotError::Database(sqlx::Error::PoolTimedOut).status_code(), 500);
        assert_eq!(StovaSpotError::Api { status: 409, message: "x".into() }.status_code(), 409);
    }

    #[test]
    fn test_client_errors_are_exposed() {
        assert!(StovaSpotError::validation("name is required").is_client_error());
        assert!(!StovaSpotError::Database(sqlx::Error::PoolTimedOut).is_client_error());
        assert!(!StovaSpotError::Config("bad".into()).is_client_error());
    }

    #[test]
    fn test_validation_message_is_verbatim() {
        let err = StovaSpotError::validation("Event name is required");
        assert_eq!(err.to_string(), "Event name is required");
        assert_eq!(err.severity(), ErrorSeverity::Info);
    }
}
