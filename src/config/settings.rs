//! Application settings management
//!
//! This module defines the configuration structure and provides methods
//! for loading settings from TOML files and environment variables.

use serde::{Deserialize, Serialize};

/// Main application configuration structure
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
    pub import: ImportConfig,
    pub review: ReviewConfig,
    pub crm: CrmConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Which store implementation backs the service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DatabaseBackend {
    Postgres,
    Memory,
}

/// Database configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    pub backend: DatabaseBackend,
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub acquire_timeout_seconds: u64,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
    /// Directory for daily rolling log files; stdout only when unset
    pub file_path: Option<String>,
    pub json: bool,
}

/// CSV import behaviour
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ImportConfig {
    /// Also drop repeated emails inside a single incoming batch
    pub dedup_within_batch: bool,
}

/// How a bulk review request is applied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BulkMode {
    /// One independent update per contact; successes are kept on partial failure
    #[default]
    BestEffort,
    /// All contacts are updated in one transaction or none are
    Transactional,
}

/// Review configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ReviewConfig {
    pub bulk_mode: BulkMode,
}

/// CRM lookup configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CrmConfig {
    pub hubspot_portal_id: Option<String>,
}

impl Settings {
    /// Load settings from defaults, `config.toml` and `STOVASPOT_*` environment variables
    pub fn new() -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000_i64)?
            .set_default("database.backend", "postgres")?
            .set_default("database.url", "postgresql://localhost/stovaspot")?
            .set_default("database.max_connections", 10_i64)?
            .set_default("database.min_connections", 1_i64)?
            .set_default("database.acquire_timeout_seconds", 30_i64)?
            .set_default("logging.level", "info")?
            .set_default("logging.json", false)?
            .set_default("import.dedup_within_batch", false)?
            .set_default("review.bulk_mode", "best_effort")?
            .add_source(config::File::with_name("config").required(false))
            .add_source(
                config::Environment::with_prefix("STOVASPOT")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Validate configuration settings
    pub fn validate(&self) -> Result<(), crate::utils::errors::StovaSpotError> {
        super::validation::validate_settings(self)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 3000,
            },
            database: DatabaseConfig {
                backend: DatabaseBackend::Postgres,
                url: "postgresql://localhost/stovaspot".to_string(),
                max_connections: 10,
                min_connections: 1,
                acquire_timeout_seconds: 30,
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                file_path: None,
                json: false,
            },
            import: ImportConfig {
                dedup_within_batch: false,
            },
            review: ReviewConfig {
                bulk_mode: BulkMode::BestEffort,
            },
            crm: CrmConfig {
                hubspot_portal_id: None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.server.bind_address(), "127.0.0.1:3000");
        assert_eq!(settings.database.backend, DatabaseBackend::Postgres);
        assert_eq!(settings.review.bulk_mode, BulkMode::BestEffort);
        assert!(!settings.import.dedup_within_batch);
    }

    #[test]
    fn test_bulk_mode_names() {
        let mode: BulkMode = serde_json::from_str("\"transactional\"").unwrap();
        assert_eq!(mode, BulkMode::Transactional);
        let mode: BulkMode = serde_json::from_str("\"best_effort\"").unwrap();
        assert_eq!(mode, BulkMode::BestEffort);
    }
}
