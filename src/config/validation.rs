//! Configuration validation module
//!
//! This module provides validation functions for application configuration
//! to ensure all required settings are properly configured.

use crate::utils::errors::{StovaSpotError, Result};
use super::{DatabaseBackend, Settings};

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_server_config(&settings.server)?;
    validate_database_config(&settings.database)?;
    validate_logging_config(&settings.logging)?;
    validate_crm_config(&settings.crm)?;

    Ok(())
}

/// Validate HTTP server configuration
fn validate_server_config(config: &super::ServerConfig) -> Result<()> {
    if config.host.is_empty() {
        return Err(StovaSpotError::Config(
            "Server host is required".to_string()
        ));
    }

    if config.port == 0 {
        return Err(StovaSpotError::Config(
            "Server port must be greater than 0".to_string()
        ));
    }

    Ok(())
}

/// Validate database configuration
fn validate_database_config(config: &super::DatabaseConfig) -> Result<()> {
    if config.backend == DatabaseBackend::Memory {
        return Ok(());
    }

    if config.url.is_empty() {
        return Err(StovaSpotError::Config(
            "Database URL is required".to_string()
        ));
    }

    if config.max_connections == 0 {
        return Err(StovaSpotError::Config(
            "Max connections must be greater than 0".to_string()
        ));
    }

    if config.min_connections > config.max_connections {
        return Err(StovaSpotError::Config(
            "Min connections cannot be greater than max connections".to_string()
        ));
    }

    if config.acquire_timeout_seconds == 0 {
        return Err(StovaSpotError::Config(
            "Acquire timeout must be greater than 0".to_string()
        ));
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(StovaSpotError::Config(
            "Log level is required".to_string()
        ));
    }

    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.level.as_str()) {
        return Err(StovaSpotError::Config(
            format!("Invalid log level: {}. Valid levels: {:?}", config.level, valid_levels)
        ));
    }

    if matches!(config.file_path.as_deref(), Some("")) {
        return Err(StovaSpotError::Config(
            "Log file path cannot be empty when set".to_string()
        ));
    }

    Ok(())
}

/// Validate CRM lookup configuration
fn validate_crm_config(config: &super::CrmConfig) -> Result<()> {
    if let Some(portal_id) = &config.hubspot_portal_id {
        if portal_id.is_empty() || !portal_id.chars().all(|c| c.is_ascii_digit()) {
            return Err(StovaSpotError::Config(
                format!("HubSpot portal id must be numeric, got '{}'", portal_id)
            ));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_are_valid() {
        assert!(validate_settings(&Settings::default()).is_ok());
    }

    #[test]
    fn test_port_zero_is_rejected() {
        let mut settings = Settings::default();
        settings.server.port = 0;
        assert!(matches!(validate_settings(&settings), Err(StovaSpotError::Config(_))));
    }

    #[test]
    fn test_invalid_log_level() {
        let mut settings = Settings::default();
        settings.logging.level = "verbose".to_string();
        assert!(matches!(validate_settings(&settings), Err(StovaSpotError::Config(_))));
    }

    #[test]
    fn test_min_connections_above_max() {
        let mut settings = Settings::default();
        settings.database.min_connections = 20;
        assert!(validate_settings(&settings).is_err());
    }

    #[test]
    fn test_memory_backend_ignores_url() {
        let mut settings = Settings::default();
        settings.database.backend = DatabaseBackend::Memory;
        settings.database.url = String::new();
        assert!(validate_settings(&settings).is_ok());
    }

    #[test]
    fn test_portal_id_must_be_numeric() {
        let mut settings = Settings::default();
        settings.crm.hubspot_portal_id = Some("6832097".to_string());
        assert!(validate_settings(&settings).is_ok());
        settings.crm.hubspot_portal_id = Some("portal".to_string());
        assert!(validate_settings(&settings).is_err());
    }
}
