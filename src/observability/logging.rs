//! # Structured Logging
//!
//! Sets up the global `tracing` subscriber. The filter comes from `RUST_LOG`
//! when set, otherwise from [`ObservabilityConfig::log_level`]. With
//! `LOG_FORMAT=json` every event is emitted as one JSON object per line.

use crate::config::{Config, ObservabilityConfig};
use crate::errors::{Error, Result};
use tracing_subscriber::EnvFilter;

/// Install the global subscriber.
///
/// Returns `Ok(false)` when a subscriber was already installed (integration
/// tests install their own), `Ok(true)` when this call installed it.
pub fn init_logging(config: &ObservabilityConfig) -> Result<bool> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .map_err(|e| Error::config(format!("Invalid log filter '{}': {}", config.log_level, e)))?;

    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_target(true);

    let installed = if config.json_logging {
        builder.json().with_current_span(true).try_init().is_ok()
    } else {
        builder.try_init().is_ok()
    };

    Ok(installed)
}

/// Log configuration at startup. Secret values are never included.
pub fn log_config_info(config: &Config) {
    tracing::info!(
        server_address = %config.server.bind_address(),
        secret_method = %config.secrets.method,
        aws_secret_name = %config.secrets.aws_secret_name,
        vault_address = config.secrets.vault.address.as_deref().unwrap_or("<unset>"),
        db_password_set = config.secrets.db_password.is_some(),
        json_logging = config.observability.json_logging,
        "secret-probe configuration"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logging_is_idempotent() {
        let config = ObservabilityConfig::default();

        // Whichever call wins, neither may fail.
        let first = init_logging(&config).unwrap();
        let second = init_logging(&config).unwrap();
        assert!(!(first && second));
    }

    #[test]
    fn test_invalid_log_filter() {
        temp_env::with_var_unset("RUST_LOG", || {
            let config = ObservabilityConfig {
                log_level: "secret_probe=verbose".to_string(),
                ..Default::default()
            };
            assert!(init_logging(&config).is_err());
        });
    }

    #[test]
    fn test_log_config_info() {
        // This should not panic
        log_config_info(&Config::default());
    }
}
