//! # Configuration Management
//!
//! All configuration comes from environment variables (optionally seeded from
//! a `.env` file by the binary). Everything is read once at startup.

mod settings;

pub use settings::{
    ObservabilityConfig, SecretsConfig, ServerConfig, VaultSettings, DEFAULT_AWS_SECRET_NAME,
    DEFAULT_VAULT_MOUNT, DEFAULT_VAULT_PATH, DOCKER_SECRET_PATH, K8S_SECRET_PATH,
};

use crate::Result;
use validator::Validate;

/// Application configuration
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub server: ServerConfig,
    pub secrets: SecretsConfig,
    pub observability: ObservabilityConfig,
}

impl Config {
    /// Create configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let server_defaults = ServerConfig::default();

        let port = match std::env::var("SERVER_PORT") {
            Ok(raw) => raw.trim().parse().map_err(|e| {
                crate::Error::config(format!("Invalid SERVER_PORT '{}': {}", raw, e))
            })?,
            Err(_) => server_defaults.port,
        };

        let host = std::env::var("SERVER_HOST").unwrap_or(server_defaults.host);

        let config = Self {
            server: ServerConfig { host, port },
            secrets: SecretsConfig::from_env(),
            observability: ObservabilityConfig::from_env(),
        };
        config.validate()?;

        Ok(config)
    }

    /// Validate the server and logging sections
    pub fn validate(&self) -> Result<()> {
        self.server.validate()?;
        self.observability.validate()?;
        Ok(())
    }
}
