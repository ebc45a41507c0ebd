//! # Configuration Settings
//!
//! Defines the configuration structure for secret-probe.

use crate::secrets::{SecretMethod, SecretString};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use validator::Validate;

/// Default secret file mounted by Docker secrets
pub const DOCKER_SECRET_PATH: &str = "/run/secrets/db_password";

/// Default secret file mounted by a Kubernetes secret volume
pub const K8S_SECRET_PATH: &str = "/etc/secrets/db_password";

/// Default AWS Secrets Manager secret id
pub const DEFAULT_AWS_SECRET_NAME: &str = "db-password";

/// Default Vault KV v2 mount
pub const DEFAULT_VAULT_MOUNT: &str = "secret";

/// Vault KV v2 path holding the password
pub const DEFAULT_VAULT_PATH: &str = "db-password";

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ServerConfig {
    /// Server bind address
    #[validate(length(min = 1, message = "Host cannot be empty"))]
    pub host: String,

    /// Server port
    #[validate(range(min = 1, max = 65535, message = "Port must be between 1 and 65535"))]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: "0.0.0.0".to_string(), port: 8080 }
    }
}

impl ServerConfig {
    /// Get the server bind address
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ObservabilityConfig {
    /// Service name attached to the startup log line
    #[validate(length(min = 1, message = "Service name cannot be empty"))]
    pub service_name: String,

    /// Default log filter when `RUST_LOG` is unset (trace, debug, info, warn, error)
    #[validate(length(min = 1, message = "Log level cannot be empty"))]
    pub log_level: String,

    /// Enable JSON structured logging
    pub json_logging: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            service_name: crate::APP_NAME.to_string(),
            log_level: "info".to_string(),
            json_logging: false,
        }
    }
}

impl ObservabilityConfig {
    /// Create ObservabilityConfig from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let log_level = std::env::var("RUST_LOG")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or(defaults.log_level);

        let json_logging = std::env::var("LOG_FORMAT")
            .map(|s| s.trim().eq_ignore_ascii_case("json"))
            .unwrap_or(false);

        Self { service_name: defaults.service_name, log_level, json_logging }
    }
}

/// Vault connection settings used by the `vault` method
#[derive(Debug, Clone)]
pub struct VaultSettings {
    /// Vault server address (`VAULT_ADDR`)
    pub address: Option<String>,

    /// Vault token (`VAULT_TOKEN`)
    pub token: Option<SecretString>,

    /// Vault Enterprise namespace (`VAULT_NAMESPACE`)
    pub namespace: Option<String>,

    /// KV v2 mount path
    pub mount_path: String,

    /// Secret path within the mount
    pub secret_path: String,
}

impl Default for VaultSettings {
    fn default() -> Self {
        Self {
            address: None,
            token: None,
            namespace: None,
            mount_path: DEFAULT_VAULT_MOUNT.to_string(),
            secret_path: DEFAULT_VAULT_PATH.to_string(),
        }
    }
}

/// Snapshot of everything secret resolution reads from the environment.
///
/// Captured once at startup so backends never touch `std::env` themselves.
#[derive(Debug, Clone)]
pub struct SecretsConfig {
    /// Selected backend (`SECRET_METHOD`)
    pub method: SecretMethod,

    /// Password for the `env` method (`DB_PASSWORD`)
    pub db_password: Option<SecretString>,

    /// Secret id for the `aws` method (`AWS_SECRET_NAME`)
    pub aws_secret_name: String,

    /// Settings for the `vault` method
    pub vault: VaultSettings,

    /// File read by the `docker` method
    pub docker_secret_path: PathBuf,

    /// File read by the `k8s` method
    pub k8s_secret_path: PathBuf,
}

impl Default for SecretsConfig {
    fn default() -> Self {
        Self {
            method: SecretMethod::Env,
            db_password: None,
            aws_secret_name: DEFAULT_AWS_SECRET_NAME.to_string(),
            vault: VaultSettings::default(),
            docker_secret_path: PathBuf::from(DOCKER_SECRET_PATH),
            k8s_secret_path: PathBuf::from(K8S_SECRET_PATH),
        }
    }
}

impl SecretsConfig {
    /// Create SecretsConfig from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();

        // A set but non-UTF-8 value still counts as set.
        let method = std::env::var_os("SECRET_METHOD")
            .map(|raw| SecretMethod::parse(&raw.to_string_lossy()))
            .unwrap_or(defaults.method);

        let db_password =
            std::env::var_os("DB_PASSWORD").map(|raw| SecretString::new(raw.to_string_lossy()));

        let aws_secret_name =
            std::env::var("AWS_SECRET_NAME").unwrap_or(defaults.aws_secret_name);

        let vault = VaultSettings {
            address: std::env::var("VAULT_ADDR").ok(),
            token: std::env::var("VAULT_TOKEN").ok().map(SecretString::new),
            namespace: std::env::var("VAULT_NAMESPACE").ok().filter(|ns| !ns.trim().is_empty()),
            ..defaults.vault
        };

        Self {
            method,
            db_password,
            aws_secret_name,
            vault,
            docker_secret_path: defaults.docker_secret_path,
            k8s_secret_path: defaults.k8s_secret_path,
        }
    }
}
