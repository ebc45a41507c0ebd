//! HashiCorp Vault KV v2 secret source.
//!
//! Reads the `password` field of the secret at `<mount>/data/<path>`
//! (by default `secret/data/db-password`) using the address and token
//! captured from `VAULT_ADDR` / `VAULT_TOKEN`.
//!
//! # Example
//!
//! ```rust,ignore
//! use secret_probe::config::VaultSettings;
//! use secret_probe::secrets::{SecretSource, VaultSecretSource};
//!
//! let settings = VaultSettings {
//!     address: Some("https://vault.example.com:8200".to_string()),
//!     token: Some("s.token".into()),
//!     ..Default::default()
//! };
//! let password = VaultSecretSource::new(&settings)?.fetch().await?;
//! ```

use async_trait::async_trait;
use std::collections::HashMap;
use tracing::{debug, info};
use vaultrs::client::{VaultClient, VaultClientSettingsBuilder};
use vaultrs::kv2;

use super::backend::SecretSource;
use super::error::{ResolutionError, Result};
use super::types::SecretString;
use crate::config::VaultSettings;

/// Address used when `VAULT_ADDR` is not set
pub const DEFAULT_VAULT_ADDR: &str = "http://127.0.0.1:8200";

/// Field of the KV v2 secret holding the password
pub const PASSWORD_FIELD: &str = "password";

/// Secret source for `SECRET_METHOD=vault`.
pub struct VaultSecretSource {
    client: VaultClient,
    mount_path: String,
    secret_path: String,
}

impl std::fmt::Debug for VaultSecretSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VaultSecretSource")
            .field("mount_path", &self.mount_path)
            .field("secret_path", &self.secret_path)
            .field("client", &"[VaultClient]")
            .finish()
    }
}

impl VaultSecretSource {
    /// Build a Vault client from the captured settings.
    ///
    /// No request is made here; an unreachable server only shows up on
    /// [`fetch`](SecretSource::fetch).
    pub fn new(settings: &VaultSettings) -> Result<Self> {
        let address = settings.address.as_deref().unwrap_or(DEFAULT_VAULT_ADDR);
        url::Url::parse(address).map_err(|e| {
            ResolutionError::vault(format!("Invalid VAULT_ADDR '{}': {}", address, e))
        })?;

        let mut settings_builder = VaultClientSettingsBuilder::default();
        settings_builder.address(address);
        settings_builder.token(settings.token.as_ref().map_or("", SecretString::expose_secret));

        if let Some(ref namespace) = settings.namespace {
            settings_builder.namespace(Some(namespace.clone()));
        }

        let client_settings = settings_builder
            .build()
            .map_err(|e| ResolutionError::vault(format!("Invalid Vault configuration: {}", e)))?;

        let client = VaultClient::new(client_settings)
            .map_err(|e| ResolutionError::vault(format!("Failed to create Vault client: {}", e)))?;

        info!(
            address = %address,
            kv_mount = %settings.mount_path,
            path = %settings.secret_path,
            "Initialized Vault secret source"
        );

        Ok(Self {
            client,
            mount_path: settings.mount_path.clone(),
            secret_path: settings.secret_path.clone(),
        })
    }
}

#[async_trait]
impl SecretSource for VaultSecretSource {
    async fn fetch(&self) -> Result<SecretString> {
        debug!(kv_mount = %self.mount_path, path = %self.secret_path, "Reading secret from Vault");

        let data: HashMap<String, serde_json::Value> =
            kv2::read(&self.client, &self.mount_path, &self.secret_path)
                .await
                .map_err(|e| ResolutionError::vault(e.to_string()))?;

        data.get(PASSWORD_FIELD).and_then(|v| v.as_str()).map(SecretString::new).ok_or_else(|| {
            ResolutionError::vault(format!(
                "secret '{}/{}' has no string '{}' field",
                self.mount_path, self.secret_path, PASSWORD_FIELD
            ))
        })
    }

    fn kind(&self) -> &'static str {
        "vault"
    }
}
