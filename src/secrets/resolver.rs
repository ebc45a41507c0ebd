//! Dispatch from [`SecretMethod`] to a [`SecretSource`].

use std::borrow::Cow;

use tracing::debug;

use super::backend::SecretSource;
use super::env::EnvSecretSource;
use super::error::{ResolutionError, Result};
use super::file::FileSecretSource;
use super::mask::MaskedSecret;
use super::method::SecretMethod;
use super::types::SecretString;
use super::vault::VaultSecretSource;
use crate::config::SecretsConfig;

/// Resolve the password for `method` using the captured configuration.
///
/// Every branch returns; failures come back as [`ResolutionError`].
pub async fn resolve(method: &SecretMethod, config: &SecretsConfig) -> Result<SecretString> {
    match method {
        SecretMethod::Env => fetch_from(&EnvSecretSource::new(config.db_password.clone())).await,
        SecretMethod::DockerFile => {
            fetch_from(&FileSecretSource::docker(&config.docker_secret_path)).await
        }
        SecretMethod::K8sFile => fetch_from(&FileSecretSource::k8s(&config.k8s_secret_path)).await,
        SecretMethod::AwsSecretsManager => resolve_aws(&config.aws_secret_name).await,
        SecretMethod::VaultKv => fetch_from(&VaultSecretSource::new(&config.vault)?).await,
        SecretMethod::Unrecognized(raw) => {
            Err(ResolutionError::configuration_invalid(raw.as_str()))
        }
    }
}

async fn fetch_from(source: &dyn SecretSource) -> Result<SecretString> {
    debug!(backend = source.kind(), "Resolving database password");
    source.fetch().await
}

#[cfg(feature = "aws")]
async fn resolve_aws(secret_name: &str) -> Result<SecretString> {
    fetch_from(&super::aws::AwsSecretsManagerSource::from_env(secret_name).await).await
}

#[cfg(not(feature = "aws"))]
async fn resolve_aws(_secret_name: &str) -> Result<SecretString> {
    Err(ResolutionError::aws("AWS support is not enabled in this build"))
}

/// Outcome of the single startup resolution.
#[derive(Debug)]
pub struct ResolvedSecret {
    method: SecretMethod,
    outcome: Result<SecretString>,
}

impl ResolvedSecret {
    /// Resolve using `config.method`.
    pub async fn resolve(config: &SecretsConfig) -> Self {
        let outcome = resolve(&config.method, config).await;
        Self { method: config.method.clone(), outcome }
    }

    pub fn from_outcome(method: SecretMethod, outcome: Result<SecretString>) -> Self {
        Self { method, outcome }
    }

    pub fn method(&self) -> &SecretMethod {
        &self.method
    }

    pub fn is_ok(&self) -> bool {
        self.outcome.is_ok()
    }

    pub fn error(&self) -> Option<&ResolutionError> {
        self.outcome.as_ref().err()
    }

    /// The string that stands in for the password: the secret itself, or the
    /// error's text when resolution failed.
    ///
    /// The returned value may be the raw secret. Mask it before logging.
    pub fn display_value(&self) -> Cow<'_, str> {
        match &self.outcome {
            Ok(secret) => Cow::Borrowed(secret.expose_secret()),
            Err(err) => Cow::Owned(err.to_string()),
        }
    }

    pub fn masked(&self) -> MaskedSecret {
        MaskedSecret::from_value(&self.display_value())
    }
}
