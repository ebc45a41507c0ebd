//! AWS Secrets Manager secret source.
//!
//! Uses the standard AWS provider chain (environment, shared config, IMDS,
//! ...) for credentials and region, then calls `GetSecretValue` for the
//! configured secret id. Only string secrets are supported.

use async_trait::async_trait;
use aws_sdk_secretsmanager::error::DisplayErrorContext;
use aws_sdk_secretsmanager::Client;
use tracing::debug;

use super::backend::SecretSource;
use super::error::{ResolutionError, Result};
use super::types::SecretString;

/// Secret source for `SECRET_METHOD=aws`.
#[derive(Clone)]
pub struct AwsSecretsManagerSource {
    client: Client,
    secret_name: String,
}

impl std::fmt::Debug for AwsSecretsManagerSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AwsSecretsManagerSource")
            .field("secret_name", &self.secret_name)
            .field("client", &"[SecretsManagerClient]")
            .finish()
    }
}

impl AwsSecretsManagerSource {
    /// Create a source around an existing client.
    pub fn new(client: Client, secret_name: impl Into<String>) -> Self {
        Self { client, secret_name: secret_name.into() }
    }

    /// Create a source using ambient AWS configuration.
    pub async fn from_env(secret_name: impl Into<String>) -> Self {
        let config = aws_config::defaults(aws_config::BehaviorVersion::latest()).load().await;
        Self::new(Client::new(&config), secret_name)
    }
}

#[async_trait]
impl SecretSource for AwsSecretsManagerSource {
    async fn fetch(&self) -> Result<SecretString> {
        debug!(secret_name = %self.secret_name, "Fetching secret from AWS Secrets Manager");

        let response = self
            .client
            .get_secret_value()
            .secret_id(&self.secret_name)
            .send()
            .await
            .map_err(|e| ResolutionError::aws(DisplayErrorContext(&e).to_string()))?;

        response.secret_string().map(SecretString::new).ok_or_else(|| {
            ResolutionError::aws(format!(
                "secret '{}' has no string value (may be binary)",
                self.secret_name
            ))
        })
    }

    fn kind(&self) -> &'static str {
        "aws"
    }
}
