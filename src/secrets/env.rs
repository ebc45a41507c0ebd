//! Environment variable secret source.
//!
//! Reads the password captured from `DB_PASSWORD` at startup. Environment
//! variables are visible in process listings; prefer a mounted file or a
//! secrets manager outside local development.

use async_trait::async_trait;
use tracing::warn;

use super::backend::SecretSource;
use super::error::Result;
use super::types::SecretString;

/// Value returned when `DB_PASSWORD` is not set.
pub const FALLBACK_PASSWORD: &str = "No password set";

/// Secret source for `SECRET_METHOD=env`.
#[derive(Debug, Clone, Default)]
pub struct EnvSecretSource {
    value: Option<SecretString>,
}

impl EnvSecretSource {
    /// Create a source from the captured `DB_PASSWORD` value.
    pub fn new(value: Option<SecretString>) -> Self {
        Self { value }
    }
}

#[async_trait]
impl SecretSource for EnvSecretSource {
    async fn fetch(&self) -> Result<SecretString> {
        match &self.value {
            Some(value) => Ok(value.clone()),
            None => {
                warn!(fallback = FALLBACK_PASSWORD, "DB_PASSWORD is not set, using fallback value");
                Ok(SecretString::new(FALLBACK_PASSWORD))
            }
        }
    }

    fn kind(&self) -> &'static str {
        "env"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_env_source_returns_value() {
        let source = EnvSecretSource::new(Some(SecretString::new("hunter2")));
        let secret = source.fetch().await.unwrap();
        assert_eq!(secret.expose_secret(), "hunter2");
    }

    #[tokio::test]
    async fn test_env_source_falls_back_when_unset() {
        let source = EnvSecretSource::default();
        let secret = source.fetch().await.unwrap();
        assert_eq!(secret.expose_secret(), "No password set");
    }

    #[tokio::test]
    async fn test_env_source_keeps_empty_value() {
        let source = EnvSecretSource::new(Some(SecretString::new("")));
        let secret = source.fetch().await.unwrap();
        assert!(secret.is_empty());
    }
}
