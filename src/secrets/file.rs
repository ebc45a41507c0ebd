//! Mounted-file secret source for Docker secrets and Kubernetes secret volumes.

use async_trait::async_trait;
use std::path::PathBuf;
use tracing::debug;

use super::backend::SecretSource;
use super::error::{ResolutionError, Result};
use super::types::SecretString;

/// Reads the whole file and trims surrounding whitespace.
#[derive(Debug, Clone)]
pub struct FileSecretSource {
    path: PathBuf,
    kind: &'static str,
}

impl FileSecretSource {
    /// Source for `SECRET_METHOD=docker`
    pub fn docker(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into(), kind: "docker" }
    }

    /// Source for `SECRET_METHOD=k8s`
    pub fn k8s(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into(), kind: "k8s" }
    }
}

#[async_trait]
impl SecretSource for FileSecretSource {
    async fn fetch(&self) -> Result<SecretString> {
        debug!(path = %self.path.display(), kind = self.kind, "Reading mounted secret file");

        let contents = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| ResolutionError::from_file_error(&self.path, e))?;

        Ok(SecretString::new(contents.trim()))
    }

    fn kind(&self) -> &'static str {
        self.kind
    }
}
