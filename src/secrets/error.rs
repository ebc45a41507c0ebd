//! Error types for secret resolution.
//!
//! The `Display` text of each variant is the substitute value shown in place
//! of the password when resolution fails, so the wording is fixed.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for secret resolution.
pub type Result<T> = std::result::Result<T, ResolutionError>;

/// Remote secret stores that can fail with an arbitrary message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoteBackend {
    Aws,
    Vault,
}

impl fmt::Display for RemoteBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Aws => write!(f, "AWS"),
            Self::Vault => write!(f, "Vault"),
        }
    }
}

/// Errors that can occur while resolving the database password.
#[derive(Error, Debug)]
pub enum ResolutionError {
    /// `SECRET_METHOD` did not name a known backend.
    #[error("Invalid SECRET_METHOD")]
    ConfigurationInvalid { method: String },

    /// The mounted secret file does not exist.
    #[error("Secret file not found")]
    SecretFileMissing { path: PathBuf },

    /// The mounted secret file exists but could not be read.
    #[error("Secret file error: {source}")]
    SecretFileUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// AWS or Vault returned an error, or could not be reached.
    #[error("{backend} Secret Error: {message}")]
    RemoteFetchFailed { backend: RemoteBackend, message: String },
}

impl ResolutionError {
    /// Create a configuration error for an unknown method tag.
    pub fn configuration_invalid(method: impl Into<String>) -> Self {
        Self::ConfigurationInvalid { method: method.into() }
    }

    /// Create a remote fetch error for the AWS backend.
    pub fn aws(message: impl Into<String>) -> Self {
        Self::RemoteFetchFailed { backend: RemoteBackend::Aws, message: message.into() }
    }

    /// Create a remote fetch error for the Vault backend.
    pub fn vault(message: impl Into<String>) -> Self {
        Self::RemoteFetchFailed { backend: RemoteBackend::Vault, message: message.into() }
    }

    /// Map an I/O error from reading `path` to the matching variant.
    pub fn from_file_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::SecretFileMissing { path }
        } else {
            Self::SecretFileUnreadable { path, source }
        }
    }
}
