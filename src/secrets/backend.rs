//! Secret source trait
//!
//! Defines the interface each backend implements.

use super::error::Result;
use super::types::SecretString;
use async_trait::async_trait;

/// A place the database password can be read from.
///
/// Implementations must be Send + Sync for use in async contexts.
#[async_trait]
pub trait SecretSource: Send + Sync + std::fmt::Debug {
    /// Fetch the secret value.
    ///
    /// Implementations return a typed [`ResolutionError`](super::ResolutionError)
    /// and never panic; turning the error into display text is the caller's job.
    async fn fetch(&self) -> Result<SecretString>;

    /// Short backend name used in log fields
    fn kind(&self) -> &'static str;
}
