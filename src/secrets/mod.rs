//! Database password resolution.
//!
//! The password is resolved once at startup from the backend named by
//! `SECRET_METHOD`:
//!
//! | `SECRET_METHOD` | Source | On failure |
//! |-----------------|--------|------------|
//! | `env` (default) | `DB_PASSWORD` | `"No password set"` (fallback value) |
//! | `docker` | `/run/secrets/db_password` | `"Secret file not found"` |
//! | `k8s` | `/etc/secrets/db_password` | `"Secret file not found"` |
//! | `aws` | AWS Secrets Manager, id `AWS_SECRET_NAME` | `"AWS Secret Error: ..."` |
//! | `vault` | Vault KV v2 `secret/db-password`, field `password` | `"Vault Secret Error: ..."` |
//! | anything else | - | `"Invalid SECRET_METHOD"` |
//!
//! Backends return a typed [`ResolutionError`]; [`ResolvedSecret::display_value`]
//! is the only place an error becomes text. The raw value is wrapped in
//! [`SecretString`] and only leaves this module masked (see [`mask`]).
//!
//! # Example
//!
//! ```rust,ignore
//! use secret_probe::config::SecretsConfig;
//! use secret_probe::secrets::ResolvedSecret;
//!
//! let resolved = ResolvedSecret::resolve(&SecretsConfig::from_env()).await;
//! tracing::info!("DB Password (Masked): {}", resolved.masked());
//! ```

#[cfg(feature = "aws")]
pub mod aws;
pub mod backend;
pub mod env;
pub mod error;
pub mod file;
pub mod mask;
pub mod method;
pub mod resolver;
pub mod types;
pub mod vault;

#[cfg(feature = "aws")]
pub use aws::AwsSecretsManagerSource;
pub use backend::SecretSource;
pub use env::{EnvSecretSource, FALLBACK_PASSWORD};
pub use error::{RemoteBackend, ResolutionError, Result};
pub use file::FileSecretSource;
pub use mask::{mask, MaskedSecret};
pub use method::SecretMethod;
pub use resolver::{resolve, ResolvedSecret};
pub use types::SecretString;
pub use vault::VaultSecretSource;
