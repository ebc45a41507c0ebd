//! # secret-probe
//!
//! A small service that resolves a database password from a runtime-selected
//! backend, logs a masked confirmation at startup, and reports the masked
//! value over HTTP so deployments can check which secret wiring is live.
//!
//! ## Architecture
//!
//! ```text
//! Config::from_env → startup::bootstrap → secrets::resolve → MaskedSecret
//!                                                               ↓
//!                                   api::build_router(Arc<ApiState>) → axum
//! ```
//!
//! ## Core Components
//!
//! - **Secrets**: one [`secrets::SecretSource`] per backend (env, Docker file,
//!   Kubernetes file, AWS Secrets Manager, Vault KV v2) behind a closed
//!   [`secrets::SecretMethod`] dispatch
//! - **Startup**: resolves once, never fails, logs the masked value
//! - **API**: axum router serving `/health` and `/test-secret`

pub mod api;
pub mod config;
pub mod errors;
pub mod observability;
pub mod secrets;
pub mod startup;

// Re-export commonly used types
pub use config::Config;
pub use errors::{Error, Result};

/// Application version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name from Cargo.toml
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");
