//! Startup sequence
//!
//! Resolves the database password exactly once, logs its masked form, and
//! builds the read-only state the HTTP layer serves from. Nothing here can
//! fail: a resolution error is logged and its text is masked in place of the
//! password.

use std::sync::Arc;

use tracing::{info, warn};

use crate::api::ApiState;
use crate::config::SecretsConfig;
use crate::secrets::ResolvedSecret;

/// Resolve the secret and build the shared API state.
pub async fn bootstrap(config: &SecretsConfig) -> Arc<ApiState> {
    let resolved = ResolvedSecret::resolve(config).await;
    Arc::new(state_from_resolved(&resolved))
}

/// Log the outcome of `resolved` and derive the API state from it.
pub fn state_from_resolved(resolved: &ResolvedSecret) -> ApiState {
    if let Some(error) = resolved.error() {
        warn!(
            method = %resolved.method(),
            error = %error,
            error_detail = ?error,
            "Secret resolution failed, serving degraded value"
        );
    }

    let masked = resolved.masked();
    info!(
        method = %resolved.method(),
        resolved = resolved.is_ok(),
        masked_password = %masked,
        "DB Password (Masked): {}",
        masked
    );

    ApiState::new(masked)
}
