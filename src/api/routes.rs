use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::secrets::MaskedSecret;

use super::handlers::{health_handler, test_secret_handler};

/// Read-only state shared by all handlers.
///
/// Built once at startup; nothing in it changes afterwards, so handlers read
/// it without locking.
#[derive(Debug, Clone)]
pub struct ApiState {
    masked_secret: MaskedSecret,
    secret_message: String,
}

impl ApiState {
    pub fn new(masked_secret: MaskedSecret) -> Self {
        let secret_message = format!("DB Password is {}", masked_secret);
        Self { masked_secret, secret_message }
    }

    pub fn masked_secret(&self) -> &MaskedSecret {
        &self.masked_secret
    }

    /// The `/test-secret` message, formatted once.
    pub fn secret_message(&self) -> &str {
        &self.secret_message
    }
}

pub fn build_router(state: Arc<ApiState>) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/test-secret", get(test_secret_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_state_message() {
        let state = ApiState::new(MaskedSecret::from_value("secret123"));
        assert_eq!(state.masked_secret().as_str(), "se*******");
        assert_eq!(state.secret_message(), "DB Password is se*******");
    }
}
