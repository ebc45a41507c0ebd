//! Masked password endpoint

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};

use crate::api::routes::ApiState;

/// Response body for `GET /test-secret`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SecretMessageResponse {
    pub message: String,
}

/// Report the masked password computed at startup.
///
/// Always 200: a failed resolution is visible only through the masked
/// substitute text.
pub async fn test_secret_handler(
    State(state): State<Arc<ApiState>>,
) -> (StatusCode, Json<SecretMessageResponse>) {
    (StatusCode::OK, Json(SecretMessageResponse { message: state.secret_message().to_string() }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::secrets::MaskedSecret;

    #[tokio::test]
    async fn test_secret_handler_reports_masked_value() {
        let state = Arc::new(ApiState::new(MaskedSecret::from_value("hunter2")));

        let (status, Json(response)) = test_secret_handler(State(state)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(response.message, "DB Password is hu*****");
    }
}
