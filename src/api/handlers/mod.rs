//! HTTP request handlers

pub mod health;
pub mod secret;

pub use health::{health_handler, HealthResponse};
pub use secret::{test_secret_handler, SecretMessageResponse};
