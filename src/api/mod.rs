//! # HTTP API
//!
//! Two unauthenticated, read-only endpoints:
//!
//! - `GET /health` → `200 {"status":"healthy"}`
//! - `GET /test-secret` → `200 {"message":"DB Password is <masked>"}`

pub mod handlers;
pub mod routes;
pub mod server;

pub use routes::{build_router, ApiState};
pub use server::{run_http_server, start_api_server};
