use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{Method, Request, StatusCode},
    Router,
};
use secret_probe::{
    api::{build_router, ApiState},
    config::SecretsConfig,
    secrets::{SecretMethod, SecretString},
    startup::bootstrap,
};
use serde_json::{json, Value};
use tower::ServiceExt;

async fn send(router: &Router, method: Method, uri: &str) -> (StatusCode, Option<Value>) {
    let request = Request::builder().method(method).uri(uri).body(Body::empty()).expect("request");
    let response = router.clone().oneshot(request).await.expect("response");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.expect("read body");
    (status, serde_json::from_slice(&bytes).ok())
}

async fn router_for(config: SecretsConfig) -> Router {
    build_router(bootstrap(&config).await)
}

#[tokio::test]
async fn health_is_always_healthy() {
    let working = router_for(SecretsConfig {
        db_password: Some(SecretString::new("hunter2")),
        ..Default::default()
    })
    .await;
    let broken =
        router_for(SecretsConfig { method: SecretMethod::parse("nope"), ..Default::default() })
            .await;

    for router in [working, broken] {
        let (status, body) = send(&router, Method::GET, "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, Some(json!({ "status": "healthy" })));
    }
}

#[tokio::test]
async fn test_secret_reports_masked_env_password() {
    let router = router_for(SecretsConfig {
        db_password: Some(SecretString::new("hunter2")),
        ..Default::default()
    })
    .await;

    let (status, body) = send(&router, Method::GET, "/test-secret").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, Some(json!({ "message": "DB Password is hu*****" })));
}

#[tokio::test]
async fn test_secret_is_ok_when_resolution_fails() {
    let dir = tempfile::tempdir().expect("tempdir");
    let router = router_for(SecretsConfig {
        method: SecretMethod::DockerFile,
        docker_secret_path: dir.path().join("db_password"),
        ..Default::default()
    })
    .await;

    let (status, body) = send(&router, Method::GET, "/test-secret").await;
    assert_eq!(status, StatusCode::OK);
    // "Secret file not found", masked
    assert_eq!(body, Some(json!({ "message": "DB Password is Se*******************" })));
}

#[tokio::test]
async fn test_secret_is_computed_once() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("db_password");
    std::fs::write(&path, "first-value\n").expect("write secret");

    let router = router_for(SecretsConfig {
        method: SecretMethod::K8sFile,
        k8s_secret_path: path.clone(),
        ..Default::default()
    })
    .await;

    let (_, first) = send(&router, Method::GET, "/test-secret").await;
    std::fs::write(&path, "rotated-value-that-is-longer\n").expect("rewrite secret");
    let (_, second) = send(&router, Method::GET, "/test-secret").await;

    assert_eq!(first, Some(json!({ "message": "DB Password is fi*********" })));
    assert_eq!(first, second);
}

#[tokio::test]
async fn raw_password_never_appears_in_responses() {
    let router = build_router(Arc::new(ApiState::new(
        secret_probe::secrets::MaskedSecret::from_value("correct-horse-battery"),
    )));

    for uri in ["/health", "/test-secret"] {
        let (_, body) = send(&router, Method::GET, uri).await;
        let text = body.map(|b| b.to_string()).unwrap_or_default();
        assert!(!text.contains("correct-horse-battery"));
    }
}

#[tokio::test]
async fn unknown_routes_and_methods() {
    let router = router_for(SecretsConfig::default()).await;

    let (status, _) = send(&router, Method::GET, "/secrets").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&router, Method::POST, "/test-secret").await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}
