use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::{config::ServerConfig, errors::Error};

use super::routes::{build_router, ApiState};

/// Bind to the configured address and serve until Ctrl-C.
pub async fn start_api_server(config: &ServerConfig, state: Arc<ApiState>) -> crate::Result<()> {
    let addr: SocketAddr = config
        .bind_address()
        .parse()
        .map_err(|e| Error::config(format!("Invalid API address: {}", e)))?;

    let router = build_router(state);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| Error::transport(format!("Failed to bind API server: {}", e)))?;

    info!(address = %addr, "Starting HTTP API server");
    run_http_server(listener, router, shutdown_signal()).await?;

    info!("API server shutdown completed");
    Ok(())
}

/// Serve `router` on an already bound listener until `shutdown` resolves.
pub async fn run_http_server<F>(
    listener: TcpListener,
    router: Router,
    shutdown: F,
) -> crate::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|e| Error::transport(format!("API server error: {}", e)))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "API server shutdown listener failed");
    }
    info!("Shutdown signal received");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::secrets::MaskedSecret;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpStream;
    use tokio::sync::oneshot;

    async fn raw_get(addr: SocketAddr, path: &str) -> String {
        let mut stream = TcpStream::connect(addr).await.unwrap();
        let request =
            format!("GET {} HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n", path);
        stream.write_all(request.as_bytes()).await.unwrap();

        let mut response = String::new();
        stream.read_to_string(&mut response).await.unwrap();
        response
    }

    #[tokio::test]
    async fn test_run_http_server_serves_routes_and_shuts_down() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let router = build_router(Arc::new(ApiState::new(MaskedSecret::from_value("hunter2"))));

        let (tx, rx) = oneshot::channel::<()>();
        let server = tokio::spawn(run_http_server(listener, router, async {
            let _ = rx.await;
        }));

        let health = raw_get(addr, "/health").await;
        assert!(health.starts_with("HTTP/1.1 200"));
        assert!(health.ends_with(r#"{"status":"healthy"}"#));

        let secret = raw_get(addr, "/test-secret").await;
        assert!(secret.starts_with("HTTP/1.1 200"));
        assert!(secret.ends_with(r#"{"message":"DB Password is hu*****"}"#));

        tx.send(()).unwrap();
        server.await.unwrap().unwrap();
    }

    #[tokio::test]
    async fn test_start_api_server_rejects_bad_address() {
        let config = ServerConfig { host: "not an address".to_string(), port: 8080 };
        let state = Arc::new(ApiState::new(MaskedSecret::from_value("x")));

        let err = start_api_server(&config, state).await.unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
