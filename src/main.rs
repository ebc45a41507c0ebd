use secret_probe::{
    api::start_api_server,
    config::ObservabilityConfig,
    observability::{init_observability, log_config_info},
    startup::bootstrap,
    Config, Result, APP_NAME, VERSION,
};
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists. Must happen before any config is read.
    let dotenv_error = dotenvy::dotenv().err().filter(|e| !e.not_found());

    init_observability(&ObservabilityConfig::from_env())?;

    if let Some(e) = dotenv_error {
        error!(error = %e, "Failed to load .env file");
    }

    info!(app_name = APP_NAME, version = VERSION, "Starting secret-probe");

    let config = Config::from_env()?;
    log_config_info(&config);

    let state = bootstrap(&config.secrets).await;

    if let Err(e) = start_api_server(&config.server, state).await {
        error!(error = %e, "API server terminated with error");
        return Err(e);
    }

    Ok(())
}
