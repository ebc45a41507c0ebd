//! # Observability
//!
//! Structured logging for secret-probe. Request-level tracing is attached to
//! the router in [`crate::api::routes`].

pub mod logging;

pub use logging::{init_logging, log_config_info};

use crate::config::ObservabilityConfig;
use crate::errors::Result;
use ::tracing::{debug, info};

/// Initialize logging and report how it was configured.
pub fn init_observability(config: &ObservabilityConfig) -> Result<()> {
    if init_logging(config)? {
        info!(
            service_name = %config.service_name,
            log_level = %config.log_level,
            json_logging = config.json_logging,
            "Observability initialized successfully"
        );
    } else {
        debug!("Global tracing subscriber already installed, keeping it");
    }

    Ok(())
}
