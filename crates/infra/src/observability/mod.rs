//! Observability infrastructure
//!
//! Structured logging through `tracing`. Every request the API client
//! sends runs inside an `execute` span carrying method and path, so a
//! subscriber installed here is all a host needs to follow traffic.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;
use uplokal_domain::{Result, UplokalError};

/// Filter used when `RUST_LOG` is unset
pub const DEFAULT_FILTER: &str = "info,uplokal_infra=info,uplokal_core=info";

/// Output format for the log layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human readable, one event per line
    #[default]
    Pretty,
    /// One JSON object per event
    Json,
}

/// Install the global tracing subscriber
///
/// The filter comes from `RUST_LOG` when set, otherwise [`DEFAULT_FILTER`].
///
/// # Errors
/// Returns `UplokalError::Config` if the filter does not parse or a global
/// subscriber is already installed.
pub fn init_tracing(format: LogFormat) -> Result<()> {
    let filter = env_filter()?;
    let registry = tracing_subscriber::registry().with(filter);

    let installed = match format {
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer().with_target(true)).try_init(),
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json().with_current_span(true))
            .try_init(),
    };

    installed.map_err(|e| UplokalError::Config(format!("Failed to install tracing subscriber: {e}")))
}

fn env_filter() -> Result<EnvFilter> {
    match std::env::var(EnvFilter::DEFAULT_ENV) {
        Ok(directives) if !directives.trim().is_empty() => EnvFilter::try_new(&directives)
            .map_err(|e| UplokalError::Config(format!("Invalid {}: {e}", EnvFilter::DEFAULT_ENV))),
        _ => Ok(EnvFilter::new(DEFAULT_FILTER)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_filter_parses() {
        assert!(EnvFilter::try_new(DEFAULT_FILTER).is_ok());
    }

    #[test]
    fn second_install_is_reported() {
        // Either this call or a previous test installed the subscriber
        let _ = init_tracing(LogFormat::Json);
        assert!(matches!(init_tracing(LogFormat::Pretty), Err(UplokalError::Config(_))));
    }
}
