//! Tracing subscriber setup.
//!
//! Library code only emits `tracing` events; a host process calls
//! [`init_telemetry`] once to decide where they go.

#[cfg(feature = "telemetry")]
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::BazaarResult;
use serde::{Deserialize, Serialize};

/// Output format for log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human readable, multi-field lines.
    #[default]
    Pretty,
    /// One JSON object per event.
    Json,
}

/// Telemetry configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelemetryConfig {
    /// Filter directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    pub log_filter: String,

    /// Log output format.
    #[serde(default)]
    pub log_format: LogFormat,

    /// Whether to write events to stdout at all.
    #[serde(default = "default_console_output")]
    pub console_output: bool,
}

fn default_log_filter() -> String {
    "info,bazaar=debug,sqlx=warn".to_string()
}

fn default_console_output() -> bool {
    true
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_filter: default_log_filter(),
            log_format: LogFormat::default(),
            console_output: default_console_output(),
        }
    }
}

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over [`TelemetryConfig::log_filter`].
/// Fails if a global subscriber is already set.
#[cfg(feature = "telemetry")]
pub fn init_telemetry(config: &TelemetryConfig) -> BazaarResult<()> {
    if !config.console_output {
        return Ok(());
    }

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));

    let result = match config.log_format {
        LogFormat::Json => tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json().with_target(true))
            .try_init(),
        LogFormat::Pretty => tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_target(true))
            .try_init(),
    };

    result.map_err(|e| crate::BazaarError::Internal(format!("Failed to install subscriber: {}", e)))?;

    tracing::info!(
        log_filter = %config.log_filter,
        log_format = ?config.log_format,
        "Telemetry initialized"
    );
    Ok(())
}

/// Placeholder for when telemetry feature is disabled.
#[cfg(not(feature = "telemetry"))]
pub fn init_telemetry(_config: &TelemetryConfig) -> BazaarResult<()> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TelemetryConfig::default();
        assert_eq!(config.log_format, LogFormat::Pretty);
        assert!(config.console_output);
        assert!(config.log_filter.contains("bazaar=debug"));
    }

    #[test]
    fn test_config_deserializes_with_defaults() {
        let config: TelemetryConfig = serde_json::from_str(r#"{"log_format":"json"}"#).unwrap();
        assert_eq!(config.log_format, LogFormat::Json);
        assert_eq!(config.log_filter, default_log_filter());
    }

    #[test]
    fn test_disabled_console_output_is_noop() {
        let config = TelemetryConfig {
            console_output: false,
            ..TelemetryConfig::default()
        };
        assert!(init_telemetry(&config).is_ok());
    }
}
