use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{LogFormat, LogLevel};

#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("logging already initialized: {0}")]
    AlreadyInitialized(String),
}

/// Install the global tracing subscriber for the service.
///
/// `RUST_LOG`, when set, overrides the configured level so an operator
/// can enable per-crate debug output without editing the config file.
pub fn init_logging(level: LogLevel, format: LogFormat) -> Result<(), LoggingError> {
    let registry = tracing_subscriber::registry().with(default_filter(level));

    match format {
        // One flat key space per event, for log aggregators.
        LogFormat::Json => registry
            .with(fmt::layer().json().flatten_event(true).with_ansi(false))
            .try_init(),
        LogFormat::Text => registry
            .with(fmt::layer().compact().with_target(false))
            .try_init(),
    }
    .map_err(|e| LoggingError::AlreadyInitialized(e.to_string()))
}

fn default_filter(level: LogLevel) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_str()))
}
