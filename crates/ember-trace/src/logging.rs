//! Logging initialization.

use thiserror::Error;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("Failed to initialize logging: {0}")]
    Init(String),
}

/// Console logging configuration.
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Filter directive used when `RUST_LOG` is unset.
    pub default_directive: String,
    /// Colorize level names in console output.
    pub ansi: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            default_directive: "debug".to_string(),
            ansi: true,
        }
    }
}

/// Initialize colorized console logging.
///
/// `RUST_LOG` overrides the configured default directive. Fails if a
/// global subscriber is already installed.
pub fn init_logging(config: &LogConfig) -> Result<(), LoggingError> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.default_directive))
        .map_err(|e| LoggingError::Init(e.to_string()))?;

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(config.ansi)
        .with_target(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| LoggingError::Init(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_init_fails_cleanly() {
        let config = LogConfig {
            ansi: false,
            ..LogConfig::default()
        };
        init_logging(&config).expect("first init installs the subscriber");
        // A second install must surface an Init error rather than panic.
        assert!(matches!(init_logging(&config), Err(LoggingError::Init(_))));
    }
}
