//! Server configuration.

use serde::{Deserialize, Serialize};

/// API server configuration, read from the environment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ApiConfig {
    /// Load from `EMBER_HOST` / `EMBER_PORT`, falling back to defaults.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(host) = std::env::var("EMBER_HOST") {
            config.host = host;
        }
        if let Ok(port) = std::env::var("EMBER_PORT")
            && let Ok(port) = port.parse()
        {
            config.port = port;
        }
        config
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
