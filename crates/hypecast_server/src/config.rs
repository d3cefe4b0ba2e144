//! Server configuration.

use hypecast_error::{ConfigError, HypecastResult};
use serde::Deserialize;
use std::path::Path;

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

/// Configuration for the API server.
///
/// Loaded from a TOML file or environment variables. Missing fields
/// fall back to defaults; the model falls back to the completion
/// driver's default when unset.
///
/// # Examples
///
/// ```
/// use hypecast_server::ServerConfig;
///
/// let config: ServerConfig = toml::from_str("port = 9000").unwrap();
/// assert_eq!(config.port, 9000);
/// assert_eq!(config.host, "0.0.0.0");
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ServerConfig {
    /// Listen address
    #[serde(default = "default_host")]
    pub host: String,
    /// Listen port
    #[serde(default = "default_port")]
    pub port: u16,
    /// Model identifier override for generation requests
    #[serde(default)]
    pub model: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            model: None,
        }
    }
}

impl ServerConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> HypecastResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| {
            ConfigError::new(format!("failed to read {}: {}", path.display(), e))
        })?;
        toml::from_str(&raw)
            .map_err(|e| ConfigError::new(format!("failed to parse {}: {}", path.display(), e)).into())
    }

    /// Create config from environment variables.
    ///
    /// Reads:
    /// - `HYPECAST_HOST` (default: "0.0.0.0")
    /// - `HYPECAST_PORT` (default: 8000)
    /// - `HYPECAST_MODEL` (optional)
    pub fn from_env() -> HypecastResult<Self> {
        let host = std::env::var("HYPECAST_HOST").unwrap_or_else(|_| default_host());
        let port = match std::env::var("HYPECAST_PORT") {
            Ok(raw) => raw
                .parse()
                .map_err(|_| ConfigError::new(format!("invalid HYPECAST_PORT: {raw}")))?,
            Err(_) => default_port(),
        };
        let model = std::env::var("HYPECAST_MODEL").ok();

        Ok(Self { host, port, model })
    }

    /// The socket address string to bind.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_for_missing_fields() {
        let config: ServerConfig = toml::from_str("").unwrap();
        assert_eq!(config, ServerConfig::default());
    }

    #[test]
    fn full_file_parses() {
        let config: ServerConfig =
            toml::from_str("host = \"127.0.0.1\"\nport = 9001\nmodel = \"openai/gpt-4o-mini\"")
                .unwrap();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 9001);
        assert_eq!(config.model.as_deref(), Some("openai/gpt-4o-mini"));
        assert_eq!(config.bind_addr(), "127.0.0.1:9001");
    }
}
