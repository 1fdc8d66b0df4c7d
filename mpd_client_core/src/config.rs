//! Client configuration
//!
//! Connection parameters for an MPD session. The CLI layers a TOML file and
//! `MPD_*` environment variables on top of these defaults; the library only
//! consumes the final values.

use serde::{Deserialize, Serialize};

/// Configuration for an MPD client session
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Server hostname or address
    pub host: String,
    /// Server port
    pub port: u16,
    /// Transparently reconnect and retry once when the server closes
    /// the connection mid-transaction
    pub reconnect: bool,
    /// Password sent with `password` immediately after connecting, if any
    pub password: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            host: crate::protocol::DEFAULT_HOST.to_string(),
            port: crate::protocol::DEFAULT_PORT,
            reconnect: true,
            password: None,
        }
    }
}

impl ClientConfig {
    /// Create a configuration for the given host and port, other
    /// settings at their defaults
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            ..Self::default()
        }
    }

    /// Disable the automatic reconnect-and-retry behavior
    pub fn without_reconnect(mut self) -> Self {
        self.reconnect = false;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.host, "localhost");
        assert_eq!(config.port, 6600);
        assert!(config.reconnect);
        assert!(config.password.is_none());
    }

    #[test]
    fn test_without_reconnect() {
        let config = ClientConfig::new("music.local", 6601).without_reconnect();
        assert_eq!(config.host, "music.local");
        assert_eq!(config.port, 6601);
        assert!(!config.reconnect);
    }
}
