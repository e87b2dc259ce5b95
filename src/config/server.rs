//! Listener settings: bind address, deployment mode, log filter and the
//! whole-request deadline enforced by the router.

use serde::Deserialize;
use std::net::SocketAddr;
use std::time::Duration;

use super::error::ValidationError;

const DEFAULT_PORT: u16 = 5004;
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_LOG_FILTER: &str = "info,idea_validator=debug,tower_http=info";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 90;
const MAX_REQUEST_TIMEOUT_SECS: u64 = 300;

/// Deployment mode. Production switches logs to JSON.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

/// `server.*` settings. Any key left unset takes its default.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub environment: Environment,
    /// `EnvFilter` directive used when `RUST_LOG` is unset
    pub log_level: String,
    pub request_timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_owned(),
            port: DEFAULT_PORT,
            environment: Environment::default(),
            log_level: DEFAULT_LOG_FILTER.to_owned(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ValidationError> {
        let addr = format!("{}:{}", self.host, self.port);
        addr.parse()
            .map_err(|_| ValidationError::InvalidHost(self.host.clone()))
    }

    pub fn is_production(&self) -> bool {
        matches!(self.environment, Environment::Production)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Rejects port 0, an unparseable host, and a request deadline outside
    /// 1..=300 seconds.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.port == 0 {
            return Err(ValidationError::InvalidPort);
        }
        if !(1..=MAX_REQUEST_TIMEOUT_SECS).contains(&self.request_timeout_secs) {
            return Err(ValidationError::InvalidTimeout);
        }
        self.socket_addr().map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_timeout(secs: u64) -> ServerConfig {
        ServerConfig {
            request_timeout_secs: secs,
            ..ServerConfig::default()
        }
    }

    #[test]
    fn defaults_listen_on_every_interface_at_5004() {
        let config = ServerConfig::default();

        assert_eq!(config.socket_addr().unwrap().to_string(), "0.0.0.0:5004");
        assert!(!config.is_production());
        assert_eq!(config.request_timeout(), Duration::from_secs(90));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_section_keeps_remaining_defaults() {
        let config: ServerConfig =
            serde_json::from_value(serde_json::json!({"environment": "production"})).unwrap();

        assert!(config.is_production());
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.log_level, DEFAULT_LOG_FILTER);
    }

    #[test]
    fn port_zero_is_rejected() {
        let config = ServerConfig {
            port: 0,
            ..ServerConfig::default()
        };

        assert_eq!(config.validate(), Err(ValidationError::InvalidPort));
    }

    #[test]
    fn unparseable_host_is_rejected() {
        let config = ServerConfig {
            host: "not a host".to_owned(),
            ..ServerConfig::default()
        };

        assert_eq!(
            config.validate(),
            Err(ValidationError::InvalidHost("not a host".to_owned()))
        );
    }

    #[test]
    fn request_timeout_bounds() {
        assert_eq!(with_timeout(0).validate(), Err(ValidationError::InvalidTimeout));
        assert!(with_timeout(1).validate().is_ok());
        assert!(with_timeout(300).validate().is_ok());
        assert_eq!(with_timeout(301).validate(), Err(ValidationError::InvalidTimeout));
    }
}
