//! Client configuration and credential handling

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};

use crate::error::{RancherError, Result};

/// Environment (project) id used when the configuration does not name one.
pub const DEFAULT_ENVIRONMENT: &str = "1a5";

/// URL scheme used when the configuration does not name one.
pub const DEFAULT_PROTOCOL: &str = "http";

/// Connection settings for a Rancher server.
///
/// `host`, `port`, `access_key`, and `secret_key` are required; the
/// environment and protocol fall back to [`DEFAULT_ENVIRONMENT`] and
/// [`DEFAULT_PROTOCOL`]. The configuration is immutable once a client is
/// built from it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    pub host: String,
    pub port: u16,
    pub access_key: String,
    pub secret_key: String,
    #[serde(default)]
    pub environment: Option<String>,
    #[serde(default)]
    pub protocol: Option<String>,
}

impl ClientConfig {
    pub fn new(
        host: impl Into<String>,
        port: u16,
        access_key: impl Into<String>,
        secret_key: impl Into<String>,
    ) -> Self {
        ClientConfig {
            host: host.into(),
            port,
            access_key: access_key.into(),
            secret_key: secret_key.into(),
            environment: None,
            protocol: None,
        }
    }

    pub fn with_environment(mut self, environment: impl Into<String>) -> Self {
        self.environment = Some(environment.into());
        self
    }

    pub fn with_protocol(mut self, protocol: impl Into<String>) -> Self {
        self.protocol = Some(protocol.into());
        self
    }

    /// Check the required fields. Runs once at client construction; performs
    /// no I/O.
    pub fn validate(&self) -> Result<()> {
        if self.host.trim().is_empty() {
            return Err(RancherError::Config("host must not be empty".to_string()));
        }
        if self.port == 0 {
            return Err(RancherError::Config("port must be non-zero".to_string()));
        }
        if self.access_key.is_empty() {
            return Err(RancherError::Config("access_key must not be empty".to_string()));
        }
        if self.secret_key.is_empty() {
            return Err(RancherError::Config("secret_key must not be empty".to_string()));
        }

        let base_url = self.base_url();
        url::Url::parse(&base_url)
            .map_err(|e| RancherError::Config(format!("invalid base URL {}: {}", base_url, e)))?;

        Ok(())
    }

    pub fn environment_id(&self) -> &str {
        self.environment.as_deref().unwrap_or(DEFAULT_ENVIRONMENT)
    }

    pub fn protocol(&self) -> &str {
        self.protocol.as_deref().unwrap_or(DEFAULT_PROTOCOL)
    }

    /// Resolved server root, `{protocol}://{host}:{port}`.
    pub fn base_url(&self) -> String {
        format!("{}://{}:{}", self.protocol(), self.host, self.port)
    }

    /// Precomputed value for the `Authorization` header.
    pub fn basic_auth_header(&self) -> String {
        let credentials = format!("{}:{}", self.access_key, self.secret_key);
        format!("Basic {}", STANDARD.encode(credentials))
    }
}
