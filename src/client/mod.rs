//! Rancher API client and request core
//!
//! [`RancherClient`] owns the configured HTTP transport (base URL plus a
//! precomputed basic-auth header) and exposes resource-oriented methods in
//! the submodules. Everything funnels through [`RancherClient::request`],
//! which performs the call and uniformly classifies the outcome.

pub mod containers;
pub mod hosts;
pub mod services;
pub mod stacks;
pub mod tokens;
pub mod volumes;

use std::time::Duration;

use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use reqwest::{Client, Method};
use serde_json::Value;
use tracing::debug;

use crate::config::ClientConfig;
use crate::error::{ApiError, RancherError, Result};

pub struct RancherClientBuilder {
    config: ClientConfig,
    timeout: Option<Duration>,
}

impl RancherClientBuilder {
    pub fn new(config: ClientConfig) -> Self {
        Self { config, timeout: None }
    }

    /// Request timeout applied to every call; unset means reqwest's default
    /// of no timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn build(self) -> Result<RancherClient> {
        self.config.validate()?;

        let mut auth_value = HeaderValue::from_str(&self.config.basic_auth_header())
            .map_err(|e| RancherError::Config(format!("credentials are not header-safe: {}", e)))?;
        auth_value.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth_value);

        let mut builder = Client::builder().default_headers(headers);
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| RancherError::Config(format!("failed to build HTTP client: {}", e)))?;

        Ok(RancherClient {
            client,
            base_url: self.config.base_url(),
            environment_id: self.config.environment_id().to_string(),
        })
    }
}

/// Client for one Rancher server and environment.
///
/// All fields are fixed at construction; clones share the underlying
/// transport and concurrent calls need no locking. Targeting a different
/// environment means constructing a new client.
#[derive(Debug, Clone)]
pub struct RancherClient {
    client: Client,
    base_url: String,
    environment_id: String,
}

impl RancherClient {
    /// Validate the configuration and build a client. No network activity
    /// happens here.
    pub fn new(config: ClientConfig) -> Result<Self> {
        Self::builder(config).build()
    }

    pub fn builder(config: ClientConfig) -> RancherClientBuilder {
        RancherClientBuilder::new(config)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn environment_id(&self) -> &str {
        &self.environment_id
    }

    /// Scope a path under the client's project.
    pub(crate) fn project_path(&self, rest: &str) -> String {
        format!("/v2-beta/projects/{}/{}", self.environment_id, rest)
    }

    /// Single choke point for all resource methods.
    ///
    /// Sends `method` to `base_url + path` with the stored auth header and
    /// an optional JSON body, then classifies the outcome:
    /// - transport failure: [`RancherError::Transport`];
    /// - status outside [200, 300): [`RancherError::Api`] carrying status,
    ///   headers, and a message composed from the platform error body;
    /// - otherwise the body decoded as JSON, `Value::Null` when empty.
    ///
    /// Transport-layer error types never leak past this function.
    pub(crate) async fn request(
        &self,
        method: Method,
        path: &str,
        payload: Option<&Value>,
    ) -> Result<Value> {
        let url = format!("{}{}", self.base_url, path);

        let mut builder = self.client.request(method.clone(), &url);
        if let Some(payload) = payload {
            builder = builder.json(payload);
        }

        let response = builder.send().await?;

        // Status and headers are read before touching the body so that a
        // failed body read cannot mask the classification.
        let status = response.status();
        let headers = response.headers().clone();
        debug!(%method, path, status = status.as_u16(), "rancher api call");

        let body = response.text().await?;

        if !status.is_success() {
            return Err(RancherError::Api(ApiError::from_response(
                status.as_u16(),
                headers,
                &body,
            )));
        }

        if body.is_empty() {
            return Ok(Value::Null);
        }

        serde_json::from_str(&body).map_err(|e| {
            RancherError::Transport(format!("failed to decode response body: {}", e))
        })
    }
}

/// Reject empty resource identifiers before any network call is issued.
pub(crate) fn require_id(id: &str, what: &str) -> Result<()> {
    if id.trim().is_empty() {
        return Err(RancherError::Validation(format!("must specify {}", what)));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> RancherClient {
        RancherClient::new(ClientConfig::new("rancher.local", 8080, "key", "secret"))
            .expect("client")
    }

    #[test]
    fn test_construction_is_pure() {
        let client = client();
        assert_eq!(client.base_url(), "http://rancher.local:8080");
        assert_eq!(client.environment_id(), "1a5");
    }

    #[test]
    fn test_construction_rejects_invalid_config() {
        let config = ClientConfig::new("", 8080, "key", "secret");
        assert!(matches!(RancherClient::new(config), Err(RancherError::Config(_))));
    }

    #[test]
    fn test_project_path_scoping() {
        assert_eq!(
            client().project_path("container/c1"),
            "/v2-beta/projects/1a5/container/c1"
        );
    }

    #[test]
    fn test_require_id() {
        assert!(require_id("c1", "container id").is_ok());
        assert!(matches!(
            require_id("", "container id"),
            Err(RancherError::Validation(_))
        ));
        assert!(matches!(
            require_id("   ", "container id"),
            Err(RancherError::Validation(_))
        ));
    }
}
