//! Service operations
//!
//! A couple of endpoints here live outside the project scope
//! (`/services?...` and `/services/{id}/containerstats`); the paths mirror
//! the platform API, inconsistencies included.

use reqwest::Method;
use serde_json::Value;

use super::{RancherClient, require_id};
use crate::error::Result;

impl RancherClient {
    /// List services matching a raw query string.
    ///
    /// The query is passed through unvalidated, matching the historical
    /// contract of this endpoint (unlike the id-taking siblings).
    pub async fn services(&self, query: &str) -> Result<Value> {
        self.request(Method::GET, &format!("/services?{}", query), None).await
    }

    pub async fn service(&self, service_id: &str) -> Result<Value> {
        require_id(service_id, "service id")?;
        let path = self.project_path(&format!("services/{}", service_id));
        self.request(Method::GET, &path, None).await
    }

    /// Per-container stats for a service.
    pub async fn service_stats(&self, service_id: &str) -> Result<Value> {
        require_id(service_id, "service id")?;
        self.request(Method::GET, &format!("/services/{}/containerstats", service_id), None)
            .await
    }

    pub async fn stop_service(&self, service_id: &str) -> Result<Value> {
        require_id(service_id, "service id")?;
        let path = self.project_path(&format!("services/{}/?action=deactivate", service_id));
        self.request(Method::POST, &path, None).await
    }

    pub async fn start_service(&self, service_id: &str) -> Result<Value> {
        require_id(service_id, "service id")?;
        let path = self.project_path(&format!("services/{}/?action=activate", service_id));
        self.request(Method::POST, &path, None).await
    }

    /// Restart a service, optionally with restart params (batch size,
    /// interval).
    pub async fn restart_service(
        &self,
        service_id: &str,
        restart_params: Option<&Value>,
    ) -> Result<Value> {
        require_id(service_id, "service id")?;
        let path = self.project_path(&format!("services/{}/?action=restart", service_id));
        self.request(Method::POST, &path, restart_params).await
    }
}
