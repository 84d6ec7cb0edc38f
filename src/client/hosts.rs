//! Host and port listings

use reqwest::Method;
use serde_json::Value;

use super::RancherClient;
use crate::error::Result;

impl RancherClient {
    /// List the public port bindings of the environment.
    pub async fn ports(&self) -> Result<Value> {
        let path = self.project_path("ports");
        self.request(Method::GET, &path, None).await
    }

    /// List the hosts registered in the environment.
    pub async fn hosts(&self) -> Result<Value> {
        let path = self.project_path("hosts");
        self.request(Method::GET, &path, None).await
    }

    /// Fetch one host by id.
    ///
    /// The id is passed through unvalidated, matching the historical
    /// contract of this endpoint (unlike the id-taking siblings).
    pub async fn host(&self, host_id: &str) -> Result<Value> {
        let path = self.project_path(&format!("hosts/{}", host_id));
        self.request(Method::GET, &path, None).await
    }
}
