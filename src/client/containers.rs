//! Container operations
//!
//! Container descriptors and action params are passed through as opaque
//! JSON; the platform defines their shape.

use reqwest::Method;
use serde_json::Value;

use super::{RancherClient, require_id};
use crate::error::Result;

impl RancherClient {
    /// Create a container from the given descriptor.
    pub async fn create_container(&self, container: &Value) -> Result<Value> {
        let path = self.project_path("container");
        self.request(Method::POST, &path, Some(container)).await
    }

    pub async fn get_container(&self, container_id: &str) -> Result<Value> {
        require_id(container_id, "container id")?;
        let path = self.project_path(&format!("container/{}", container_id));
        self.request(Method::GET, &path, None).await
    }

    /// Update a container; the descriptor must carry its `id`.
    pub async fn update_container(&self, container: &Value) -> Result<Value> {
        let id = container.get("id").and_then(Value::as_str).unwrap_or_default();
        require_id(id, "container id")?;
        let path = self.project_path(&format!("container/{}", id));
        self.request(Method::POST, &path, Some(container)).await
    }

    /// Stop a container, optionally with stop params (e.g. a grace timeout).
    pub async fn stop_container(
        &self,
        container_id: &str,
        stop_params: Option<&Value>,
    ) -> Result<Value> {
        require_id(container_id, "container id")?;
        let path = self.project_path(&format!("container/{}/?action=stop", container_id));
        self.request(Method::POST, &path, stop_params).await
    }

    pub async fn start_container(&self, container_id: &str) -> Result<Value> {
        require_id(container_id, "container id")?;
        let path = self.project_path(&format!("container/{}/?action=start", container_id));
        self.request(Method::POST, &path, None).await
    }

    pub async fn restart_container(&self, container_id: &str) -> Result<Value> {
        require_id(container_id, "container id")?;
        let path = self.project_path(&format!("container/{}/?action=restart", container_id));
        self.request(Method::POST, &path, None).await
    }

    pub async fn remove_container(&self, container_id: &str) -> Result<Value> {
        require_id(container_id, "container id")?;
        let path = self.project_path(&format!("container/{}", container_id));
        self.request(Method::DELETE, &path, None).await
    }

    /// Purge a removed container so the platform forgets it entirely.
    pub async fn purge_container(&self, container_id: &str) -> Result<Value> {
        require_id(container_id, "container id")?;
        let path = self.project_path(&format!("container/{}/?action=purge", container_id));
        self.request(Method::POST, &path, None).await
    }

    pub async fn container_logs(&self, container_id: &str) -> Result<Value> {
        require_id(container_id, "container id")?;
        let path = self.project_path(&format!("container/{}/?action=logs", container_id));
        self.request(Method::POST, &path, None).await
    }
}
