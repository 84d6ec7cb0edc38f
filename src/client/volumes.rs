//! Volume operations

use reqwest::Method;
use serde_json::Value;

use super::{RancherClient, require_id};
use crate::error::Result;

impl RancherClient {
    /// Create a volume from the given descriptor.
    pub async fn create_volume(&self, volume: &Value) -> Result<Value> {
        let path = self.project_path("volume");
        self.request(Method::POST, &path, Some(volume)).await
    }

    pub async fn get_volume(&self, volume_id: &str) -> Result<Value> {
        require_id(volume_id, "volume id")?;
        let path = self.project_path(&format!("volume/{}", volume_id));
        self.request(Method::GET, &path, None).await
    }

    /// Removal is an action on the volume, not an HTTP DELETE.
    pub async fn remove_volume(&self, volume_id: &str) -> Result<Value> {
        require_id(volume_id, "volume id")?;
        let path = self.project_path(&format!("volume/{}/?action=remove", volume_id));
        self.request(Method::POST, &path, None).await
    }
}
