//! Stack operations

use reqwest::Method;
use serde_json::Value;

use super::{RancherClient, require_id};
use crate::error::Result;

impl RancherClient {
    /// Create a stack from the given descriptor.
    pub async fn create_stack(&self, stack: &Value) -> Result<Value> {
        let path = self.project_path("stack");
        self.request(Method::POST, &path, Some(stack)).await
    }

    pub async fn get_stack(&self, stack_id: &str) -> Result<Value> {
        require_id(stack_id, "stack id")?;
        let path = self.project_path(&format!("stack/{}", stack_id));
        self.request(Method::GET, &path, None).await
    }

    /// Removal is an action on the stack, not an HTTP DELETE.
    pub async fn remove_stack(&self, stack_id: &str) -> Result<Value> {
        require_id(stack_id, "stack id")?;
        let path = self.project_path(&format!("stack/{}/?action=remove", stack_id));
        self.request(Method::POST, &path, None).await
    }

    /// List the services deployed under a stack.
    pub async fn stack_services(&self, stack_id: &str) -> Result<Value> {
        require_id(stack_id, "stack id")?;
        let path = self.project_path(&format!("stack/{}/services", stack_id));
        self.request(Method::GET, &path, None).await
    }

    pub async fn start_stack_services(&self, stack_id: &str) -> Result<Value> {
        require_id(stack_id, "stack id")?;
        let path = self.project_path(&format!("stack/{}/?action=activateservices", stack_id));
        self.request(Method::POST, &path, None).await
    }

    pub async fn stop_stack_services(&self, stack_id: &str) -> Result<Value> {
        require_id(stack_id, "stack id")?;
        let path = self.project_path(&format!("stack/{}/?action=deactivateservices", stack_id));
        self.request(Method::POST, &path, None).await
    }
}
