//! Host registration tokens

use reqwest::Method;
use serde_json::Value;

use super::RancherClient;
use crate::error::{RancherError, Result};

impl RancherClient {
    /// Obtain the registration command for adding a new host.
    ///
    /// Two sequential calls: create a registration token, then fetch it by
    /// the returned id and resolve with its `command` field. A failure in
    /// the first step short-circuits; the second call is never issued.
    pub async fn registration_token(&self) -> Result<String> {
        let created = self.request(Method::POST, "/registrationtokens", None).await?;
        let id = created.get("id").and_then(Value::as_str).ok_or_else(|| {
            RancherError::Transport("registration token response carries no id".to_string())
        })?;

        let token = self
            .request(Method::GET, &format!("/registrationtokens/{}", id), None)
            .await?;
        token
            .get("command")
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or_else(|| {
                RancherError::Transport("registration token carries no command".to_string())
            })
    }
}
