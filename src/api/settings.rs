//! Settings endpoints

use crate::api::gateway::Gateway;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use serde_json::json;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Setting {
    pub key: String,
    pub value: serde_json::Value,
}

/// Typed client for `/settings`
pub struct Settings<'a> {
    gateway: &'a Gateway,
}

impl Gateway {
    pub fn settings(&self) -> Settings<'_> {
        Settings { gateway: self }
    }
}

impl Settings<'_> {
    pub async fn all(&self) -> Result<Vec<Setting>> {
        self.gateway.get_json("/settings").await
    }

    pub async fn get(&self, key: &str) -> Result<Setting> {
        self.gateway.get_json(&format!("/settings/{}", key)).await
    }

    pub async fn update(&self, key: &str, value: serde_json::Value) -> Result<Setting> {
        self.gateway
            .put_json(&format!("/settings/{}", key), &json!({ "value": value }))
            .await
    }
}
