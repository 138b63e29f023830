//! Notification endpoints and models

use crate::api::gateway::Gateway;
use crate::error::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    pub id: i64,
    pub message: String,
    #[serde(default)]
    pub is_read: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize)]
pub struct UnreadCount {
    pub count: i64,
}

/// Typed client for `/notifications`
pub struct Notifications<'a> {
    gateway: &'a Gateway,
}

impl Gateway {
    pub fn notifications(&self) -> Notifications<'_> {
        Notifications { gateway: self }
    }
}

impl Notifications<'_> {
    pub async fn list(&self) -> Result<Vec<Notification>> {
        self.gateway.get_json("/notifications").await
    }

    pub async fn mark_read(&self, id: i64) -> Result<Notification> {
        self.gateway
            .patch_json(&format!("/notifications/{}/read", id), &json!({}))
            .await
    }

    pub async fn mark_all_read(&self) -> Result<()> {
        self.gateway
            .post_unit("/notifications/mark-all-read", &json!({}))
            .await
    }

    pub async fn unread_count(&self) -> Result<UnreadCount> {
        self.gateway.get_json("/notifications/unread-count").await
    }
}
