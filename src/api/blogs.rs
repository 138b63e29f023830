//! Blog endpoints and models

use crate::api::gateway::Gateway;
use crate::error::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlogStatus {
    Draft,
    Published,
    Archived,
}

impl fmt::Display for BlogStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BlogStatus::Draft => write!(f, "draft"),
            BlogStatus::Published => write!(f, "published"),
            BlogStatus::Archived => write!(f, "archived"),
        }
    }
}

impl std::str::FromStr for BlogStatus {
    type Err = crate::error::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "draft" => Ok(BlogStatus::Draft),
            "published" => Ok(BlogStatus::Published),
            "archived" => Ok(BlogStatus::Archived),
            other => Err(crate::error::Error::Validation(format!(
                "Unknown blog status '{}' (expected draft, published or archived)",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub status: BlogStatus,
    #[serde(default)]
    pub author_id: Option<i64>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BlogCreate {
    pub title: String,
    pub content: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct BlogUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

/// Typed client for `/blogs`
pub struct Blogs<'a> {
    gateway: &'a Gateway,
}

impl Gateway {
    pub fn blogs(&self) -> Blogs<'_> {
        Blogs { gateway: self }
    }
}

impl Blogs<'_> {
    pub async fn list(&self, status: Option<BlogStatus>) -> Result<Vec<BlogPost>> {
        let mut params: Vec<(&str, String)> = Vec::new();
        if let Some(status) = status {
            params.push(("status", status.to_string()));
        }
        self.gateway.get_json_with("/blogs", &params).await
    }

    pub async fn get(&self, id: i64) -> Result<BlogPost> {
        self.gateway.get_json(&format!("/blogs/{}", id)).await
    }

    pub async fn create(&self, blog: &BlogCreate) -> Result<BlogPost> {
        self.gateway.post_json("/blogs", blog).await
    }

    pub async fn update(&self, id: i64, update: &BlogUpdate) -> Result<BlogPost> {
        self.gateway.put_json(&format!("/blogs/{}", id), update).await
    }

    /// Publish, archive or send back to draft
    pub async fn update_status(&self, id: i64, status: BlogStatus) -> Result<BlogPost> {
        self.gateway
            .patch_json(&format!("/blogs/{}/status", id), &json!({ "status": status }))
            .await
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        self.gateway.delete(&format!("/blogs/{}", id)).await
    }
}
