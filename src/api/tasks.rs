//! Task endpoints and models (kanban-style statuses)

use crate::api::gateway::Gateway;
use crate::error::Result;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::fmt;

/// Kanban column a task sits in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    Todo,
    InProgress,
    Review,
    Done,
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaskStatus::Todo => write!(f, "todo"),
            TaskStatus::InProgress => write!(f, "in_progress"),
            TaskStatus::Review => write!(f, "review"),
            TaskStatus::Done => write!(f, "done"),
        }
    }
}

impl std::str::FromStr for TaskStatus {
    type Err = crate::error::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "todo" => Ok(TaskStatus::Todo),
            "in_progress" => Ok(TaskStatus::InProgress),
            "review" => Ok(TaskStatus::Review),
            "done" => Ok(TaskStatus::Done),
            other => Err(crate::error::Error::Validation(format!(
                "Unknown task status '{}' (expected todo, in_progress, review or done)",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskPriority {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub status: TaskStatus,
    #[serde(default)]
    pub priority: Option<TaskPriority>,
    #[serde(default)]
    pub project_id: Option<i64>,
    #[serde(default)]
    pub assigned_to: Option<i64>,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TaskCreate {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<TaskPriority>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct TaskUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<TaskPriority>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
}

/// Server-side task list filters
#[derive(Debug, Clone, Default)]
pub struct TaskFilter {
    pub project_id: Option<i64>,
    pub status: Option<TaskStatus>,
}

/// Typed client for `/tasks`
pub struct Tasks<'a> {
    gateway: &'a Gateway,
}

impl Gateway {
    pub fn tasks(&self) -> Tasks<'_> {
        Tasks { gateway: self }
    }
}

impl Tasks<'_> {
    pub async fn list(&self, filter: &TaskFilter) -> Result<Vec<Task>> {
        let mut params: Vec<(&str, String)> = Vec::new();
        if let Some(project_id) = filter.project_id {
            params.push(("project_id", project_id.to_string()));
        }
        if let Some(status) = filter.status {
            params.push(("status", status.to_string()));
        }
        self.gateway.get_json_with("/tasks", &params).await
    }

    pub async fn get(&self, id: i64) -> Result<Task> {
        self.gateway.get_json(&format!("/tasks/{}", id)).await
    }

    /// Tasks assigned to the current user
    pub async fn my_tasks(&self) -> Result<Vec<Task>> {
        self.gateway.get_json("/tasks/my-tasks").await
    }

    pub async fn create(&self, task: &TaskCreate) -> Result<Task> {
        self.gateway.post_json("/tasks", task).await
    }

    pub async fn update(&self, id: i64, update: &TaskUpdate) -> Result<Task> {
        self.gateway.put_json(&format!("/tasks/{}", id), update).await
    }

    /// Move a task between kanban columns
    pub async fn update_status(&self, id: i64, status: TaskStatus) -> Result<Task> {
        self.gateway
            .patch_json(&format!("/tasks/{}/status", id), &json!({ "status": status }))
            .await
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        self.gateway.delete(&format!("/tasks/{}", id)).await
    }
}
