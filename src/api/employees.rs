//! Employee endpoints and models

use crate::api::gateway::Gateway;
use crate::auth::models::Role;
use crate::error::Result;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Employee {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub position: Option<String>,
    pub role: Role,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

#[derive(Debug, Clone, Serialize)]
pub struct EmployeeCreate {
    pub username: String,
    pub email: String,
    pub password: String,
    pub role: Role,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
}

/// Partial update; absent fields are left untouched
#[derive(Debug, Clone, Default, Serialize)]
pub struct EmployeeUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

#[derive(Debug, Serialize)]
pub struct ChangePasswordRequest {
    pub current_password: String,
    pub new_password: String,
}

/// Typed client for `/employees`
pub struct Employees<'a> {
    gateway: &'a Gateway,
}

impl Gateway {
    pub fn employees(&self) -> Employees<'_> {
        Employees { gateway: self }
    }
}

impl Employees<'_> {
    pub async fn list(&self) -> Result<Vec<Employee>> {
        self.gateway.get_json("/employees").await
    }

    pub async fn get(&self, id: i64) -> Result<Employee> {
        self.gateway.get_json(&format!("/employees/{}", id)).await
    }

    pub async fn me(&self) -> Result<Employee> {
        self.gateway.get_json("/employees/me").await
    }

    pub async fn create(&self, employee: &EmployeeCreate) -> Result<Employee> {
        self.gateway.post_json("/employees", employee).await
    }

    pub async fn update(&self, id: i64, update: &EmployeeUpdate) -> Result<Employee> {
        self.gateway
            .put_json(&format!("/employees/{}", id), update)
            .await
    }

    pub async fn update_me(&self, update: &EmployeeUpdate) -> Result<Employee> {
        self.gateway.put_json("/employees/me", update).await
    }

    pub async fn change_password(&self, current: &str, new: &str) -> Result<()> {
        self.gateway
            .post_unit(
                "/employees/me/change-password",
                &ChangePasswordRequest {
                    current_password: current.to_string(),
                    new_password: new.to_string(),
                },
            )
            .await
    }

    /// Admin-triggered reset; response shape is backend-defined
    pub async fn reset_password(&self, id: i64) -> Result<serde_json::Value> {
        self.gateway
            .post_empty(&format!("/employees/{}/reset-password", id))
            .await
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        self.gateway.delete(&format!("/employees/{}", id)).await
    }
}
