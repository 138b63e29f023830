//! Dashboard statistics endpoints

use crate::api::gateway::Gateway;
use crate::error::Result;
use serde::Deserialize;

/// Organization-wide stats shown to admins
#[derive(Debug, Default, Deserialize)]
pub struct DashboardStats {
    #[serde(default)]
    pub total_employees: i64,
    #[serde(default)]
    pub active_projects: i64,
    #[serde(default)]
    pub pending_tasks: i64,
    #[serde(default)]
    pub present_today: i64,
}

/// Per-employee stats for the personal dashboard
#[derive(Debug, Default, Deserialize)]
pub struct EmployeeStats {
    #[serde(default)]
    pub assigned_tasks: i64,
    #[serde(default)]
    pub completed_tasks: i64,
    #[serde(default)]
    pub days_present: i64,
}

/// Typed client for `/dashboard`
pub struct Dashboard<'a> {
    gateway: &'a Gateway,
}

impl Gateway {
    pub fn dashboard(&self) -> Dashboard<'_> {
        Dashboard { gateway: self }
    }
}

impl Dashboard<'_> {
    pub async fn stats(&self) -> Result<DashboardStats> {
        self.gateway.get_json("/dashboard/stats").await
    }

    pub async fn employee_stats(&self) -> Result<EmployeeStats> {
        self.gateway.get_json("/dashboard/employee-stats").await
    }
}
