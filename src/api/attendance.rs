//! Attendance endpoints and models

use crate::api::gateway::Gateway;
use crate::error::Result;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceRecord {
    pub id: i64,
    pub employee_id: i64,
    /// Display name, present on admin-wide listings
    #[serde(default)]
    pub employee_name: Option<String>,
    pub date: NaiveDate,
    #[serde(default)]
    pub check_in: Option<DateTime<Utc>>,
    #[serde(default)]
    pub check_out: Option<DateTime<Utc>>,
}

impl AttendanceRecord {
    /// Hours between check-in and check-out, when both are present
    pub fn hours_worked(&self) -> Option<f64> {
        let (check_in, check_out) = (self.check_in?, self.check_out?);
        Some((check_out - check_in).num_seconds() as f64 / 3600.0)
    }
}

/// Date-bounded history query
#[derive(Debug, Clone, Default)]
pub struct HistoryQuery {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

/// Typed client for `/attendance`
pub struct Attendance<'a> {
    gateway: &'a Gateway,
}

impl Gateway {
    pub fn attendance(&self) -> Attendance<'_> {
        Attendance { gateway: self }
    }
}

impl Attendance<'_> {
    pub async fn check_in(&self) -> Result<AttendanceRecord> {
        self.gateway.post_empty("/attendance/check-in").await
    }

    pub async fn check_out(&self) -> Result<AttendanceRecord> {
        self.gateway.post_empty("/attendance/check-out").await
    }

    /// Today's record for the current user; None when not checked in yet
    pub async fn today(&self) -> Result<Option<AttendanceRecord>> {
        self.gateway.get_json("/attendance/today").await
    }

    pub async fn history(&self, query: &HistoryQuery) -> Result<Vec<AttendanceRecord>> {
        let mut params: Vec<(&str, String)> = Vec::new();
        if let Some(from) = query.from {
            params.push(("from", from.to_string()));
        }
        if let Some(to) = query.to {
            params.push(("to", to.to_string()));
        }
        self.gateway
            .get_json_with("/attendance/history", &params)
            .await
    }

    /// Everyone's attendance for today; requires view_all_attendance
    pub async fn all_today(&self) -> Result<Vec<AttendanceRecord>> {
        self.gateway.get_json("/attendance/all-today").await
    }
}
