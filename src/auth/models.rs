//! Authentication models

use serde::{Deserialize, Serialize};
use std::fmt;

/// User roles for authorization
///
/// `Unknown` is a defensive fallback for role strings from storage or the
/// network that this build does not recognize; it grants no permissions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Full access to everything
    SuperAdmin,
    /// Manages employees, projects, tasks, attendance and blogs
    Admin,
    /// Manages tasks and their own projects
    ProjectManager,
    /// Regular employee - own tasks and attendance
    Employee,
    /// Writes and edits blog content
    ContentEditor,
    #[serde(other)]
    Unknown,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::SuperAdmin => write!(f, "super_admin"),
            Role::Admin => write!(f, "admin"),
            Role::ProjectManager => write!(f, "project_manager"),
            Role::Employee => write!(f, "employee"),
            Role::ContentEditor => write!(f, "content_editor"),
            Role::Unknown => write!(f, "unknown"),
        }
    }
}

/// The logged-in user as returned by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
    pub role: Role,
}

/// Login response body from `POST /auth/login`
#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub user: User,
}

/// Request body for `POST /auth/reset-password`
#[derive(Debug, Serialize)]
pub struct ResetPasswordRequest {
    pub email: String,
    pub reset_code: String,
    pub new_password: String,
}

/// Outcome of a login attempt
///
/// Login never errors: every failure is normalized into a displayable
/// message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    Success,
    Failed { message: String },
}

impl LoginOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, LoginOutcome::Success)
    }

    /// The failure message, if the attempt failed
    pub fn error_message(&self) -> Option<&str> {
        match self {
            LoginOutcome::Success => None,
            LoginOutcome::Failed { message } => Some(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_deserializes_from_snake_case() {
        let role: Role = serde_json::from_str("\"project_manager\"").expect("role");
        assert_eq!(role, Role::ProjectManager);
    }

    #[test]
    fn test_unrecognized_role_falls_back_to_unknown() {
        let role: Role = serde_json::from_str("\"intern\"").expect("role");
        assert_eq!(role, Role::Unknown);
    }

    #[test]
    fn test_user_without_email() {
        let user: User =
            serde_json::from_str(r#"{"id":1,"username":"admin","role":"admin"}"#).expect("user");
        assert_eq!(user.role, Role::Admin);
        assert!(user.email.is_none());
    }

    #[test]
    fn test_role_display_matches_wire_format() {
        assert_eq!(Role::SuperAdmin.to_string(), "super_admin");
        assert_eq!(
            serde_json::to_string(&Role::ContentEditor).expect("json"),
            "\"content_editor\""
        );
    }
}
