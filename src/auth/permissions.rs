//! Role-based permission resolution
//!
//! The role-to-permission table is fixed at build time. Permission checks
//! are pure functions of the role and the requested permission.

use crate::auth::models::Role;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Capability tokens checked by UI gating and the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Permission {
    ManageEmployees,
    ManageProjects,
    ManageTasks,
    ViewAllAttendance,
    ManageBlogs,
    CreateProjects,
    ManageOwnProjects,
    ViewOwnTasks,
    MarkAttendance,
    ViewOwnAttendance,
    CreateBlogs,
    EditOwnBlogs,
    ViewBlogs,
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Permission::ManageEmployees => "manage_employees",
            Permission::ManageProjects => "manage_projects",
            Permission::ManageTasks => "manage_tasks",
            Permission::ViewAllAttendance => "view_all_attendance",
            Permission::ManageBlogs => "manage_blogs",
            Permission::CreateProjects => "create_projects",
            Permission::ManageOwnProjects => "manage_own_projects",
            Permission::ViewOwnTasks => "view_own_tasks",
            Permission::MarkAttendance => "mark_attendance",
            Permission::ViewOwnAttendance => "view_own_attendance",
            Permission::CreateBlogs => "create_blogs",
            Permission::EditOwnBlogs => "edit_own_blogs",
            Permission::ViewBlogs => "view_blogs",
        };
        write!(f, "{}", s)
    }
}

/// Every permission token, in table order
pub const ALL_PERMISSIONS: [Permission; 13] = [
    Permission::ManageEmployees,
    Permission::ManageProjects,
    Permission::ManageTasks,
    Permission::ViewAllAttendance,
    Permission::ManageBlogs,
    Permission::CreateProjects,
    Permission::ManageOwnProjects,
    Permission::ViewOwnTasks,
    Permission::MarkAttendance,
    Permission::ViewOwnAttendance,
    Permission::CreateBlogs,
    Permission::EditOwnBlogs,
    Permission::ViewBlogs,
];

/// What a role is granted: everything, or a fixed set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grants {
    /// Wildcard - every permission
    All,
    Only(&'static [Permission]),
}

impl Grants {
    pub fn contains(&self, permission: Permission) -> bool {
        match self {
            Grants::All => true,
            Grants::Only(set) => set.contains(&permission),
        }
    }
}

impl Role {
    /// The static grant table for this role
    pub fn grants(&self) -> Grants {
        match self {
            Role::SuperAdmin => Grants::All,
            Role::Admin => Grants::Only(&[
                Permission::ManageEmployees,
                Permission::ManageProjects,
                Permission::ManageTasks,
                Permission::ViewAllAttendance,
                Permission::ManageBlogs,
            ]),
            Role::ProjectManager => Grants::Only(&[
                Permission::ManageTasks,
                Permission::CreateProjects,
                Permission::ManageOwnProjects,
            ]),
            Role::Employee => Grants::Only(&[
                Permission::ViewOwnTasks,
                Permission::MarkAttendance,
                Permission::ViewOwnAttendance,
            ]),
            Role::ContentEditor => Grants::Only(&[
                Permission::CreateBlogs,
                Permission::EditOwnBlogs,
                Permission::ViewBlogs,
            ]),
            Role::Unknown => Grants::Only(&[]),
        }
    }

    /// Whether this role grants a permission
    pub fn allows(&self, permission: Permission) -> bool {
        self.grants().contains(permission)
    }
}
