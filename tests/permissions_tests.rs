//! Role and permission table tests

use crewdesk::auth::permissions::{Grants, Permission, ALL_PERMISSIONS};
use crewdesk::auth::Role;
use crewdesk::session::{MemoryStorage, SessionStore};
use crewdesk::auth::models::User;

/// The full grant table, stated independently of the implementation
fn expected_grants(role: Role) -> Vec<Permission> {
    match role {
        Role::SuperAdmin => ALL_PERMISSIONS.to_vec(),
        Role::Admin => vec![
            Permission::ManageEmployees,
            Permission::ManageProjects,
            Permission::ManageTasks,
            Permission::ViewAllAttendance,
            Permission::ManageBlogs,
        ],
        Role::ProjectManager => vec![
            Permission::ManageTasks,
            Permission::CreateProjects,
            Permission::ManageOwnProjects,
        ],
        Role::Employee => vec![
            Permission::ViewOwnTasks,
            Permission::MarkAttendance,
            Permission::ViewOwnAttendance,
        ],
        Role::ContentEditor => vec![
            Permission::CreateBlogs,
            Permission::EditOwnBlogs,
            Permission::ViewBlogs,
        ],
        Role::Unknown => vec![],
    }
}

#[test]
fn test_every_role_matches_the_table() {
    let roles = [
        Role::SuperAdmin,
        Role::Admin,
        Role::ProjectManager,
        Role::Employee,
        Role::ContentEditor,
        Role::Unknown,
    ];

    for role in roles {
        let expected = expected_grants(role);
        for permission in ALL_PERMISSIONS {
            assert_eq!(
                role.allows(permission),
                expected.contains(&permission),
                "{} / {}",
                role,
                permission
            );
        }
    }
}

#[test]
fn test_super_admin_is_wildcard() {
    assert_eq!(Role::SuperAdmin.grants(), Grants::All);
    for permission in ALL_PERMISSIONS {
        assert!(Role::SuperAdmin.allows(permission));
    }
}

#[test]
fn test_empty_session_has_no_permissions() {
    let store = SessionStore::new(Box::new(MemoryStorage::new()));
    for permission in ALL_PERMISSIONS {
        assert!(!store.has_permission(permission), "{}", permission);
    }
}

#[test]
fn test_session_permissions_follow_role() {
    let store = SessionStore::new(Box::new(MemoryStorage::new()));
    store
        .save(
            User {
                id: 1,
                username: "admin".to_string(),
                email: None,
                role: Role::Admin,
            },
            "tok1",
        )
        .expect("save");

    assert!(store.has_permission(Permission::ManageEmployees));
    assert!(!store.has_permission(Permission::CreateBlogs));
}

#[test]
fn test_unknown_role_from_wire_has_no_permissions() {
    // A role string this build does not know resolves to the empty set
    let user: User =
        serde_json::from_str(r#"{"id":9,"username":"x","role":"director"}"#).expect("user");
    assert_eq!(user.role, Role::Unknown);
    for permission in ALL_PERMISSIONS {
        assert!(!user.role.allows(permission));
    }
}
