//! Authentication, roles and permissions

pub mod models;
pub mod permissions;
pub mod service;

pub use models::{LoginOutcome, Role, User};
pub use permissions::{Grants, Permission};
pub use service::AuthService;
