//! HTTP gateway and typed endpoint clients

pub mod attendance;
pub mod blogs;
pub mod dashboard;
pub mod employees;
pub mod gateway;
pub mod navigator;
pub mod notifications;
pub mod projects;
pub mod settings;
pub mod tasks;

pub use gateway::Gateway;
pub use navigator::{Navigator, RouteLog, DASHBOARD_ROUTE, ENTRY_ROUTE};
