//! Crewdesk - employee management client
//!
//! This is the library interface for Crewdesk, exposing the session store,
//! auth flows, permission checks and the typed API client.

pub mod api;
pub mod auth;
pub mod cli;
pub mod config;
pub mod error;
pub mod session;

pub use api::Gateway;
pub use auth::{AuthService, Permission, Role};
pub use config::Config;
pub use error::Error;
pub use session::{Session, SessionStore};
