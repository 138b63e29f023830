//! Persistent login session management

pub mod storage;
pub mod store;

pub use storage::{FileStorage, MemoryStorage, SessionStorage, TOKEN_KEY, USER_KEY};
pub use store::{Session, SessionStore};
