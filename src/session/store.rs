//! Session store: single source of truth for who is logged in

use crate::auth::models::User;
use crate::auth::permissions::Permission;
use crate::error::Result;
use crate::session::storage::{SessionStorage, TOKEN_KEY, USER_KEY};
use tokio::sync::watch;

/// The current login session
///
/// Invariant: `token` is present exactly when `user` is present. Both are
/// persisted together and cleared together.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    pub user: Option<User>,
    pub token: Option<String>,
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some() && self.token.is_some()
    }
}

/// Holds the in-memory session and keeps it in sync with durable storage
///
/// Consumers take the store as an explicit dependency; the gateway reads the
/// token from it and its 401 handler clears it, the auth service writes it,
/// and permission checks read the current user's role.
pub struct SessionStore {
    storage: Box<dyn SessionStorage>,
    state: watch::Sender<Session>,
}

impl SessionStore {
    /// Create a store with an empty in-memory session (storage untouched)
    pub fn new(storage: Box<dyn SessionStorage>) -> Self {
        let (state, _) = watch::channel(Session::default());
        Self { storage, state }
    }

    /// Create a store and immediately load the persisted session
    pub fn open(storage: Box<dyn SessionStorage>) -> Self {
        let store = Self::new(storage);
        store.load();
        store
    }

    /// Read the persisted token and user record
    ///
    /// Missing or malformed state is treated as "not logged in": both entries
    /// are removed and the empty session is returned. Never errors.
    pub fn load(&self) -> Session {
        let token = self.storage.get(TOKEN_KEY);
        let user_json = self.storage.get(USER_KEY);

        let session = match (token, user_json) {
            (Some(token), Some(user_json)) => match serde_json::from_str::<User>(&user_json) {
                Ok(user) => Session {
                    user: Some(user),
                    token: Some(token),
                },
                Err(e) => {
                    tracing::warn!("Discarding malformed persisted user record: {}", e);
                    self.remove_persisted();
                    Session::default()
                }
            },
            (None, None) => Session::default(),
            // One entry without the other violates the session invariant;
            // treat it the same as corrupt state
            _ => {
                tracing::warn!("Discarding partial persisted session");
                self.remove_persisted();
                Session::default()
            }
        };

        self.state.send_replace(session.clone());
        session
    }

    /// Persist the user and token together and update the in-memory session
    pub fn save(&self, user: User, token: &str) -> Result<()> {
        let user_json = serde_json::to_string(&user)?;
        self.storage.set(TOKEN_KEY, token)?;
        self.storage.set(USER_KEY, &user_json)?;
        self.state.send_replace(Session {
            user: Some(user),
            token: Some(token.to_string()),
        });
        Ok(())
    }

    /// Remove both persisted entries and reset the in-memory session
    ///
    /// Idempotent; storage failures are logged rather than propagated so
    /// logout can never fail.
    pub fn clear(&self) {
        self.remove_persisted();
        self.state.send_replace(Session::default());
    }

    /// Snapshot of the current session
    pub fn current(&self) -> Session {
        self.state.borrow().clone()
    }

    /// Current bearer token, if logged in
    pub fn token(&self) -> Option<String> {
        self.state.borrow().token.clone()
    }

    /// Current user, if logged in
    pub fn user(&self) -> Option<User> {
        self.state.borrow().user.clone()
    }

    /// Subscribe to session changes
    pub fn subscribe(&self) -> watch::Receiver<Session> {
        self.state.subscribe()
    }

    /// Whether the current user's role grants a permission
    ///
    /// False whenever no user is logged in.
    pub fn has_permission(&self, permission: Permission) -> bool {
        match &self.state.borrow().user {
            Some(user) => user.role.allows(permission),
            None => false,
        }
    }

    fn remove_persisted(&self) {
        if let Err(e) = self.storage.remove(TOKEN_KEY) {
            tracing::warn!("Failed to remove persisted token: {}", e);
        }
        if let Err(e) = self.storage.remove(USER_KEY) {
            tracing::warn!("Failed to remove persisted user record: {}", e);
        }
    }
}
