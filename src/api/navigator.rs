//! Navigation as an injected dependency
//!
//! The gateway and auth service never reach for a global location; they are
//! handed a [`Navigator`] so redirect behavior is testable in isolation.

use std::sync::Mutex;

/// The unauthenticated entry route users land on after logout or a 401
pub const ENTRY_ROUTE: &str = "/";

/// Route shown after a successful login
pub const DASHBOARD_ROUTE: &str = "/dashboard";

/// Something that knows where the user is and can send them elsewhere
pub trait Navigator: Send + Sync {
    /// The route currently being viewed
    fn current(&self) -> String;

    /// Navigate to a route
    fn go(&self, route: &str);
}

/// Navigator that tracks the current route and records every navigation
pub struct RouteLog {
    current: Mutex<String>,
    history: Mutex<Vec<String>>,
}

impl RouteLog {
    /// Start at the entry route
    pub fn new() -> Self {
        Self::starting_at(ENTRY_ROUTE)
    }

    pub fn starting_at(route: &str) -> Self {
        Self {
            current: Mutex::new(route.to_string()),
            history: Mutex::new(Vec::new()),
        }
    }

    /// Every route navigated to, in order
    pub fn history(&self) -> Vec<String> {
        self.history.lock().unwrap().clone()
    }
}

impl Default for RouteLog {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator for RouteLog {
    fn current(&self) -> String {
        self.current.lock().unwrap().clone()
    }

    fn go(&self, route: &str) {
        tracing::debug!("Navigating to {}", route);
        *self.current.lock().unwrap() = route.to_string();
        self.history.lock().unwrap().push(route.to_string());
    }
}
