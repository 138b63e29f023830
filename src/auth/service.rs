//! Login, logout and password recovery against the backend

use crate::api::gateway::Gateway;
use crate::api::navigator::{DASHBOARD_ROUTE, ENTRY_ROUTE};
use crate::auth::models::{LoginOutcome, LoginResponse, ResetPasswordRequest};
use crate::error::{Error, Result};
use serde_json::json;
use std::sync::Arc;

/// Minimum accepted password length, checked before dispatch
const MIN_PASSWORD_LEN: usize = 8;

const LOGIN_FALLBACK_MESSAGE: &str = "Login failed. Please check your credentials.";

/// Orchestrates the auth flows; writes the session store via the gateway
pub struct AuthService {
    gateway: Arc<Gateway>,
}

impl AuthService {
    pub fn new(gateway: Arc<Gateway>) -> Self {
        Self { gateway }
    }

    /// Exchange credentials for a bearer token
    ///
    /// On success the token and user are persisted together and the user is
    /// sent to the dashboard. Every failure is normalized into a
    /// [`LoginOutcome::Failed`] message; this never returns an error.
    pub async fn login(&self, username: &str, password: &str) -> LoginOutcome {
        let form = [("username", username), ("password", password)];
        let response: LoginResponse = match self.gateway.post_form("/auth/login", &form).await {
            Ok(response) => response,
            Err(Error::Api { message, .. }) => {
                return LoginOutcome::Failed { message };
            }
            Err(e) => {
                tracing::warn!("Login request failed: {}", e);
                return LoginOutcome::Failed {
                    message: LOGIN_FALLBACK_MESSAGE.to_string(),
                };
            }
        };

        if let Err(e) = self
            .gateway
            .session()
            .save(response.user, &response.access_token)
        {
            tracing::warn!("Failed to persist session: {}", e);
            return LoginOutcome::Failed {
                message: LOGIN_FALLBACK_MESSAGE.to_string(),
            };
        }

        self.gateway.navigator().go(DASHBOARD_ROUTE);
        LoginOutcome::Success
    }

    /// Clear the session and return to the entry route
    pub fn logout(&self) {
        self.gateway.session().clear();
        self.gateway.navigator().go(ENTRY_ROUTE);
    }

    /// Ask the backend to issue a reset code out-of-band; no session impact
    pub async fn forgot_password(&self, email: &str) -> Result<()> {
        self.gateway
            .post_unit("/auth/forgot-password", &json!({ "email": email }))
            .await
    }

    /// Exchange a reset code for a password change; no session impact
    ///
    /// The user still has to log in afterward. The length check runs before
    /// any network dispatch (the server enforces it authoritatively too).
    pub async fn reset_password(&self, email: &str, code: &str, new_password: &str) -> Result<()> {
        if new_password.chars().count() < MIN_PASSWORD_LEN {
            return Err(Error::Validation(format!(
                "Password must be at least {} characters long.",
                MIN_PASSWORD_LEN
            )));
        }

        self.gateway
            .post_unit(
                "/auth/reset-password",
                &ResetPasswordRequest {
                    email: email.to_string(),
                    reset_code: code.to_string(),
                    new_password: new_password.to_string(),
                },
            )
            .await
    }
}
