//! Shared HTTP gateway for the Crewdesk backend
//!
//! Every outbound request goes through one place: the bearer token is
//! attached when a session exists, and any 401 response clears the session
//! and sends the user back to the entry route. The gateway does not retry,
//! queue or deduplicate requests.

use crate::api::navigator::{Navigator, ENTRY_ROUTE};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::session::SessionStore;
use reqwest::{RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;

/// Versioned base path prepended to every endpoint
const API_PREFIX: &str = "/api/v1";

/// Shared HTTP client with auth-header injection and global 401 handling
pub struct Gateway {
    client: reqwest::Client,
    base_url: String,
    session: Arc<SessionStore>,
    navigator: Arc<dyn Navigator>,
}

impl Gateway {
    pub fn new(config: &Config, session: Arc<SessionStore>, navigator: Arc<dyn Navigator>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: config.server.base_url.trim_end_matches('/').to_string(),
            session,
            navigator,
        }
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    pub fn navigator(&self) -> &dyn Navigator {
        self.navigator.as_ref()
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}{}", self.base_url, API_PREFIX, path)
    }

    /// Attach the bearer token when one exists; unauthenticated otherwise
    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match self.session.token() {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// Send a request and apply the global 401 rule to its response
    async fn dispatch(&self, request: RequestBuilder) -> Result<Response> {
        let response = self.authorize(request).send().await?;
        let status = response.status();

        if status == StatusCode::UNAUTHORIZED {
            self.handle_unauthorized();
            let message = extract_detail(response).await;
            return Err(Error::Api { status, message });
        }

        if !status.is_success() {
            let message = extract_detail(response).await;
            return Err(Error::Api { status, message });
        }

        Ok(response)
    }

    /// Uniform recovery for an authentication-rejected response: clear the
    /// session, then redirect to the entry route unless already there.
    ///
    /// Clearing is idempotent, and the route guard keeps concurrent 401s
    /// from stacking up redirects. Nothing here ever writes session state,
    /// so a late response can never resurrect a cleared session.
    fn handle_unauthorized(&self) {
        tracing::debug!("Request rejected with 401, clearing session");
        self.session.clear();
        if self.navigator.current() != ENTRY_ROUTE {
            self.navigator.go(ENTRY_ROUTE);
        }
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let response = self.dispatch(self.client.get(self.url(path))).await?;
        Ok(response.json().await?)
    }

    pub async fn get_json_with<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        let request = self.client.get(self.url(path)).query(query);
        let response = self.dispatch(request).await?;
        Ok(response.json().await?)
    }

    pub async fn post_json<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let request = self.client.post(self.url(path)).json(body);
        let response = self.dispatch(request).await?;
        Ok(response.json().await?)
    }

    /// POST with an empty body (check-in style endpoints)
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let response = self.dispatch(self.client.post(self.url(path))).await?;
        Ok(response.json().await?)
    }

    /// POST where the response body is irrelevant
    pub async fn post_unit<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<()> {
        let request = self.client.post(self.url(path)).json(body);
        self.dispatch(request).await?;
        Ok(())
    }

    /// Form-encoded POST (the token endpoint expects this shape)
    pub async fn post_form<T: DeserializeOwned>(
        &self,
        path: &str,
        form: &[(&str, &str)],
    ) -> Result<T> {
        let request = self.client.post(self.url(path)).form(form);
        let response = self.dispatch(request).await?;
        Ok(response.json().await?)
    }

    pub async fn put_json<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let request = self.client.put(self.url(path)).json(body);
        let response = self.dispatch(request).await?;
        Ok(response.json().await?)
    }

    pub async fn patch_json<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let request = self.client.patch(self.url(path)).json(body);
        let response = self.dispatch(request).await?;
        Ok(response.json().await?)
    }

    pub async fn delete(&self, path: &str) -> Result<()> {
        self.dispatch(self.client.delete(self.url(path))).await?;
        Ok(())
    }
}

/// Pull the FastAPI-style `{"detail": "..."}` message out of an error
/// response, falling back to the status reason
async fn extract_detail(response: Response) -> String {
    let status = response.status();
    let fallback = || {
        status
            .canonical_reason()
            .unwrap_or("Request failed")
            .to_string()
    };

    match response.json::<serde_json::Value>().await {
        Ok(body) => body
            .get("detail")
            .and_then(|d| d.as_str())
            .map(|d| d.to_string())
            .unwrap_or_else(fallback),
        Err(_) => fallback(),
    }
}
