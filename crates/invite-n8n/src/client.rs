//! HTTP client for the n8n user endpoints.

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde_json::Value;
use tracing::debug;

use invite_core::config::N8nConfig;
use invite_core::result::AppResult;
use invite_core::traits::UserDirectory;
use invite_core::types::NewUser;

use crate::error::N8nError;

/// Header carrying the n8n API key.
pub const API_KEY_HEADER: &str = "X-N8N-API-KEY";

/// Path of the user collection in the public API.
pub const USERS_PATH: &str = "/api/v1/users";

/// Client for `GET`/`POST {base}/api/v1/users`.
///
/// Cheap to clone; the underlying [`reqwest::Client`] shares its connection
/// pool between clones.
#[derive(Clone)]
pub struct N8nClient {
    http: Client,
    base_url: String,
    api_key: String,
}

impl std::fmt::Debug for N8nClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("N8nClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl N8nClient {
    /// Creates a client from an existing `reqwest` client and n8n settings.
    pub fn new(http: Client, config: &N8nConfig) -> Self {
        Self {
            http,
            base_url: config.base_url().to_string(),
            api_key: config.api_key.clone(),
        }
    }

    /// Base URL requests are issued against.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn users_url(&self) -> String {
        format!("{}{}", self.base_url, USERS_PATH)
    }

    /// `GET /api/v1/users`
    pub async fn fetch_users(&self) -> Result<Value, N8nError> {
        let url = self.users_url();
        debug!(url = %url, "Fetching n8n users");

        let response = self
            .http
            .get(&url)
            .header(API_KEY_HEADER, &self.api_key)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .send()
            .await?;

        read_json(response).await
    }

    /// `POST /api/v1/users` with the given batch as a JSON array.
    pub async fn post_users(&self, users: &[NewUser]) -> Result<Value, N8nError> {
        let url = self.users_url();
        debug!(url = %url, count = users.len(), "Creating n8n users");

        let response = self
            .http
            .post(&url)
            .header(API_KEY_HEADER, &self.api_key)
            .json(users)
            .send()
            .await?;

        read_json(response).await
    }
}

/// Read a success body as JSON, or turn an error status into
/// [`N8nError::Status`] using the body's `message` when it has one.
///
/// A success body that is empty or not JSON is returned as a JSON string
/// holding the raw text, so callers still see that the call succeeded.
async fn read_json(response: Response) -> Result<Value, N8nError> {
    let status = response.status();

    if status.is_success() {
        let body = response.text().await?;
        return Ok(serde_json::from_str(&body).unwrap_or_else(|e| {
            debug!(status = status.as_u16(), error = %e, "n8n success body is not JSON");
            Value::String(body)
        }));
    }

    let body = match response.text().await {
        Ok(body) => body,
        Err(e) => {
            debug!(status = status.as_u16(), error = %e, "Failed to read n8n error body");
            String::new()
        }
    };
    let message = serde_json::from_str::<Value>(&body)
        .ok()
        .and_then(|v| v.get("message").and_then(Value::as_str).map(str::to_owned))
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| format!("Request failed with status code {}", status.as_u16()));

    debug!(status = status.as_u16(), body = %body, "n8n returned an error status");

    Err(N8nError::Status {
        status: status.as_u16(),
        message,
    })
}

#[async_trait]
impl UserDirectory for N8nClient {
    async fn list_users(&self) -> AppResult<Value> {
        Ok(self.fetch_users().await?)
    }

    async fn create_users(&self, users: &[NewUser]) -> AppResult<Value> {
        Ok(self.post_users(users).await?)
    }
}
