//! Remote n8n instance and shared access-code configuration.

use std::fmt;

/// Connection settings for the n8n public REST API.
#[derive(Clone)]
pub struct N8nConfig {
    /// Base URL of the n8n instance, e.g. `https://n8n.example.com`.
    pub url: String,
    /// Value sent in the `X-N8N-API-KEY` header.
    pub api_key: String,
}

impl N8nConfig {
    /// Base URL without a trailing slash.
    pub fn base_url(&self) -> &str {
        self.url.trim_end_matches('/')
    }
}

impl fmt::Debug for N8nConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("N8nConfig")
            .field("url", &self.url)
            .field("api_key", &mask_secret(&self.api_key))
            .finish()
    }
}

/// The single shared secret users must present to get invited.
#[derive(Clone)]
pub struct AccessConfig {
    /// Expected access code, compared as an exact string.
    pub code: String,
}

impl fmt::Debug for AccessConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccessConfig")
            .field("code", &mask_secret(&self.code))
            .finish()
    }
}

fn mask_secret(secret: &str) -> &'static str {
    if secret.is_empty() { "" } else { "****" }
}
