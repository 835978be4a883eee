//! Application configuration schemas.
//!
//! Settings are read through the `config` crate from an optional
//! `config/default.toml` file overlaid by process environment variables.
//! Keys are flat (`N8N_URL` becomes `n8n_url`) and are then assembled into
//! the typed [`AppConfig`] sections.

pub mod app;
pub mod logging;
pub mod n8n;

use serde::Deserialize;

pub use self::app::{FrontendConfig, ServerConfig};
pub use self::logging::LoggingConfig;
pub use self::n8n::{AccessConfig, N8nConfig};

use crate::error::AppError;

/// Root application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Remote n8n instance settings.
    pub n8n: N8nConfig,
    /// Shared access-code settings.
    pub access: AccessConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
    /// Static front-end settings.
    pub frontend: FrontendConfig,
}

/// Flat key/value view of the configuration sources.
///
/// Every field is optional here; required values are enforced by
/// [`AppConfig::from_settings`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    /// `N8N_URL`
    #[serde(default)]
    pub n8n_url: Option<String>,
    /// `N8N_API_KEY`
    #[serde(default)]
    pub n8n_api_key: Option<String>,
    /// `APP_ACCESS_CODE`
    #[serde(default)]
    pub app_access_code: Option<String>,
    /// `PORT`
    #[serde(default)]
    pub port: Option<u16>,
    /// `BIND_HOST`
    #[serde(default)]
    pub bind_host: Option<String>,
    /// `LOG_LEVEL`
    #[serde(default)]
    pub log_level: Option<String>,
    /// `LOG_FORMAT`
    #[serde(default)]
    pub log_format: Option<String>,
    /// `PUBLIC_DIR`
    #[serde(default)]
    pub public_dir: Option<String>,
}

impl AppConfig {
    /// Load configuration from `config/default.toml` (if present) and the
    /// process environment.
    pub fn load() -> Result<Self, AppError> {
        let settings: Settings = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::Environment::default())
            .build()?
            .try_deserialize()?;

        Self::from_settings(settings)
    }

    /// Assemble the typed configuration from flat settings.
    ///
    /// `N8N_URL`, `N8N_API_KEY` and `APP_ACCESS_CODE` must be present and
    /// non-empty.
    pub fn from_settings(settings: Settings) -> Result<Self, AppError> {
        let missing = missing_keys(&settings);

        let (Some(url), Some(api_key), Some(code)) = (
            non_empty(settings.n8n_url),
            non_empty(settings.n8n_api_key),
            non_empty(settings.app_access_code),
        ) else {
            return Err(AppError::configuration(format!(
                "N8N_URL, N8N_API_KEY, and APP_ACCESS_CODE must be set (missing: {})",
                missing.join(", ")
            )));
        };

        Ok(Self {
            server: ServerConfig {
                host: non_empty(settings.bind_host)
                    .unwrap_or_else(|| app::DEFAULT_HOST.to_string()),
                port: settings.port.unwrap_or(app::DEFAULT_PORT),
            },
            n8n: N8nConfig { url, api_key },
            access: AccessConfig { code },
            logging: LoggingConfig {
                level: non_empty(settings.log_level)
                    .unwrap_or_else(|| logging::DEFAULT_LEVEL.to_string()),
                format: non_empty(settings.log_format)
                    .unwrap_or_else(|| logging::DEFAULT_FORMAT.to_string()),
            },
            frontend: FrontendConfig {
                public_dir: non_empty(settings.public_dir)
                    .unwrap_or_else(|| app::DEFAULT_PUBLIC_DIR.to_string()),
            },
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn missing_keys(settings: &Settings) -> Vec<&'static str> {
    let present = |v: &Option<String>| v.as_deref().is_some_and(|s| !s.is_empty());
    [
        ("N8N_URL", present(&settings.n8n_url)),
        ("N8N_API_KEY", present(&settings.n8n_api_key)),
        ("APP_ACCESS_CODE", present(&settings.app_access_code)),
    ]
    .into_iter()
    .filter(|(_, present)| !present)
    .map(|(key, _)| key)
    .collect()
}
