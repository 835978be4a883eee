//! Logging configuration.

/// Level used when `LOG_LEVEL` is unset.
pub const DEFAULT_LEVEL: &str = "info";

/// Format used when `LOG_FORMAT` is unset.
pub const DEFAULT_FORMAT: &str = "pretty";

/// Logging and tracing configuration.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level: `"trace"`, `"debug"`, `"info"`, `"warn"`, `"error"`.
    pub level: String,
    /// Log format: `"json"` or `"pretty"`.
    pub format: String,
}

impl LoggingConfig {
    /// Whether the JSON formatter was requested.
    pub fn is_json(&self) -> bool {
        self.format.eq_ignore_ascii_case("json")
    }
}
