//! HTTP server and front-end configuration.

/// Bind address used when `BIND_HOST` is unset.
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Port used when `PORT` is unset.
pub const DEFAULT_PORT: u16 = 3000;

/// Static asset directory used when `PUBLIC_DIR` is unset.
pub const DEFAULT_PUBLIC_DIR: &str = "public";

/// HTTP server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address.
    pub host: String,
    /// Bind port.
    pub port: u16,
}

impl ServerConfig {
    /// `host:port` string suitable for binding a listener.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Static front-end configuration.
#[derive(Debug, Clone)]
pub struct FrontendConfig {
    /// Directory holding `index.html` and any static assets.
    pub public_dir: String,
}
