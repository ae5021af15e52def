//! Configuration management for the Campus proxy

use std::net::SocketAddr;

use serde::{Deserialize, Serialize};

use crate::Result;

/// Main proxy configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProxyConfig {
    /// HTTP server configuration
    pub http: HttpConfig,

    /// Backend service configuration
    pub backend: BackendConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Address to bind the HTTP server
    pub bind_addr: SocketAddr,

    /// Enable permissive CORS for the web interface
    pub cors_enabled: bool,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

/// Backend service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    /// Base URL of the Campus backend service
    pub base_url: String,

    /// Backend request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:3000".parse().unwrap(),
            cors_enabled: true,
            timeout_secs: 30,
        }
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            timeout_secs: 10,
        }
    }
}

impl ProxyConfig {
    /// Load configuration from a file, with `CAMPUS_*` environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration file cannot be read or parsed
    pub fn from_file<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::from(path.as_ref()))
            .add_source(config::Environment::with_prefix("CAMPUS").separator("__"))
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    /// Load configuration from the environment only, with documented defaults
    /// (`CAMPUS_BACKEND__BASE_URL` overrides the backend address)
    ///
    /// # Errors
    ///
    /// Returns an error if an override cannot be parsed
    pub fn load() -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::Environment::with_prefix("CAMPUS").separator("__"))
            .build()?;

        Ok(settings.try_deserialize()?)
    }
}
