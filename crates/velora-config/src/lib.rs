//! VELORA Console Configuration
//!
//! This crate provides TOML-based configuration with environment variable
//! override support. Every section is optional; defaults match a local
//! development deployment of the backend services.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

mod loader;

pub use loader::ConfigLoader;

/// Configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// Root application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub services: ServicesConfig,
    pub http: HttpConfig,
    pub session: SessionConfig,
    pub auth: AuthConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            services: ServicesConfig::default(),
            http: HttpConfig::default(),
            session: SessionConfig::default(),
            auth: AuthConfig::default(),
        }
    }
}

/// Base URLs of the consumed backend services
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServicesConfig {
    pub auth_url: String,
    pub products_url: String,
    pub orders_url: String,
    pub inventory_url: String,
}

impl Default for ServicesConfig {
    fn default() -> Self {
        Self {
            auth_url: "http://localhost:8000".to_string(),
            products_url: "http://localhost:8001".to_string(),
            orders_url: "http://localhost:8002".to_string(),
            inventory_url: "http://localhost:8004".to_string(),
        }
    }
}

/// Outgoing HTTP client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// User agent header; empty string uses the client's default
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 30,
            user_agent: String::new(),
        }
    }
}

/// Durable session storage configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Directory holding the persisted session entry
    pub storage_dir: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            storage_dir: "./data".to_string(),
        }
    }
}

/// Authentication behavior configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// Logout mode: "local" clears client state only, "revoke" also
    /// invalidates the credential server-side
    pub logout: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            logout: "local".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration with environment variable override
    pub fn load() -> Result<Self, ConfigError> {
        let loader = ConfigLoader::new();
        loader.load()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, url) in [
            ("services.auth_url", &self.services.auth_url),
            ("services.products_url", &self.services.products_url),
            ("services.orders_url", &self.services.orders_url),
            ("services.inventory_url", &self.services.inventory_url),
        ] {
            if url.is_empty() {
                return Err(ConfigError::ValidationError(format!(
                    "{} must not be empty",
                    name
                )));
            }
        }

        if self.http.timeout_secs == 0 {
            return Err(ConfigError::ValidationError(
                "http.timeout_secs must be greater than zero".to_string(),
            ));
        }

        if self.session.storage_dir.is_empty() {
            return Err(ConfigError::ValidationError(
                "session.storage_dir must not be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Generate an example TOML configuration
    pub fn example_toml() -> String {
        r#"# VELORA Console Configuration
# Environment variables override these settings

[services]
auth_url = "http://localhost:8000"
products_url = "http://localhost:8001"
orders_url = "http://localhost:8002"
inventory_url = "http://localhost:8004"

[http]
timeout_secs = 30
user_agent = ""

[session]
storage_dir = "./data"

[auth]
logout = "local"  # local or revoke
"#
        .to_string()
    }
}
