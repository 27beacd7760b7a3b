//! Configuration loader with file and environment variable support

use crate::{AppConfig, ConfigError};
use std::env;
use std::path::PathBuf;
use tracing::info;

/// Standard config file search paths
const CONFIG_PATHS: &[&str] = &[
    "velora.toml",
    "./config/velora.toml",
    "/etc/velora/velora.toml",
];

/// Configuration loader
pub struct ConfigLoader {
    config_path: Option<PathBuf>,
}

impl ConfigLoader {
    /// Create a new configuration loader
    pub fn new() -> Self {
        Self { config_path: None }
    }

    /// Create a loader with a specific config file path
    pub fn with_path<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            config_path: Some(path.into()),
        }
    }

    /// Load configuration from file (if found) with environment variable overrides
    pub fn load(&self) -> Result<AppConfig, ConfigError> {
        // Start with defaults
        let mut config = AppConfig::default();

        // Try to load from file
        if let Some(path) = self.find_config_file() {
            info!(?path, "Loading configuration from file");
            config = AppConfig::from_file(&path)?;
        }

        // Apply environment variable overrides
        self.apply_env_overrides(&mut config);

        config.validate()?;

        Ok(config)
    }

    /// Find the configuration file to use
    fn find_config_file(&self) -> Option<PathBuf> {
        // Check explicit path first
        if let Some(path) = &self.config_path {
            if path.exists() {
                return Some(path.clone());
            }
        }

        // Check VELORA_CONFIG env var
        if let Ok(path) = env::var("VELORA_CONFIG") {
            let path = PathBuf::from(path);
            if path.exists() {
                return Some(path);
            }
        }

        // Search standard paths
        for path in CONFIG_PATHS {
            let path = PathBuf::from(path);
            if path.exists() {
                return Some(path);
            }
        }

        None
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(&self, config: &mut AppConfig) {
        // Services
        if let Ok(val) = env::var("VELORA_AUTH_URL") {
            config.services.auth_url = val;
        }
        if let Ok(val) = env::var("VELORA_PRODUCTS_URL") {
            config.services.products_url = val;
        }
        if let Ok(val) = env::var("VELORA_ORDERS_URL") {
            config.services.orders_url = val;
        }
        if let Ok(val) = env::var("VELORA_INVENTORY_URL") {
            config.services.inventory_url = val;
        }

        // HTTP
        if let Ok(val) = env::var("VELORA_HTTP_TIMEOUT_SECS") {
            if let Ok(timeout) = val.parse() {
                config.http.timeout_secs = timeout;
            }
        }
        if let Ok(val) = env::var("VELORA_HTTP_USER_AGENT") {
            config.http.user_agent = val;
        }

        // Session
        if let Ok(val) = env::var("VELORA_SESSION_DIR") {
            config.session.storage_dir = val;
        }

        // Auth
        if let Ok(val) = env::var("VELORA_LOGOUT_MODE") {
            config.auth.logout = val;
        }
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
