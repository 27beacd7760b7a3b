//! Console startup wiring
//!
//! Builds the object graph the console shell runs on: configuration, the
//! session store, the API client and the route guard. The store is
//! initialized here, before the guard can be asked anything, so the first
//! navigation decision never races the restore of a persisted session.

use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;
use tracing::{info, warn};

use velora_client::{Client, Config, LogoutMode, SessionStore};
use velora_config::{AppConfig, ConfigError, ConfigLoader};

use crate::guard::RouteGuard;

#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Client error: {0}")]
    Client(#[from] velora_client::Error),
}

/// Map the file/env configuration onto the client configuration.
fn client_config(app: &AppConfig) -> Config {
    let logout_mode = LogoutMode::parse(&app.auth.logout).unwrap_or_else(|| {
        warn!(
            value = %app.auth.logout,
            "Unrecognized logout mode, falling back to local"
        );
        LogoutMode::Local
    });

    let mut config = Config::new()
        .with_auth_url(&app.services.auth_url)
        .with_products_url(&app.services.products_url)
        .with_orders_url(&app.services.orders_url)
        .with_inventory_url(&app.services.inventory_url)
        .with_timeout(Duration::from_secs(app.http.timeout_secs))
        .with_logout_mode(logout_mode);
    if !app.http.user_agent.is_empty() {
        config = config.with_user_agent(&app.http.user_agent);
    }
    config
}

/// The wired-up console core handed to the UI shell.
#[derive(Debug, Clone)]
pub struct Console {
    config: AppConfig,
    client: Client,
    store: Arc<SessionStore>,
    guard: RouteGuard,
}

impl Console {
    /// Bootstrap from the default configuration sources.
    pub fn bootstrap() -> Result<Self, ConsoleError> {
        Self::bootstrap_with(ConfigLoader::new())
    }

    /// Bootstrap with an explicit configuration loader.
    pub fn bootstrap_with(loader: ConfigLoader) -> Result<Self, ConsoleError> {
        let config = loader.load()?;

        let store = Arc::new(SessionStore::new(&config.session.storage_dir));
        store.initialize();

        let client = Client::new(client_config(&config), Arc::clone(&store))?;
        let guard = RouteGuard::new(Arc::clone(&store));

        if store.current().is_some() {
            info!("Restored persisted admin session");
        }
        info!(auth_url = %config.services.auth_url, "Console core ready");

        Ok(Self {
            config,
            client,
            store,
            guard,
        })
    }

    /// The loaded application configuration
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// The shared API client
    pub fn client(&self) -> &Client {
        &self.client
    }

    /// The session store shared by client and guard
    pub fn store(&self) -> &Arc<SessionStore> {
        &self.store
    }

    /// The route guard for the protected area
    pub fn guard(&self) -> &RouteGuard {
        &self.guard
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_config_maps_urls_timeout_and_logout_mode() {
        let mut app = AppConfig::default();
        app.services.auth_url = "http://auth.internal:8000".to_string();
        app.services.orders_url = "http://orders.internal:8002".to_string();
        app.http.timeout_secs = 5;
        app.auth.logout = "revoke".to_string();

        let config = client_config(&app);
        assert_eq!(config.auth_url, "http://auth.internal:8000");
        assert_eq!(config.orders_url, "http://orders.internal:8002");
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.logout_mode, LogoutMode::Revoke);
    }

    #[test]
    fn test_unrecognized_logout_mode_falls_back_to_local() {
        let mut app = AppConfig::default();
        app.auth.logout = "everywhere".to_string();

        let config = client_config(&app);
        assert_eq!(config.logout_mode, LogoutMode::Local);
    }

    #[test]
    fn test_empty_user_agent_keeps_the_client_default() {
        let app = AppConfig::default();
        let config = client_config(&app);
        assert!(config.user_agent.starts_with("velora-console/"));

        let mut app = AppConfig::default();
        app.http.user_agent = "velora-kiosk/2.1".to_string();
        let config = client_config(&app);
        assert_eq!(config.user_agent, "velora-kiosk/2.1");
    }
}
