//! High-level VELORA client

use std::sync::Arc;

use crate::auth::AuthGateway;
use crate::config::Config;
use crate::error::Result;
use crate::http::AuthorizedClient;
use crate::services::{InventoryApi, OrdersApi, ProductsApi, UsersApi};
use crate::session::SessionStore;

/// VELORA admin API client
///
/// Entry point for the console: owns one HTTP client shared across all
/// backend services and attaches credentials from the injected
/// [`SessionStore`] as requests are built.
#[derive(Debug, Clone)]
pub struct Client {
    inner: AuthorizedClient,
}

impl Client {
    /// Create a new client with the given configuration and session store.
    ///
    /// The store is shared, not consumed; the caller keeps a handle to
    /// observe session changes or to pass to a route guard.
    pub fn new(config: Config, store: Arc<SessionStore>) -> Result<Self> {
        Ok(Self {
            inner: AuthorizedClient::new(config, store)?,
        })
    }

    /// Get the active configuration
    pub fn config(&self) -> &Config {
        self.inner.config()
    }

    /// Get the session store this client reads credentials from
    pub fn session_store(&self) -> &Arc<SessionStore> {
        self.inner.store()
    }

    /// Authentication and account operations
    pub fn auth(&self) -> AuthGateway {
        AuthGateway::new(self.inner.clone())
    }

    /// Administrator account management
    pub fn users(&self) -> UsersApi {
        UsersApi::new(self.inner.clone())
    }

    /// Product catalog management
    pub fn products(&self) -> ProductsApi {
        ProductsApi::new(self.inner.clone())
    }

    /// Order browsing
    pub fn orders(&self) -> OrdersApi {
        OrdersApi::new(self.inner.clone())
    }

    /// Inventory monitoring
    pub fn inventory(&self) -> InventoryApi {
        InventoryApi::new(self.inner.clone())
    }
}
