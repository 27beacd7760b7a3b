//! Client Configuration

use std::time::Duration;

/// How `logout()` treats the credential held by the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogoutMode {
    /// Clear client-side state only; the bearer token expires naturally.
    Local,
    /// Also ask the auth service to revoke the credential (best-effort)
    /// before clearing client-side state.
    Revoke,
}

impl LogoutMode {
    /// Parse from a configuration string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "local" => Some(LogoutMode::Local),
            "revoke" => Some(LogoutMode::Revoke),
            _ => None,
        }
    }
}

impl Default for LogoutMode {
    fn default() -> Self {
        LogoutMode::Local
    }
}

/// Configuration for the VELORA client
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the auth service
    pub auth_url: String,

    /// Base URL of the products service
    pub products_url: String,

    /// Base URL of the orders service
    pub orders_url: String,

    /// Base URL of the inventory service
    pub inventory_url: String,

    /// Request timeout
    pub timeout: Duration,

    /// User agent string
    pub user_agent: String,

    /// Logout behavior
    pub logout_mode: LogoutMode,
}

impl Config {
    /// Create a configuration targeting a local development deployment
    pub fn new() -> Self {
        Self {
            auth_url: "http://localhost:8000".to_string(),
            products_url: "http://localhost:8001".to_string(),
            orders_url: "http://localhost:8002".to_string(),
            inventory_url: "http://localhost:8004".to_string(),
            timeout: Duration::from_secs(30),
            user_agent: format!("velora-console/{}", env!("CARGO_PKG_VERSION")),
            logout_mode: LogoutMode::Local,
        }
    }

    /// Set the auth service base URL
    pub fn with_auth_url(mut self, url: impl Into<String>) -> Self {
        self.auth_url = url.into();
        self
    }

    /// Set the products service base URL
    pub fn with_products_url(mut self, url: impl Into<String>) -> Self {
        self.products_url = url.into();
        self
    }

    /// Set the orders service base URL
    pub fn with_orders_url(mut self, url: impl Into<String>) -> Self {
        self.orders_url = url.into();
        self
    }

    /// Set the inventory service base URL
    pub fn with_inventory_url(mut self, url: impl Into<String>) -> Self {
        self.inventory_url = url.into();
        self
    }

    /// Point every service at one base URL (useful against a test server)
    pub fn with_base_url(self, url: impl Into<String>) -> Self {
        let url = url.into();
        self.with_auth_url(url.clone())
            .with_products_url(url.clone())
            .with_orders_url(url.clone())
            .with_inventory_url(url)
    }

    /// Set request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set custom user agent
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set logout behavior
    pub fn with_logout_mode(mut self, mode: LogoutMode) -> Self {
        self.logout_mode = mode;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
