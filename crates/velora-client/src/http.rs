//! Authorized request plumbing
//!
//! Every API call site builds its request through [`AuthorizedClient`],
//! which resolves the target service's base URL and attaches the bearer
//! credential by reading the [`SessionStore`] at build time. There is no
//! globally installed transport hook: the dependency on the store is
//! explicit, so behavior is testable without a real network layer.

use crate::config::Config;
use crate::error::{Error, Result};
use crate::session::SessionStore;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::sync::Arc;

/// Backend service a request is addressed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Service {
    Auth,
    Products,
    Orders,
    Inventory,
}

/// Standard error envelope returned by the VELORA services.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: Option<String>,
}

/// HTTP client that attaches the current session's credential to requests.
#[derive(Debug, Clone)]
pub struct AuthorizedClient {
    http_client: reqwest::Client,
    config: Arc<Config>,
    store: Arc<SessionStore>,
}

impl AuthorizedClient {
    /// Build the shared HTTP client from the configuration.
    pub fn new(config: Config, store: Arc<SessionStore>) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()?;

        Ok(Self {
            http_client,
            config: Arc::new(config),
            store,
        })
    }

    /// The client configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The session store requests read their credential from.
    pub fn store(&self) -> &Arc<SessionStore> {
        &self.store
    }

    /// Base URL for the given service.
    pub fn base_url(&self, service: Service) -> &str {
        match service {
            Service::Auth => &self.config.auth_url,
            Service::Products => &self.config.products_url,
            Service::Orders => &self.config.orders_url,
            Service::Inventory => &self.config.inventory_url,
        }
    }

    /// Get a request builder for `path` on `service`.
    ///
    /// The Authorization header reflects the session at the moment this is
    /// called, so a login or logout is honored by every later request. With
    /// no session the request goes out without the header and the service
    /// answers 401.
    pub fn request(
        &self,
        method: reqwest::Method,
        service: Service,
        path: &str,
    ) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url(service), path);
        let mut builder = self.http_client.request(method, url);

        if let Some(token) = self.store.bearer_token() {
            builder = builder.bearer_auth(token);
        }

        builder
    }

    /// Send a request and decode a JSON response body.
    pub(crate) async fn send_json<T>(&self, builder: reqwest::RequestBuilder) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let response = builder.send().await?;

        if !response.status().is_success() {
            return Err(error_from_response(response).await);
        }

        let body: T = response.json().await?;
        Ok(body)
    }

    /// Send a request, discarding any response body.
    pub(crate) async fn send_unit(&self, builder: reqwest::RequestBuilder) -> Result<()> {
        let response = builder.send().await?;

        if !response.status().is_success() {
            return Err(error_from_response(response).await);
        }

        Ok(())
    }
}

/// Extract the `detail` field of the standard error envelope, if the body
/// carries one.
pub(crate) fn parse_detail(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|envelope| envelope.detail)
}

/// Map a non-success response to an [`Error`], preferring the `detail`
/// field of the standard error envelope over the raw body.
pub(crate) async fn error_from_response(response: reqwest::Response) -> Error {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();

    let message = parse_detail(&body).unwrap_or_else(|| {
        if body.trim().is_empty() {
            status
                .canonical_reason()
                .unwrap_or("request failed")
                .to_string()
        } else {
            body
        }
    });

    Error::from_status(status, message)
}
