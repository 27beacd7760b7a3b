//! Administrator account management
//!
//! Wraps the user-management endpoints of the auth service. Listing and
//! mutating accounts requires an administrative session; the backend
//! additionally restricts some operations to super administrators.

use serde::Serialize;
use velora_common::Principal;

use crate::error::Result;
use crate::http::{AuthorizedClient, Service};

/// Payload for provisioning a new administrator account.
#[derive(Debug, Clone, Serialize)]
pub struct NewAdmin {
    /// Login email for the new account
    pub email: String,
    /// Initial password
    pub password: String,
    /// Display name
    pub full_name: String,
}

impl NewAdmin {
    /// Create a new admin payload
    pub fn new(
        email: impl Into<String>,
        password: impl Into<String>,
        full_name: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            full_name: full_name.into(),
        }
    }
}

/// Partial update for an existing account. Unset fields are left untouched.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl ProfileUpdate {
    /// Create an empty update
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the display name
    pub fn with_full_name(mut self, full_name: impl Into<String>) -> Self {
        self.full_name = Some(full_name.into());
        self
    }

    /// Set the login email
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }
}

/// User-management surface of the auth service
#[derive(Debug, Clone)]
pub struct UsersApi {
    client: AuthorizedClient,
}

impl UsersApi {
    pub(crate) fn new(client: AuthorizedClient) -> Self {
        Self { client }
    }

    /// List all accounts visible to the current administrator.
    pub async fn list(&self) -> Result<Vec<Principal>> {
        let request = self
            .client
            .request(reqwest::Method::GET, Service::Auth, "/auth/users");
        self.client.send_json(request).await
    }

    /// Provision a new administrator account.
    pub async fn register_admin(&self, admin: &NewAdmin) -> Result<()> {
        let request = self
            .client
            .request(reqwest::Method::POST, Service::Auth, "/auth/register-admin")
            .json(admin);
        self.client.send_unit(request).await
    }

    /// Apply a partial profile update and return the updated account.
    pub async fn update(&self, user_id: i64, update: &ProfileUpdate) -> Result<Principal> {
        let path = format!("/auth/users/{}", user_id);
        let request = self
            .client
            .request(reqwest::Method::PUT, Service::Auth, &path)
            .json(update);
        self.client.send_json(request).await
    }

    /// Permanently delete an account.
    pub async fn delete(&self, user_id: i64) -> Result<()> {
        let path = format!("/auth/users/{}", user_id);
        let request = self
            .client
            .request(reqwest::Method::DELETE, Service::Auth, &path);
        self.client.send_unit(request).await
    }

    /// Activate or deactivate an account.
    pub async fn set_active(&self, user_id: i64, active: bool) -> Result<()> {
        let action = if active { "activate" } else { "deactivate" };
        let path = format!("/auth/users/{}/{}", user_id, action);
        let request = self
            .client
            .request(reqwest::Method::PATCH, Service::Auth, &path);
        self.client.send_unit(request).await
    }

    /// Ask the auth service to send a password-reset link to an account.
    pub async fn request_password_reset(&self, user_id: i64) -> Result<()> {
        let path = format!("/auth/users/{}/reset-password-request", user_id);
        let request = self
            .client
            .request(reqwest::Method::POST, Service::Auth, &path);
        self.client.send_unit(request).await
    }
}
