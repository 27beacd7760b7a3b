//! Login handshake and admission policy
//!
//! [`AuthGateway`] performs the login exchange against the auth service and
//! enforces the console's admission policy before a [`Session`] is ever
//! created: role first, then active, then verified, stopping at the first
//! failure. Callers rely on the distinct error for each refusal, so the
//! order is part of the contract.

use crate::config::LogoutMode;
use crate::error::{Error, Result, INVALID_CREDENTIALS};
use crate::http::{error_from_response, parse_detail, AuthorizedClient, Service};
use reqwest::{Method, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use velora_common::{Principal, Session};

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Deserialize)]
struct LoginResponse {
    access_token: String,
    user: Principal,
}

#[derive(Debug, Serialize)]
struct ResetPasswordRequest<'a> {
    token: &'a str,
    new_password: &'a str,
}

#[derive(Debug, Serialize)]
struct UpdatePasswordRequest<'a> {
    current_password: &'a str,
    new_password: &'a str,
    confirm_password: &'a str,
}

#[derive(Debug, Deserialize)]
struct VerifyEmailResponse {
    #[serde(default)]
    message: Option<String>,
}

/// Apply the admission policy to a login candidate.
///
/// Checks run in a fixed order and stop at the first failure; a valid
/// credential alone is not enough to hold a console session.
fn admit(candidate: &Principal) -> Result<()> {
    if !candidate.role.is_administrative() {
        return Err(Error::AccessDenied);
    }
    if !candidate.is_active {
        return Err(Error::AccountSuspended);
    }
    if !candidate.is_verified {
        return Err(Error::VerificationRequired);
    }
    Ok(())
}

/// Client for the auth service's session and account endpoints.
#[derive(Debug, Clone)]
pub struct AuthGateway {
    client: AuthorizedClient,
}

impl AuthGateway {
    pub(crate) fn new(client: AuthorizedClient) -> Self {
        Self { client }
    }

    /// Perform the login handshake and, on success, establish the session.
    ///
    /// The session store is only written after every admission check has
    /// passed; a refused login leaves it untouched.
    pub async fn login(&self, email: &str, password: &str) -> Result<Session> {
        let email = email.trim();
        if email.is_empty() || password.is_empty() {
            return Err(Error::Validation(
                "Email and password are required.".to_string(),
            ));
        }

        let request = LoginRequest { email, password };
        let response = self
            .client
            .request(Method::POST, Service::Auth, "/auth/login")
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            let body = response.text().await.unwrap_or_default();
            let detail =
                parse_detail(&body).unwrap_or_else(|| INVALID_CREDENTIALS.to_string());
            return Err(Error::Auth(detail));
        }
        if !status.is_success() {
            return Err(error_from_response(response).await);
        }

        let LoginResponse { access_token, user } = response.json().await?;
        admit(&user)?;

        let session = Session::new(user, access_token);
        self.client.store().set(session.clone());
        debug!(
            email = %session.principal.email,
            role = %session.principal.role,
            "Admin session established"
        );

        Ok(session)
    }

    /// End the current session.
    ///
    /// With [`LogoutMode::Revoke`] the credential is first invalidated
    /// server-side, best-effort; a failed revoke is logged and never blocks
    /// the local clear. Logout itself always succeeds.
    pub async fn logout(&self) {
        if self.client.config().logout_mode == LogoutMode::Revoke
            && self.client.store().bearer_token().is_some()
        {
            let request = self.client.request(Method::POST, Service::Auth, "/auth/logout");
            if let Err(error) = self.client.send_unit(request).await {
                warn!(%error, "Credential revoke failed; clearing local session anyway");
            }
        }

        self.client.store().clear();
        debug!("Admin session cleared");
    }

    /// Fetch the account behind the current credential.
    pub async fn me(&self) -> Result<Principal> {
        let request = self.client.request(Method::GET, Service::Auth, "/auth/me");
        self.client.send_json(request).await
    }

    /// Redeem an email-verification token.
    ///
    /// Returns the service's confirmation message.
    pub async fn verify_email(&self, token: &str) -> Result<String> {
        let request = self
            .client
            .request(Method::GET, Service::Auth, "/auth/verify-email")
            .query(&[("token", token)]);
        let response: VerifyEmailResponse = self.client.send_json(request).await?;
        Ok(response
            .message
            .unwrap_or_else(|| "Email verified successfully!".to_string()))
    }

    /// Redeem a password-reset token.
    pub async fn reset_password(&self, token: &str, new_password: &str) -> Result<()> {
        let request = self
            .client
            .request(Method::POST, Service::Auth, "/auth/reset-password")
            .json(&ResetPasswordRequest {
                token,
                new_password,
            });
        self.client.send_unit(request).await
    }

    /// Change the current account's password.
    pub async fn update_password(
        &self,
        current_password: &str,
        new_password: &str,
        confirm_password: &str,
    ) -> Result<()> {
        let request = self
            .client
            .request(Method::PUT, Service::Auth, "/auth/update-password")
            .json(&UpdatePasswordRequest {
                current_password,
                new_password,
                confirm_password,
            });
        self.client.send_unit(request).await
    }
}
