//! Error types for the VELORA client

use thiserror::Error;

/// Fallback message for a rejected login without a server-provided detail.
pub(crate) const INVALID_CREDENTIALS: &str = "Invalid administrative credentials.";

/// Result type alias for VELORA client operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the VELORA client
#[derive(Error, Debug)]
pub enum Error {
    /// Login admission refused: the account's role has no console access
    #[error("Access Denied: Administrative privileges required.")]
    AccessDenied,

    /// Login admission refused: the account is not active
    #[error("Access Suspended: Sorry, your account is not in active status.")]
    AccountSuspended,

    /// Login admission refused: the account's email is not verified
    #[error("Verification Required: Please verify your account first and then try again.")]
    VerificationRequired,

    /// Credentials rejected by the auth service (401)
    #[error("{0}")]
    Auth(String),

    /// Authorization failed (403)
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Resource not found (404)
    #[error("Not found: {0}")]
    NotFound(String),

    /// Validation error, locally detected or reported by the service (422)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Server error (5xx)
    #[error("Server error: {0}")]
    Server(String),

    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Whether this is a login admission refusal: the auth service accepted
    /// the credentials but the account may not use the console.
    pub fn is_admission_refusal(&self) -> bool {
        matches!(
            self,
            Error::AccessDenied | Error::AccountSuspended | Error::VerificationRequired
        )
    }

    /// Create an error from an HTTP status code and message
    pub fn from_status(status: reqwest::StatusCode, message: String) -> Self {
        match status.as_u16() {
            401 => Error::Auth(message),
            403 => Error::Forbidden(message),
            404 => Error::NotFound(message),
            422 => Error::Validation(message),
            500..=599 => Error::Server(message),
            _ => Error::Other(format!("HTTP {}: {}", status, message)),
        }
    }
}
