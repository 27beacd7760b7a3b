use serde::{Deserialize, Serialize};

pub mod logging;

// ============================================================================
// Identity Types
// ============================================================================

/// Role assigned to an account by the auth service.
///
/// Wire format is SCREAMING_SNAKE_CASE to match the backend
/// (`CUSTOMER`, `ADMIN`, `SUPER_ADMIN`, `MANAGER`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    /// Storefront customer
    Customer,
    /// Console administrator
    Admin,
    /// Console administrator with user-management rights
    SuperAdmin,
    /// Operational manager (no console access)
    Manager,
}

impl Role {
    /// Whether this role may hold a console session.
    ///
    /// Only administrators get past the login admission policy; customers
    /// and managers are rejected even with valid credentials.
    pub fn is_administrative(&self) -> bool {
        matches!(self, Self::Admin | Self::SuperAdmin)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Customer => write!(f, "CUSTOMER"),
            Role::Admin => write!(f, "ADMIN"),
            Role::SuperAdmin => write!(f, "SUPER_ADMIN"),
            Role::Manager => write!(f, "MANAGER"),
        }
    }
}

/// The authenticated identity and its authorization attributes.
///
/// A snapshot taken at login time; it is not refreshed until the next login.
/// Field names match the auth service's JSON exactly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Principal {
    pub id: i64,
    pub email: String,
    pub full_name: String,
    pub role: Role,
    pub is_active: bool,
    pub is_verified: bool,
}

/// A [`Principal`] bound to the opaque bearer credential issued at login.
///
/// Exists if and only if a login attempt passed the full admission policy.
/// The durable form is a single flat JSON object: the principal fields with
/// `token` alongside them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    #[serde(flatten)]
    pub principal: Principal,
    pub token: String,
}

impl Session {
    pub fn new(principal: Principal, token: impl Into<String>) -> Self {
        Self {
            principal,
            token: token.into(),
        }
    }

    /// Role of the session holder.
    pub fn role(&self) -> Role {
        self.principal.role
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn admin_principal() -> Principal {
        Principal {
            id: 7,
            email: "ops@velora.shop".to_string(),
            full_name: "Ops Admin".to_string(),
            role: Role::Admin,
            is_active: true,
            is_verified: true,
        }
    }

    #[test]
    fn test_role_wire_names() {
        assert_eq!(serde_json::to_string(&Role::SuperAdmin).unwrap(), "\"SUPER_ADMIN\"");
        assert_eq!(serde_json::to_string(&Role::Customer).unwrap(), "\"CUSTOMER\"");

        let role: Role = serde_json::from_str("\"MANAGER\"").unwrap();
        assert_eq!(role, Role::Manager);
    }

    #[test]
    fn test_only_admin_roles_are_administrative() {
        assert!(Role::Admin.is_administrative());
        assert!(Role::SuperAdmin.is_administrative());
        assert!(!Role::Customer.is_administrative());
        assert!(!Role::Manager.is_administrative());
    }

    #[test]
    fn test_session_serializes_flat() {
        let session = Session::new(admin_principal(), "tok-123");
        let value: serde_json::Value = serde_json::to_value(&session).unwrap();

        // Principal fields sit beside the token, not nested under a key.
        assert_eq!(value["email"], "ops@velora.shop");
        assert_eq!(value["role"], "ADMIN");
        assert_eq!(value["token"], "tok-123");
        assert!(value.get("principal").is_none());
    }

    #[test]
    fn test_session_round_trips() {
        let session = Session::new(admin_principal(), "tok-456");
        let json = serde_json::to_string(&session).unwrap();
        let restored: Session = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, session);
    }
}
