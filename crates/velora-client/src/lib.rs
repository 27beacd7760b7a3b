//! # VELORA Admin Client
//!
//! Client library for the VELORA retail platform's admin console - session
//! management, administrator authentication and typed access to the product,
//! order, inventory and user services.
//!
//! ## Features
//!
//! - **Session Store**: durable admin session shared by every request, with
//!   change notifications for UI code
//! - **Credential Interceptor**: requests read the live session at build time,
//!   so a login or logout applies to the very next call
//! - **Authentication Gateway**: admission checks (role, active, verified) in
//!   a fixed order with stable, user-facing refusal messages
//! - **Typed Services**: products, orders, inventory and user management
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use velora_client::{Client, Config, SessionStore};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = Arc::new(SessionStore::new("./data"));
//!     store.initialize();
//!
//!     let client = Client::new(Config::new(), Arc::clone(&store))?;
//!
//!     let session = client.auth().login("admin@velora.test", "secret").await?;
//!     println!("signed in as {}", session.principal.email);
//!
//!     let orders = client.orders().list().await?;
//!     println!("{} orders", orders.len());
//!
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod services;
pub mod session;

// Re-export main types
pub use auth::AuthGateway;
pub use client::Client;
pub use config::{Config, LogoutMode};
pub use error::{Error, Result};
pub use http::Service;
pub use session::{SessionStore, SubscriptionId, SESSION_FILE};

// Identity vocabulary shared with the rest of the workspace
pub use velora_common::{Principal, Role, Session};
