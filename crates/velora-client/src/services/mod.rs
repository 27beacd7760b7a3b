//! Typed surfaces for the VELORA backend services
//!
//! Each surface wraps the shared [`AuthorizedClient`](crate::http::AuthorizedClient)
//! and exposes the endpoints of one backend service. Obtain them through
//! [`Client`](crate::Client) rather than constructing them directly.

pub mod inventory;
pub mod orders;
pub mod products;
pub mod users;

pub use inventory::{InventoryApi, InventoryItem, InventoryStats, Reservation, StockEvent};
pub use orders::{Order, OrderItem, OrderStatus, OrdersApi};
pub use products::{
    Category, MediaAsset, MediaType, MediaUpload, Product, ProductDraft, ProductFilter,
    ProductVariant, ProductsApi, Specification,
};
pub use users::{NewAdmin, ProfileUpdate, UsersApi};
