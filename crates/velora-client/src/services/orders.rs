//! Order browsing
//!
//! Read-only surface of the order service. The console lists recent
//! orders and drills into one order for its line items and shipping
//! details; fulfilment itself happens elsewhere.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::Result;
use crate::http::{AuthorizedClient, Service};

/// Fulfilment state of an order.
///
/// Statuses the order service introduces later decode as [`OrderStatus::Unknown`]
/// instead of failing the whole listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Pending,
    Confirmed,
    Shipped,
    Delivered,
    Cancelled,
    #[serde(other)]
    Unknown,
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            OrderStatus::Pending => "PENDING",
            OrderStatus::Confirmed => "CONFIRMED",
            OrderStatus::Shipped => "SHIPPED",
            OrderStatus::Delivered => "DELIVERED",
            OrderStatus::Cancelled => "CANCELLED",
            OrderStatus::Unknown => "UNKNOWN",
        };
        write!(f, "{}", label)
    }
}

/// One line of an order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItem {
    pub id: i64,
    pub product_name: String,
    #[serde(default)]
    pub sku: String,
    /// Unit price at the time of purchase
    pub price: f64,
    pub quantity: i64,
}

/// Customer order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: i64,
    /// Human-facing order reference
    pub order_number: String,
    pub user_id: i64,
    #[serde(default)]
    pub customer_name: Option<String>,
    /// Present on the detail endpoint only
    #[serde(default)]
    pub shipping_address: Option<String>,
    pub created_at: DateTime<Utc>,
    pub total_amount: f64,
    pub status: OrderStatus,
    /// Present on the detail endpoint only
    #[serde(default)]
    pub items: Vec<OrderItem>,
}

/// Read surface of the order service
#[derive(Debug, Clone)]
pub struct OrdersApi {
    client: AuthorizedClient,
}

impl OrdersApi {
    pub(crate) fn new(client: AuthorizedClient) -> Self {
        Self { client }
    }

    /// List all orders, newest first.
    pub async fn list(&self) -> Result<Vec<Order>> {
        let request = self
            .client
            .request(reqwest::Method::GET, Service::Orders, "/orders");
        self.client.send_json(request).await
    }

    /// Fetch one order including line items and shipping details.
    pub async fn get(&self, order_id: i64) -> Result<Order> {
        let path = format!("/orders/{}", order_id);
        let request = self
            .client
            .request(reqwest::Method::GET, Service::Orders, &path);
        self.client.send_json(request).await
    }
}
