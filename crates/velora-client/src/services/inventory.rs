//! Inventory monitoring
//!
//! Read-only surface of the inventory service: per-variant stock levels,
//! dashboard statistics, active reservations and the stock event ledger.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::http::{AuthorizedClient, Service};

/// Stock position of one product variant
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryItem {
    pub variant_id: i64,
    pub variant_sku: String,
    #[serde(default)]
    pub product_name: Option<String>,
    pub total_quantity: i64,
    /// Stock that can still be sold
    pub available_quantity: i64,
    /// Stock held by open reservations
    pub reserved_quantity: i64,
}

/// Aggregate figures for the inventory dashboard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryStats {
    pub total_items: i64,
    pub low_stock_count: i64,
    pub reserved_items_count: i64,
}

/// Stock hold placed by an in-flight order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reservation {
    pub id: i64,
    pub order_id: i64,
    pub variant_id: i64,
    pub quantity: i64,
    /// Lifecycle state as reported by the inventory service
    pub status: String,
    pub created_at: DateTime<Utc>,
}

/// One entry of the stock movement ledger
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockEvent {
    pub id: i64,
    /// Movement kind as reported by the inventory service
    pub event_type: String,
    pub variant_id: i64,
    #[serde(default)]
    pub order_id: Option<i64>,
    pub quantity: i64,
    pub timestamp: DateTime<Utc>,
}

/// Read surface of the inventory service
#[derive(Debug, Clone)]
pub struct InventoryApi {
    client: AuthorizedClient,
}

impl InventoryApi {
    pub(crate) fn new(client: AuthorizedClient) -> Self {
        Self { client }
    }

    /// List stock positions, optionally restricted to low-stock variants.
    pub async fn list(&self, low_stock_only: bool) -> Result<Vec<InventoryItem>> {
        let mut request = self
            .client
            .request(reqwest::Method::GET, Service::Inventory, "/inventory");
        if low_stock_only {
            request = request.query(&[("low_stock", "true")]);
        }
        self.client.send_json(request).await
    }

    /// Fetch the aggregate dashboard statistics.
    pub async fn stats(&self) -> Result<InventoryStats> {
        let request = self
            .client
            .request(reqwest::Method::GET, Service::Inventory, "/inventory/stats");
        self.client.send_json(request).await
    }

    /// List stock reservations.
    pub async fn reservations(&self) -> Result<Vec<Reservation>> {
        let request = self.client.request(
            reqwest::Method::GET,
            Service::Inventory,
            "/inventory/reservations",
        );
        self.client.send_json(request).await
    }

    /// List the stock movement ledger, newest first.
    pub async fn events(&self) -> Result<Vec<StockEvent>> {
        let request = self.client.request(
            reqwest::Method::GET,
            Service::Inventory,
            "/inventory/events",
        );
        self.client.send_json(request).await
    }

    /// Fetch the stock position of a single variant.
    pub async fn variant(&self, variant_id: i64) -> Result<InventoryItem> {
        let path = format!("/inventory/variant/{}", variant_id);
        let request = self
            .client
            .request(reqwest::Method::GET, Service::Inventory, &path);
        self.client.send_json(request).await
    }
}
