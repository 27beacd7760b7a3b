//! Product catalog management
//!
//! Covers the product service: catalog CRUD, categories, activation,
//! stock adjustments, low-stock reporting and media upload.

use reqwest::multipart::{Form, Part};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::http::{AuthorizedClient, Service};

/// Media kind attached to a product
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Image,
    Video,
}

/// Product category
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
    /// URL-friendly identifier
    #[serde(default)]
    pub slug: Option<String>,
}

/// Sellable variant of a product (one SKU per color/size combination)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductVariant {
    pub sku: String,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub size: String,
    /// Price for this variant when it differs from the product base price
    pub price_override: Option<f64>,
    pub stock_quantity: i64,
}

/// Free-form key/value specification row
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Specification {
    pub spec_key: String,
    pub spec_value: String,
}

/// Image or video attached to a product
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaAsset {
    pub media_url: String,
    pub media_type: MediaType,
    /// Whether this asset leads the product gallery
    pub is_primary: bool,
}

/// Product as returned by the catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub sku: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub brand: String,
    /// Comma-separated tag list
    #[serde(default)]
    pub tags: String,
    #[serde(default)]
    pub short_description: String,
    #[serde(default)]
    pub description: String,
    pub base_price: f64,
    pub currency: String,
    pub category_id: Option<i64>,
    pub is_active: bool,
    #[serde(default)]
    pub variants: Vec<ProductVariant>,
    #[serde(default)]
    pub specifications: Vec<Specification>,
    #[serde(default)]
    pub media: Vec<MediaAsset>,
}

/// Payload for creating or replacing a product
#[derive(Debug, Clone, Serialize)]
pub struct ProductDraft {
    pub name: String,
    pub sku: String,
    pub slug: String,
    pub brand: String,
    pub tags: String,
    pub short_description: String,
    pub description: String,
    pub base_price: f64,
    pub currency: String,
    pub category_id: Option<i64>,
    pub is_active: bool,
    pub variants: Vec<ProductVariant>,
    pub specifications: Vec<Specification>,
    pub media: Vec<MediaAsset>,
}

impl ProductDraft {
    /// Create a draft with the required fields; everything else starts empty.
    pub fn new(name: impl Into<String>, sku: impl Into<String>, base_price: f64) -> Self {
        Self {
            name: name.into(),
            sku: sku.into(),
            slug: String::new(),
            brand: String::new(),
            tags: String::new(),
            short_description: String::new(),
            description: String::new(),
            base_price,
            currency: "USD".to_string(),
            category_id: None,
            is_active: true,
            variants: Vec::new(),
            specifications: Vec::new(),
            media: Vec::new(),
        }
    }

    /// Set the category
    pub fn with_category(mut self, category_id: i64) -> Self {
        self.category_id = Some(category_id);
        self
    }

    /// Set the currency code (defaults to USD)
    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }

    /// Add a variant row
    pub fn with_variant(mut self, variant: ProductVariant) -> Self {
        self.variants.push(variant);
        self
    }
}

/// Server-side filters for the product listing
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProductFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

/// Response of a successful media upload
#[derive(Debug, Clone, Deserialize)]
pub struct MediaUpload {
    /// Public URL of the stored asset
    pub url: String,
}

#[derive(Debug, Serialize)]
struct StockChange {
    change: i64,
}

#[derive(Debug, Serialize)]
struct CategoryDraft<'a> {
    name: &'a str,
    slug: &'a str,
}

/// Catalog surface of the product service
#[derive(Debug, Clone)]
pub struct ProductsApi {
    client: AuthorizedClient,
}

impl ProductsApi {
    pub(crate) fn new(client: AuthorizedClient) -> Self {
        Self { client }
    }

    /// List products, optionally filtered by category or active state.
    pub async fn list(&self, filter: &ProductFilter) -> Result<Vec<Product>> {
        let request = self
            .client
            .request(reqwest::Method::GET, Service::Products, "/products/")
            .query(filter);
        self.client.send_json(request).await
    }

    /// Fetch one product with its variants, specifications and media.
    pub async fn get(&self, product_id: i64) -> Result<Product> {
        let path = format!("/products/{}", product_id);
        let request = self
            .client
            .request(reqwest::Method::GET, Service::Products, &path);
        self.client.send_json(request).await
    }

    /// Create a product from a draft.
    pub async fn create(&self, draft: &ProductDraft) -> Result<Product> {
        let request = self
            .client
            .request(reqwest::Method::POST, Service::Products, "/products")
            .json(draft);
        self.client.send_json(request).await
    }

    /// Replace a product with the contents of a draft.
    pub async fn update(&self, product_id: i64, draft: &ProductDraft) -> Result<Product> {
        let path = format!("/products/{}", product_id);
        let request = self
            .client
            .request(reqwest::Method::PUT, Service::Products, &path)
            .json(draft);
        self.client.send_json(request).await
    }

    /// Delete a product.
    pub async fn delete(&self, product_id: i64) -> Result<()> {
        let path = format!("/products/{}", product_id);
        let request = self
            .client
            .request(reqwest::Method::DELETE, Service::Products, &path);
        self.client.send_unit(request).await
    }

    /// Show or hide a product in the storefront.
    pub async fn set_active(&self, product_id: i64, active: bool) -> Result<()> {
        let action = if active { "activate" } else { "deactivate" };
        let path = format!("/products/{}/{}", product_id, action);
        let request = self
            .client
            .request(reqwest::Method::PATCH, Service::Products, &path);
        self.client.send_unit(request).await
    }

    /// Apply a relative stock adjustment (positive restocks, negative deducts).
    pub async fn adjust_stock(&self, product_id: i64, change: i64) -> Result<()> {
        let path = format!("/products/{}/stock", product_id);
        let request = self
            .client
            .request(reqwest::Method::PATCH, Service::Products, &path)
            .json(&StockChange { change });
        self.client.send_unit(request).await
    }

    /// List products whose stock fell below the given threshold.
    pub async fn low_stock(&self, threshold: i64) -> Result<Vec<Product>> {
        let request = self
            .client
            .request(reqwest::Method::GET, Service::Products, "/products/low-stock")
            .query(&[("threshold", threshold)]);
        self.client.send_json(request).await
    }

    /// List all categories.
    pub async fn categories(&self) -> Result<Vec<Category>> {
        let request = self
            .client
            .request(reqwest::Method::GET, Service::Products, "/products/categories");
        self.client.send_json(request).await
    }

    /// Create a category.
    pub async fn create_category(&self, name: &str, slug: &str) -> Result<Category> {
        let request = self
            .client
            .request(reqwest::Method::POST, Service::Products, "/products/categories")
            .json(&CategoryDraft { name, slug });
        self.client.send_json(request).await
    }

    /// Delete a category.
    pub async fn delete_category(&self, category_id: i64) -> Result<()> {
        let path = format!("/products/categories/{}", category_id);
        let request = self
            .client
            .request(reqwest::Method::DELETE, Service::Products, &path);
        self.client.send_unit(request).await
    }

    /// Upload a media file and return its public URL.
    pub async fn upload_media(
        &self,
        file_name: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Result<MediaUpload> {
        let part = Part::bytes(bytes).file_name(file_name.into());
        let form = Form::new().part("file", part);
        let request = self
            .client
            .request(reqwest::Method::POST, Service::Products, "/products/upload-media")
            .multipart(form);
        self.client.send_json(request).await
    }
}
