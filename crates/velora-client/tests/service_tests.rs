//! Service Surface Integration Tests
//!
//! Tests for:
//! - Order listing and detail decoding
//! - Inventory stock, stats, reservations and event ledger
//! - Product catalog CRUD, filters and media upload
//! - User management payloads
//! - Account operations (me, verify email, password reset)

use std::sync::Arc;

use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use velora_client::services::{NewAdmin, OrderStatus, ProductDraft, ProductFilter, ProfileUpdate};
use velora_client::{Client, Config, Principal, Role, Session, SessionStore};

fn signed_in_client(server: &MockServer) -> (Client, tempfile::TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let store = Arc::new(SessionStore::new(dir.path()));
    store.initialize();
    store.set(Session::new(
        Principal {
            id: 1,
            email: "ops@velora.shop".to_string(),
            full_name: "Ops".to_string(),
            role: Role::SuperAdmin,
            is_active: true,
            is_verified: true,
        },
        "tok-ops",
    ));
    let client = Client::new(Config::new().with_base_url(server.uri()), store).unwrap();
    (client, dir)
}

#[tokio::test]
async fn test_orders_list_tolerates_new_statuses() {
    let mock_server = MockServer::start().await;
    let (client, _dir) = signed_in_client(&mock_server);

    Mock::given(method("GET"))
        .and(path("/orders"))
        .and(header("authorization", "Bearer tok-ops"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {
                "id": 1,
                "order_number": "ORD-2024-0001",
                "user_id": 11,
                "customer_name": "Ada Moreno",
                "created_at": "2024-11-01T09:00:00Z",
                "total_amount": 59.9,
                "status": "DELIVERED"
            },
            {
                "id": 2,
                "order_number": "ORD-2024-0002",
                "user_id": 12,
                "created_at": "2024-11-02T14:30:00Z",
                "total_amount": 120.0,
                "status": "RETURN_REQUESTED"
            }
        ])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let orders = client.orders().list().await.unwrap();
    assert_eq!(orders.len(), 2);
    assert_eq!(orders[0].status, OrderStatus::Delivered);
    assert_eq!(orders[1].status, OrderStatus::Unknown);
    assert_eq!(orders[1].customer_name, None);
}

#[tokio::test]
async fn test_order_details_include_line_items() {
    let mock_server = MockServer::start().await;
    let (client, _dir) = signed_in_client(&mock_server);

    Mock::given(method("GET"))
        .and(path("/orders/2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": 2,
            "order_number": "ORD-2024-0002",
            "user_id": 12,
            "customer_name": "Ada Moreno",
            "shipping_address": "12 Canal St, Springfield",
            "created_at": "2024-11-02T14:30:00Z",
            "total_amount": 120.0,
            "status": "CONFIRMED",
            "items": [
                {"id": 5, "product_name": "Trail Jacket", "sku": "TJ-RED-M", "price": 60.0, "quantity": 2}
            ]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let order = client.orders().get(2).await.unwrap();
    assert_eq!(order.shipping_address.as_deref(), Some("12 Canal St, Springfield"));
    assert_eq!(order.items.len(), 1);
    assert_eq!(order.items[0].quantity, 2);
}

#[tokio::test]
async fn test_inventory_list_passes_low_stock_filter() {
    let mock_server = MockServer::start().await;
    let (client, _dir) = signed_in_client(&mock_server);

    Mock::given(method("GET"))
        .and(path("/inventory"))
        .and(query_param("low_stock", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {
                "variant_id": 31,
                "variant_sku": "TJ-RED-M",
                "product_name": "Trail Jacket",
                "total_quantity": 8,
                "available_quantity": 3,
                "reserved_quantity": 5
            }
        ])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let items = client.inventory().list(true).await.unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].available_quantity, 3);
}

#[tokio::test]
async fn test_inventory_ledger_decodes_reservations_and_events() {
    let mock_server = MockServer::start().await;
    let (client, _dir) = signed_in_client(&mock_server);

    Mock::given(method("GET"))
        .and(path("/inventory/reservations"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {
                "id": 71,
                "order_id": 2,
                "variant_id": 31,
                "quantity": 2,
                "status": "ACTIVE",
                "created_at": "2024-11-02T14:30:05Z"
            }
        ])))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/inventory/events"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {
                "id": 400,
                "event_type": "RESERVATION_CREATED",
                "variant_id": 31,
                "order_id": 2,
                "quantity": 2,
                "timestamp": "2024-11-02T14:30:05Z"
            },
            {
                "id": 401,
                "event_type": "RESTOCK",
                "variant_id": 31,
                "quantity": 20,
                "timestamp": "2024-11-03T08:00:00Z"
            }
        ])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let reservations = client.inventory().reservations().await.unwrap();
    assert_eq!(reservations[0].status, "ACTIVE");

    let events = client.inventory().events().await.unwrap();
    assert_eq!(events.len(), 2);
    assert_eq!(events[1].order_id, None);
}

#[tokio::test]
async fn test_products_list_forwards_filters() {
    let mock_server = MockServer::start().await;
    let (client, _dir) = signed_in_client(&mock_server);

    Mock::given(method("GET"))
        .and(path("/products/"))
        .and(query_param("category_id", "4"))
        .and(query_param("is_active", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {
                "id": 10,
                "name": "Trail Jacket",
                "sku": "TJ-100",
                "base_price": 89.0,
                "currency": "USD",
                "category_id": 4,
                "is_active": true
            }
        ])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let filter = ProductFilter {
        category_id: Some(4),
        is_active: Some(true),
    };
    let products = client.products().list(&filter).await.unwrap();
    assert_eq!(products.len(), 1);
    // Collections the listing omits decode as empty.
    assert!(products[0].variants.is_empty());
    assert!(products[0].media.is_empty());
}

#[tokio::test]
async fn test_product_create_sends_full_draft() {
    let mock_server = MockServer::start().await;
    let (client, _dir) = signed_in_client(&mock_server);

    let draft = ProductDraft::new("Trail Jacket", "TJ-100", 89.0).with_category(4);

    Mock::given(method("POST"))
        .and(path("/products"))
        .and(body_json(serde_json::json!({
            "name": "Trail Jacket",
            "sku": "TJ-100",
            "slug": "",
            "brand": "",
            "tags": "",
            "short_description": "",
            "description": "",
            "base_price": 89.0,
            "currency": "USD",
            "category_id": 4,
            "is_active": true,
            "variants": [],
            "specifications": [],
            "media": []
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "id": 10,
            "name": "Trail Jacket",
            "sku": "TJ-100",
            "base_price": 89.0,
            "currency": "USD",
            "category_id": 4,
            "is_active": true
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let product = client.products().create(&draft).await.unwrap();
    assert_eq!(product.id, 10);
}

#[tokio::test]
async fn test_low_stock_report_passes_threshold() {
    let mock_server = MockServer::start().await;
    let (client, _dir) = signed_in_client(&mock_server);

    Mock::given(method("GET"))
        .and(path("/products/low-stock"))
        .and(query_param("threshold", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let products = client.products().low_stock(10).await.unwrap();
    assert!(products.is_empty());
}

#[tokio::test]
async fn test_stock_adjustment_sends_relative_change() {
    let mock_server = MockServer::start().await;
    let (client, _dir) = signed_in_client(&mock_server);

    Mock::given(method("PATCH"))
        .and(path("/products/10/stock"))
        .and(body_json(serde_json::json!({"change": -3})))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"ok": true})))
        .expect(1)
        .mount(&mock_server)
        .await;

    client.products().adjust_stock(10, -3).await.unwrap();
}

#[tokio::test]
async fn test_category_create_and_delete() {
    let mock_server = MockServer::start().await;
    let (client, _dir) = signed_in_client(&mock_server);

    Mock::given(method("POST"))
        .and(path("/products/categories"))
        .and(body_json(serde_json::json!({"name": "Outerwear", "slug": "outerwear"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "id": 4,
            "name": "Outerwear",
            "slug": "outerwear"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/products/categories/4"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    let category = client
        .products()
        .create_category("Outerwear", "outerwear")
        .await
        .unwrap();
    assert_eq!(category.id, 4);

    client.products().delete_category(4).await.unwrap();
}

#[tokio::test]
async fn test_media_upload_posts_multipart_and_returns_url() {
    let mock_server = MockServer::start().await;
    let (client, _dir) = signed_in_client(&mock_server);

    Mock::given(method("POST"))
        .and(path("/products/upload-media"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "url": "https://cdn.velora.shop/media/jacket.png"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let upload = client
        .products()
        .upload_media("jacket.png", vec![0x89, 0x50, 0x4e, 0x47])
        .await
        .unwrap();
    assert_eq!(upload.url, "https://cdn.velora.shop/media/jacket.png");

    let requests = mock_server.received_requests().await.unwrap();
    let content_type = requests[0].headers["content-type"].to_str().unwrap();
    assert!(content_type.starts_with("multipart/form-data"));
}

#[tokio::test]
async fn test_user_listing_and_admin_registration() {
    let mock_server = MockServer::start().await;
    let (client, _dir) = signed_in_client(&mock_server);

    Mock::given(method("GET"))
        .and(path("/auth/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {
                "id": 1,
                "email": "ops@velora.shop",
                "full_name": "Ops",
                "role": "SUPER_ADMIN",
                "is_active": true,
                "is_verified": true
            },
            {
                "id": 9,
                "email": "casey@velora.shop",
                "full_name": "Casey Fox",
                "role": "ADMIN",
                "is_active": false,
                "is_verified": true
            }
        ])))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("POST"))
        .and(path("/auth/register-admin"))
        .and(body_json(serde_json::json!({
            "email": "casey@velora.shop",
            "password": "first-login-1!",
            "full_name": "Casey Fox"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "id": 9,
            "email": "casey@velora.shop",
            "full_name": "Casey Fox",
            "role": "ADMIN",
            "is_active": true,
            "is_verified": false
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let users = client.users().list().await.unwrap();
    assert_eq!(users.len(), 2);
    assert_eq!(users[1].role, Role::Admin);
    assert!(!users[1].is_active);

    let new_admin = NewAdmin::new("casey@velora.shop", "first-login-1!", "Casey Fox");
    client.users().register_admin(&new_admin).await.unwrap();
}

#[tokio::test]
async fn test_profile_update_sends_only_set_fields() {
    let mock_server = MockServer::start().await;
    let (client, _dir) = signed_in_client(&mock_server);

    Mock::given(method("PUT"))
        .and(path("/auth/users/9"))
        .and(body_json(serde_json::json!({"full_name": "Casey A. Fox"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": 9,
            "email": "casey@velora.shop",
            "full_name": "Casey A. Fox",
            "role": "ADMIN",
            "is_active": true,
            "is_verified": true
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let update = ProfileUpdate::new().with_full_name("Casey A. Fox");
    let updated = client.users().update(9, &update).await.unwrap();
    assert_eq!(updated.full_name, "Casey A. Fox");
}

#[tokio::test]
async fn test_account_state_changes_hit_action_paths() {
    let mock_server = MockServer::start().await;
    let (client, _dir) = signed_in_client(&mock_server);

    Mock::given(method("PATCH"))
        .and(path("/auth/users/9/deactivate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"ok": true})))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("POST"))
        .and(path("/auth/users/9/reset-password-request"))
        .respond_with(ResponseTemplate::new(202).set_body_json(serde_json::json!({"ok": true})))
        .expect(1)
        .mount(&mock_server)
        .await;

    client.users().set_active(9, false).await.unwrap();
    client.users().request_password_reset(9).await.unwrap();
}

#[tokio::test]
async fn test_me_returns_the_current_account() {
    let mock_server = MockServer::start().await;
    let (client, _dir) = signed_in_client(&mock_server);

    Mock::given(method("GET"))
        .and(path("/auth/me"))
        .and(header("authorization", "Bearer tok-ops"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": 1,
            "email": "ops@velora.shop",
            "full_name": "Ops",
            "role": "SUPER_ADMIN",
            "is_active": true,
            "is_verified": true
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let me = client.auth().me().await.unwrap();
    assert_eq!(me.role, Role::SuperAdmin);
}

#[tokio::test]
async fn test_verify_email_returns_service_message() {
    let mock_server = MockServer::start().await;
    let (client, _dir) = signed_in_client(&mock_server);

    Mock::given(method("GET"))
        .and(path("/auth/verify-email"))
        .and(query_param("token", "verify-123"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"message": "Welcome aboard"})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let message = client.auth().verify_email("verify-123").await.unwrap();
    assert_eq!(message, "Welcome aboard");
}

#[tokio::test]
async fn test_password_reset_and_update_send_expected_payloads() {
    let mock_server = MockServer::start().await;
    let (client, _dir) = signed_in_client(&mock_server);

    Mock::given(method("POST"))
        .and(path("/auth/reset-password"))
        .and(body_json(serde_json::json!({
            "token": "reset-9",
            "new_password": "Brand-new-1!"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"ok": true})))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/auth/update-password"))
        .and(body_json(serde_json::json!({
            "current_password": "old-pass-1!",
            "new_password": "Brand-new-1!",
            "confirm_password": "Brand-new-1!"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"ok": true})))
        .expect(1)
        .mount(&mock_server)
        .await;

    client
        .auth()
        .reset_password("reset-9", "Brand-new-1!")
        .await
        .unwrap();
    client
        .auth()
        .update_password("old-pass-1!", "Brand-new-1!", "Brand-new-1!")
        .await
        .unwrap();
}
