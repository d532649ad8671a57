//! Handler tests for the product routes.
//!
//! These drive the real router with in-memory repositories: the vendor
//! gate, per-vendor scoping, and the existence-masking 404 contract.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use axum_helpers::{JwtAuth, JwtConfig, TokenKind};
use chrono::Utc;
use domain_products::{handlers, InMemoryProductRepository, ProductService};
use domain_vendors::{
    Address, Documents, InMemoryVendorRepository, Vendor, VendorGate, VendorStatus,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt; // For oneshot()
use uuid::Uuid;

const SECRET: &str = "products-test-secret-32-characters!!!";

struct TestApp {
    router: Router,
    vendors: InMemoryVendorRepository,
    jwt: JwtAuth,
}

fn test_app() -> TestApp {
    let vendors = InMemoryVendorRepository::new();
    let jwt = JwtAuth::new(&JwtConfig::new(SECRET));
    let gate = VendorGate::new(vendors.clone(), jwt.clone());
    let service = ProductService::new(InMemoryProductRepository::new());

    TestApp {
        router: handlers::router(service, gate),
        vendors,
        jwt,
    }
}

impl TestApp {
    /// Seed a vendor in the given lifecycle state and mint an access token
    fn vendor_token(&self, status: VendorStatus, reason: Option<&str>) -> String {
        let now = Utc::now();
        let vendor = Vendor {
            id: Uuid::new_v4(),
            email: format!("{}@example.com", Uuid::new_v4()),
            password_hash: "hash".to_string(),
            owner_name: "Test Vendor".to_string(),
            phone: "+900000000000".to_string(),
            store_name: "Test Store".to_string(),
            store_type: None,
            tax_number: None,
            address: Address {
                province: "İstanbul".to_string(),
                district: "Beşiktaş".to_string(),
                full_address: "Test Cad. 1".to_string(),
                postal_code: None,
            },
            status,
            rejection_reason: reason.map(|r| r.to_string()),
            documents: Documents {
                tax_sheet_url: "/uploads/tax.pdf".to_string(),
                trade_registry_url: None,
                signature_circular_url: None,
            },
            created_at: now,
            updated_at: now,
        };
        let token = self.jwt.issue(vendor.id, TokenKind::Access).unwrap();
        self.vendors.insert(vendor);
        token
    }
}

fn product_body(name: &str) -> Value {
    json!({
        "name": name,
        "category": "Sebze",
        "price": 19.9,
        "unit": "kg",
        "stock": 25
    })
}

fn request(method: &str, uri: &str, token: &str, body: Option<&Value>) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {}", token));
    if body.is_some() {
        builder = builder.header("content-type", "application/json");
    }
    builder
        .body(match body {
            Some(value) => Body::from(serde_json::to_string(value).unwrap()),
            None => Body::empty(),
        })
        .unwrap()
}

async fn send(router: &Router, req: Request<Body>) -> (StatusCode, Value) {
    let response = router.clone().oneshot(req).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

#[tokio::test]
async fn test_create_and_list_products() {
    let app = test_app();
    let token = app.vendor_token(VendorStatus::Approved, None);

    let (status, body) = send(
        &app.router,
        request("POST", "/", &token, Some(&product_body("Domates"))),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["product"]["name"], json!("Domates"));
    assert_eq!(body["data"]["product"]["min_stock_threshold"], json!(10));

    let (status, body) = send(&app.router, request("GET", "/", &token, None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["products"].as_array().unwrap().len(), 1);
    assert_eq!(body["data"]["pagination"]["total"], json!(1));
}

#[tokio::test]
async fn test_non_approved_vendors_are_gated_with_specific_messages() {
    let app = test_app();

    let cases = [
        (
            app.vendor_token(VendorStatus::PendingReview, None),
            "Hesabınız inceleme aşamasında. Lütfen onay bekleyiniz.",
        ),
        (
            app.vendor_token(VendorStatus::Rejected, Some("Eksik belge")),
            "Hesabınız reddedildi. Sebep: Eksik belge",
        ),
        (
            app.vendor_token(VendorStatus::Rejected, None),
            "Hesabınız reddedildi. Sebep: Belirtilmemiş",
        ),
        (
            app.vendor_token(VendorStatus::Suspended, None),
            "Hesabınız askıya alınmıştır.",
        ),
    ];

    for (token, expected) in cases {
        let (status, body) = send(&app.router, request("GET", "/", &token, None)).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body["success"], json!(false));
        assert_eq!(body["detail"], json!(expected));
    }
}

#[tokio::test]
async fn test_cross_vendor_delete_is_masked_as_not_found() {
    let app = test_app();
    let owner = app.vendor_token(VendorStatus::Approved, None);
    let intruder = app.vendor_token(VendorStatus::Approved, None);

    let (_, created) = send(
        &app.router,
        request("POST", "/", &owner, Some(&product_body("Elma"))),
    )
    .await;
    let product_id = created["data"]["product"]["id"].as_str().unwrap().to_string();

    // The other vendor gets a 404, not a 403
    let (status, body) = send(
        &app.router,
        request("DELETE", &format!("/{}", product_id), &intruder, None),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], json!("Ürün bulunamadı"));

    // And the product is still there for its owner
    let (_, body) = send(&app.router, request("GET", "/", &owner, None)).await;
    assert_eq!(body["data"]["products"].as_array().unwrap().len(), 1);

    // The intruder's own listing never shows it
    let (_, body) = send(&app.router, request("GET", "/", &intruder, None)).await;
    assert_eq!(body["data"]["products"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_owner_can_delete_own_product() {
    let app = test_app();
    let token = app.vendor_token(VendorStatus::Approved, None);

    let (_, created) = send(
        &app.router,
        request("POST", "/", &token, Some(&product_body("Armut"))),
    )
    .await;
    let product_id = created["data"]["product"]["id"].as_str().unwrap().to_string();

    let (status, _) = send(
        &app.router,
        request("DELETE", &format!("/{}", product_id), &token, None),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = send(&app.router, request("GET", "/", &token, None)).await;
    assert_eq!(body["data"]["products"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_list_filters_by_category_and_low_stock() {
    let app = test_app();
    let token = app.vendor_token(VendorStatus::Approved, None);

    send(
        &app.router,
        request("POST", "/", &token, Some(&product_body("Domates"))),
    )
    .await;
    send(
        &app.router,
        request(
            "POST",
            "/",
            &token,
            Some(&json!({
                "name": "Süt",
                "category": "İçecek",
                "price": 35.0,
                "unit": "lt",
                "stock": 3,
                "min_stock_threshold": 5
            })),
        ),
    )
    .await;

    // "İçecek", percent-encoded for the request line
    let (_, body) = send(
        &app.router,
        request("GET", "/?category=%C4%B0%C3%A7ecek", &token, None),
    )
    .await;
    let products = body["data"]["products"].as_array().unwrap();
    assert_eq!(products.len(), 1);
    assert_eq!(products[0]["name"], json!("Süt"));

    // Only the 3-in-stock product sits at or under its threshold
    let (_, body) = send(
        &app.router,
        request("GET", "/?low_stock_only=true", &token, None),
    )
    .await;
    let products = body["data"]["products"].as_array().unwrap();
    assert_eq!(products.len(), 1);
    assert_eq!(products[0]["name"], json!("Süt"));

    let (_, body) = send(
        &app.router,
        request("GET", "/categories", &token, None),
    )
    .await;
    assert_eq!(
        body["data"]["categories"],
        json!(["Sebze", "İçecek"])
    );
}

#[tokio::test]
async fn test_negative_price_fails_validation() {
    let app = test_app();
    let token = app.vendor_token(VendorStatus::Approved, None);

    let mut body = product_body("Bozuk");
    body["price"] = json!(-1.0);

    let (status, response) = send(&app.router, request("POST", "/", &token, Some(&body))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response["success"], json!(false));
}

#[tokio::test]
async fn test_toggle_status_round_trip() {
    let app = test_app();
    let token = app.vendor_token(VendorStatus::Approved, None);

    let (_, created) = send(
        &app.router,
        request("POST", "/", &token, Some(&product_body("Muz"))),
    )
    .await;
    let product_id = created["data"]["product"]["id"].as_str().unwrap().to_string();
    let uri = format!("/{}/toggle-status", product_id);

    let (status, body) = send(&app.router, request("PATCH", &uri, &token, None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["product"]["status"], json!("inactive"));

    let (_, body) = send(&app.router, request("PATCH", &uri, &token, None)).await;
    assert_eq!(body["data"]["product"]["status"], json!("active"));
}
