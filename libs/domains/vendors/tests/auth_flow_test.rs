//! End-to-end tests for the vendor account routes.
//!
//! These drive the real router with the in-memory repository, covering
//! registration, login, token kinds, and the profile endpoints.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use axum_helpers::{JwtAuth, JwtConfig, TokenKind};
use domain_vendors::{handlers, InMemoryVendorRepository, VendorGate, VendorService};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt; // For oneshot()

const SECRET: &str = "auth-flow-test-secret-32-characters!!";

fn app() -> (Router, InMemoryVendorRepository, JwtAuth) {
    let repo = InMemoryVendorRepository::new();
    let jwt = JwtAuth::new(&JwtConfig::new(SECRET));
    let service = VendorService::new(repo.clone(), jwt.clone());
    let gate = VendorGate::new(repo.clone(), jwt.clone());
    (handlers::router(service, gate), repo, jwt)
}

fn register_body(email: &str, password: &str) -> Value {
    json!({
        "owner_name": "Fatma Kaya",
        "email": email,
        "phone": "+905321112233",
        "password": password,
        "store_name": "Kaya Bakkal",
        "address": {
            "province": "Bursa",
            "district": "Nilüfer",
            "full_address": "Çarşı Cad. 12"
        },
        "tax_sheet_url": "/uploads/vergi-levhasi.pdf"
    })
}

fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(body).unwrap()))
        .unwrap()
}

fn get_with_token(uri: &str, token: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap()
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
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
async fn test_register_login_me_flow() {
    let (app, _repo, _jwt) = app();

    // Register: 201, pending review, no token issued
    let (status, body) = send(&app, post_json("/register", &register_body("flow@example.com", "s3cret!"))).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["data"]["vendor"]["status"], json!("pending_review"));
    assert!(body["data"].get("access_token").is_none());

    // Login: works even though the vendor is not approved
    let (status, body) = send(
        &app,
        post_json(
            "/login",
            &json!({"email": "flow@example.com", "password": "s3cret!"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let access_token = body["data"]["access_token"].as_str().unwrap().to_string();
    assert!(body["data"]["refresh_token"].as_str().is_some());
    assert_eq!(body["data"]["vendor"]["email"], json!("flow@example.com"));

    // Me: full profile, sensitive fields structurally absent
    let (status, body) = send(&app, get_with_token("/me", &access_token)).await;
    assert_eq!(status, StatusCode::OK);
    let vendor = &body["data"]["vendor"];
    assert_eq!(vendor["store_name"], json!("Kaya Bakkal"));
    assert!(vendor.get("password_hash").is_none());
    assert!(vendor.get("_id").is_none());
}

#[tokio::test]
async fn test_duplicate_registration_conflicts_case_insensitively() {
    let (app, _repo, _jwt) = app();

    let (status, _) = send(&app, post_json("/register", &register_body("dup@example.com", "s3cret!"))).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send(&app, post_json("/register", &register_body("DUP@Example.COM", "s3cret!"))).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["detail"], json!("Bu email adresi zaten kayıtlı"));
}

#[tokio::test]
async fn test_login_failure_does_not_reveal_which_factor_failed() {
    let (app, _repo, _jwt) = app();

    send(&app, post_json("/register", &register_body("leak@example.com", "s3cret!"))).await;

    let (unknown_status, unknown_body) = send(
        &app,
        post_json(
            "/login",
            &json!({"email": "ghost@example.com", "password": "whatever1"}),
        ),
    )
    .await;
    let (wrong_status, wrong_body) = send(
        &app,
        post_json(
            "/login",
            &json!({"email": "leak@example.com", "password": "wrong-password"}),
        ),
    )
    .await;

    assert_eq!(unknown_status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_status, StatusCode::UNAUTHORIZED);
    // Byte-identical bodies: no information leak
    assert_eq!(unknown_body, wrong_body);
}

#[tokio::test]
async fn test_password_shorter_than_six_chars_is_rejected() {
    let (app, _repo, _jwt) = app();

    let (status, body) = send(&app, post_json("/register", &register_body("pw@example.com", "12345"))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["detail"], json!("Şifre en az 6 karakter olmalıdır"));
}

#[tokio::test]
async fn test_missing_tax_sheet_is_rejected() {
    let (app, _repo, _jwt) = app();

    let mut body = register_body("docs@example.com", "s3cret!");
    body["tax_sheet_url"] = json!("");

    let (status, response) = send(&app, post_json("/register", &body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response["detail"], json!("Vergi levhası zorunludur"));
}

#[tokio::test]
async fn test_me_requires_access_kind() {
    let (app, _repo, jwt) = app();

    send(&app, post_json("/register", &register_body("kind@example.com", "s3cret!"))).await;
    let (_, login) = send(
        &app,
        post_json(
            "/login",
            &json!({"email": "kind@example.com", "password": "s3cret!"}),
        ),
    )
    .await;

    // A validly signed, unexpired refresh token must not authenticate
    let refresh_token = login["data"]["refresh_token"].as_str().unwrap();
    let (status, body) = send(&app, get_with_token("/me", refresh_token)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["detail"], json!("Geçersiz token tipi"));

    // And a token for an unknown subject fails even with a valid kind
    let stranger = jwt.issue(uuid::Uuid::new_v4(), TokenKind::Access).unwrap();
    let (status, _) = send(&app, get_with_token("/me", &stranger)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_me_without_bearer_header_is_unauthorized() {
    let (app, _repo, _jwt) = app();

    let request = Request::builder()
        .method("GET")
        .uri("/me")
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(&app, request).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["detail"], json!("Yetkilendirme tokenı bulunamadı"));
}

#[tokio::test]
async fn test_refresh_flow_mints_working_access_token() {
    let (app, _repo, _jwt) = app();

    send(&app, post_json("/register", &register_body("refresh@example.com", "s3cret!"))).await;
    let (_, login) = send(
        &app,
        post_json(
            "/login",
            &json!({"email": "refresh@example.com", "password": "s3cret!"}),
        ),
    )
    .await;

    let refresh_token = login["data"]["refresh_token"].as_str().unwrap();
    let (status, body) = send(
        &app,
        post_json("/refresh", &json!({"refresh_token": refresh_token})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let new_access = body["data"]["access_token"].as_str().unwrap();
    let (status, _) = send(&app, get_with_token("/me", new_access)).await;
    assert_eq!(status, StatusCode::OK);

    // The kind check also holds in the other direction
    let access_token = login["data"]["access_token"].as_str().unwrap();
    let (status, _) = send(
        &app,
        post_json("/refresh", &json!({"refresh_token": access_token})),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_profile_update_touches_only_allowed_fields() {
    let (app, _repo, _jwt) = app();

    send(&app, post_json("/register", &register_body("update@example.com", "s3cret!"))).await;
    let (_, login) = send(
        &app,
        post_json(
            "/login",
            &json!({"email": "update@example.com", "password": "s3cret!"}),
        ),
    )
    .await;
    let token = login["data"]["access_token"].as_str().unwrap();

    let request = Request::builder()
        .method("PUT")
        .uri("/profile")
        .header("content-type", "application/json")
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .body(Body::from(
            serde_json::to_string(&json!({"store_name": "Kaya Market"})).unwrap(),
        ))
        .unwrap();
    let (status, body) = send(&app, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["vendor"]["store_name"], json!("Kaya Market"));
    assert_eq!(body["data"]["vendor"]["email"], json!("update@example.com"));
}

#[tokio::test]
async fn test_change_password_rotates_credentials() {
    let (app, _repo, _jwt) = app();

    send(&app, post_json("/register", &register_body("rotate@example.com", "old-secret"))).await;
    let (_, login) = send(
        &app,
        post_json(
            "/login",
            &json!({"email": "rotate@example.com", "password": "old-secret"}),
        ),
    )
    .await;
    let token = login["data"]["access_token"].as_str().unwrap();

    let request = Request::builder()
        .method("POST")
        .uri("/change-password")
        .header("content-type", "application/json")
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .body(Body::from(
            serde_json::to_string(
                &json!({"current_password": "old-secret", "new_password": "new-secret"}),
            )
            .unwrap(),
        ))
        .unwrap();
    let (status, _) = send(&app, request).await;
    assert_eq!(status, StatusCode::OK);

    // Old credentials stop working, new ones work
    let (status, _) = send(
        &app,
        post_json(
            "/login",
            &json!({"email": "rotate@example.com", "password": "old-secret"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = send(
        &app,
        post_json(
            "/login",
            &json!({"email": "rotate@example.com", "password": "new-secret"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
}
