//! Dashboard aggregation
//!
//! Per-vendor counters assembled from independent count queries. Each
//! field is its own snapshot; small staleness between counts is
//! acceptable and no transactional guarantee is given.

use axum::{extract::State, routing::get, Json, Router};
use axum_helpers::{ApiResponse, AppError, Bearer};
use chrono::{Duration, NaiveTime, Utc};
use serde::Serialize;
use std::sync::Arc;
use utoipa::{OpenApi, ToSchema};

use domain_orders::{MongoOrderRepository, OrderFilter, OrderRepository, OrderService, OrderStatus};
use domain_products::{
    MongoProductRepository, ProductFilter, ProductRepository, ProductService, ProductStatus,
};
use domain_vendors::{MongoVendorRepository, VendorGate, VendorRepository};

use crate::state::AppState;

/// OpenAPI documentation for the dashboard endpoint
#[derive(OpenApi)]
#[openapi(
    paths(get_dashboard),
    components(schemas(DashboardData, OrderCount, ProductCounts)),
    tags(
        (name = "Dashboard", description = "Per-vendor counters")
    )
)]
pub struct ApiDoc;

#[derive(Debug, Serialize, ToSchema)]
pub struct OrderCount {
    pub orders: u64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ProductCounts {
    pub total: u64,
    pub active: u64,
    pub low_stock: u64,
}

/// Dashboard payload
#[derive(Debug, Serialize, ToSchema)]
pub struct DashboardData {
    /// Orders created since midnight
    pub today: OrderCount,
    /// Orders created in the trailing 7 days
    pub week: OrderCount,
    /// Orders currently pending
    pub pending: OrderCount,
    pub products: ProductCounts,
}

/// Shared state for the dashboard route
pub struct DashboardState<O: OrderRepository, P: ProductRepository, V: VendorRepository> {
    pub orders: OrderService<O>,
    pub products: ProductService<P>,
    pub gate: VendorGate<V>,
}

/// Create the dashboard router backed by MongoDB
pub fn router(state: &AppState) -> Router {
    let orders = OrderService::new(MongoOrderRepository::new(state.db.clone()));
    let products = ProductService::new(MongoProductRepository::new(state.db.clone()));
    let gate = VendorGate::new(
        MongoVendorRepository::new(state.db.clone()),
        state.jwt.clone(),
    );

    dashboard_router(orders, products, gate)
}

/// Create the dashboard router over arbitrary repositories
pub fn dashboard_router<O, P, V>(
    orders: OrderService<O>,
    products: ProductService<P>,
    gate: VendorGate<V>,
) -> Router
where
    O: OrderRepository + 'static,
    P: ProductRepository + 'static,
    V: VendorRepository + 'static,
{
    let state = Arc::new(DashboardState {
        orders,
        products,
        gate,
    });

    Router::new().route("/", get(get_dashboard)).with_state(state)
}

/// Vendor dashboard counters
#[utoipa::path(
    get,
    path = "",
    tag = "Dashboard",
    responses(
        (status = 200, description = "Counters for the authenticated vendor"),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Vendor not approved")
    )
)]
async fn get_dashboard<O, P, V>(
    State(state): State<Arc<DashboardState<O, P, V>>>,
    Bearer(token): Bearer,
) -> Result<Json<ApiResponse<DashboardData>>, AppError>
where
    O: OrderRepository,
    P: ProductRepository,
    V: VendorRepository,
{
    let vendor = state.gate.require_approved(&token).await?;

    let now = Utc::now();
    let today_start = now.date_naive().and_time(NaiveTime::MIN).and_utc();
    let week_start = now - Duration::days(7);

    let today = state
        .orders
        .count_orders(vendor.id, &OrderFilter::created_since(today_start))
        .await?;
    let week = state
        .orders
        .count_orders(vendor.id, &OrderFilter::created_since(week_start))
        .await?;
    let pending = state
        .orders
        .count_orders(vendor.id, &OrderFilter::with_status(OrderStatus::Pending))
        .await?;

    let products_total = state
        .products
        .count_products(vendor.id, &ProductFilter::default())
        .await?;
    let products_active = state
        .products
        .count_products(
            vendor.id,
            &ProductFilter {
                status: Some(ProductStatus::Active),
                ..Default::default()
            },
        )
        .await?;
    let products_low_stock = state
        .products
        .count_products(
            vendor.id,
            &ProductFilter {
                low_stock_only: true,
                ..Default::default()
            },
        )
        .await?;

    Ok(Json(ApiResponse::data(DashboardData {
        today: OrderCount { orders: today },
        week: OrderCount { orders: week },
        pending: OrderCount { orders: pending },
        products: ProductCounts {
            total: products_total,
            active: products_active,
            low_stock: products_low_stock,
        },
    })))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use axum_helpers::{JwtAuth, JwtConfig, TokenKind};
    use chrono::DateTime;
    use domain_orders::{CustomerInfo, InMemoryOrderRepository, Order, PaymentStatus};
    use domain_products::{CreateProduct, InMemoryProductRepository, Product};
    use domain_vendors::{Address, Documents, InMemoryVendorRepository, Vendor, VendorStatus};
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use tower::ServiceExt;
    use uuid::Uuid;

    const SECRET: &str = "dashboard-test-secret-32-characters!!";

    struct TestApp {
        router: Router,
        vendors: InMemoryVendorRepository,
        orders: InMemoryOrderRepository,
        products: InMemoryProductRepository,
        jwt: JwtAuth,
    }

    fn test_app() -> TestApp {
        let vendors = InMemoryVendorRepository::new();
        let orders = InMemoryOrderRepository::new();
        let products = InMemoryProductRepository::new();
        let jwt = JwtAuth::new(&JwtConfig::new(SECRET));
        let gate = VendorGate::new(vendors.clone(), jwt.clone());

        TestApp {
            router: dashboard_router(
                OrderService::new(orders.clone()),
                ProductService::new(products.clone()),
                gate,
            ),
            vendors,
            orders,
            products,
            jwt,
        }
    }

    impl TestApp {
        fn approved_vendor(&self) -> (Uuid, String) {
            let now = Utc::now();
            let vendor = Vendor {
                id: Uuid::new_v4(),
                email: format!("{}@example.com", Uuid::new_v4()),
                password_hash: "hash".to_string(),
                owner_name: "Dash Vendor".to_string(),
                phone: "+900000000000".to_string(),
                store_name: "Dash Store".to_string(),
                store_type: None,
                tax_number: None,
                address: Address {
                    province: "İzmir".to_string(),
                    district: "Bornova".to_string(),
                    full_address: "Kampüs Cad. 9".to_string(),
                    postal_code: None,
                },
                status: VendorStatus::Approved,
                rejection_reason: None,
                documents: Documents {
                    tax_sheet_url: "/uploads/tax.pdf".to_string(),
                    trade_registry_url: None,
                    signature_circular_url: None,
                },
                created_at: now,
                updated_at: now,
            };
            let token = self.jwt.issue(vendor.id, TokenKind::Access).unwrap();
            let id = vendor.id;
            self.vendors.insert(vendor);
            (id, token)
        }

        async fn seed_order(
            &self,
            vendor_id: Uuid,
            status: OrderStatus,
            created_at: DateTime<Utc>,
        ) {
            let order = Order {
                id: Uuid::new_v4(),
                vendor_id,
                order_number: format!("ORD-{}", &Uuid::new_v4().to_string()[..8]),
                customer_info: CustomerInfo {
                    name: "Müşteri".to_string(),
                    phone: "+905551110000".to_string(),
                    email: None,
                    address: "Adres 1".to_string(),
                },
                items: vec![],
                subtotal: 100.0,
                delivery_fee: 0.0,
                total: 100.0,
                payment_status: PaymentStatus::Paid,
                status,
                status_history: vec![],
                notes: None,
                created_at,
                updated_at: created_at,
            };
            use domain_orders::OrderRepository as _;
            self.orders.insert(order).await.unwrap();
        }

        async fn seed_product(&self, vendor_id: Uuid, stock: i32, status: ProductStatus) {
            let product = Product::new(
                vendor_id,
                CreateProduct {
                    name: "Ürün".to_string(),
                    category: "Genel".to_string(),
                    price: 10.0,
                    unit: "adet".to_string(),
                    stock,
                    min_stock_threshold: 10,
                    status,
                    description: None,
                    image_url: None,
                },
            );
            use domain_products::ProductRepository as _;
            self.products.create(product).await.unwrap();
        }
    }

    async fn get_dashboard_body(router: &Router, token: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("GET")
            .uri("/")
            .header(header::AUTHORIZATION, format!("Bearer {}", token))
            .body(Body::empty())
            .unwrap();
        let response = router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_counts_match_seeded_documents() {
        let app = test_app();
        let (vendor_id, token) = app.approved_vendor();
        let (other_id, _) = app.approved_vendor();

        let now = Utc::now();
        // 3 orders today, one of them pending
        app.seed_order(vendor_id, OrderStatus::Pending, now).await;
        app.seed_order(vendor_id, OrderStatus::Preparing, now).await;
        app.seed_order(vendor_id, OrderStatus::Delivered, now).await;
        // 1 order yesterday
        app.seed_order(vendor_id, OrderStatus::Delivered, now - Duration::hours(25))
            .await;
        // 1 order outside the 7-day window
        app.seed_order(vendor_id, OrderStatus::Delivered, now - Duration::days(10))
            .await;
        // Another vendor's orders must not count
        app.seed_order(other_id, OrderStatus::Pending, now).await;

        app.seed_product(vendor_id, 50, ProductStatus::Active).await;
        app.seed_product(vendor_id, 3, ProductStatus::Active).await;
        app.seed_product(vendor_id, 50, ProductStatus::Inactive).await;
        app.seed_product(other_id, 1, ProductStatus::Active).await;

        let (status, body) = get_dashboard_body(&app.router, &token).await;
        assert_eq!(status, StatusCode::OK);

        let data = &body["data"];
        assert_eq!(data["today"]["orders"], json!(3));
        assert_eq!(data["week"]["orders"], json!(4));
        assert_eq!(data["pending"]["orders"], json!(1));
        assert_eq!(data["products"]["total"], json!(3));
        assert_eq!(data["products"]["active"], json!(2));
        assert_eq!(data["products"]["low_stock"], json!(1));
    }

    #[tokio::test]
    async fn test_dashboard_is_gated_on_approval() {
        let app = test_app();
        let now = Utc::now();
        let vendor = Vendor {
            id: Uuid::new_v4(),
            email: "pending@example.com".to_string(),
            password_hash: "hash".to_string(),
            owner_name: "Pending".to_string(),
            phone: "+900000000001".to_string(),
            store_name: "Pending Store".to_string(),
            store_type: None,
            tax_number: None,
            address: Address {
                province: "İzmir".to_string(),
                district: "Konak".to_string(),
                full_address: "Adres".to_string(),
                postal_code: None,
            },
            status: VendorStatus::PendingReview,
            rejection_reason: None,
            documents: Documents {
                tax_sheet_url: "/uploads/tax.pdf".to_string(),
                trade_registry_url: None,
                signature_circular_url: None,
            },
            created_at: now,
            updated_at: now,
        };
        let token = app.jwt.issue(vendor.id, TokenKind::Access).unwrap();
        app.vendors.insert(vendor);

        let (status, body) = get_dashboard_body(&app.router, &token).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body["success"], json!(false));
    }
}
