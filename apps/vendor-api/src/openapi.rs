//! OpenAPI documentation configuration

use utoipa::OpenApi;

/// Combined OpenAPI documentation for all APIs
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Satıcı Paneli API",
        version = "0.1.0",
        description = "Vendor panel REST API: registration, approval-gated catalog and order management"
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    nest(
        (path = "/api/vendor", api = domain_vendors::ApiDoc),
        (path = "/api/vendor/products", api = domain_products::ApiDoc),
        (path = "/api/vendor/orders", api = domain_orders::ApiDoc),
        (path = "/api/vendor/support", api = domain_support::ApiDoc),
        (path = "/api/vendor/dashboard", api = crate::api::dashboard::ApiDoc)
    ),
    tags(
        (name = "Vendors", description = "Vendor registration, login, and profile"),
        (name = "Products", description = "Vendor-scoped product catalog"),
        (name = "Orders", description = "Vendor-scoped orders"),
        (name = "Support", description = "Vendor support tickets"),
        (name = "Dashboard", description = "Per-vendor counters")
    )
)]
pub struct ApiDoc;
