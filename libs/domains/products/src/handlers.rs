use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, patch},
    Json, Router,
};
use axum_helpers::{messages, ApiResponse, AppError, Bearer, ValidatedJson};
use serde::Serialize;
use std::sync::Arc;
use utoipa::{OpenApi, ToSchema};
use uuid::Uuid;

use domain_vendors::{VendorGate, VendorRepository};

use crate::models::{CreateProduct, Pagination, Product, ProductFilter, UpdateProduct};
use crate::repository::ProductRepository;
use crate::service::ProductService;

/// OpenAPI documentation for the product endpoints
#[derive(OpenApi)]
#[openapi(
    paths(
        list_products,
        create_product,
        categories,
        get_product,
        update_product,
        toggle_status,
        delete_product,
    ),
    components(schemas(Product, CreateProduct, UpdateProduct, ProductFilter, Pagination)),
    tags(
        (name = "Products", description = "Vendor-scoped product catalog")
    )
)]
pub struct ApiDoc;

/// Envelope payload for product lists
#[derive(Debug, Serialize, ToSchema)]
pub struct ProductsData {
    pub products: Vec<Product>,
    pub pagination: Pagination,
}

/// Envelope payload for a single product
#[derive(Debug, Serialize, ToSchema)]
pub struct ProductData {
    pub product: Product,
}

/// Envelope payload for the category list
#[derive(Debug, Serialize, ToSchema)]
pub struct CategoriesData {
    pub categories: Vec<String>,
}

/// Shared state for the product routes
pub struct ProductsState<P: ProductRepository, V: VendorRepository> {
    pub service: ProductService<P>,
    pub gate: VendorGate<V>,
}

/// Create the products router.
///
/// Every route authenticates the bearer token and passes the approval
/// gate before touching storage.
pub fn router<P, V>(service: ProductService<P>, gate: VendorGate<V>) -> Router
where
    P: ProductRepository + 'static,
    V: VendorRepository + 'static,
{
    let state = Arc::new(ProductsState { service, gate });

    Router::new()
        .route("/", get(list_products).post(create_product))
        .route("/categories", get(categories))
        .route(
            "/{id}",
            get(get_product).put(update_product).delete(delete_product),
        )
        .route("/{id}/toggle-status", patch(toggle_status))
        .with_state(state)
}

/// List the vendor's products with filters and pagination
#[utoipa::path(
    get,
    path = "",
    tag = "Products",
    params(ProductFilter),
    responses(
        (status = 200, description = "Product list with pagination"),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Vendor not approved")
    )
)]
async fn list_products<P: ProductRepository, V: VendorRepository>(
    State(state): State<Arc<ProductsState<P, V>>>,
    Bearer(token): Bearer,
    Query(filter): Query<ProductFilter>,
) -> Result<Json<ApiResponse<ProductsData>>, AppError> {
    let vendor = state.gate.require_approved(&token).await?;
    let (products, pagination) = state.service.list_products(vendor.id, filter).await?;
    Ok(Json(ApiResponse::data(ProductsData {
        products,
        pagination,
    })))
}

/// Create a new product for the vendor
#[utoipa::path(
    post,
    path = "",
    tag = "Products",
    request_body = CreateProduct,
    responses(
        (status = 201, description = "Product created"),
        (status = 400, description = "Validation failed"),
        (status = 403, description = "Vendor not approved")
    )
)]
async fn create_product<P: ProductRepository, V: VendorRepository>(
    State(state): State<Arc<ProductsState<P, V>>>,
    Bearer(token): Bearer,
    ValidatedJson(input): ValidatedJson<CreateProduct>,
) -> Result<impl IntoResponse, AppError> {
    let vendor = state.gate.require_approved(&token).await?;
    let product = state.service.create_product(vendor.id, input).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message(
            ProductData { product },
            messages::PRODUCT_CREATED,
        )),
    ))
}

/// Distinct categories used by the vendor's products
#[utoipa::path(
    get,
    path = "/categories",
    tag = "Products",
    responses(
        (status = 200, description = "Category list"),
        (status = 403, description = "Vendor not approved")
    )
)]
async fn categories<P: ProductRepository, V: VendorRepository>(
    State(state): State<Arc<ProductsState<P, V>>>,
    Bearer(token): Bearer,
) -> Result<Json<ApiResponse<CategoriesData>>, AppError> {
    let vendor = state.gate.require_approved(&token).await?;
    let categories = state.service.categories(vendor.id).await?;
    Ok(Json(ApiResponse::data(CategoriesData { categories })))
}

/// Get one of the vendor's products
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Products",
    params(("id" = Uuid, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product found"),
        (status = 404, description = "No product with this id for this vendor")
    )
)]
async fn get_product<P: ProductRepository, V: VendorRepository>(
    State(state): State<Arc<ProductsState<P, V>>>,
    Bearer(token): Bearer,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<ProductData>>, AppError> {
    let vendor = state.gate.require_approved(&token).await?;
    let product = state.service.get_product(vendor.id, id).await?;
    Ok(Json(ApiResponse::data(ProductData { product })))
}

/// Partially update one of the vendor's products
#[utoipa::path(
    put,
    path = "/{id}",
    tag = "Products",
    params(("id" = Uuid, Path, description = "Product ID")),
    request_body = UpdateProduct,
    responses(
        (status = 200, description = "Product updated"),
        (status = 404, description = "No product with this id for this vendor")
    )
)]
async fn update_product<P: ProductRepository, V: VendorRepository>(
    State(state): State<Arc<ProductsState<P, V>>>,
    Bearer(token): Bearer,
    Path(id): Path<Uuid>,
    ValidatedJson(update): ValidatedJson<UpdateProduct>,
) -> Result<Json<ApiResponse<ProductData>>, AppError> {
    let vendor = state.gate.require_approved(&token).await?;
    let product = state.service.update_product(vendor.id, id, update).await?;
    Ok(Json(ApiResponse::with_message(
        ProductData { product },
        messages::PRODUCT_UPDATED,
    )))
}

/// Toggle a product between active and inactive
#[utoipa::path(
    patch,
    path = "/{id}/toggle-status",
    tag = "Products",
    params(("id" = Uuid, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Status toggled"),
        (status = 404, description = "No product with this id for this vendor")
    )
)]
async fn toggle_status<P: ProductRepository, V: VendorRepository>(
    State(state): State<Arc<ProductsState<P, V>>>,
    Bearer(token): Bearer,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<ProductData>>, AppError> {
    let vendor = state.gate.require_approved(&token).await?;
    let product = state.service.toggle_status(vendor.id, id).await?;
    Ok(Json(ApiResponse::data(ProductData { product })))
}

/// Delete one of the vendor's products.
///
/// Another vendor's product id yields the same 404 as a missing one.
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Products",
    params(("id" = Uuid, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product deleted"),
        (status = 404, description = "No product with this id for this vendor")
    )
)]
async fn delete_product<P: ProductRepository, V: VendorRepository>(
    State(state): State<Arc<ProductsState<P, V>>>,
    Bearer(token): Bearer,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let vendor = state.gate.require_approved(&token).await?;
    state.service.delete_product(vendor.id, id).await?;
    Ok(Json(ApiResponse::ok(messages::PRODUCT_DELETED)))
}
