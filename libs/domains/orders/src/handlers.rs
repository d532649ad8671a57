use axum::{
    extract::{Path, Query, State},
    routing::{get, put},
    Json, Router,
};
use axum_helpers::{ApiResponse, AppError, Bearer, Pagination};
use serde::Serialize;
use std::sync::Arc;
use utoipa::{OpenApi, ToSchema};
use uuid::Uuid;

use domain_vendors::{VendorGate, VendorRepository};

use crate::models::{Order, OrderFilter, UpdateOrderStatus};
use crate::repository::OrderRepository;
use crate::service::OrderService;

/// OpenAPI documentation for the order endpoints
#[derive(OpenApi)]
#[openapi(
    paths(list_orders, get_order, update_order_status),
    components(schemas(Order, UpdateOrderStatus, OrderFilter, Pagination)),
    tags(
        (name = "Orders", description = "Vendor-scoped order listing and status updates")
    )
)]
pub struct ApiDoc;

/// Envelope payload for order lists
#[derive(Debug, Serialize, ToSchema)]
pub struct OrdersData {
    pub orders: Vec<Order>,
    pub pagination: Pagination,
}

/// Envelope payload for a single order
#[derive(Debug, Serialize, ToSchema)]
pub struct OrderData {
    pub order: Order,
}

/// Shared state for the order routes
pub struct OrdersState<O: OrderRepository, V: VendorRepository> {
    pub service: OrderService<O>,
    pub gate: VendorGate<V>,
}

/// Create the orders router.
///
/// Every route authenticates the bearer token and passes the approval
/// gate before touching storage.
pub fn router<O, V>(service: OrderService<O>, gate: VendorGate<V>) -> Router
where
    O: OrderRepository + 'static,
    V: VendorRepository + 'static,
{
    let state = Arc::new(OrdersState { service, gate });

    Router::new()
        .route("/", get(list_orders))
        .route("/{id}", get(get_order))
        .route("/{id}/status", put(update_order_status))
        .with_state(state)
}

/// List the vendor's orders with filters and pagination
#[utoipa::path(
    get,
    path = "",
    tag = "Orders",
    params(OrderFilter),
    responses(
        (status = 200, description = "Order list with pagination"),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Vendor not approved")
    )
)]
async fn list_orders<O: OrderRepository, V: VendorRepository>(
    State(state): State<Arc<OrdersState<O, V>>>,
    Bearer(token): Bearer,
    Query(filter): Query<OrderFilter>,
) -> Result<Json<ApiResponse<OrdersData>>, AppError> {
    let vendor = state.gate.require_approved(&token).await?;
    let (orders, pagination) = state.service.list_orders(vendor.id, filter).await?;
    Ok(Json(ApiResponse::data(OrdersData { orders, pagination })))
}

/// Get one of the vendor's orders
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Orders",
    params(("id" = Uuid, Path, description = "Order ID")),
    responses(
        (status = 200, description = "Order found"),
        (status = 404, description = "No order with this id for this vendor")
    )
)]
async fn get_order<O: OrderRepository, V: VendorRepository>(
    State(state): State<Arc<OrdersState<O, V>>>,
    Bearer(token): Bearer,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<OrderData>>, AppError> {
    let vendor = state.gate.require_approved(&token).await?;
    let order = state.service.get_order(vendor.id, id).await?;
    Ok(Json(ApiResponse::data(OrderData { order })))
}

/// Set an order's status.
///
/// Accepts any status from any current status and reports success even
/// when no matching order exists (acknowledged no-op).
#[utoipa::path(
    put,
    path = "/{id}/status",
    tag = "Orders",
    params(("id" = Uuid, Path, description = "Order ID")),
    request_body = UpdateOrderStatus,
    responses(
        (status = 200, description = "Status update acknowledged"),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Vendor not approved")
    )
)]
async fn update_order_status<O: OrderRepository, V: VendorRepository>(
    State(state): State<Arc<OrdersState<O, V>>>,
    Bearer(token): Bearer,
    Path(id): Path<Uuid>,
    Json(input): Json<UpdateOrderStatus>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let vendor = state.gate.require_approved(&token).await?;
    state
        .service
        .update_status(vendor.id, id, input.status, input.note)
        .await?;
    Ok(Json(ApiResponse::success()))
}
