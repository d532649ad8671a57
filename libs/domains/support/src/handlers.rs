use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use axum_helpers::{messages, ApiResponse, AppError, Bearer, Pagination, ValidatedJson};
use serde::Serialize;
use std::sync::Arc;
use utoipa::{OpenApi, ToSchema};
use uuid::Uuid;

use domain_vendors::{VendorGate, VendorRepository};

use crate::models::{CreateTicket, SupportTicket, TicketFilter};
use crate::repository::SupportRepository;
use crate::service::SupportService;

/// OpenAPI documentation for the support endpoints
#[derive(OpenApi)]
#[openapi(
    paths(create_ticket, list_tickets, get_ticket),
    components(schemas(SupportTicket, CreateTicket, TicketFilter, Pagination)),
    tags(
        (name = "Support", description = "Vendor support tickets")
    )
)]
pub struct ApiDoc;

/// Envelope payload for ticket lists
#[derive(Debug, Serialize, ToSchema)]
pub struct TicketsData {
    pub tickets: Vec<SupportTicket>,
    pub pagination: Pagination,
}

/// Envelope payload for a single ticket
#[derive(Debug, Serialize, ToSchema)]
pub struct TicketData {
    pub ticket: SupportTicket,
}

/// Shared state for the support routes
pub struct SupportState<S: SupportRepository, V: VendorRepository> {
    pub service: SupportService<S>,
    pub gate: VendorGate<V>,
}

/// Create the support router.
///
/// Routes authenticate but do NOT require approval: vendors in any
/// lifecycle state can open and read their tickets.
pub fn router<S, V>(service: SupportService<S>, gate: VendorGate<V>) -> Router
where
    S: SupportRepository + 'static,
    V: VendorRepository + 'static,
{
    let state = Arc::new(SupportState { service, gate });

    Router::new()
        .route("/", get(list_tickets).post(create_ticket))
        .route("/{id}", get(get_ticket))
        .with_state(state)
}

/// Open a support ticket
#[utoipa::path(
    post,
    path = "",
    tag = "Support",
    request_body = CreateTicket,
    responses(
        (status = 201, description = "Ticket created"),
        (status = 400, description = "Validation failed"),
        (status = 401, description = "Missing or invalid token")
    )
)]
async fn create_ticket<S: SupportRepository, V: VendorRepository>(
    State(state): State<Arc<SupportState<S, V>>>,
    Bearer(token): Bearer,
    ValidatedJson(input): ValidatedJson<CreateTicket>,
) -> Result<impl IntoResponse, AppError> {
    let vendor = state.gate.authenticate(&token).await?;
    let ticket = state.service.create_ticket(vendor.id, input).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message(
            TicketData { ticket },
            messages::TICKET_CREATED,
        )),
    ))
}

/// List the vendor's tickets
#[utoipa::path(
    get,
    path = "",
    tag = "Support",
    params(TicketFilter),
    responses(
        (status = 200, description = "Ticket list with pagination"),
        (status = 401, description = "Missing or invalid token")
    )
)]
async fn list_tickets<S: SupportRepository, V: VendorRepository>(
    State(state): State<Arc<SupportState<S, V>>>,
    Bearer(token): Bearer,
    Query(filter): Query<TicketFilter>,
) -> Result<Json<ApiResponse<TicketsData>>, AppError> {
    let vendor = state.gate.authenticate(&token).await?;
    let (tickets, pagination) = state.service.list_tickets(vendor.id, filter).await?;
    Ok(Json(ApiResponse::data(TicketsData {
        tickets,
        pagination,
    })))
}

/// Get one of the vendor's tickets
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Support",
    params(("id" = Uuid, Path, description = "Ticket ID")),
    responses(
        (status = 200, description = "Ticket found"),
        (status = 404, description = "No ticket with this id for this vendor")
    )
)]
async fn get_ticket<S: SupportRepository, V: VendorRepository>(
    State(state): State<Arc<SupportState<S, V>>>,
    Bearer(token): Bearer,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<TicketData>>, AppError> {
    let vendor = state.gate.authenticate(&token).await?;
    let ticket = state.service.get_ticket(vendor.id, id).await?;
    Ok(Json(ApiResponse::data(TicketData { ticket })))
}
