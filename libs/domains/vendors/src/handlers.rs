use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post, put},
    Json, Router,
};
use axum_helpers::{messages, ApiResponse, Bearer, ValidatedJson};
use serde::Serialize;
use std::sync::Arc;
use utoipa::{OpenApi, ToSchema};

use crate::error::VendorResult;
use crate::gate::VendorGate;
use crate::models::{
    AccessTokenData, ChangePasswordRequest, LoginData, RefreshRequest, RegisterVendor,
    UpdateVendorProfile, VendorLogin, VendorProfile, VendorSummary,
};
use crate::repository::VendorRepository;
use crate::service::VendorService;

/// OpenAPI documentation for the vendor account endpoints
#[derive(OpenApi)]
#[openapi(
    paths(register, login, refresh, me, update_profile, change_password),
    components(schemas(
        RegisterVendor,
        VendorLogin,
        RefreshRequest,
        ChangePasswordRequest,
        UpdateVendorProfile,
        VendorSummary,
        VendorProfile,
        LoginData,
        AccessTokenData,
        VendorData,
        ProfileData,
    )),
    tags(
        (name = "Vendors", description = "Vendor registration, login, and profile")
    )
)]
pub struct ApiDoc;

/// Envelope payload wrapping a vendor summary
#[derive(Debug, Serialize, ToSchema)]
pub struct VendorData {
    pub vendor: VendorSummary,
}

/// Envelope payload wrapping a full vendor profile
#[derive(Debug, Serialize, ToSchema)]
pub struct ProfileData {
    pub vendor: VendorProfile,
}

/// Shared state for the vendor account routes
pub struct VendorsState<R: VendorRepository> {
    pub service: VendorService<R>,
    pub gate: VendorGate<R>,
}

/// Create the vendor account router
pub fn router<R: VendorRepository + 'static>(
    service: VendorService<R>,
    gate: VendorGate<R>,
) -> Router {
    let state = Arc::new(VendorsState { service, gate });

    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/refresh", post(refresh))
        .route("/me", get(me))
        .route("/profile", put(update_profile))
        .route("/change-password", post(change_password))
        .with_state(state)
}

/// Register a new vendor account (starts in pending review, no token)
#[utoipa::path(
    post,
    path = "/register",
    tag = "Vendors",
    request_body = RegisterVendor,
    responses(
        (status = 201, description = "Vendor created, pending review"),
        (status = 400, description = "Validation failed"),
        (status = 409, description = "Email already registered")
    )
)]
async fn register<R: VendorRepository>(
    State(state): State<Arc<VendorsState<R>>>,
    ValidatedJson(input): ValidatedJson<RegisterVendor>,
) -> VendorResult<impl IntoResponse> {
    let vendor = state.service.register(input).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message(
            VendorData { vendor },
            messages::REGISTER_SUCCESS,
        )),
    ))
}

/// Log in and receive access + refresh tokens.
///
/// Works for vendors in any lifecycle state; the status gate only blocks
/// business operations.
#[utoipa::path(
    post,
    path = "/login",
    tag = "Vendors",
    request_body = VendorLogin,
    responses(
        (status = 200, description = "Tokens issued"),
        (status = 401, description = "Invalid credentials")
    )
)]
async fn login<R: VendorRepository>(
    State(state): State<Arc<VendorsState<R>>>,
    ValidatedJson(input): ValidatedJson<VendorLogin>,
) -> VendorResult<Json<ApiResponse<LoginData>>> {
    let data = state.service.login(input).await?;
    Ok(Json(ApiResponse::with_message(
        data,
        messages::LOGIN_SUCCESS,
    )))
}

/// Exchange a refresh token for a new access token
#[utoipa::path(
    post,
    path = "/refresh",
    tag = "Vendors",
    request_body = RefreshRequest,
    responses(
        (status = 200, description = "New access token issued"),
        (status = 401, description = "Invalid, expired, or wrong-kind token")
    )
)]
async fn refresh<R: VendorRepository>(
    State(state): State<Arc<VendorsState<R>>>,
    Json(input): Json<RefreshRequest>,
) -> VendorResult<Json<ApiResponse<AccessTokenData>>> {
    let data = state.service.refresh(&input.refresh_token).await?;
    Ok(Json(ApiResponse::data(data)))
}

/// Get the authenticated vendor's own profile.
///
/// Available in every lifecycle state; only authentication is required.
#[utoipa::path(
    get,
    path = "/me",
    tag = "Vendors",
    responses(
        (status = 200, description = "Vendor profile"),
        (status = 401, description = "Missing or invalid token")
    )
)]
async fn me<R: VendorRepository>(
    State(state): State<Arc<VendorsState<R>>>,
    Bearer(token): Bearer,
) -> VendorResult<Json<ApiResponse<ProfileData>>> {
    let vendor = state.gate.authenticate(&token).await?;
    Ok(Json(ApiResponse::data(ProfileData {
        vendor: vendor.into(),
    })))
}

/// Update the allow-listed profile fields
#[utoipa::path(
    put,
    path = "/profile",
    tag = "Vendors",
    request_body = UpdateVendorProfile,
    responses(
        (status = 200, description = "Profile updated"),
        (status = 401, description = "Missing or invalid token")
    )
)]
async fn update_profile<R: VendorRepository>(
    State(state): State<Arc<VendorsState<R>>>,
    Bearer(token): Bearer,
    ValidatedJson(update): ValidatedJson<UpdateVendorProfile>,
) -> VendorResult<Json<ApiResponse<ProfileData>>> {
    let vendor = state.gate.authenticate(&token).await?;
    let profile = state.service.update_profile(vendor, update).await?;
    Ok(Json(ApiResponse::with_message(
        ProfileData { vendor: profile },
        messages::PROFILE_UPDATED,
    )))
}

/// Change the authenticated vendor's password
#[utoipa::path(
    post,
    path = "/change-password",
    tag = "Vendors",
    request_body = ChangePasswordRequest,
    responses(
        (status = 200, description = "Password updated"),
        (status = 401, description = "Missing token or wrong current password")
    )
)]
async fn change_password<R: VendorRepository>(
    State(state): State<Arc<VendorsState<R>>>,
    Bearer(token): Bearer,
    Json(input): Json<ChangePasswordRequest>,
) -> VendorResult<Json<ApiResponse<()>>> {
    let vendor = state.gate.authenticate(&token).await?;
    state
        .service
        .change_password(vendor, &input.current_password, &input.new_password)
        .await?;
    Ok(Json(ApiResponse::ok(messages::PASSWORD_UPDATED)))
}
