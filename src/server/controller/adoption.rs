use axum::{
    extract::{Path, Query, State},
    http::HeaderMap,
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    model::{
        adoption::{
            AdoptionDto, AdoptionStatus, AdoptionWithPetDto, CreateAdoptionDto,
            PaginatedAdoptionsDto,
        },
        api::{ErrorDto, MessageDto},
    },
    server::{
        controller::param::{clamp_entries, default_entries},
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::adoption::{ListAdoptionsParam, SubmitAdoptionParam},
        service::adoption::AdoptionService,
        state::AppState,
    },
};

/// Tag for grouping adoption endpoints in OpenAPI documentation
pub static ADOPTION_TAG: &str = "adoption";

/// Query parameters for the admin review listing.
#[derive(Deserialize)]
pub struct ListAdoptionsQuery {
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_entries")]
    pub entries: u64,
    pub status: Option<AdoptionStatus>,
}

/// Submit an adoption request.
///
/// The pet must still be available and the caller must not already have a
/// pending request for it.
///
/// # Authentication
/// Requires a session cookie or bearer token (no admin permission required)
///
/// # Returns
/// - `201 Created` - The submitted request
/// - `400 Bad Request` - The pet has already been adopted
/// - `401 Unauthorized` - Not authenticated
/// - `404 Not Found` - No pet with that ID exists
/// - `409 Conflict` - Caller already has a pending request for this pet
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/adoptions",
    tag = ADOPTION_TAG,
    request_body = CreateAdoptionDto,
    responses(
        (status = 201, description = "The submitted request", body = AdoptionDto),
        (status = 400, description = "Pet is not available for adoption", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Pet not found", body = ErrorDto),
        (status = 409, description = "Duplicate pending request", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_adoption(
    State(state): State<AppState>,
    session: Session,
    headers: HeaderMap,
    Json(payload): Json<CreateAdoptionDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state, &session, &headers)
        .require(&[])
        .await?;

    let adoption_service = AdoptionService::new(&state.db);

    let adoption = adoption_service
        .submit(SubmitAdoptionParam {
            pet_id: payload.pet_id,
            user_id: user.id,
            message: payload.message,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(adoption.into_dto())))
}

/// Get the caller's adoption requests.
///
/// Returns the caller's requests newest first, each with its pet embedded.
///
/// # Authentication
/// Requires a session cookie or bearer token (no admin permission required)
///
/// # Returns
/// - `200 OK` - The caller's requests
/// - `401 Unauthorized` - Not authenticated
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/adoptions/mine",
    tag = ADOPTION_TAG,
    responses(
        (status = 200, description = "The caller's requests", body = Vec<AdoptionWithPetDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_my_adoptions(
    State(state): State<AppState>,
    session: Session,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state, &session, &headers)
        .require(&[])
        .await?;

    let adoption_service = AdoptionService::new(&state.db);
    let adoptions = adoption_service.get_mine(user.id).await?;

    let adoptions_dto: Vec<_> = adoptions.into_iter().map(|a| a.into_dto()).collect();

    Ok((StatusCode::OK, Json(adoptions_dto)))
}

/// Cancel one of the caller's pending adoption requests.
///
/// # Authentication
/// Requires a session cookie or bearer token (no admin permission required)
///
/// # Returns
/// - `200 OK` - Request cancelled
/// - `400 Bad Request` - The request has already been decided
/// - `401 Unauthorized` - Not authenticated
/// - `403 Forbidden` - The request belongs to someone else
/// - `404 Not Found` - No request with that ID exists
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/adoptions/{adoption_id}",
    tag = ADOPTION_TAG,
    params(
        ("adoption_id" = i32, Path, description = "Adoption request ID")
    ),
    responses(
        (status = 200, description = "Request cancelled", body = MessageDto),
        (status = 400, description = "Request already decided", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Request belongs to someone else", body = ErrorDto),
        (status = 404, description = "Adoption request not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn cancel_adoption(
    State(state): State<AppState>,
    session: Session,
    headers: HeaderMap,
    Path(adoption_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state, &session, &headers)
        .require(&[])
        .await?;

    let adoption_service = AdoptionService::new(&state.db);
    adoption_service.cancel(adoption_id, user.id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Adoption request cancelled".to_string(),
        }),
    ))
}

/// Get adoption requests for review.
///
/// Returns requests newest first with pet and requester embedded, optionally
/// filtered by status. Only accessible by admins.
///
/// # Access Control
/// - `Admin` - Only admins can review requests
///
/// # Returns
/// - `200 OK` - Paginated list of requests
/// - `401 Unauthorized` - Not authenticated
/// - `403 Forbidden` - Caller is not an admin
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/admin/adoptions",
    tag = ADOPTION_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10, max: 100)"),
        ("status" = Option<AdoptionStatus>, Query, description = "Filter by request status")
    ),
    responses(
        (status = 200, description = "Paginated list of requests", body = PaginatedAdoptionsDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_adoptions(
    State(state): State<AppState>,
    session: Session,
    headers: HeaderMap,
    Query(params): Query<ListAdoptionsQuery>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state, &session, &headers)
        .require(&[Permission::Admin])
        .await?;

    let adoption_service = AdoptionService::new(&state.db);

    let adoptions = adoption_service
        .get_all(ListAdoptionsParam {
            page: params.page,
            per_page: clamp_entries(params.entries),
            status: params.status,
        })
        .await?;

    Ok((StatusCode::OK, Json(adoptions.into_dto())))
}

/// Approve a pending adoption request.
///
/// Marks the request approved and the pet adopted, rejects all other pending
/// requests for the pet, and notifies every affected user.
///
/// # Access Control
/// - `Admin` - Only admins can approve requests
///
/// # Returns
/// - `200 OK` - The approved request
/// - `400 Bad Request` - The request has already been decided
/// - `401 Unauthorized` - Not authenticated
/// - `403 Forbidden` - Caller is not an admin
/// - `404 Not Found` - No request with that ID exists
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/admin/adoptions/{adoption_id}/approve",
    tag = ADOPTION_TAG,
    params(
        ("adoption_id" = i32, Path, description = "Adoption request ID")
    ),
    responses(
        (status = 200, description = "The approved request", body = AdoptionDto),
        (status = 400, description = "Request already decided", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "Adoption request not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn approve_adoption(
    State(state): State<AppState>,
    session: Session,
    headers: HeaderMap,
    Path(adoption_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state, &session, &headers)
        .require(&[Permission::Admin])
        .await?;

    let adoption_service = AdoptionService::new(&state.db);
    let adoption = adoption_service.approve(adoption_id).await?;

    Ok((StatusCode::OK, Json(adoption.into_dto())))
}

/// Reject a pending adoption request.
///
/// Marks the request rejected and notifies the requester. The pet stays
/// available.
///
/// # Access Control
/// - `Admin` - Only admins can reject requests
///
/// # Returns
/// - `200 OK` - The rejected request
/// - `400 Bad Request` - The request has already been decided
/// - `401 Unauthorized` - Not authenticated
/// - `403 Forbidden` - Caller is not an admin
/// - `404 Not Found` - No request with that ID exists
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/admin/adoptions/{adoption_id}/reject",
    tag = ADOPTION_TAG,
    params(
        ("adoption_id" = i32, Path, description = "Adoption request ID")
    ),
    responses(
        (status = 200, description = "The rejected request", body = AdoptionDto),
        (status = 400, description = "Request already decided", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "Adoption request not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn reject_adoption(
    State(state): State<AppState>,
    session: Session,
    headers: HeaderMap,
    Path(adoption_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state, &session, &headers)
        .require(&[Permission::Admin])
        .await?;

    let adoption_service = AdoptionService::new(&state.db);
    let adoption = adoption_service.reject(adoption_id).await?;

    Ok((StatusCode::OK, Json(adoption.into_dto())))
}
