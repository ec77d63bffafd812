use axum::{
    extract::{Path, Query, State},
    http::HeaderMap,
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        user::{PaginatedUsersDto, SetAdminDto, UserDto},
    },
    server::{
        controller::param::{clamp_entries, PaginationParams},
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::user::{GetAllUsersParam, SetAdminParam},
        service::user::UserService,
        state::AppState,
    },
};

/// Tag for grouping user management endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// Get paginated users.
///
/// Returns all registered users ordered alphabetically by name. Only
/// accessible by admins.
///
/// # Access Control
/// - `Admin` - Only admins can list users
///
/// # Returns
/// - `200 OK` - Paginated list of users
/// - `401 Unauthorized` - Not authenticated
/// - `403 Forbidden` - Caller is not an admin
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/admin/users",
    tag = USER_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10, max: 100)")
    ),
    responses(
        (status = 200, description = "Paginated list of users", body = PaginatedUsersDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_users(
    State(state): State<AppState>,
    session: Session,
    headers: HeaderMap,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state, &session, &headers)
        .require(&[Permission::Admin])
        .await?;

    let user_service = UserService::new(&state.db);

    let users = user_service
        .get_all_users(GetAllUsersParam {
            page: params.page,
            per_page: clamp_entries(params.entries),
        })
        .await?;

    Ok((StatusCode::OK, Json(users.into_dto())))
}

/// Set admin status for a user.
///
/// Grants or revokes admin privileges for the specified user. Only accessible
/// by admins.
///
/// # Access Control
/// - `Admin` - Only admins can change admin status
///
/// # Returns
/// - `200 OK` - The updated user
/// - `401 Unauthorized` - Not authenticated
/// - `403 Forbidden` - Caller is not an admin
/// - `404 Not Found` - No user with that ID exists
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/admin/users/{user_id}/admin",
    tag = USER_TAG,
    params(
        ("user_id" = i32, Path, description = "User ID")
    ),
    request_body = SetAdminDto,
    responses(
        (status = 200, description = "The updated user", body = UserDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn set_user_admin(
    State(state): State<AppState>,
    session: Session,
    headers: HeaderMap,
    Path(user_id): Path<i32>,
    Json(payload): Json<SetAdminDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state, &session, &headers)
        .require(&[Permission::Admin])
        .await?;

    let user_service = UserService::new(&state.db);

    let user = user_service
        .set_admin(SetAdminParam {
            user_id,
            is_admin: payload.admin,
        })
        .await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}
