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
        api::{ErrorDto, MessageDto},
        notification::{NotificationDto, NotificationListDto},
    },
    server::{
        controller::param::{clamp_entries, PaginationParams},
        error::AppError,
        middleware::auth::AuthGuard,
        service::notification::NotificationService,
        state::AppState,
    },
};

/// Tag for grouping notification endpoints in OpenAPI documentation
pub static NOTIFICATION_TAG: &str = "notification";

/// Get the caller's notifications.
///
/// Returns the requested page newest first along with the caller's unread
/// count.
///
/// # Authentication
/// Requires a session cookie or bearer token (no admin permission required)
///
/// # Returns
/// - `200 OK` - Notifications with unread count and pagination metadata
/// - `401 Unauthorized` - Not authenticated
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/notifications",
    tag = NOTIFICATION_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10, max: 100)")
    ),
    responses(
        (status = 200, description = "Notifications with unread count", body = NotificationListDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_notifications(
    State(state): State<AppState>,
    session: Session,
    headers: HeaderMap,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state, &session, &headers)
        .require(&[])
        .await?;

    let notification_service = NotificationService::new(&state.db);

    let notifications = notification_service
        .get_for_user(user.id, params.page, clamp_entries(params.entries))
        .await?;

    Ok((StatusCode::OK, Json(notifications.into_dto())))
}

/// Mark one of the caller's notifications as read.
///
/// # Authentication
/// Requires a session cookie or bearer token (no admin permission required)
///
/// # Returns
/// - `200 OK` - The updated notification
/// - `401 Unauthorized` - Not authenticated
/// - `403 Forbidden` - The notification belongs to someone else
/// - `404 Not Found` - No notification with that ID exists
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/notifications/{notification_id}/read",
    tag = NOTIFICATION_TAG,
    params(
        ("notification_id" = i32, Path, description = "Notification ID")
    ),
    responses(
        (status = 200, description = "The updated notification", body = NotificationDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Notification belongs to someone else", body = ErrorDto),
        (status = 404, description = "Notification not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn mark_notification_read(
    State(state): State<AppState>,
    session: Session,
    headers: HeaderMap,
    Path(notification_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state, &session, &headers)
        .require(&[])
        .await?;

    let notification_service = NotificationService::new(&state.db);
    let notification = notification_service
        .mark_read(notification_id, user.id)
        .await?;

    Ok((StatusCode::OK, Json(notification.into_dto())))
}

/// Mark all of the caller's notifications as read.
///
/// # Authentication
/// Requires a session cookie or bearer token (no admin permission required)
///
/// # Returns
/// - `200 OK` - Number of notifications marked read
/// - `401 Unauthorized` - Not authenticated
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/notifications/read-all",
    tag = NOTIFICATION_TAG,
    responses(
        (status = 200, description = "Notifications marked read", body = MessageDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn mark_all_notifications_read(
    State(state): State<AppState>,
    session: Session,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state, &session, &headers)
        .require(&[])
        .await?;

    let notification_service = NotificationService::new(&state.db);
    let updated = notification_service.mark_all_read(user.id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: format!("Marked {} notifications as read", updated),
        }),
    ))
}
