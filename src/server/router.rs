//! Axum route configuration and API documentation.
//!
//! Routes are registered through `OpenApiRouter` so the same `#[utoipa::path]`
//! annotations drive both the routing table and the generated OpenAPI
//! document, which is served through Swagger UI at `/swagger-ui`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

// Glob imports so the `routes!` macro can resolve the items generated by
// `#[utoipa::path]` alongside the handlers themselves.
use crate::server::{
    controller::{adoption::*, auth::*, notification::*, pet::*, user::*},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(tags(
    (name = AUTH_TAG, description = "Registration, login, and session management"),
    (name = PET_TAG, description = "Pet listings and photo uploads"),
    (name = ADOPTION_TAG, description = "Adoption requests and admin review"),
    (name = NOTIFICATION_TAG, description = "Per-user notification feed"),
    (name = USER_TAG, description = "Admin user management"),
))]
struct ApiDoc;

pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(register))
        .routes(routes!(login))
        .routes(routes!(logout))
        .routes(routes!(get_user))
        .routes(routes!(get_pets, create_pet))
        .routes(routes!(get_pet, update_pet, delete_pet))
        .routes(routes!(upload_pet_photo))
        .routes(routes!(create_adoption))
        .routes(routes!(get_my_adoptions))
        .routes(routes!(cancel_adoption))
        .routes(routes!(get_all_adoptions))
        .routes(routes!(approve_adoption))
        .routes(routes!(reject_adoption))
        .routes(routes!(get_notifications))
        .routes(routes!(mark_notification_read))
        .routes(routes!(mark_all_notifications_read))
        .routes(routes!(get_users))
        .routes(routes!(set_user_admin))
        .split_for_parts();

    router.merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api))
}
