use axum::{
    extract::{Multipart, Path, Query, State},
    http::HeaderMap,
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        pet::{CreatePetDto, PaginatedPetsDto, PetDto, PetSpecies, PetStatus, UpdatePetDto},
    },
    server::{
        controller::param::{clamp_entries, default_entries},
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::pet::{CreatePetParam, ListPetsParam, UpdatePetParam},
        service::pet::PetService,
        state::AppState,
    },
};

/// Tag for grouping pet endpoints in OpenAPI documentation
pub static PET_TAG: &str = "pet";

/// Multipart field name carrying the uploaded photo.
const PHOTO_FIELD: &str = "photo";

/// Query parameters for browsing pets.
#[derive(Deserialize)]
pub struct ListPetsQuery {
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_entries")]
    pub entries: u64,
    pub species: Option<PetSpecies>,
    pub status: Option<PetStatus>,
}

/// Browse pets with optional filters.
///
/// Public endpoint returning pet listings newest first, optionally filtered by
/// species and adoption status.
///
/// # Returns
/// - `200 OK` - Paginated list of pets
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/pets",
    tag = PET_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10, max: 100)"),
        ("species" = Option<PetSpecies>, Query, description = "Filter by species"),
        ("status" = Option<PetStatus>, Query, description = "Filter by adoption status")
    ),
    responses(
        (status = 200, description = "Paginated list of pets", body = PaginatedPetsDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_pets(
    State(state): State<AppState>,
    Query(params): Query<ListPetsQuery>,
) -> Result<impl IntoResponse, AppError> {
    let pet_service = PetService::new(&state.db);

    let pets = pet_service
        .list_pets(ListPetsParam {
            page: params.page,
            per_page: clamp_entries(params.entries),
            species: params.species,
            status: params.status,
        })
        .await?;

    Ok((StatusCode::OK, Json(pets.into_dto())))
}

/// Get a single pet listing.
///
/// # Returns
/// - `200 OK` - The pet
/// - `404 Not Found` - No pet with that ID exists
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/pets/{pet_id}",
    tag = PET_TAG,
    params(
        ("pet_id" = i32, Path, description = "Pet ID")
    ),
    responses(
        (status = 200, description = "The pet", body = PetDto),
        (status = 404, description = "Pet not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_pet(
    State(state): State<AppState>,
    Path(pet_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let pet_service = PetService::new(&state.db);
    let pet = pet_service.get_pet(pet_id).await?;

    Ok((StatusCode::OK, Json(pet.into_dto())))
}

/// Create a new pet listing.
///
/// # Access Control
/// - `Admin` - Only admins can create listings
///
/// # Returns
/// - `201 Created` - The created pet
/// - `400 Bad Request` - Invalid listing data
/// - `401 Unauthorized` - Not authenticated
/// - `403 Forbidden` - Caller is not an admin
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/pets",
    tag = PET_TAG,
    request_body = CreatePetDto,
    responses(
        (status = 201, description = "The created pet", body = PetDto),
        (status = 400, description = "Invalid listing data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_pet(
    State(state): State<AppState>,
    session: Session,
    headers: HeaderMap,
    Json(payload): Json<CreatePetDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state, &session, &headers)
        .require(&[Permission::Admin])
        .await?;

    let pet_service = PetService::new(&state.db);

    let pet = pet_service
        .create_pet(CreatePetParam {
            name: payload.name,
            species: payload.species,
            breed: payload.breed,
            age_months: payload.age_months,
            description: payload.description,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(pet.into_dto())))
}

/// Update a pet listing.
///
/// # Access Control
/// - `Admin` - Only admins can update listings
///
/// # Returns
/// - `200 OK` - The updated pet
/// - `400 Bad Request` - Invalid listing data
/// - `401 Unauthorized` - Not authenticated
/// - `403 Forbidden` - Caller is not an admin
/// - `404 Not Found` - No pet with that ID exists
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/pets/{pet_id}",
    tag = PET_TAG,
    params(
        ("pet_id" = i32, Path, description = "Pet ID")
    ),
    request_body = UpdatePetDto,
    responses(
        (status = 200, description = "The updated pet", body = PetDto),
        (status = 400, description = "Invalid listing data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "Pet not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_pet(
    State(state): State<AppState>,
    session: Session,
    headers: HeaderMap,
    Path(pet_id): Path<i32>,
    Json(payload): Json<UpdatePetDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state, &session, &headers)
        .require(&[Permission::Admin])
        .await?;

    let pet_service = PetService::new(&state.db);

    let pet = pet_service
        .update_pet(UpdatePetParam {
            id: pet_id,
            name: payload.name,
            species: payload.species,
            breed: payload.breed,
            age_months: payload.age_months,
            description: payload.description,
            status: payload.status,
        })
        .await?;

    Ok((StatusCode::OK, Json(pet.into_dto())))
}

/// Upload a photo for a pet.
///
/// Accepts a multipart form with a `photo` field containing a JPEG, PNG, or
/// WebP image. Replaces the previous photo if one exists.
///
/// # Access Control
/// - `Admin` - Only admins can upload photos
///
/// # Returns
/// - `200 OK` - The pet with its new photo URL
/// - `400 Bad Request` - Missing photo field or unsupported image type
/// - `401 Unauthorized` - Not authenticated
/// - `403 Forbidden` - Caller is not an admin
/// - `404 Not Found` - No pet with that ID exists
/// - `500 Internal Server Error` - Database or filesystem error
#[utoipa::path(
    post,
    path = "/api/pets/{pet_id}/photo",
    tag = PET_TAG,
    params(
        ("pet_id" = i32, Path, description = "Pet ID")
    ),
    responses(
        (status = 200, description = "The pet with its new photo URL", body = PetDto),
        (status = 400, description = "Missing photo field or unsupported image type", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "Pet not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn upload_pet_photo(
    State(state): State<AppState>,
    session: Session,
    headers: HeaderMap,
    Path(pet_id): Path<i32>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state, &session, &headers)
        .require(&[Permission::Admin])
        .await?;

    let mut photo: Option<(String, Vec<u8>)> = None;

    while let Some(field) = multipart.next_field().await? {
        if field.name() == Some(PHOTO_FIELD) {
            let content_type = field.content_type().unwrap_or_default().to_string();
            let data = field.bytes().await?;
            photo = Some((content_type, data.to_vec()));
        }
    }

    let Some((content_type, data)) = photo else {
        return Err(AppError::BadRequest(format!(
            "Missing multipart field '{}'",
            PHOTO_FIELD
        )));
    };

    let pet_service = PetService::new(&state.db);

    let pet = pet_service
        .attach_photo(pet_id, &state.upload_dir, &content_type, &data)
        .await?;

    Ok((StatusCode::OK, Json(pet.into_dto())))
}

/// Delete a pet listing.
///
/// Removes the listing, its stored photo, and any adoption requests that
/// reference it.
///
/// # Access Control
/// - `Admin` - Only admins can delete listings
///
/// # Returns
/// - `200 OK` - Listing deleted
/// - `401 Unauthorized` - Not authenticated
/// - `403 Forbidden` - Caller is not an admin
/// - `404 Not Found` - No pet with that ID exists
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/pets/{pet_id}",
    tag = PET_TAG,
    params(
        ("pet_id" = i32, Path, description = "Pet ID")
    ),
    responses(
        (status = 200, description = "Listing deleted", body = MessageDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "Pet not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_pet(
    State(state): State<AppState>,
    session: Session,
    headers: HeaderMap,
    Path(pet_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state, &session, &headers)
        .require(&[Permission::Admin])
        .await?;

    let pet_service = PetService::new(&state.db);
    pet_service.delete_pet(pet_id, &state.upload_dir).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Pet deleted".to_string(),
        }),
    ))
}
