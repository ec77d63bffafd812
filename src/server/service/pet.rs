//! Pet service for business logic.
//!
//! This module provides the `PetService` for managing pet listings: creation,
//! browsing with filters, updates, photo storage on the local filesystem, and
//! deletion including photo cleanup.

use std::path::Path;

use rand::{distr::Alphanumeric, Rng};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::pet::PetRepository,
    error::AppError,
    model::pet::{CreatePetParam, ListPetsParam, PaginatedPets, Pet, UpdatePetParam},
};

/// Length of the random filename suffix for uploaded photos.
const PHOTO_SUFFIX_LENGTH: usize = 8;

/// Service providing business logic for pet listings.
pub struct PetService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> PetService<'a> {
    /// Creates a new PetService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `PetService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new pet listing.
    ///
    /// Validates the submitted fields and stores the listing. New listings
    /// start as available with no photo.
    ///
    /// # Arguments
    /// - `param` - Pet creation parameters
    ///
    /// # Returns
    /// - `Ok(Pet)` - The created listing
    /// - `Err(AppError::BadRequest)` - Empty name or negative age
    /// - `Err(AppError::DbErr)` - Database error during insert
    pub async fn create_pet(&self, param: CreatePetParam) -> Result<Pet, AppError> {
        validate_listing(&param.name, param.age_months)?;

        let pet_repo = PetRepository::new(self.db);
        let pet = pet_repo.create(param).await?;

        tracing::info!("Created pet listing {} ({})", pet.id, pet.name);

        Ok(pet)
    }

    /// Retrieves a single pet listing.
    ///
    /// # Arguments
    /// - `pet_id` - Primary key of the pet
    ///
    /// # Returns
    /// - `Ok(Pet)` - The listing
    /// - `Err(AppError::NotFound)` - No pet with that ID exists
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_pet(&self, pet_id: i32) -> Result<Pet, AppError> {
        let pet_repo = PetRepository::new(self.db);

        let Some(pet) = pet_repo.get_by_id(pet_id).await? else {
            return Err(AppError::NotFound("Pet not found".to_string()));
        };

        Ok(pet)
    }

    /// Retrieves pet listings with optional filters and pagination.
    ///
    /// # Arguments
    /// - `param` - Listing parameters including page, per_page, and optional filters
    ///
    /// # Returns
    /// - `Ok(PaginatedPets)` - Pets for the requested page with pagination metadata
    /// - `Err(AppError::DbErr)` - Database error during pagination query
    pub async fn list_pets(&self, param: ListPetsParam) -> Result<PaginatedPets, AppError> {
        let pet_repo = PetRepository::new(self.db);

        let page = param.page;
        let per_page = param.per_page;
        let (pets, total) = pet_repo.get_paginated(param).await?;

        let total_pages = total.div_ceil(per_page);

        Ok(PaginatedPets {
            pets,
            total,
            page,
            per_page,
            total_pages,
        })
    }

    /// Updates a pet listing.
    ///
    /// # Arguments
    /// - `param` - Pet update parameters including the pet ID
    ///
    /// # Returns
    /// - `Ok(Pet)` - The updated listing
    /// - `Err(AppError::BadRequest)` - Empty name or negative age
    /// - `Err(AppError::NotFound)` - No pet with that ID exists
    /// - `Err(AppError::DbErr)` - Database error during update
    pub async fn update_pet(&self, param: UpdatePetParam) -> Result<Pet, AppError> {
        validate_listing(&param.name, param.age_months)?;

        let pet_repo = PetRepository::new(self.db);

        let Some(pet) = pet_repo.update(param).await? else {
            return Err(AppError::NotFound("Pet not found".to_string()));
        };

        Ok(pet)
    }

    /// Stores an uploaded photo for a pet.
    ///
    /// Writes the image to the upload directory under a generated filename,
    /// removes the previous photo file if one exists, and records the new
    /// filename on the listing. Only JPEG, PNG, and WebP uploads are accepted.
    ///
    /// # Arguments
    /// - `pet_id` - Primary key of the pet
    /// - `upload_dir` - Directory where photos are stored
    /// - `content_type` - MIME type declared for the uploaded field
    /// - `data` - Raw image bytes
    ///
    /// # Returns
    /// - `Ok(Pet)` - The listing with its new photo path
    /// - `Err(AppError::BadRequest)` - Unsupported image type
    /// - `Err(AppError::NotFound)` - No pet with that ID exists
    /// - `Err(AppError::IoErr)` - Filesystem error while writing the photo
    /// - `Err(AppError::DbErr)` - Database error during update
    pub async fn attach_photo(
        &self,
        pet_id: i32,
        upload_dir: &Path,
        content_type: &str,
        data: &[u8],
    ) -> Result<Pet, AppError> {
        let extension = match content_type {
            "image/jpeg" => "jpg",
            "image/png" => "png",
            "image/webp" => "webp",
            _ => {
                return Err(AppError::BadRequest(format!(
                    "Unsupported image type: {}",
                    content_type
                )))
            }
        };

        let pet_repo = PetRepository::new(self.db);

        let Some(pet) = pet_repo.get_by_id(pet_id).await? else {
            return Err(AppError::NotFound("Pet not found".to_string()));
        };

        let suffix: String = rand::rng()
            .sample_iter(Alphanumeric)
            .take(PHOTO_SUFFIX_LENGTH)
            .map(char::from)
            .collect();
        let filename = format!("pet-{}-{}.{}", pet.id, suffix, extension);

        tokio::fs::write(upload_dir.join(&filename), data).await?;

        if let Some(old_path) = &pet.photo_path {
            remove_photo_file(upload_dir, old_path).await;
        }

        let Some(updated) = pet_repo.set_photo_path(pet.id, filename).await? else {
            return Err(AppError::NotFound("Pet not found".to_string()));
        };

        tracing::info!("Stored new photo for pet {}", updated.id);

        Ok(updated)
    }

    /// Deletes a pet listing.
    ///
    /// Removes the stored photo file if one exists, then deletes the listing.
    /// Adoption requests referencing the pet are removed by the foreign key
    /// cascade.
    ///
    /// # Arguments
    /// - `pet_id` - Primary key of the pet
    /// - `upload_dir` - Directory where photos are stored
    ///
    /// # Returns
    /// - `Ok(())` - Listing deleted
    /// - `Err(AppError::NotFound)` - No pet with that ID exists
    /// - `Err(AppError::DbErr)` - Database error during delete
    pub async fn delete_pet(&self, pet_id: i32, upload_dir: &Path) -> Result<(), AppError> {
        let pet_repo = PetRepository::new(self.db);

        let Some(pet) = pet_repo.get_by_id(pet_id).await? else {
            return Err(AppError::NotFound("Pet not found".to_string()));
        };

        if let Some(photo_path) = &pet.photo_path {
            remove_photo_file(upload_dir, photo_path).await;
        }

        pet_repo.delete(pet.id).await?;

        tracing::info!("Deleted pet listing {} ({})", pet.id, pet.name);

        Ok(())
    }
}

/// Validates the user-editable fields of a listing.
fn validate_listing(name: &str, age_months: i32) -> Result<(), AppError> {
    if name.trim().is_empty() {
        return Err(AppError::BadRequest("Name must not be empty".to_string()));
    }

    if age_months < 0 {
        return Err(AppError::BadRequest(
            "Age must not be negative".to_string(),
        ));
    }

    Ok(())
}

/// Removes a stored photo file, logging instead of failing when the file is
/// already gone. The database row stays authoritative either way.
async fn remove_photo_file(upload_dir: &Path, photo_path: &str) {
    let path = upload_dir.join(photo_path);
    if let Err(err) = tokio::fs::remove_file(&path).await {
        tracing::warn!("Failed to remove photo file {}: {}", path.display(), err);
    }
}
