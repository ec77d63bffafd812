//! Adoption service for business logic.
//!
//! This module provides the `AdoptionService` for the adoption request
//! lifecycle: submission with availability and duplicate checks, requester
//! cancellation, admin review listings, and the approve/reject decisions.
//! Approval cascades to the pet's other pending requests and fans out one
//! notification per affected user.

use sea_orm::DatabaseConnection;

use crate::{
    model::{adoption::AdoptionStatus, pet::PetStatus},
    server::{
        data::{
            adoption::AdoptionRepository, notification::NotificationRepository, pet::PetRepository,
        },
        error::{auth::AuthError, AppError},
        model::{
            adoption::{
                Adoption, AdoptionWithPet, ListAdoptionsParam, PaginatedAdoptions,
                SubmitAdoptionParam,
            },
            notification::CreateNotificationParam,
        },
    },
};

/// Service providing business logic for adoption requests.
pub struct AdoptionService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> AdoptionService<'a> {
    /// Creates a new AdoptionService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `AdoptionService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Submits an adoption request for a pet.
    ///
    /// The pet must exist and still be available, and the user must not
    /// already have a pending request for it.
    ///
    /// # Arguments
    /// - `param` - Request parameters including pet ID, user ID, and optional message
    ///
    /// # Returns
    /// - `Ok(Adoption)` - The created request
    /// - `Err(AppError::NotFound)` - No pet with that ID exists
    /// - `Err(AppError::BadRequest)` - The pet has already been adopted
    /// - `Err(AppError::Conflict)` - The user already has a pending request for this pet
    /// - `Err(AppError::DbErr)` - Database error during query or insert
    pub async fn submit(&self, param: SubmitAdoptionParam) -> Result<Adoption, AppError> {
        let pet_repo = PetRepository::new(self.db);
        let adoption_repo = AdoptionRepository::new(self.db);

        let Some(pet) = pet_repo.get_by_id(param.pet_id).await? else {
            return Err(AppError::NotFound("Pet not found".to_string()));
        };

        if pet.status != PetStatus::Available {
            return Err(AppError::BadRequest(
                "Pet is not available for adoption".to_string(),
            ));
        }

        if adoption_repo
            .has_pending_for_pet_and_user(pet.id, param.user_id)
            .await?
        {
            return Err(AppError::Conflict(
                "You already have a pending request for this pet".to_string(),
            ));
        }

        let adoption = adoption_repo.create(param).await?;

        tracing::info!(
            "User {} submitted adoption request {} for pet {}",
            adoption.user_id,
            adoption.id,
            adoption.pet_id
        );

        Ok(adoption)
    }

    /// Retrieves all adoption requests submitted by a user.
    ///
    /// # Arguments
    /// - `user_id` - Primary key of the requesting user
    ///
    /// # Returns
    /// - `Ok(Vec<AdoptionWithPet>)` - The user's requests with pet data, newest first
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_mine(&self, user_id: i32) -> Result<Vec<AdoptionWithPet>, AppError> {
        let adoption_repo = AdoptionRepository::new(self.db);
        let adoptions = adoption_repo.get_by_user(user_id).await?;
        Ok(adoptions)
    }

    /// Cancels a pending adoption request.
    ///
    /// Only the requester may cancel, and only while the request is pending.
    ///
    /// # Arguments
    /// - `adoption_id` - Primary key of the adoption request
    /// - `user_id` - Primary key of the user making the call
    ///
    /// # Returns
    /// - `Ok(())` - Request cancelled and removed
    /// - `Err(AppError::NotFound)` - No request with that ID exists
    /// - `Err(AppError::AuthErr(AuthError::AccessDenied))` - The request belongs to someone else
    /// - `Err(AppError::BadRequest)` - The request has already been decided
    /// - `Err(AppError::DbErr)` - Database error during query or delete
    pub async fn cancel(&self, adoption_id: i32, user_id: i32) -> Result<(), AppError> {
        let adoption_repo = AdoptionRepository::new(self.db);

        let Some(adoption) = adoption_repo.get_by_id(adoption_id).await? else {
            return Err(AppError::NotFound(
                "Adoption request not found".to_string(),
            ));
        };

        if adoption.user_id != user_id {
            return Err(AuthError::AccessDenied(
                user_id,
                format!(
                    "user attempted to cancel adoption request {} belonging to user {}",
                    adoption.id, adoption.user_id
                ),
            )
            .into());
        }

        if adoption.status != AdoptionStatus::Pending {
            return Err(AppError::BadRequest(
                "Only pending requests can be cancelled".to_string(),
            ));
        }

        adoption_repo.delete(adoption.id).await?;

        tracing::info!(
            "User {} cancelled adoption request {}",
            user_id,
            adoption.id
        );

        Ok(())
    }

    /// Retrieves adoption requests for admin review with pagination.
    ///
    /// # Arguments
    /// - `param` - Listing parameters including page, per_page, and optional status filter
    ///
    /// # Returns
    /// - `Ok(PaginatedAdoptions)` - Detailed requests with pagination metadata
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_all(&self, param: ListAdoptionsParam) -> Result<PaginatedAdoptions, AppError> {
        let adoption_repo = AdoptionRepository::new(self.db);

        let page = param.page;
        let per_page = param.per_page;
        let (adoptions, total) = adoption_repo.get_paginated_detailed(param).await?;

        let total_pages = total.div_ceil(per_page);

        Ok(PaginatedAdoptions {
            adoptions,
            total,
            page,
            per_page,
            total_pages,
        })
    }

    /// Approves a pending adoption request.
    ///
    /// Marks the request approved and the pet adopted, rejects every other
    /// pending request for the same pet, and creates one notification per
    /// affected user: the approved requester and each requester whose pending
    /// request was rejected by the cascade. A pet therefore never has more
    /// than one approved adoption.
    ///
    /// # Arguments
    /// - `adoption_id` - Primary key of the adoption request
    ///
    /// # Returns
    /// - `Ok(Adoption)` - The approved request
    /// - `Err(AppError::NotFound)` - No request with that ID exists, or its pet is gone
    /// - `Err(AppError::BadRequest)` - The request has already been decided
    /// - `Err(AppError::DbErr)` - Database error during the cascade
    pub async fn approve(&self, adoption_id: i32) -> Result<Adoption, AppError> {
        let adoption_repo = AdoptionRepository::new(self.db);
        let pet_repo = PetRepository::new(self.db);
        let notification_repo = NotificationRepository::new(self.db);

        let Some(adoption) = adoption_repo.get_by_id(adoption_id).await? else {
            return Err(AppError::NotFound(
                "Adoption request not found".to_string(),
            ));
        };

        if adoption.status != AdoptionStatus::Pending {
            return Err(AppError::BadRequest(
                "Adoption request has already been decided".to_string(),
            ));
        }

        let Some(pet) = pet_repo.get_by_id(adoption.pet_id).await? else {
            return Err(AppError::NotFound("Pet not found".to_string()));
        };

        let Some(approved) = adoption_repo
            .set_status(adoption.id, AdoptionStatus::Approved)
            .await?
        else {
            return Err(AppError::NotFound(
                "Adoption request not found".to_string(),
            ));
        };

        pet_repo.set_status(pet.id, PetStatus::Adopted).await?;

        let rejected = adoption_repo
            .reject_other_pending_for_pet(pet.id, approved.id)
            .await?;

        let mut notifications = vec![CreateNotificationParam {
            user_id: approved.user_id,
            adoption_id: Some(approved.id),
            message: format!("Your adoption request for {} was approved!", pet.name),
        }];

        for other in &rejected {
            notifications.push(CreateNotificationParam {
                user_id: other.user_id,
                adoption_id: Some(other.id),
                message: format!(
                    "Your adoption request for {} was rejected: {} was adopted by another applicant.",
                    pet.name, pet.name
                ),
            });
        }

        notification_repo.create_many(notifications).await?;

        tracing::info!(
            "Approved adoption request {} for pet {}, rejected {} competing requests",
            approved.id,
            pet.id,
            rejected.len()
        );

        Ok(approved)
    }

    /// Rejects a pending adoption request.
    ///
    /// Marks the request rejected and notifies the requester. The pet stays
    /// available.
    ///
    /// # Arguments
    /// - `adoption_id` - Primary key of the adoption request
    ///
    /// # Returns
    /// - `Ok(Adoption)` - The rejected request
    /// - `Err(AppError::NotFound)` - No request with that ID exists, or its pet is gone
    /// - `Err(AppError::BadRequest)` - The request has already been decided
    /// - `Err(AppError::DbErr)` - Database error during update
    pub async fn reject(&self, adoption_id: i32) -> Result<Adoption, AppError> {
        let adoption_repo = AdoptionRepository::new(self.db);
        let pet_repo = PetRepository::new(self.db);
        let notification_repo = NotificationRepository::new(self.db);

        let Some(adoption) = adoption_repo.get_by_id(adoption_id).await? else {
            return Err(AppError::NotFound(
                "Adoption request not found".to_string(),
            ));
        };

        if adoption.status != AdoptionStatus::Pending {
            return Err(AppError::BadRequest(
                "Adoption request has already been decided".to_string(),
            ));
        }

        let Some(pet) = pet_repo.get_by_id(adoption.pet_id).await? else {
            return Err(AppError::NotFound("Pet not found".to_string()));
        };

        let Some(rejected) = adoption_repo
            .set_status(adoption.id, AdoptionStatus::Rejected)
            .await?
        else {
            return Err(AppError::NotFound(
                "Adoption request not found".to_string(),
            ));
        };

        notification_repo
            .create(CreateNotificationParam {
                user_id: rejected.user_id,
                adoption_id: Some(rejected.id),
                message: format!("Your adoption request for {} was rejected.", pet.name),
            })
            .await?;

        tracing::info!("Rejected adoption request {} for pet {}", rejected.id, pet.id);

        Ok(rejected)
    }
}
