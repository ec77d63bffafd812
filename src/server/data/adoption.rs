//! Adoption data repository for database operations.
//!
//! This module provides the `AdoptionRepository` for managing adoption requests in the
//! database. It handles request creation, lookups with related pet and user records,
//! status transitions, and the bulk rejection used when a competing request is approved.

use std::collections::HashMap;

use crate::{
    model::adoption::AdoptionStatus,
    server::model::{
        adoption::{
            Adoption, AdoptionDetail, AdoptionWithPet, ListAdoptionsParam, SubmitAdoptionParam,
        },
        pet::Pet,
        user::User,
    },
};
use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

/// Repository providing database operations for adoption requests.
pub struct AdoptionRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AdoptionRepository<'a> {
    /// Creates a new AdoptionRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `AdoptionRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an adoption request from parameter model.
    ///
    /// New requests always start in the pending state with no decision timestamp.
    ///
    /// # Arguments
    /// - `param` - Request parameters including pet ID, user ID, and optional message
    ///
    /// # Returns
    /// - `Ok(Adoption)` - The created adoption request
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, param: SubmitAdoptionParam) -> Result<Adoption, DbErr> {
        let entity = entity::adoption::ActiveModel {
            pet_id: ActiveValue::Set(param.pet_id),
            user_id: ActiveValue::Set(param.user_id),
            message: ActiveValue::Set(param.message),
            status: ActiveValue::Set(entity::adoption::AdoptionStatus::Pending),
            created_at: ActiveValue::Set(Utc::now()),
            decided_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Adoption::from_entity(entity))
    }

    /// Gets an adoption request by its ID.
    ///
    /// # Arguments
    /// - `adoption_id` - Primary key of the adoption request
    ///
    /// # Returns
    /// - `Ok(Some(Adoption))` - Request found
    /// - `Ok(None)` - No request found with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_id(&self, adoption_id: i32) -> Result<Option<Adoption>, DbErr> {
        let entity = entity::prelude::Adoption::find_by_id(adoption_id)
            .one(self.db)
            .await?;

        Ok(entity.map(Adoption::from_entity))
    }

    /// Gets all adoption requests submitted by a user, with their pets loaded.
    ///
    /// Results are ordered newest first. Used for the "my requests" endpoint.
    ///
    /// # Arguments
    /// - `user_id` - Primary key of the requesting user
    ///
    /// # Returns
    /// - `Ok(Vec<AdoptionWithPet>)` - The user's requests with pet data (empty if none)
    /// - `Err(DbErr)` - Database error during query, or a request whose pet row is missing
    pub async fn get_by_user(&self, user_id: i32) -> Result<Vec<AdoptionWithPet>, DbErr> {
        let rows = entity::prelude::Adoption::find()
            .filter(entity::adoption::Column::UserId.eq(user_id))
            .find_also_related(entity::prelude::Pet)
            .order_by_desc(entity::adoption::Column::CreatedAt)
            .all(self.db)
            .await?;

        rows.into_iter()
            .map(|(adoption, pet)| {
                let pet = pet.ok_or_else(|| {
                    DbErr::RecordNotFound(format!("pet for adoption {} not found", adoption.id))
                })?;

                Ok(AdoptionWithPet {
                    adoption: Adoption::from_entity(adoption),
                    pet: Pet::from_entity(pet),
                })
            })
            .collect()
    }

    /// Gets adoption requests for admin review with pagination.
    ///
    /// Returns requests matching the optional status filter, newest first, with
    /// both the pet and the requesting user loaded for each row. Users are
    /// fetched in one batch query after the page is selected.
    ///
    /// # Arguments
    /// - `param` - Listing parameters including page, per_page, and optional status filter
    ///
    /// # Returns
    /// - `Ok((adoptions, total))` - Detailed requests for the page and total matching count
    /// - `Err(DbErr)` - Database error during query, or a row whose pet or user is missing
    pub async fn get_paginated_detailed(
        &self,
        param: ListAdoptionsParam,
    ) -> Result<(Vec<AdoptionDetail>, u64), DbErr> {
        let mut query = entity::prelude::Adoption::find();

        if let Some(status) = param.status {
            let status: entity::adoption::AdoptionStatus = status.into();
            query = query.filter(entity::adoption::Column::Status.eq(status));
        }

        let paginator = query
            .find_also_related(entity::prelude::Pet)
            .order_by_desc(entity::adoption::Column::CreatedAt)
            .paginate(self.db, param.per_page);

        let total = paginator.num_items().await?;
        let rows = paginator.fetch_page(param.page).await?;

        let user_ids: Vec<i32> = rows.iter().map(|(adoption, _)| adoption.user_id).collect();
        let users: HashMap<i32, User> = entity::prelude::User::find()
            .filter(entity::user::Column::Id.is_in(user_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|entity| (entity.id, User::from_entity(entity)))
            .collect();

        let adoptions = rows
            .into_iter()
            .map(|(adoption, pet)| {
                let pet = pet.ok_or_else(|| {
                    DbErr::RecordNotFound(format!("pet for adoption {} not found", adoption.id))
                })?;
                let user = users.get(&adoption.user_id).cloned().ok_or_else(|| {
                    DbErr::RecordNotFound(format!("user for adoption {} not found", adoption.id))
                })?;

                Ok(AdoptionDetail {
                    adoption: Adoption::from_entity(adoption),
                    pet: Pet::from_entity(pet),
                    user,
                })
            })
            .collect::<Result<Vec<_>, DbErr>>()?;

        Ok((adoptions, total))
    }

    /// Checks if a user already has a pending request for a pet.
    ///
    /// # Arguments
    /// - `pet_id` - Primary key of the pet
    /// - `user_id` - Primary key of the user
    ///
    /// # Returns
    /// - `Ok(true)` - A pending request from that user for that pet exists
    /// - `Ok(false)` - No pending request exists
    /// - `Err(DbErr)` - Database error during count query
    pub async fn has_pending_for_pet_and_user(
        &self,
        pet_id: i32,
        user_id: i32,
    ) -> Result<bool, DbErr> {
        let count = entity::prelude::Adoption::find()
            .filter(entity::adoption::Column::PetId.eq(pet_id))
            .filter(entity::adoption::Column::UserId.eq(user_id))
            .filter(entity::adoption::Column::Status.eq(entity::adoption::AdoptionStatus::Pending))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Sets the status of an adoption request.
    ///
    /// Moving out of the pending state records the decision timestamp; setting
    /// the status back to pending clears it.
    ///
    /// # Arguments
    /// - `adoption_id` - Primary key of the adoption request
    /// - `status` - New request status
    ///
    /// # Returns
    /// - `Ok(Some(Adoption))` - The updated request
    /// - `Ok(None)` - No request found with that ID
    /// - `Err(DbErr)` - Database error during update
    pub async fn set_status(
        &self,
        adoption_id: i32,
        status: AdoptionStatus,
    ) -> Result<Option<Adoption>, DbErr> {
        let Some(entity) = entity::prelude::Adoption::find_by_id(adoption_id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let decided_at = match status {
            AdoptionStatus::Pending => None,
            AdoptionStatus::Approved | AdoptionStatus::Rejected => Some(Utc::now()),
        };

        let mut active: entity::adoption::ActiveModel = entity.into();
        active.status = ActiveValue::Set(status.into());
        active.decided_at = ActiveValue::Set(decided_at);
        let updated = active.update(self.db).await?;

        Ok(Some(Adoption::from_entity(updated)))
    }

    /// Rejects all other pending requests for a pet.
    ///
    /// Used when a request is approved: every remaining pending request for the
    /// same pet is rejected in a single bulk update. Returns the affected
    /// requests so their owners can be notified.
    ///
    /// # Arguments
    /// - `pet_id` - Primary key of the pet
    /// - `except_adoption_id` - The approved request, which is left untouched
    ///
    /// # Returns
    /// - `Ok(Vec<Adoption>)` - The rejected requests (empty if there were none)
    /// - `Err(DbErr)` - Database error during query or update
    pub async fn reject_other_pending_for_pet(
        &self,
        pet_id: i32,
        except_adoption_id: i32,
    ) -> Result<Vec<Adoption>, DbErr> {
        let pending = entity::prelude::Adoption::find()
            .filter(entity::adoption::Column::PetId.eq(pet_id))
            .filter(entity::adoption::Column::Status.eq(entity::adoption::AdoptionStatus::Pending))
            .filter(entity::adoption::Column::Id.ne(except_adoption_id))
            .all(self.db)
            .await?;

        if pending.is_empty() {
            return Ok(Vec::new());
        }

        let now = Utc::now();
        let ids: Vec<i32> = pending.iter().map(|adoption| adoption.id).collect();
        entity::prelude::Adoption::update_many()
            .filter(entity::adoption::Column::Id.is_in(ids))
            .col_expr(
                entity::adoption::Column::Status,
                Expr::value(entity::adoption::AdoptionStatus::Rejected),
            )
            .col_expr(entity::adoption::Column::DecidedAt, Expr::value(now))
            .exec(self.db)
            .await?;

        Ok(pending
            .into_iter()
            .map(|mut entity| {
                entity.status = entity::adoption::AdoptionStatus::Rejected;
                entity.decided_at = Some(now);
                Adoption::from_entity(entity)
            })
            .collect())
    }

    /// Deletes an adoption request.
    ///
    /// Used when a requester cancels their own pending request.
    ///
    /// # Arguments
    /// - `adoption_id` - Primary key of the adoption request
    ///
    /// # Returns
    /// - `Ok(true)` - Request deleted
    /// - `Ok(false)` - No request found with that ID
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, adoption_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Adoption::delete_by_id(adoption_id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
