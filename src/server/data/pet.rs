//! Pet data repository for database operations.
//!
//! This module provides the `PetRepository` for managing pet listings in the database.
//! It handles pet creation, filtered browsing with pagination, updates, status changes,
//! photo path storage, and deletion with conversion between entity models and domain
//! models at the infrastructure boundary.

use crate::{
    model::pet::PetStatus,
    server::model::pet::{CreatePetParam, ListPetsParam, Pet, UpdatePetParam},
};
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

/// Repository providing database operations for pet listings.
pub struct PetRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PetRepository<'a> {
    /// Creates a new PetRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `PetRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a pet listing from parameter model.
    ///
    /// New listings always start as available with no photo attached.
    ///
    /// # Arguments
    /// - `param` - Pet creation parameters
    ///
    /// # Returns
    /// - `Ok(Pet)` - The created pet
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, param: CreatePetParam) -> Result<Pet, DbErr> {
        let entity = entity::pet::ActiveModel {
            name: ActiveValue::Set(param.name),
            species: ActiveValue::Set(param.species.into()),
            breed: ActiveValue::Set(param.breed),
            age_months: ActiveValue::Set(param.age_months),
            description: ActiveValue::Set(param.description),
            photo_path: ActiveValue::Set(None),
            status: ActiveValue::Set(entity::pet::PetStatus::Available),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Pet::from_entity(entity))
    }

    /// Gets a pet by its ID.
    ///
    /// # Arguments
    /// - `pet_id` - Primary key of the pet
    ///
    /// # Returns
    /// - `Ok(Some(Pet))` - Pet found with full data
    /// - `Ok(None)` - No pet found with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_id(&self, pet_id: i32) -> Result<Option<Pet>, DbErr> {
        let entity = entity::prelude::Pet::find_by_id(pet_id).one(self.db).await?;

        Ok(entity.map(Pet::from_entity))
    }

    /// Gets pets with optional filters and pagination.
    ///
    /// Returns pets matching the optional species and status filters, newest
    /// listings first. Used for the public browsing endpoint.
    ///
    /// # Arguments
    /// - `param` - Listing parameters including page, per_page, and optional filters
    ///
    /// # Returns
    /// - `Ok((pets, total))` - Vector of pets for the requested page and total matching count
    /// - `Err(DbErr)` - Database error during pagination query
    pub async fn get_paginated(&self, param: ListPetsParam) -> Result<(Vec<Pet>, u64), DbErr> {
        let mut query = entity::prelude::Pet::find();

        if let Some(species) = param.species {
            let species: entity::pet::PetSpecies = species.into();
            query = query.filter(entity::pet::Column::Species.eq(species));
        }

        if let Some(status) = param.status {
            let status: entity::pet::PetStatus = status.into();
            query = query.filter(entity::pet::Column::Status.eq(status));
        }

        let paginator = query
            .order_by_desc(entity::pet::Column::CreatedAt)
            .paginate(self.db, param.per_page);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(param.page).await?;
        let pets = entities.into_iter().map(Pet::from_entity).collect();

        Ok((pets, total))
    }

    /// Updates a pet listing from parameter model.
    ///
    /// Replaces the editable fields of the listing, including its adoption
    /// status. The photo path is managed separately through `set_photo_path`.
    ///
    /// # Arguments
    /// - `param` - Pet update parameters including the pet ID
    ///
    /// # Returns
    /// - `Ok(Some(Pet))` - The updated pet
    /// - `Ok(None)` - No pet found with that ID
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(&self, param: UpdatePetParam) -> Result<Option<Pet>, DbErr> {
        let Some(entity) = entity::prelude::Pet::find_by_id(param.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::pet::ActiveModel = entity.into();
        active.name = ActiveValue::Set(param.name);
        active.species = ActiveValue::Set(param.species.into());
        active.breed = ActiveValue::Set(param.breed);
        active.age_months = ActiveValue::Set(param.age_months);
        active.description = ActiveValue::Set(param.description);
        active.status = ActiveValue::Set(param.status.into());
        let updated = active.update(self.db).await?;

        Ok(Some(Pet::from_entity(updated)))
    }

    /// Sets the adoption status of a pet.
    ///
    /// Used by the adoption approval flow to mark a pet as adopted.
    ///
    /// # Arguments
    /// - `pet_id` - Primary key of the pet
    /// - `status` - New adoption status
    ///
    /// # Returns
    /// - `Ok(Some(Pet))` - The updated pet
    /// - `Ok(None)` - No pet found with that ID
    /// - `Err(DbErr)` - Database error during update
    pub async fn set_status(&self, pet_id: i32, status: PetStatus) -> Result<Option<Pet>, DbErr> {
        let Some(entity) = entity::prelude::Pet::find_by_id(pet_id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::pet::ActiveModel = entity.into();
        active.status = ActiveValue::Set(status.into());
        let updated = active.update(self.db).await?;

        Ok(Some(Pet::from_entity(updated)))
    }

    /// Sets the stored photo path of a pet.
    ///
    /// # Arguments
    /// - `pet_id` - Primary key of the pet
    /// - `photo_path` - Filename of the stored photo relative to the upload directory
    ///
    /// # Returns
    /// - `Ok(Some(Pet))` - The updated pet
    /// - `Ok(None)` - No pet found with that ID
    /// - `Err(DbErr)` - Database error during update
    pub async fn set_photo_path(
        &self,
        pet_id: i32,
        photo_path: String,
    ) -> Result<Option<Pet>, DbErr> {
        let Some(entity) = entity::prelude::Pet::find_by_id(pet_id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::pet::ActiveModel = entity.into();
        active.photo_path = ActiveValue::Set(Some(photo_path));
        let updated = active.update(self.db).await?;

        Ok(Some(Pet::from_entity(updated)))
    }

    /// Deletes a pet listing.
    ///
    /// Associated adoption records are removed by the foreign key cascade.
    ///
    /// # Arguments
    /// - `pet_id` - Primary key of the pet
    ///
    /// # Returns
    /// - `Ok(true)` - Pet deleted
    /// - `Ok(false)` - No pet found with that ID
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, pet_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Pet::delete_by_id(pet_id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
