//! Pet factory for creating test pet entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use entity::pet::{PetSpecies, PetStatus};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test pets with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use entity::pet::PetSpecies;
/// use test_utils::factory::pet::PetFactory;
///
/// let cat = PetFactory::new(&db)
///     .name("Mochi")
///     .species(PetSpecies::Cat)
///     .build()
///     .await?;
/// ```
pub struct PetFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    species: PetSpecies,
    breed: Option<String>,
    age_months: i32,
    description: Option<String>,
    photo_path: Option<String>,
    status: PetStatus,
}

impl<'a> PetFactory<'a> {
    /// Creates a new PetFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Pet {id}"` where id is auto-incremented
    /// - species: `Dog`
    /// - age_months: 24
    /// - status: `Available`
    /// - breed, description, photo_path: `None`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Pet {}", id),
            species: PetSpecies::Dog,
            breed: None,
            age_months: 24,
            description: None,
            photo_path: None,
            status: PetStatus::Available,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn species(mut self, species: PetSpecies) -> Self {
        self.species = species;
        self
    }

    pub fn breed(mut self, breed: impl Into<String>) -> Self {
        self.breed = Some(breed.into());
        self
    }

    pub fn age_months(mut self, age_months: i32) -> Self {
        self.age_months = age_months;
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn photo_path(mut self, photo_path: impl Into<String>) -> Self {
        self.photo_path = Some(photo_path.into());
        self
    }

    pub fn status(mut self, status: PetStatus) -> Self {
        self.status = status;
        self
    }

    /// Builds and inserts the pet entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::pet::Model)` - Created pet entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::pet::Model, DbErr> {
        entity::pet::ActiveModel {
            name: ActiveValue::Set(self.name),
            species: ActiveValue::Set(self.species),
            breed: ActiveValue::Set(self.breed),
            age_months: ActiveValue::Set(self.age_months),
            description: ActiveValue::Set(self.description),
            photo_path: ActiveValue::Set(self.photo_path),
            status: ActiveValue::Set(self.status),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an available pet with default values.
///
/// Shorthand for `PetFactory::new(db).build().await`.
pub async fn create_pet(db: &DatabaseConnection) -> Result<entity::pet::Model, DbErr> {
    PetFactory::new(db).build().await
}

/// Creates a pet already marked as adopted.
pub async fn create_adopted_pet(db: &DatabaseConnection) -> Result<entity::pet::Model, DbErr> {
    PetFactory::new(db).status(PetStatus::Adopted).build().await
}
