//! Pet domain models and parameters.

use chrono::{DateTime, Utc};

use crate::model::pet::{PaginatedPetsDto, PetDto, PetSpecies, PetStatus};

/// Adoptable pet listing.
#[derive(Debug, Clone, PartialEq)]
pub struct Pet {
    pub id: i32,
    pub name: String,
    pub species: PetSpecies,
    pub breed: Option<String>,
    pub age_months: i32,
    pub description: Option<String>,
    /// Path of the uploaded photo relative to the upload directory.
    pub photo_path: Option<String>,
    pub status: PetStatus,
    pub created_at: DateTime<Utc>,
}

impl Pet {
    /// Converts the pet domain model to a DTO for API responses.
    ///
    /// The stored photo path becomes a relative URL under `/uploads`.
    pub fn into_dto(self) -> PetDto {
        PetDto {
            id: self.id,
            name: self.name,
            species: self.species,
            breed: self.breed,
            age_months: self.age_months,
            description: self.description,
            photo_url: self.photo_path.map(|path| format!("/uploads/{}", path)),
            status: self.status,
            created_at: self.created_at,
        }
    }

    /// Converts an entity model to a pet domain model at the repository boundary.
    pub fn from_entity(entity: entity::pet::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            species: entity.species.into(),
            breed: entity.breed,
            age_months: entity.age_months,
            description: entity.description,
            photo_path: entity.photo_path,
            status: entity.status.into(),
            created_at: entity.created_at,
        }
    }
}

impl From<entity::pet::PetSpecies> for PetSpecies {
    fn from(value: entity::pet::PetSpecies) -> Self {
        match value {
            entity::pet::PetSpecies::Dog => Self::Dog,
            entity::pet::PetSpecies::Cat => Self::Cat,
            entity::pet::PetSpecies::Bird => Self::Bird,
            entity::pet::PetSpecies::Rabbit => Self::Rabbit,
            entity::pet::PetSpecies::Other => Self::Other,
        }
    }
}

impl From<PetSpecies> for entity::pet::PetSpecies {
    fn from(value: PetSpecies) -> Self {
        match value {
            PetSpecies::Dog => Self::Dog,
            PetSpecies::Cat => Self::Cat,
            PetSpecies::Bird => Self::Bird,
            PetSpecies::Rabbit => Self::Rabbit,
            PetSpecies::Other => Self::Other,
        }
    }
}

impl From<entity::pet::PetStatus> for PetStatus {
    fn from(value: entity::pet::PetStatus) -> Self {
        match value {
            entity::pet::PetStatus::Available => Self::Available,
            entity::pet::PetStatus::Adopted => Self::Adopted,
        }
    }
}

impl From<PetStatus> for entity::pet::PetStatus {
    fn from(value: PetStatus) -> Self {
        match value {
            PetStatus::Available => Self::Available,
            PetStatus::Adopted => Self::Adopted,
        }
    }
}

/// Parameters for creating a pet listing. New pets start as available.
#[derive(Debug, Clone)]
pub struct CreatePetParam {
    pub name: String,
    pub species: PetSpecies,
    pub breed: Option<String>,
    pub age_months: i32,
    pub description: Option<String>,
}

/// Parameters for updating a pet listing.
#[derive(Debug, Clone)]
pub struct UpdatePetParam {
    pub id: i32,
    pub name: String,
    pub species: PetSpecies,
    pub breed: Option<String>,
    pub age_months: i32,
    pub description: Option<String>,
    pub status: PetStatus,
}

/// Parameters for browsing pets with optional filters.
#[derive(Debug, Clone)]
pub struct ListPetsParam {
    /// Zero-indexed page number.
    pub page: u64,
    pub per_page: u64,
    pub species: Option<PetSpecies>,
    pub status: Option<PetStatus>,
}

/// Paginated collection of pets with metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedPets {
    pub pets: Vec<Pet>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedPets {
    pub fn into_dto(self) -> PaginatedPetsDto {
        PaginatedPetsDto {
            pets: self.pets.into_iter().map(|p| p.into_dto()).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}
