//! Adoption domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::adoption::{
        AdoptionDetailDto, AdoptionDto, AdoptionStatus, AdoptionWithPetDto, PaginatedAdoptionsDto,
    },
    server::model::{pet::Pet, user::User},
};

/// Adoption request linking a user to a pet.
#[derive(Debug, Clone, PartialEq)]
pub struct Adoption {
    pub id: i32,
    pub pet_id: i32,
    pub user_id: i32,
    pub message: Option<String>,
    pub status: AdoptionStatus,
    pub created_at: DateTime<Utc>,
    /// Set when the request leaves the pending state.
    pub decided_at: Option<DateTime<Utc>>,
}

impl Adoption {
    pub fn into_dto(self) -> AdoptionDto {
        AdoptionDto {
            id: self.id,
            pet_id: self.pet_id,
            user_id: self.user_id,
            message: self.message,
            status: self.status,
            created_at: self.created_at,
            decided_at: self.decided_at,
        }
    }

    /// Converts an entity model to an adoption domain model at the repository boundary.
    pub fn from_entity(entity: entity::adoption::Model) -> Self {
        Self {
            id: entity.id,
            pet_id: entity.pet_id,
            user_id: entity.user_id,
            message: entity.message,
            status: entity.status.into(),
            created_at: entity.created_at,
            decided_at: entity.decided_at,
        }
    }
}

impl From<entity::adoption::AdoptionStatus> for AdoptionStatus {
    fn from(value: entity::adoption::AdoptionStatus) -> Self {
        match value {
            entity::adoption::AdoptionStatus::Pending => Self::Pending,
            entity::adoption::AdoptionStatus::Approved => Self::Approved,
            entity::adoption::AdoptionStatus::Rejected => Self::Rejected,
        }
    }
}

impl From<AdoptionStatus> for entity::adoption::AdoptionStatus {
    fn from(value: AdoptionStatus) -> Self {
        match value {
            AdoptionStatus::Pending => Self::Pending,
            AdoptionStatus::Approved => Self::Approved,
            AdoptionStatus::Rejected => Self::Rejected,
        }
    }
}

/// Adoption with its pet loaded, for the requester's own listing.
#[derive(Debug, Clone, PartialEq)]
pub struct AdoptionWithPet {
    pub adoption: Adoption,
    pub pet: Pet,
}

impl AdoptionWithPet {
    pub fn into_dto(self) -> AdoptionWithPetDto {
        AdoptionWithPetDto {
            adoption: self.adoption.into_dto(),
            pet: self.pet.into_dto(),
        }
    }
}

/// Adoption with both its pet and requesting user loaded, for admin review.
#[derive(Debug, Clone, PartialEq)]
pub struct AdoptionDetail {
    pub adoption: Adoption,
    pub pet: Pet,
    pub user: User,
}

impl AdoptionDetail {
    pub fn into_dto(self) -> AdoptionDetailDto {
        AdoptionDetailDto {
            adoption: self.adoption.into_dto(),
            pet: self.pet.into_dto(),
            user: self.user.into_dto(),
        }
    }
}

/// Parameters for submitting an adoption request.
#[derive(Debug, Clone)]
pub struct SubmitAdoptionParam {
    pub pet_id: i32,
    pub user_id: i32,
    pub message: Option<String>,
}

/// Parameters for the admin review listing.
#[derive(Debug, Clone)]
pub struct ListAdoptionsParam {
    /// Zero-indexed page number.
    pub page: u64,
    pub per_page: u64,
    pub status: Option<AdoptionStatus>,
}

/// Paginated collection of adoption details with metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedAdoptions {
    pub adoptions: Vec<AdoptionDetail>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedAdoptions {
    pub fn into_dto(self) -> PaginatedAdoptionsDto {
        PaginatedAdoptionsDto {
            adoptions: self.adoptions.into_iter().map(|a| a.into_dto()).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}
