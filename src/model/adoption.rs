use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{pet::PetDto, user::UserDto};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum AdoptionStatus {
    Pending,
    Approved,
    Rejected,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct CreateAdoptionDto {
    pub pet_id: i32,
    pub message: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct AdoptionDto {
    pub id: i32,
    pub pet_id: i32,
    pub user_id: i32,
    pub message: Option<String>,
    pub status: AdoptionStatus,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "chrono::serde::ts_seconds_option")]
    pub decided_at: Option<DateTime<Utc>>,
}

/// Adoption with the referenced pet embedded. Used for the caller's own
/// request listing.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct AdoptionWithPetDto {
    #[serde(flatten)]
    pub adoption: AdoptionDto,
    pub pet: PetDto,
}

/// Adoption with both the pet and the requesting user embedded. Used for the
/// admin review listing.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct AdoptionDetailDto {
    #[serde(flatten)]
    pub adoption: AdoptionDto,
    pub pet: PetDto,
    pub user: UserDto,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct PaginatedAdoptionsDto {
    pub adoptions: Vec<AdoptionDetailDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}
