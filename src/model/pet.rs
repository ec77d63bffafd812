use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum PetSpecies {
    Dog,
    Cat,
    Bird,
    Rabbit,
    Other,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum PetStatus {
    Available,
    Adopted,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct PetDto {
    pub id: i32,
    pub name: String,
    pub species: PetSpecies,
    pub breed: Option<String>,
    pub age_months: i32,
    pub description: Option<String>,
    /// Relative URL of the uploaded photo, e.g. `/uploads/pet-3-1a2b.jpg`.
    pub photo_url: Option<String>,
    pub status: PetStatus,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct CreatePetDto {
    pub name: String,
    pub species: PetSpecies,
    pub breed: Option<String>,
    pub age_months: i32,
    pub description: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct UpdatePetDto {
    pub name: String,
    pub species: PetSpecies,
    pub breed: Option<String>,
    pub age_months: i32,
    pub description: Option<String>,
    pub status: PetStatus,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct PaginatedPetsDto {
    pub pets: Vec<PetDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}
