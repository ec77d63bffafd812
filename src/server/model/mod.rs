//! Server-side domain models and operation parameter types.
//!
//! Domain models sit between the database entities and the API DTOs. Each
//! model converts from its entity at the repository boundary (`from_entity`)
//! and into its DTO at the controller boundary (`into_dto`).

pub mod adoption;
pub mod notification;
pub mod pet;
pub mod user;
