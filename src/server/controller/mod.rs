//! HTTP controllers for all API endpoints.
//!
//! Controllers extract and validate request data, enforce access control via
//! `AuthGuard`, convert DTOs to parameter models, delegate to the service
//! layer, and convert domain models back to DTOs for the response. Each
//! endpoint carries a `#[utoipa::path]` annotation for the generated OpenAPI
//! documentation.

pub mod adoption;
pub mod auth;
pub mod notification;
pub mod param;
pub mod pet;
pub mod user;
