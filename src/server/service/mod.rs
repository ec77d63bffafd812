//! Business logic layer for all application domains.
//!
//! Services orchestrate repository calls and enforce the application's rules:
//! credential checks, input validation, status transitions, and the adoption
//! approval cascade. They work with domain models and parameter models rather
//! than DTOs, which stay at the controller boundary.

pub mod adoption;
pub mod auth;
pub mod notification;
pub mod pet;
pub mod user;

#[cfg(test)]
mod test;
