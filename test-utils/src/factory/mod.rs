//! Entity factories for tests.
//!
//! Each factory creates an entity with sensible defaults that can be overridden
//! through a builder pattern, reducing boilerplate in repository and service tests.

pub mod adoption;
pub mod helpers;
pub mod notification;
pub mod pet;
pub mod user;
