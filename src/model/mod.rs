//! Shared data transfer objects for the HTTP API.
//!
//! These types define the JSON request and response shapes exposed by the API.
//! Conversions to and from the server's domain models happen at the controller
//! boundary.

pub mod adoption;
pub mod api;
pub mod auth;
pub mod notification;
pub mod pet;
pub mod user;
