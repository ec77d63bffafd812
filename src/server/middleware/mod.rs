//! Request-scoped middleware helpers for authentication.
//!
//! Contains the session wrapper that stores the logged-in user ID and the
//! `AuthGuard` that endpoints use to require an authenticated user or admin.

pub mod auth;
pub mod session;

#[cfg(test)]
mod test;
