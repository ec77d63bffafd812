//! Shared query parameter types for list endpoints.

use serde::Deserialize;

/// Upper bound on the page size a client may request.
pub const MAX_ENTRIES: u64 = 100;

/// Standard pagination query parameters.
///
/// `page` is zero-indexed and defaults to the first page; `entries` defaults
/// to 10 per page.
#[derive(Deserialize)]
pub struct PaginationParams {
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_entries")]
    pub entries: u64,
}

pub fn default_entries() -> u64 {
    10
}

/// Clamps a requested page size to a sane range.
pub fn clamp_entries(entries: u64) -> u64 {
    entries.clamp(1, MAX_ENTRIES)
}
