//! Shared domain enums

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ---------------------------------------------------------------------------
// LibraryStatus
// ---------------------------------------------------------------------------

/// Library lifecycle status
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema, Default,
)]
#[sqlx(type_name = "library_status")]
pub enum LibraryStatus {
    #[default]
    Active,
    Inactive,
}

impl std::fmt::Display for LibraryStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            LibraryStatus::Active => "Active",
            LibraryStatus::Inactive => "Inactive",
        };
        write!(f, "{}", label)
    }
}

// ---------------------------------------------------------------------------
// MappingStatus
// ---------------------------------------------------------------------------

/// Library-book mapping status.
///
/// A mapping is created Active or Inactive, may toggle between the two, and
/// ends at deletion. There is no resurrection: re-adding a deleted pair is a
/// new row with a new id.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema, Default,
)]
#[sqlx(type_name = "mapping_status")]
pub enum MappingStatus {
    #[default]
    Active,
    Inactive,
}

impl std::fmt::Display for MappingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            MappingStatus::Active => "Active",
            MappingStatus::Inactive => "Inactive",
        };
        write!(f, "{}", label)
    }
}
