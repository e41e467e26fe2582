//! Library-book mapping model and request types

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use super::enums::{LibraryStatus, MappingStatus};

/// Library-book mapping record.
///
/// A dependent join row: it never outlives either referenced entity, and the
/// (lib_id, book_id) pair is unique regardless of status.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct LibraryBook {
    pub id: i32,
    pub lib_id: i32,
    pub book_id: i32,
    pub status: MappingStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Mapping row joined with display fields from both referenced entities
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct MappingDetails {
    pub id: i32,
    pub lib_id: i32,
    pub book_id: i32,
    pub status: MappingStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub library_name: String,
    pub book_title: String,
    pub book_author: String,
}

/// Create mapping request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateMapping {
    pub lib_id: i32,
    pub book_id: i32,
    /// Defaults to Active
    pub status: Option<MappingStatus>,
}

/// Update mapping request. Status is the only mutable field; re-pointing a
/// mapping at a different library or book is not a valid transition.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateMapping {
    pub status: Option<MappingStatus>,
}

/// Mapping list query parameters
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct MappingQuery {
    pub lib_id: Option<i32>,
    pub book_id: Option<i32>,
    pub status: Option<MappingStatus>,
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

/// Query parameters for the joined views ("books in a library",
/// "libraries containing a book")
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct JoinedQuery {
    /// Only include mappings with this status (default: all statuses)
    pub status: Option<MappingStatus>,
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

/// A book held by a library, with the mapping that links them
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct BookInLibrary {
    pub mapping_id: i32,
    pub mapping_status: MappingStatus,
    pub id: i32,
    pub title: String,
    pub author: String,
    pub category: Option<String>,
    #[schema(value_type = f64)]
    pub price: Decimal,
    pub isbn: String,
}

/// A library holding a book, with the mapping that links them
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct LibraryWithBook {
    pub mapping_id: i32,
    pub mapping_status: MappingStatus,
    pub id: i32,
    pub name: String,
    pub dept: Option<String>,
    pub count: i32,
    pub status: LibraryStatus,
}
