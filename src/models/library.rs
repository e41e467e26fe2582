//! Library model and request types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use super::enums::LibraryStatus;

/// Library record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Library {
    pub id: i32,
    pub name: String,
    pub dept: Option<String>,
    /// Denormalized book count. Client-set; refreshed on demand from the
    /// live Active mapping set, never silently auto-maintained.
    pub count: i32,
    pub status: LibraryStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create library request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateLibrary {
    pub name: String,
    pub dept: Option<String>,
    pub count: Option<i32>,
    pub status: Option<LibraryStatus>,
}

/// Update library request. Omitted fields retain their prior values.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateLibrary {
    pub name: Option<String>,
    pub dept: Option<String>,
    pub count: Option<i32>,
    pub status: Option<LibraryStatus>,
}

/// Library list query parameters
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct LibraryQuery {
    /// Filter by status
    pub status: Option<LibraryStatus>,
    /// Filter by department (exact match)
    pub dept: Option<String>,
    /// Case-insensitive substring search over name and department
    pub search: Option<String>,
    pub page: Option<i64>,
    pub limit: Option<i64>,
}
