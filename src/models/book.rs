//! Book model and request types

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Book record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Book {
    pub id: i32,
    pub title: String,
    pub author: String,
    pub category: Option<String>,
    #[schema(value_type = f64)]
    pub price: Decimal,
    /// Globally unique across all books
    pub isbn: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create book request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateBook {
    pub title: String,
    pub author: String,
    pub category: Option<String>,
    #[schema(value_type = f64)]
    pub price: Decimal,
    pub isbn: String,
}

/// Update book request. Omitted fields retain their prior values.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateBook {
    pub title: Option<String>,
    pub author: Option<String>,
    pub category: Option<String>,
    #[schema(value_type = Option<f64>)]
    pub price: Option<Decimal>,
    pub isbn: Option<String>,
}

/// Book list query parameters
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct BookQuery {
    /// Case-insensitive substring search over title, author and category
    pub search: Option<String>,
    /// Filter by category (exact match)
    pub category: Option<String>,
    /// Filter by author (case-insensitive substring)
    pub author: Option<String>,
    #[schema(value_type = Option<f64>)]
    pub min_price: Option<Decimal>,
    #[schema(value_type = Option<f64>)]
    pub max_price: Option<Decimal>,
    pub page: Option<i64>,
    pub limit: Option<i64>,
}
