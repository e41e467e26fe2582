//! Pagination types shared by all list endpoints

use serde::Serialize;
use utoipa::ToSchema;

use crate::error::{AppError, AppResult};

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_LIMIT: i64 = 10;
pub const MAX_LIMIT: i64 = 100;

/// Validate page/limit query parameters and apply defaults.
/// Returns the effective `(page, limit)` pair.
pub fn resolve_page(page: Option<i64>, limit: Option<i64>) -> AppResult<(i64, i64)> {
    let page = page.unwrap_or(DEFAULT_PAGE);
    let limit = limit.unwrap_or(DEFAULT_LIMIT);

    if page < 1 {
        return Err(AppError::Validation(format!(
            "page must be >= 1, got {}",
            page
        )));
    }
    if !(1..=MAX_LIMIT).contains(&limit) {
        return Err(AppError::Validation(format!(
            "limit must be between 1 and {}, got {}",
            MAX_LIMIT, limit
        )));
    }

    Ok((page, limit))
}

/// Row offset for a validated page/limit pair
pub fn page_offset(page: i64, limit: i64) -> i64 {
    (page - 1) * limit
}

/// Paginated response wrapper
#[derive(Debug, Serialize, ToSchema)]
pub struct Paginated<T>
where
    T: for<'a> ToSchema<'a>,
{
    /// Rows for the requested page
    pub rows: Vec<T>,
    /// Total number of rows matching the filters, ignoring pagination
    pub total: i64,
    /// Current page number
    pub page: i64,
    /// Rows per page
    pub limit: i64,
    /// Total number of pages
    pub pages: i64,
}

impl<T> Paginated<T>
where
    T: for<'a> ToSchema<'a>,
{
    pub fn new(rows: Vec<T>, total: i64, page: i64, limit: i64) -> Self {
        let pages = if total == 0 {
            0
        } else {
            (total + limit - 1) / limit
        };
        Self {
            rows,
            total,
            page,
            limit,
            pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_unset() {
        assert_eq!(resolve_page(None, None).unwrap(), (1, 10));
        assert_eq!(resolve_page(Some(3), None).unwrap(), (3, 10));
        assert_eq!(resolve_page(None, Some(50)).unwrap(), (1, 50));
    }

    #[test]
    fn out_of_range_values_rejected() {
        assert!(resolve_page(Some(0), None).is_err());
        assert!(resolve_page(Some(-1), None).is_err());
        assert!(resolve_page(None, Some(0)).is_err());
        assert!(resolve_page(None, Some(101)).is_err());
        assert!(resolve_page(None, Some(100)).is_ok());
    }

    #[test]
    fn offset_skips_prior_pages() {
        assert_eq!(page_offset(1, 10), 0);
        assert_eq!(page_offset(2, 10), 10);
        assert_eq!(page_offset(3, 25), 50);
    }

    #[test]
    fn pages_round_up() {
        let p = Paginated::<crate::models::Book>::new(vec![], 25, 2, 10);
        assert_eq!(p.pages, 3);

        let p = Paginated::<crate::models::Book>::new(vec![], 30, 1, 10);
        assert_eq!(p.pages, 3);

        let p = Paginated::<crate::models::Book>::new(vec![], 0, 1, 10);
        assert_eq!(p.pages, 0);
    }
}
