//! Library-book mappings service

use crate::{
    error::{AppError, AppResult},
    models::{
        mapping::{CreateMapping, LibraryBook, MappingDetails, MappingQuery, UpdateMapping},
        page::{resolve_page, Paginated},
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct MappingsService {
    repository: Repository,
}

impl MappingsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Create a mapping. A missing library or book surfaces as `NotFound`
    /// and an existing pair as `DuplicateMapping`, both from the insert
    /// itself.
    pub async fn create(&self, mapping: CreateMapping) -> AppResult<LibraryBook> {
        if mapping.lib_id <= 0 {
            return Err(AppError::Validation(
                "lib_id must be a positive integer".to_string(),
            ));
        }
        if mapping.book_id <= 0 {
            return Err(AppError::Validation(
                "book_id must be a positive integer".to_string(),
            ));
        }

        self.repository.mappings.create(&mapping).await
    }

    /// Get mapping by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<LibraryBook> {
        self.repository.mappings.get_by_id(id).await
    }

    /// List mappings with filters and pagination
    pub async fn list(&self, query: &MappingQuery) -> AppResult<Paginated<MappingDetails>> {
        let (page, limit) = resolve_page(query.page, query.limit)?;
        let (rows, total) = self.repository.mappings.list(query, page, limit).await?;
        Ok(Paginated::new(rows, total, page, limit))
    }

    /// Toggle a mapping between Active and Inactive
    pub async fn update(&self, id: i32, mapping: UpdateMapping) -> AppResult<LibraryBook> {
        self.repository.mappings.update(id, &mapping).await
    }

    /// Delete a mapping. No cascade; deletion is terminal for the row.
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.repository.mappings.delete(id).await
    }
}
