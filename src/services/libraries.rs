//! Libraries service

use crate::{
    error::{AppError, AppResult},
    models::{
        library::{CreateLibrary, Library, LibraryQuery, UpdateLibrary},
        mapping::{BookInLibrary, JoinedQuery},
        page::{resolve_page, Paginated},
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct LibrariesService {
    repository: Repository,
}

impl LibrariesService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Create a library. Count defaults to 0 and is client-set.
    pub async fn create(&self, mut library: CreateLibrary) -> AppResult<Library> {
        library.name = library.name.trim().to_string();

        if library.name.is_empty() {
            return Err(AppError::Validation(
                "Library name cannot be empty".to_string(),
            ));
        }
        if let Some(count) = library.count {
            if count < 0 {
                return Err(AppError::Validation(
                    "Library count cannot be negative".to_string(),
                ));
            }
        }

        self.repository.libraries.create(&library).await
    }

    /// Get library by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<Library> {
        self.repository.libraries.get_by_id(id).await
    }

    /// List libraries with filters and pagination
    pub async fn list(&self, query: &LibraryQuery) -> AppResult<Paginated<Library>> {
        let (page, limit) = resolve_page(query.page, query.limit)?;
        let (rows, total) = self.repository.libraries.list(query, page, limit).await?;
        Ok(Paginated::new(rows, total, page, limit))
    }

    /// Partial update: only supplied fields are validated and written
    pub async fn update(&self, id: i32, mut library: UpdateLibrary) -> AppResult<Library> {
        if let Some(ref name) = library.name {
            let name = name.trim().to_string();
            if name.is_empty() {
                return Err(AppError::Validation(
                    "Library name cannot be empty".to_string(),
                ));
            }
            library.name = Some(name);
        }
        if let Some(count) = library.count {
            if count < 0 {
                return Err(AppError::Validation(
                    "Library count cannot be negative".to_string(),
                ));
            }
        }

        self.repository.libraries.update(id, &library).await
    }

    /// Delete a library and, atomically, every mapping referencing it.
    /// The mapped books themselves are untouched.
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.repository.libraries.delete(id).await?;
        tracing::info!("Deleted library {} (cascaded to its mappings)", id);
        Ok(())
    }

    /// Recompute the library's book count from its Active mappings and
    /// return the updated view
    pub async fn refresh_count(&self, id: i32) -> AppResult<Library> {
        self.repository.libraries.refresh_count(id).await
    }

    /// Books held by a library, paginated, optionally filtered by mapping
    /// status
    pub async fn books_in_library(
        &self,
        lib_id: i32,
        query: &JoinedQuery,
    ) -> AppResult<Paginated<BookInLibrary>> {
        let (page, limit) = resolve_page(query.page, query.limit)?;

        // Distinguish "unknown library" from "library with no books"
        self.repository.libraries.get_by_id(lib_id).await?;

        let (rows, total) = self
            .repository
            .mappings
            .books_in_library(lib_id, query.status, page, limit)
            .await?;
        Ok(Paginated::new(rows, total, page, limit))
    }
}
