//! Business logic services

pub mod books;
pub mod libraries;
pub mod mappings;

use sqlx::{Pool, Postgres};

use crate::repository::Repository;

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub libraries: libraries::LibrariesService,
    pub books: books::BooksService,
    pub mappings: mappings::MappingsService,
    repository: Repository,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository) -> Self {
        Self {
            libraries: libraries::LibrariesService::new(repository.clone()),
            books: books::BooksService::new(repository.clone()),
            mappings: mappings::MappingsService::new(repository.clone()),
            repository,
        }
    }

    /// Shared connection pool, used by the readiness probe
    pub fn pool(&self) -> &Pool<Postgres> {
        &self.repository.pool
    }
}
