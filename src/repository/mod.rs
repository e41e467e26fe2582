//! Repository layer for database operations

pub mod books;
pub mod libraries;
pub mod mappings;

use sqlx::{Pool, Postgres};

/// Main repository struct holding database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Postgres>,
    pub libraries: libraries::LibrariesRepository,
    pub books: books::BooksRepository,
    pub mappings: mappings::MappingsRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            libraries: libraries::LibrariesRepository::new(pool.clone()),
            books: books::BooksRepository::new(pool.clone()),
            mappings: mappings::MappingsRepository::new(pool.clone()),
            pool,
        }
    }
}
