//! Library-book mappings repository for database operations

use sqlx::{Pool, Postgres, QueryBuilder};

use crate::{
    error::{AppError, AppResult},
    models::{
        enums::MappingStatus,
        mapping::{
            BookInLibrary, CreateMapping, LibraryBook, LibraryWithBook, MappingDetails,
            MappingQuery, UpdateMapping,
        },
        page::page_offset,
    },
};

#[derive(Clone)]
pub struct MappingsRepository {
    pool: Pool<Postgres>,
}

impl MappingsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Insert a new mapping. Referential integrity and pair uniqueness are
    /// enforced by the foreign keys and the composite unique index; their
    /// violations surface as `NotFound` and `DuplicateMapping`.
    pub async fn create(&self, mapping: &CreateMapping) -> AppResult<LibraryBook> {
        sqlx::query_as::<_, LibraryBook>(
            r#"
            INSERT INTO library_books (lib_id, book_id, status)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(mapping.lib_id)
        .bind(mapping.book_id)
        .bind(mapping.status.unwrap_or_default())
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::from_constraint)
    }

    /// Get mapping by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<LibraryBook> {
        sqlx::query_as::<_, LibraryBook>("SELECT * FROM library_books WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Mapping with id {} not found", id)))
    }

    /// List mappings with filters and pagination, joined with display fields
    /// from both referenced entities, ordered by mapping id ascending
    pub async fn list(
        &self,
        query: &MappingQuery,
        page: i64,
        limit: i64,
    ) -> AppResult<(Vec<MappingDetails>, i64)> {
        let mut count_query =
            QueryBuilder::<Postgres>::new("SELECT COUNT(*) FROM library_books lb");
        push_filters(&mut count_query, query);
        let total: i64 = count_query
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await?;

        let mut select_query = QueryBuilder::<Postgres>::new(
            r#"
            SELECT lb.id, lb.lib_id, lb.book_id, lb.status, lb.created_at, lb.updated_at,
                   l.name AS library_name, b.title AS book_title, b.author AS book_author
            FROM library_books lb
            JOIN libraries l ON l.id = lb.lib_id
            JOIN books b ON b.id = lb.book_id
            "#,
        );
        push_filters(&mut select_query, query);
        select_query.push(" ORDER BY lb.id ASC LIMIT ");
        select_query.push_bind(limit);
        select_query.push(" OFFSET ");
        select_query.push_bind(page_offset(page, limit));

        let mappings = select_query
            .build_query_as::<MappingDetails>()
            .fetch_all(&self.pool)
            .await?;

        Ok((mappings, total))
    }

    /// Update a mapping's status (the only mutable field)
    pub async fn update(&self, id: i32, mapping: &UpdateMapping) -> AppResult<LibraryBook> {
        sqlx::query_as::<_, LibraryBook>(
            r#"
            UPDATE library_books SET
                status = COALESCE($1, status),
                updated_at = NOW()
            WHERE id = $2
            RETURNING *
            "#,
        )
        .bind(mapping.status)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Mapping with id {} not found", id)))
    }

    /// Delete a mapping. Terminal: the pair can only come back as a new row.
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM library_books WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!(
                "Mapping with id {} not found",
                id
            )));
        }

        Ok(())
    }

    /// Books held by a library, with the linking mapping's id and status,
    /// ordered by book id ascending
    pub async fn books_in_library(
        &self,
        lib_id: i32,
        status: Option<MappingStatus>,
        page: i64,
        limit: i64,
    ) -> AppResult<(Vec<BookInLibrary>, i64)> {
        let mut count_query = QueryBuilder::<Postgres>::new(
            "SELECT COUNT(*) FROM library_books lb WHERE lb.lib_id = ",
        );
        count_query.push_bind(lib_id);
        if let Some(status) = status {
            count_query.push(" AND lb.status = ").push_bind(status);
        }
        let total: i64 = count_query
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await?;

        let mut select_query = QueryBuilder::<Postgres>::new(
            r#"
            SELECT lb.id AS mapping_id, lb.status AS mapping_status,
                   b.id, b.title, b.author, b.category, b.price, b.isbn
            FROM library_books lb
            JOIN books b ON b.id = lb.book_id
            WHERE lb.lib_id = "#,
        );
        select_query.push_bind(lib_id);
        if let Some(status) = status {
            select_query.push(" AND lb.status = ").push_bind(status);
        }
        select_query.push(" ORDER BY b.id ASC LIMIT ");
        select_query.push_bind(limit);
        select_query.push(" OFFSET ");
        select_query.push_bind(page_offset(page, limit));

        let books = select_query
            .build_query_as::<BookInLibrary>()
            .fetch_all(&self.pool)
            .await?;

        Ok((books, total))
    }

    /// Libraries holding a book, with the linking mapping's id and status,
    /// ordered by library id ascending
    pub async fn libraries_with_book(
        &self,
        book_id: i32,
        status: Option<MappingStatus>,
        page: i64,
        limit: i64,
    ) -> AppResult<(Vec<LibraryWithBook>, i64)> {
        let mut count_query = QueryBuilder::<Postgres>::new(
            "SELECT COUNT(*) FROM library_books lb WHERE lb.book_id = ",
        );
        count_query.push_bind(book_id);
        if let Some(status) = status {
            count_query.push(" AND lb.status = ").push_bind(status);
        }
        let total: i64 = count_query
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await?;

        let mut select_query = QueryBuilder::<Postgres>::new(
            r#"
            SELECT lb.id AS mapping_id, lb.status AS mapping_status,
                   l.id, l.name, l.dept, l.count, l.status
            FROM library_books lb
            JOIN libraries l ON l.id = lb.lib_id
            WHERE lb.book_id = "#,
        );
        select_query.push_bind(book_id);
        if let Some(status) = status {
            select_query.push(" AND lb.status = ").push_bind(status);
        }
        select_query.push(" ORDER BY l.id ASC LIMIT ");
        select_query.push_bind(limit);
        select_query.push(" OFFSET ");
        select_query.push_bind(page_offset(page, limit));

        let libraries = select_query
            .build_query_as::<LibraryWithBook>()
            .fetch_all(&self.pool)
            .await?;

        Ok((libraries, total))
    }
}

fn push_filters(qb: &mut QueryBuilder<'_, Postgres>, query: &MappingQuery) {
    qb.push(" WHERE 1=1");

    if let Some(lib_id) = query.lib_id {
        qb.push(" AND lb.lib_id = ").push_bind(lib_id);
    }

    if let Some(book_id) = query.book_id {
        qb.push(" AND lb.book_id = ").push_bind(book_id);
    }

    if let Some(status) = query.status {
        qb.push(" AND lb.status = ").push_bind(status);
    }
}
