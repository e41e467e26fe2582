//! Libraries repository for database operations

use sqlx::{Pool, Postgres, QueryBuilder};

use crate::{
    error::{AppError, AppResult},
    models::{
        library::{CreateLibrary, Library, LibraryQuery, UpdateLibrary},
        page::page_offset,
    },
};

#[derive(Clone)]
pub struct LibrariesRepository {
    pool: Pool<Postgres>,
}

impl LibrariesRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Insert a new library
    pub async fn create(&self, library: &CreateLibrary) -> AppResult<Library> {
        sqlx::query_as::<_, Library>(
            r#"
            INSERT INTO libraries (name, dept, count, status)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(&library.name)
        .bind(&library.dept)
        .bind(library.count.unwrap_or(0))
        .bind(library.status.unwrap_or_default())
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::from_constraint)
    }

    /// Get library by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<Library> {
        sqlx::query_as::<_, Library>("SELECT * FROM libraries WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Library with id {} not found", id)))
    }

    /// List libraries with filters and pagination, ordered by id ascending
    pub async fn list(
        &self,
        query: &LibraryQuery,
        page: i64,
        limit: i64,
    ) -> AppResult<(Vec<Library>, i64)> {
        let mut count_query = QueryBuilder::<Postgres>::new("SELECT COUNT(*) FROM libraries");
        push_filters(&mut count_query, query);
        let total: i64 = count_query
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await?;

        let mut select_query = QueryBuilder::<Postgres>::new("SELECT * FROM libraries");
        push_filters(&mut select_query, query);
        select_query.push(" ORDER BY id ASC LIMIT ");
        select_query.push_bind(limit);
        select_query.push(" OFFSET ");
        select_query.push_bind(page_offset(page, limit));

        let libraries = select_query
            .build_query_as::<Library>()
            .fetch_all(&self.pool)
            .await?;

        Ok((libraries, total))
    }

    /// Partial update: fields bound as NULL keep their stored value
    pub async fn update(&self, id: i32, library: &UpdateLibrary) -> AppResult<Library> {
        sqlx::query_as::<_, Library>(
            r#"
            UPDATE libraries SET
                name = COALESCE($1, name),
                dept = COALESCE($2, dept),
                count = COALESCE($3, count),
                status = COALESCE($4, status),
                updated_at = NOW()
            WHERE id = $5
            RETURNING *
            "#,
        )
        .bind(&library.name)
        .bind(&library.dept)
        .bind(library.count)
        .bind(library.status)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::from_constraint)?
        .ok_or_else(|| AppError::NotFound(format!("Library with id {} not found", id)))
    }

    /// Delete a library. Mappings referencing it are removed by ON DELETE
    /// CASCADE within the same statement.
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM libraries WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::from_constraint)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!(
                "Library with id {} not found",
                id
            )));
        }

        Ok(())
    }

    /// Recompute the denormalized book count from the live Active mapping
    /// set. Done in one statement so the stored count never reflects a
    /// half-applied mapping change.
    pub async fn refresh_count(&self, id: i32) -> AppResult<Library> {
        sqlx::query_as::<_, Library>(
            r#"
            UPDATE libraries SET
                count = (
                    SELECT COUNT(*) FROM library_books
                    WHERE lib_id = libraries.id AND status = 'Active'
                ),
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Library with id {} not found", id)))
    }
}

fn push_filters(qb: &mut QueryBuilder<'_, Postgres>, query: &LibraryQuery) {
    qb.push(" WHERE 1=1");

    if let Some(status) = query.status {
        qb.push(" AND status = ").push_bind(status);
    }

    if let Some(ref dept) = query.dept {
        qb.push(" AND dept = ").push_bind(dept.clone());
    }

    if let Some(ref search) = query.search {
        let pattern = format!("%{}%", search);
        qb.push(" AND (name ILIKE ")
            .push_bind(pattern.clone())
            .push(" OR dept ILIKE ")
            .push_bind(pattern)
            .push(")");
    }
}
