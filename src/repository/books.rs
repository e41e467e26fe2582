//! Books repository for database operations

use sqlx::{Pool, Postgres, QueryBuilder};

use crate::{
    error::{AppError, AppResult},
    models::{
        book::{Book, BookQuery, CreateBook, UpdateBook},
        page::page_offset,
    },
};

#[derive(Clone)]
pub struct BooksRepository {
    pool: Pool<Postgres>,
}

impl BooksRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Insert a new book. The unique index on isbn is the duplicate guard;
    /// its violation surfaces as `DuplicateIsbn`.
    pub async fn create(&self, book: &CreateBook) -> AppResult<Book> {
        sqlx::query_as::<_, Book>(
            r#"
            INSERT INTO books (title, author, category, price, isbn)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(&book.title)
        .bind(&book.author)
        .bind(&book.category)
        .bind(book.price)
        .bind(&book.isbn)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::from_constraint)
    }

    /// Get book by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<Book> {
        sqlx::query_as::<_, Book>("SELECT * FROM books WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Book with id {} not found", id)))
    }

    /// Get book by ISBN
    pub async fn get_by_isbn(&self, isbn: &str) -> AppResult<Book> {
        sqlx::query_as::<_, Book>("SELECT * FROM books WHERE isbn = $1")
            .bind(isbn)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Book with ISBN {} not found", isbn)))
    }

    /// List books with filters and pagination, ordered by id ascending
    pub async fn list(
        &self,
        query: &BookQuery,
        page: i64,
        limit: i64,
    ) -> AppResult<(Vec<Book>, i64)> {
        let mut count_query = QueryBuilder::<Postgres>::new("SELECT COUNT(*) FROM books");
        push_filters(&mut count_query, query);
        let total: i64 = count_query
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await?;

        let mut select_query = QueryBuilder::<Postgres>::new("SELECT * FROM books");
        push_filters(&mut select_query, query);
        select_query.push(" ORDER BY id ASC LIMIT ");
        select_query.push_bind(limit);
        select_query.push(" OFFSET ");
        select_query.push_bind(page_offset(page, limit));

        let books = select_query
            .build_query_as::<Book>()
            .fetch_all(&self.pool)
            .await?;

        Ok((books, total))
    }

    /// Partial update: fields bound as NULL keep their stored value
    pub async fn update(&self, id: i32, book: &UpdateBook) -> AppResult<Book> {
        sqlx::query_as::<_, Book>(
            r#"
            UPDATE books SET
                title = COALESCE($1, title),
                author = COALESCE($2, author),
                category = COALESCE($3, category),
                price = COALESCE($4, price),
                isbn = COALESCE($5, isbn),
                updated_at = NOW()
            WHERE id = $6
            RETURNING *
            "#,
        )
        .bind(&book.title)
        .bind(&book.author)
        .bind(&book.category)
        .bind(book.price)
        .bind(&book.isbn)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::from_constraint)?
        .ok_or_else(|| AppError::NotFound(format!("Book with id {} not found", id)))
    }

    /// Delete a book. Mappings referencing it are removed by ON DELETE
    /// CASCADE within the same statement, so no intermediate state is
    /// observable.
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM books WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::from_constraint)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Book with id {} not found", id)));
        }

        Ok(())
    }
}

fn push_filters(qb: &mut QueryBuilder<'_, Postgres>, query: &BookQuery) {
    qb.push(" WHERE 1=1");

    if let Some(ref search) = query.search {
        let pattern = format!("%{}%", search);
        qb.push(" AND (title ILIKE ")
            .push_bind(pattern.clone())
            .push(" OR author ILIKE ")
            .push_bind(pattern.clone())
            .push(" OR category ILIKE ")
            .push_bind(pattern)
            .push(")");
    }

    if let Some(ref category) = query.category {
        qb.push(" AND category = ").push_bind(category.clone());
    }

    if let Some(ref author) = query.author {
        qb.push(" AND author ILIKE ")
            .push_bind(format!("%{}%", author));
    }

    if let Some(min_price) = query.min_price {
        qb.push(" AND price >= ").push_bind(min_price);
    }

    if let Some(max_price) = query.max_price {
        qb.push(" AND price <= ").push_bind(max_price);
    }
}
