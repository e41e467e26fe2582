//! Books service

use rust_decimal::Decimal;

use crate::{
    error::{AppError, AppResult},
    models::{
        book::{Book, BookQuery, CreateBook, UpdateBook},
        mapping::{JoinedQuery, LibraryWithBook},
        page::{resolve_page, Paginated},
    },
    repository::Repository,
};

/// Basic structural ISBN validation: after stripping hyphens and spaces the
/// value must be all digits, 10 or 13 long.
fn validate_isbn(isbn: &str) -> AppResult<()> {
    let digits: String = isbn.chars().filter(|c| !matches!(c, '-' | ' ')).collect();

    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(AppError::Validation(
            "ISBN must contain only digits, hyphens, and spaces".to_string(),
        ));
    }
    if digits.len() != 10 && digits.len() != 13 {
        return Err(AppError::Validation(
            "ISBN must be 10 or 13 digits long".to_string(),
        ));
    }

    Ok(())
}

#[derive(Clone)]
pub struct BooksService {
    repository: Repository,
}

impl BooksService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Create a book. All validation runs before the write; a duplicate ISBN
    /// surfaces from the unique index as `DuplicateIsbn`.
    pub async fn create(&self, mut book: CreateBook) -> AppResult<Book> {
        book.title = book.title.trim().to_string();
        book.author = book.author.trim().to_string();

        if book.title.is_empty() {
            return Err(AppError::Validation("Book title cannot be empty".to_string()));
        }
        if book.author.is_empty() {
            return Err(AppError::Validation(
                "Book author cannot be empty".to_string(),
            ));
        }
        if book.price <= Decimal::ZERO {
            return Err(AppError::Validation(
                "Book price must be greater than zero".to_string(),
            ));
        }
        validate_isbn(&book.isbn)?;

        self.repository.books.create(&book).await
    }

    /// Get book by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<Book> {
        self.repository.books.get_by_id(id).await
    }

    /// Get book by ISBN
    pub async fn get_by_isbn(&self, isbn: &str) -> AppResult<Book> {
        self.repository.books.get_by_isbn(isbn).await
    }

    /// List books with filters and pagination
    pub async fn list(&self, query: &BookQuery) -> AppResult<Paginated<Book>> {
        let (page, limit) = resolve_page(query.page, query.limit)?;
        let (rows, total) = self.repository.books.list(query, page, limit).await?;
        Ok(Paginated::new(rows, total, page, limit))
    }

    /// Partial update: only supplied fields are validated and written.
    /// Changing the ISBN to one held by a different book yields
    /// `DuplicateIsbn` from the unique index.
    pub async fn update(&self, id: i32, mut book: UpdateBook) -> AppResult<Book> {
        if let Some(ref title) = book.title {
            let title = title.trim().to_string();
            if title.is_empty() {
                return Err(AppError::Validation("Book title cannot be empty".to_string()));
            }
            book.title = Some(title);
        }
        if let Some(ref author) = book.author {
            let author = author.trim().to_string();
            if author.is_empty() {
                return Err(AppError::Validation(
                    "Book author cannot be empty".to_string(),
                ));
            }
            book.author = Some(author);
        }
        if let Some(price) = book.price {
            if price <= Decimal::ZERO {
                return Err(AppError::Validation(
                    "Book price must be greater than zero".to_string(),
                ));
            }
        }
        if let Some(ref isbn) = book.isbn {
            validate_isbn(isbn)?;
        }

        self.repository.books.update(id, &book).await
    }

    /// Delete a book and, atomically, every mapping referencing it
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.repository.books.delete(id).await?;
        tracing::info!("Deleted book {} (cascaded to its mappings)", id);
        Ok(())
    }

    /// Libraries holding a book, paginated, optionally filtered by mapping
    /// status
    pub async fn libraries_with_book(
        &self,
        book_id: i32,
        query: &JoinedQuery,
    ) -> AppResult<Paginated<LibraryWithBook>> {
        let (page, limit) = resolve_page(query.page, query.limit)?;

        // Distinguish "unknown book" from "book in no library"
        self.repository.books.get_by_id(book_id).await?;

        let (rows, total) = self
            .repository
            .mappings
            .libraries_with_book(book_id, query.status, page, limit)
            .await?;
        Ok(Paginated::new(rows, total, page, limit))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_10_and_13_digit_isbns() {
        assert!(validate_isbn("9781234567890").is_ok());
        assert!(validate_isbn("1234567890").is_ok());
        assert!(validate_isbn("978-1-23456-789-0").is_ok());
        assert!(validate_isbn("978 1 23456 789 0").is_ok());
    }

    #[test]
    fn rejects_bad_lengths() {
        assert!(validate_isbn("123").is_err());
        assert!(validate_isbn("123456789012").is_err());
        assert!(validate_isbn("12345678901234").is_err());
        assert!(validate_isbn("").is_err());
    }

    #[test]
    fn rejects_non_digit_characters() {
        assert!(validate_isbn("97812345678X0").is_err());
        assert!(validate_isbn("abcdefghij").is_err());
        assert!(validate_isbn("978_1234567890").is_err());
    }
}
