//! Books repository

use sqlx::SqlitePool;
use tracing::debug;

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, CreateBook},
};

#[derive(Clone)]
pub struct BooksRepository {
    pool: SqlitePool,
}

impl BooksRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// List all books
    pub async fn list(&self) -> AppResult<Vec<Book>> {
        let rows = sqlx::query_as::<_, Book>("SELECT * FROM books ORDER BY title")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Get book by ISBN
    pub async fn get_by_isbn(&self, isbn: &str) -> AppResult<Book> {
        sqlx::query_as::<_, Book>("SELECT * FROM books WHERE isbn_number = ?1")
            .bind(isbn)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("No book with the ISBN number {}", isbn)))
    }

    /// Create a new book
    pub async fn create(&self, book: &CreateBook) -> AppResult<Book> {
        debug!(isbn = %book.isbn_number, title = %book.title, "Creating book");

        sqlx::query_as::<_, Book>(
            r#"
            INSERT INTO books (isbn_number, title, author, price, genre_id, publisher_id, available_number)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
            RETURNING *
            "#,
        )
        .bind(&book.isbn_number)
        .bind(&book.title)
        .bind(book.author.as_deref().unwrap_or("Folklore"))
        .bind(book.price)
        .bind(book.genre_id)
        .bind(book.publisher_id)
        .bind(book.available_number)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::from(e).on_unique(format!(
                "Book with ISBN number {} already exists",
                book.isbn_number
            ))
        })
    }
}
