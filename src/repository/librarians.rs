//! Librarians repository

use sqlx::SqlitePool;
use tracing::debug;

use crate::{
    error::{AppError, AppResult},
    models::librarian::{CreateLibrarian, Librarian, LibrarianAccount},
};

#[derive(Clone)]
pub struct LibrariansRepository {
    pool: SqlitePool,
}

impl LibrariansRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// List all librarians, without password hashes
    pub async fn list(&self) -> AppResult<Vec<Librarian>> {
        let rows = sqlx::query_as::<_, Librarian>(
            "SELECT id, name, email, address, phone_number FROM librarians ORDER BY name",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Get the full account row, including the password hash, for
    /// credential verification
    pub async fn get_by_email(&self, email: &str) -> AppResult<LibrarianAccount> {
        sqlx::query_as::<_, LibrarianAccount>("SELECT * FROM librarians WHERE email = ?1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("No librarian with the email {}", email)))
    }

    /// Create a new librarian with an already-hashed password
    pub async fn create(
        &self,
        librarian: &CreateLibrarian,
        password_hash: &str,
    ) -> AppResult<Librarian> {
        debug!(name = %librarian.name, "Creating librarian");

        sqlx::query_as::<_, Librarian>(
            r#"
            INSERT INTO librarians (name, email, password_hash, address, phone_number)
            VALUES (?1, ?2, ?3, ?4, ?5)
            RETURNING id, name, email, address, phone_number
            "#,
        )
        .bind(&librarian.name)
        .bind(&librarian.email)
        .bind(password_hash)
        .bind(&librarian.address)
        .bind(librarian.phone_number)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::from(e).on_unique(format!(
                "Librarian with name {} or email {} already exists",
                librarian.name, librarian.email
            ))
        })
    }
}
