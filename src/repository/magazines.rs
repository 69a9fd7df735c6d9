//! Magazines repository

use sqlx::SqlitePool;
use tracing::debug;

use crate::{
    error::{AppError, AppResult},
    models::magazine::{CreateMagazine, Magazine},
};

#[derive(Clone)]
pub struct MagazinesRepository {
    pool: SqlitePool,
}

impl MagazinesRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// List all magazines
    pub async fn list(&self) -> AppResult<Vec<Magazine>> {
        let rows = sqlx::query_as::<_, Magazine>("SELECT * FROM magazines ORDER BY title")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Get magazine by ISSN
    pub async fn get_by_issn(&self, issn: &str) -> AppResult<Magazine> {
        sqlx::query_as::<_, Magazine>("SELECT * FROM magazines WHERE issn_number = ?1")
            .bind(issn)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("No magazine with the ISSN number {}", issn))
            })
    }

    /// Create a new magazine
    pub async fn create(&self, magazine: &CreateMagazine) -> AppResult<Magazine> {
        debug!(issn = %magazine.issn_number, title = %magazine.title, "Creating magazine");

        sqlx::query_as::<_, Magazine>(
            r#"
            INSERT INTO magazines (issn_number, title, editor, price, genre_id, publisher_id, available_number)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
            RETURNING *
            "#,
        )
        .bind(&magazine.issn_number)
        .bind(&magazine.title)
        .bind(magazine.editor.as_deref().unwrap_or("Folklore"))
        .bind(magazine.price)
        .bind(magazine.genre_id)
        .bind(magazine.publisher_id)
        .bind(magazine.available_number)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::from(e).on_unique(format!(
                "Magazine with ISSN number {} already exists",
                magazine.issn_number
            ))
        })
    }
}
