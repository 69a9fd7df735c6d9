//! Genres repository

use sqlx::SqlitePool;

use crate::{
    error::{AppError, AppResult},
    models::genre::{CreateGenre, Genre},
};

#[derive(Clone)]
pub struct GenresRepository {
    pool: SqlitePool,
}

impl GenresRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// List all genres
    pub async fn list(&self) -> AppResult<Vec<Genre>> {
        let rows = sqlx::query_as::<_, Genre>("SELECT * FROM genres ORDER BY name")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Get genre by ID
    pub async fn get_by_id(&self, id: i64) -> AppResult<Genre> {
        sqlx::query_as::<_, Genre>("SELECT * FROM genres WHERE id = ?1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("No genre with the id {}", id)))
    }

    /// Create a new genre
    pub async fn create(&self, genre: &CreateGenre) -> AppResult<Genre> {
        sqlx::query_as::<_, Genre>("INSERT INTO genres (name) VALUES (?1) RETURNING *")
            .bind(&genre.name)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::from(e).on_unique(format!("Genre with name {} already exists", genre.name))
            })
    }
}
