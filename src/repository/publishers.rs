//! Publishers repository

use sqlx::SqlitePool;

use crate::{
    error::{AppError, AppResult},
    models::publisher::{CreatePublisher, Publisher},
};

#[derive(Clone)]
pub struct PublishersRepository {
    pool: SqlitePool,
}

impl PublishersRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// List all publishers
    pub async fn list(&self) -> AppResult<Vec<Publisher>> {
        let rows = sqlx::query_as::<_, Publisher>("SELECT * FROM publishers ORDER BY name")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Get publisher by ID
    pub async fn get_by_id(&self, id: i64) -> AppResult<Publisher> {
        sqlx::query_as::<_, Publisher>("SELECT * FROM publishers WHERE id = ?1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("No publisher with the id {}", id)))
    }

    /// Create a new publisher
    pub async fn create(&self, publisher: &CreatePublisher) -> AppResult<Publisher> {
        sqlx::query_as::<_, Publisher>(
            "INSERT INTO publishers (name, address, phone_number) VALUES (?1, ?2, ?3) RETURNING *",
        )
        .bind(&publisher.name)
        .bind(&publisher.address)
        .bind(publisher.phone_number)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::from(e)
                .on_unique(format!("Publisher named {} already exists", publisher.name))
        })
    }
}
