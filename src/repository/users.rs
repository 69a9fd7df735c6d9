//! Members repository

use chrono::NaiveDate;
use sqlx::{SqliteConnection, SqlitePool};
use tracing::debug;

use crate::{
    error::{AppError, AppResult},
    models::user::{CreateMember, Member},
};

#[derive(Clone)]
pub struct UsersRepository {
    pool: SqlitePool,
}

impl UsersRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// List all members
    pub async fn list(&self) -> AppResult<Vec<Member>> {
        let rows = sqlx::query_as::<_, Member>("SELECT * FROM users ORDER BY username")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Get member by username
    pub async fn get_by_username(&self, username: &str) -> AppResult<Member> {
        let mut conn = self.pool.acquire().await?;
        Self::fetch_by_username(&mut *conn, username).await
    }

    /// Transaction-scoped member lookup
    pub(crate) async fn fetch_by_username(
        conn: &mut SqliteConnection,
        username: &str,
    ) -> AppResult<Member> {
        sqlx::query_as::<_, Member>("SELECT * FROM users WHERE username = ?1")
            .bind(username)
            .fetch_optional(conn)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("No user with the username {}", username)))
    }

    /// Create a new member. `date_created` and `expiry_date` are computed by
    /// the caller for the current operation, never defaulted by the schema.
    pub async fn create(
        &self,
        member: &CreateMember,
        date_created: NaiveDate,
        expiry_date: NaiveDate,
    ) -> AppResult<Member> {
        debug!(username = %member.username, "Creating member");

        sqlx::query_as::<_, Member>(
            r#"
            INSERT INTO users (username, email, address, phone_number, date_created, expiry_date)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            RETURNING *
            "#,
        )
        .bind(&member.username)
        .bind(&member.email)
        .bind(&member.address)
        .bind(member.phone_number)
        .bind(date_created)
        .bind(expiry_date)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::from(e).on_unique(format!(
                "User with username {} already exists",
                member.username
            ))
        })
    }

    /// Accumulate a late fee onto the member's balance, inside the caller's
    /// transaction
    pub(crate) async fn add_fine(
        conn: &mut SqliteConnection,
        member_id: i64,
        amount: i64,
    ) -> AppResult<()> {
        sqlx::query("UPDATE users SET fine = fine + ?1 WHERE id = ?2")
            .bind(amount)
            .bind(member_id)
            .execute(conn)
            .await?;
        Ok(())
    }
}
