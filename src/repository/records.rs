//! Circulation records repository.
//!
//! Pool-level methods serve the derived "currently held" views; the
//! `pub(crate)` primitives take an explicit connection so the circulation
//! service can compose them inside a single transaction.

use chrono::NaiveDate;
use sqlx::{SqliteConnection, SqlitePool};

use crate::{
    error::{AppError, AppResult},
    models::{
        item::{ItemKind, ItemSummary},
        record::{LoanDetails, Record},
    },
};

const RECORD_COLUMNS: &str =
    "id, member_id, book_id, magazine_id, genre_id, issued_date, expected_return_date, returned_date, returned";

#[derive(Clone)]
pub struct RecordsRepository {
    pool: SqlitePool,
}

impl RecordsRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open loans for one member, the authoritative held-items view
    pub async fn open_for_member(
        &self,
        member_id: i64,
        today: NaiveDate,
    ) -> AppResult<Vec<LoanDetails>> {
        let rows = sqlx::query_as::<_, LoanDetails>(&format!(
            "{} AND r.member_id = ?2 ORDER BY r.issued_date, r.id",
            OPEN_LOANS_QUERY
        ))
        .bind(today)
        .bind(member_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Full circulation history for a member, open and closed records alike.
    /// Records are never deleted, so this is the member's complete trail.
    pub async fn history_for_member(&self, member_id: i64) -> AppResult<Vec<Record>> {
        let rows = sqlx::query_as::<_, Record>(&format!(
            "SELECT {RECORD_COLUMNS} FROM records WHERE member_id = ?1 ORDER BY id"
        ))
        .bind(member_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// All open loans, oldest first
    pub async fn list_open(&self, today: NaiveDate) -> AppResult<Vec<LoanDetails>> {
        let rows = sqlx::query_as::<_, LoanDetails>(&format!(
            "{} ORDER BY r.issued_date, r.id",
            OPEN_LOANS_QUERY
        ))
        .bind(today)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Item columns the ledger needs, by natural key
    pub(crate) async fn fetch_item(
        conn: &mut SqliteConnection,
        kind: ItemKind,
        key: &str,
    ) -> AppResult<ItemSummary> {
        let sql = format!(
            "SELECT {key_col} AS key, title, genre_id, available_number FROM {table} WHERE {key_col} = ?1",
            key_col = kind.key_column(),
            table = kind.table(),
        );
        sqlx::query_as::<_, ItemSummary>(&sql)
            .bind(key)
            .fetch_optional(&mut *conn)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!(
                    "No {} with the {} {}",
                    kind.label(),
                    kind.key_label(),
                    key
                ))
            })
    }

    /// The open record for (member, item), if any
    pub(crate) async fn find_open(
        conn: &mut SqliteConnection,
        kind: ItemKind,
        member_id: i64,
        key: &str,
    ) -> AppResult<Option<Record>> {
        let sql = format!(
            "SELECT {RECORD_COLUMNS} FROM records WHERE member_id = ?1 AND {record_col} = ?2 AND returned = 0",
            record_col = kind.record_column(),
        );
        let record = sqlx::query_as::<_, Record>(&sql)
            .bind(member_id)
            .bind(key)
            .fetch_optional(&mut *conn)
            .await?;
        Ok(record)
    }

    /// Take one copy off the shelf. Returns false when none is available;
    /// the guard keeps `available_number` from ever going negative, even
    /// under concurrent issuance.
    pub(crate) async fn take_copy(
        conn: &mut SqliteConnection,
        kind: ItemKind,
        key: &str,
    ) -> AppResult<bool> {
        let sql = format!(
            "UPDATE {table} SET available_number = available_number - 1 WHERE {key_col} = ?1 AND available_number > 0",
            table = kind.table(),
            key_col = kind.key_column(),
        );
        let result = sqlx::query(&sql).bind(key).execute(&mut *conn).await?;
        Ok(result.rows_affected() == 1)
    }

    /// Put a returned copy back on the shelf
    pub(crate) async fn put_back_copy(
        conn: &mut SqliteConnection,
        kind: ItemKind,
        key: &str,
    ) -> AppResult<()> {
        let sql = format!(
            "UPDATE {table} SET available_number = available_number + 1 WHERE {key_col} = ?1",
            table = kind.table(),
            key_col = kind.key_column(),
        );
        sqlx::query(&sql).bind(key).execute(&mut *conn).await?;
        Ok(())
    }

    /// Insert a new open record
    pub(crate) async fn insert(
        conn: &mut SqliteConnection,
        kind: ItemKind,
        member_id: i64,
        key: &str,
        genre_id: Option<i64>,
        issued_date: NaiveDate,
        expected_return_date: NaiveDate,
    ) -> AppResult<Record> {
        let sql = format!(
            "INSERT INTO records (member_id, {record_col}, genre_id, issued_date, expected_return_date) \
             VALUES (?1, ?2, ?3, ?4, ?5) RETURNING {RECORD_COLUMNS}",
            record_col = kind.record_column(),
        );
        let record = sqlx::query_as::<_, Record>(&sql)
            .bind(member_id)
            .bind(key)
            .bind(genre_id)
            .bind(issued_date)
            .bind(expected_return_date)
            .fetch_one(&mut *conn)
            .await?;
        Ok(record)
    }

    /// Close an open record. The `returned = 0` guard makes the
    /// open-to-closed transition fire at most once.
    pub(crate) async fn close(
        conn: &mut SqliteConnection,
        record_id: i64,
        returned_date: NaiveDate,
    ) -> AppResult<()> {
        let result =
            sqlx::query("UPDATE records SET returned = 1, returned_date = ?1 WHERE id = ?2 AND returned = 0")
                .bind(returned_date)
                .bind(record_id)
                .execute(&mut *conn)
                .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::Internal(format!(
                "record {} is already closed",
                record_id
            )));
        }
        Ok(())
    }
}

/// Shared SELECT for the open-loan views. `?1` is the reference date for
/// the overdue flag.
const OPEN_LOANS_QUERY: &str = r#"
SELECT r.id,
       u.username,
       CASE WHEN r.book_id IS NOT NULL THEN 'book' ELSE 'magazine' END AS item_kind,
       COALESCE(r.book_id, r.magazine_id) AS item_key,
       COALESCE(b.title, m.title) AS title,
       r.issued_date,
       r.expected_return_date,
       r.expected_return_date < ?1 AS is_overdue
FROM records r
JOIN users u ON u.id = r.member_id
LEFT JOIN books b ON b.isbn_number = r.book_id
LEFT JOIN magazines m ON m.issn_number = r.magazine_id
WHERE r.returned = 0
"#;
