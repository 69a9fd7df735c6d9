//! Circulation record model and related types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// A loan transaction, the authoritative unit of circulation state.
/// Exactly one of `book_id` / `magazine_id` is set. A record is created
/// open (`returned = false`) and closed exactly once on return.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Record {
    pub id: i64,
    pub member_id: i64,
    pub book_id: Option<String>,
    pub magazine_id: Option<String>,
    pub genre_id: Option<i64>,
    pub issued_date: NaiveDate,
    pub expected_return_date: NaiveDate,
    pub returned_date: Option<NaiveDate>,
    pub returned: bool,
}

/// Open loan with member and item context for display
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct LoanDetails {
    pub id: i64,
    pub username: String,
    /// "book" or "magazine"
    pub item_kind: String,
    /// ISBN or ISSN of the borrowed item
    pub item_key: String,
    pub title: String,
    pub issued_date: NaiveDate,
    pub expected_return_date: NaiveDate,
    pub is_overdue: bool,
}
