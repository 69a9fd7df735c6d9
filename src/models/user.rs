//! Member (library user) model and request types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Member record. The items a member currently holds are not stored here;
/// they are derived from open circulation records.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Member {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub address: String,
    pub phone_number: Option<i64>,
    pub date_created: NaiveDate,
    pub expiry_date: NaiveDate,
    /// Accumulated late fees, in currency units
    pub fine: i64,
}

/// Create member request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateMember {
    #[validate(length(min = 1, max = 50))]
    pub username: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1, max = 200))]
    pub address: String,
    pub phone_number: Option<i64>,
}
