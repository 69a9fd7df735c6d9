//! Magazine model and request types

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Magazine record, keyed by its ISSN
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Magazine {
    pub issn_number: String,
    pub title: String,
    pub editor: String,
    pub price: i64,
    pub genre_id: Option<i64>,
    pub publisher_id: Option<i64>,
    pub available_number: i64,
}

/// Create magazine request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateMagazine {
    #[validate(length(min = 1, max = 15))]
    pub issn_number: String,
    #[validate(length(min = 1, max = 100))]
    pub title: String,
    /// Defaults to "Folklore" when omitted
    #[validate(length(max = 50))]
    pub editor: Option<String>,
    #[validate(range(min = 0))]
    pub price: i64,
    pub genre_id: Option<i64>,
    pub publisher_id: Option<i64>,
    /// Copies on the shelf at creation time
    #[validate(range(min = 0))]
    pub available_number: i64,
}
