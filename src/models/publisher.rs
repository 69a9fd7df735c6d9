//! Publisher model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Publisher record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Publisher {
    pub id: i64,
    pub name: String,
    pub address: Option<String>,
    pub phone_number: Option<i64>,
}

/// Create publisher request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreatePublisher {
    #[validate(length(min = 1, max = 50))]
    pub name: String,
    #[validate(length(max = 200))]
    pub address: Option<String>,
    pub phone_number: Option<i64>,
}
