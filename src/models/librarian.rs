//! Librarian account model and request types

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Librarian profile as exposed by the API
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Librarian {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub address: String,
    pub phone_number: Option<i64>,
}

/// Librarian row including the stored password hash. Never serialized.
#[derive(Debug, Clone, FromRow)]
pub struct LibrarianAccount {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub address: String,
    pub phone_number: Option<i64>,
}

impl From<LibrarianAccount> for Librarian {
    fn from(account: LibrarianAccount) -> Self {
        Librarian {
            id: account.id,
            name: account.name,
            email: account.email,
            address: account.address,
            phone_number: account.phone_number,
        }
    }
}

/// Create librarian request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateLibrarian {
    #[validate(length(min = 1, max = 50))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 8))]
    pub password: String,
    #[validate(length(min = 1, max = 200))]
    pub address: String,
    pub phone_number: Option<i64>,
}

/// Librarian login request
#[derive(Debug, Deserialize, ToSchema)]
pub struct LibrarianLogin {
    pub email: String,
    pub password: String,
}
