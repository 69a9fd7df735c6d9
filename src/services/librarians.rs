//! Librarian accounts and credential verification

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::librarian::{CreateLibrarian, Librarian},
    repository::Repository,
};

#[derive(Clone)]
pub struct LibrariansService {
    repository: Repository,
}

impl LibrariansService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Register a librarian; the password is stored as an Argon2 hash
    pub async fn create(&self, request: CreateLibrarian) -> AppResult<Librarian> {
        request
            .validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        let password_hash = hash_password(&request.password)?;
        self.repository.librarians.create(&request, &password_hash).await
    }

    pub async fn list(&self) -> AppResult<Vec<Librarian>> {
        self.repository.librarians.list().await
    }

    /// Check email/password credentials. Unknown email and wrong password
    /// are indistinguishable to the caller.
    pub async fn verify_credentials(&self, email: &str, password: &str) -> AppResult<Librarian> {
        let account = match self.repository.librarians.get_by_email(email).await {
            Ok(account) => account,
            Err(AppError::NotFound(_)) => {
                return Err(AppError::Unauthorized("Invalid email or password".to_string()))
            }
            Err(e) => return Err(e),
        };

        let parsed_hash = PasswordHash::new(&account.password_hash)
            .map_err(|e| AppError::Internal(format!("stored password hash is invalid: {}", e)))?;

        Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .map_err(|_| AppError::Unauthorized("Invalid email or password".to_string()))?;

        Ok(account.into())
    }
}

fn hash_password(password: &str) -> AppResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AppError::Internal(format!("password hashing failed: {}", e)))?;
    Ok(hash.to_string())
}
