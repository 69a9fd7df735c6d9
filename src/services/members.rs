//! Member management service

use chrono::{Duration, NaiveDate};
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::user::{CreateMember, Member},
    repository::Repository,
};

/// Membership validity window, in days
const MEMBERSHIP_DAYS: i64 = 60;

#[derive(Clone)]
pub struct MembersService {
    repository: Repository,
}

impl MembersService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Register a new member. The membership window starts today.
    pub async fn create(&self, request: CreateMember, today: NaiveDate) -> AppResult<Member> {
        request
            .validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        let expiry = today + Duration::days(MEMBERSHIP_DAYS);
        self.repository.users.create(&request, today, expiry).await
    }

    pub async fn list(&self) -> AppResult<Vec<Member>> {
        self.repository.users.list().await
    }

    pub async fn get_by_username(&self, username: &str) -> AppResult<Member> {
        self.repository.users.get_by_username(username).await
    }
}
