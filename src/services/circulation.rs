//! Loan ledger: issuing and returning circulating items.
//!
//! Every operation runs its whole read-check-mutate sequence inside one
//! transaction, so a failure at any step leaves no partial effect behind.
//! The reference date (`today`) is supplied by the caller per operation.

use chrono::{Duration, NaiveDate};
use tracing::debug;

use crate::{
    config::LoansConfig,
    error::{AppError, AppResult},
    models::{
        item::ItemKind,
        record::{LoanDetails, Record},
    },
    repository::{records::RecordsRepository, users::UsersRepository, Repository},
};

#[derive(Clone)]
pub struct CirculationService {
    repository: Repository,
    policy: LoansConfig,
}

impl CirculationService {
    pub fn new(repository: Repository, policy: LoansConfig) -> Self {
        Self { repository, policy }
    }

    /// Issue an item to a member and open a circulation record.
    ///
    /// The duplicate check runs before the stock check: a member already
    /// holding the last copy of an item gets "already issued", not
    /// "out of stock".
    pub async fn issue(
        &self,
        kind: ItemKind,
        username: &str,
        key: &str,
        days: Option<i64>,
        today: NaiveDate,
    ) -> AppResult<Record> {
        let days = days.unwrap_or(self.policy.period_days);
        if days < 1 {
            return Err(AppError::Validation(
                "loan period must be at least one day".to_string(),
            ));
        }

        let mut tx = self.repository.begin().await?;

        let item = RecordsRepository::fetch_item(&mut *tx, kind, key).await?;
        let member = UsersRepository::fetch_by_username(&mut *tx, username).await?;

        if RecordsRepository::find_open(&mut *tx, kind, member.id, key)
            .await?
            .is_some()
        {
            return Err(AppError::DuplicateLoan(format!(
                "{} has already issued the {} {}",
                username,
                kind.label(),
                item.title
            )));
        }

        if !RecordsRepository::take_copy(&mut *tx, kind, key).await? {
            return Err(AppError::OutOfStock(format!(
                "{} is currently out of stock",
                item.title
            )));
        }

        let record = RecordsRepository::insert(
            &mut *tx,
            kind,
            member.id,
            key,
            item.genre_id,
            today,
            today + Duration::days(days),
        )
        .await?;

        tx.commit().await?;

        debug!(username, key, record_id = record.id, "item issued");
        Ok(record)
    }

    /// Close the member's open record for the item and compute the late
    /// fee. A non-zero fee is accumulated onto the member's balance in the
    /// same transaction.
    pub async fn return_item(
        &self,
        kind: ItemKind,
        username: &str,
        key: &str,
        today: NaiveDate,
    ) -> AppResult<i64> {
        let mut tx = self.repository.begin().await?;

        let item = RecordsRepository::fetch_item(&mut *tx, kind, key).await?;
        let member = UsersRepository::fetch_by_username(&mut *tx, username).await?;

        let record = RecordsRepository::find_open(&mut *tx, kind, member.id, key)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("{} has not borrowed {}", username, item.title))
            })?;

        let fine = super::fine::late_fee(record.expected_return_date, today, &self.policy);

        RecordsRepository::put_back_copy(&mut *tx, kind, key).await?;
        RecordsRepository::close(&mut *tx, record.id, today).await?;
        if fine > 0 {
            UsersRepository::add_fine(&mut *tx, member.id, fine).await?;
        }

        tx.commit().await?;

        debug!(username, key, fine, "item returned");
        Ok(fine)
    }

    /// Open loans for one member (the derived held-items view)
    pub async fn member_loans(
        &self,
        username: &str,
        today: NaiveDate,
    ) -> AppResult<Vec<LoanDetails>> {
        let member = self.repository.users.get_by_username(username).await?;
        self.repository.records.open_for_member(member.id, today).await
    }

    /// Every record a member ever generated, open and closed
    pub async fn member_history(&self, username: &str) -> AppResult<Vec<Record>> {
        let member = self.repository.users.get_by_username(username).await?;
        self.repository.records.history_for_member(member.id).await
    }

    /// All open loans
    pub async fn open_loans(&self, today: NaiveDate) -> AppResult<Vec<LoanDetails>> {
        self.repository.records.list_open(today).await
    }
}
