//! Late-fee computation for closed loans

use chrono::NaiveDate;

use crate::config::LoansConfig;

/// Fee for a loan due on `expected` and handed back on `returned`.
///
/// Overdue days count forward only: `returned - expected`, floored at zero.
/// Returns inside the grace window cost nothing; past it the whole overdue
/// span is charged at the per-day rate, not just the days beyond the grace.
pub fn late_fee(expected: NaiveDate, returned: NaiveDate, policy: &LoansConfig) -> i64 {
    let days_overdue = (returned - expected).num_days().max(0);
    if days_overdue > policy.grace_days {
        days_overdue * policy.fine_rate
    } else {
        0
    }
}
