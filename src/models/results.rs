//! Aggregate result models.
//!
//! This module contains the result types the engines hand back to the UI
//! shell. Each result carries every intermediate alongside the headline
//! figure so callers can render an auditable breakdown; locale formatting
//! (long-form dates, zero-decimal currency) is applied by the presentation
//! layer, never here.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The result of a deadline computation.
///
/// # Invariants
///
/// `counted_dates` is chronological, has exactly `day_count` entries, and its
/// last entry equals `end_date`. Zero-day requests are rejected before a
/// result exists, so `counted_dates` is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeadlineResult {
    /// The date on which the deadline expires.
    pub end_date: NaiveDate,
    /// Every date that counted toward the day total, in chronological order.
    /// Callers use this to render a compact "first N / last N" summary when
    /// the list is long.
    pub counted_dates: Vec<NaiveDate>,
}

impl DeadlineResult {
    /// The first and last counted dates.
    pub fn span(&self) -> Option<(NaiveDate, NaiveDate)> {
        match (self.counted_dates.first(), self.counted_dates.last()) {
            (Some(first), Some(last)) => Some((*first, *last)),
            _ => None,
        }
    }
}

/// The result of a severance computation, with every additive component.
///
/// The `total` is the exact sum of `base_salary`, `other_taxable_income`,
/// `other_non_taxable_income`, `variable_average`, `vacation_pay`,
/// `seniority_indemnity`, and `notice_pay`, computed at full precision.
/// Rounding to whole pesos happens only where the value is displayed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettlementResult {
    /// Days between hire and termination.
    pub tenure_days: i64,
    /// Continuous years of service (`tenure_days / 365.25`).
    pub years_worked: Decimal,
    /// Vacation days earned over the whole tenure (15 per year, floored).
    pub vacation_days_earned: Decimal,
    /// Vacation days still owed after subtracting days taken (never negative).
    pub vacation_days_owed: Decimal,
    /// Pay for the owed vacation days.
    pub vacation_pay: Decimal,
    /// Average variable remuneration over the three-month lookback.
    pub variable_average: Decimal,
    /// Seniority indemnity (Art. 161 only, capped at eleven months).
    pub seniority_indemnity: Decimal,
    /// Notice-period pay (Art. 161 only).
    pub notice_pay: Decimal,
    /// The base salary the case was computed with.
    pub base_salary: Decimal,
    /// Other taxable remuneration included in the total.
    pub other_taxable_income: Decimal,
    /// Other non-taxable remuneration included in the total.
    pub other_non_taxable_income: Decimal,
    /// The exact settlement total.
    pub total: Decimal,
}

/// The result of a receipt-batch computation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiptsResult {
    /// The per-receipt amount the batch was computed with.
    pub amount_per_receipt: Decimal,
    /// The number of receipts in the batch.
    pub count: u32,
    /// The batch total (`amount_per_receipt * count`).
    pub total: Decimal,
}
