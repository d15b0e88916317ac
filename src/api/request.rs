//! Request types for the Tool Box engine API.
//!
//! This module defines the JSON request structures for the calculation
//! endpoints. The UI shell validates raw text input and sends the semantic
//! types; unset numeric fields arrive as zero or are omitted entirely.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{
    DayCountRule, MonthDay, SettlementCase, TerminationCause, VariableRemuneration,
};

/// Request body for the `POST /deadline` endpoint.
///
/// Manual `day_count`/`rule` selections are applied first; when `matter`
/// names a known preset it overwrites both, matching the form behavior where
/// choosing a matter replaces whatever was typed. An unknown or empty matter
/// changes nothing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeadlineRequest {
    /// The date the deadline starts running from.
    pub start_date: NaiveDate,
    /// The number of days to count.
    #[serde(default)]
    pub day_count: Option<u32>,
    /// The counting rule; defaults to business days when omitted.
    #[serde(default)]
    pub rule: Option<DayCountRule>,
    /// Optional legal-matter preset name.
    #[serde(default)]
    pub matter: Option<String>,
    /// Custom holidays (month-day, any year) for this calculation.
    #[serde(default)]
    pub custom_holidays: Vec<MonthDay>,
    /// Full dates excluded from the counted sequence.
    #[serde(default)]
    pub excluded_dates: Vec<NaiveDate>,
}

/// Request body for the `POST /settlement` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettlementRequest {
    /// The date the employee was hired.
    pub hire_date: NaiveDate,
    /// The last day of the contract.
    pub termination_date: NaiveDate,
    /// The legal cause of termination.
    pub cause: TerminationCause,
    /// Vacation days already taken.
    #[serde(default)]
    pub vacation_days_taken: u32,
    /// The monthly base salary.
    pub base_salary: Decimal,
    /// Other taxable remuneration.
    #[serde(default)]
    pub other_taxable_income: Decimal,
    /// Other non-taxable remuneration.
    #[serde(default)]
    pub other_non_taxable_income: Decimal,
    /// The variable-remuneration lookback, when the employee has variable pay.
    #[serde(default)]
    pub variable_remuneration: Option<VariableRemuneration>,
}

impl SettlementRequest {
    /// Converts the request into the engine's case model.
    pub fn into_case(self) -> SettlementCase {
        SettlementCase {
            hire_date: self.hire_date,
            termination_date: self.termination_date,
            cause: self.cause,
            vacation_days_taken: self.vacation_days_taken,
            base_salary: self.base_salary,
            other_taxable_income: self.other_taxable_income,
            other_non_taxable_income: self.other_non_taxable_income,
            variable_remuneration: self.variable_remuneration,
        }
    }
}

/// Request body for the `POST /receipts` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReceiptsRequest {
    /// The per-receipt amount.
    pub amount_per_receipt: Decimal,
    /// The number of receipts in the batch.
    pub count: u32,
}
