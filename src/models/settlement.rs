//! Severance case model.
//!
//! This module defines the inputs of a finiquito calculation: the termination
//! cause under the Chilean labor code, the optional variable-remuneration
//! lookback, and the [`SettlementCase`] aggregate the engine consumes.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// The legal cause terminating the employment contract.
///
/// Only [`TerminationCause::BusinessNeeds`] (Art. 161) triggers the
/// employer-side payments: seniority indemnity and notice-period pay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TerminationCause {
    /// Art. 159 número 2: renuncia del trabajador.
    Resignation,
    /// Art. 159 número 4: vencimiento del plazo convenido.
    AgreedTermExpiry,
    /// Art. 161: necesidades de la empresa.
    BusinessNeeds,
}

impl TerminationCause {
    /// The statutory label for this cause.
    pub fn article(&self) -> &'static str {
        match self {
            TerminationCause::Resignation => "Art. 159 número 2: Renuncia",
            TerminationCause::AgreedTermExpiry => {
                "Art. 159 número 4: Vencimiento del plazo convenido"
            }
            TerminationCause::BusinessNeeds => "Art. 161: Necesidades de la empresa",
        }
    }

    /// Returns true iff this cause obliges the employer to pay seniority
    /// indemnity and notice-period pay.
    pub fn is_employer_initiated(&self) -> bool {
        matches!(self, TerminationCause::BusinessNeeds)
    }
}

impl std::fmt::Display for TerminationCause {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.article())
    }
}

/// Variable remuneration over the fixed three-month lookback window.
///
/// Months the caller does not supply default to zero; the averaging divisor
/// is always three regardless of how many entries are populated.
///
/// # Example
///
/// ```
/// use toolbox_engine::models::VariableRemuneration;
/// use rust_decimal::Decimal;
///
/// let partial: VariableRemuneration = serde_json::from_str(
///     r#"{"first_prior_month": "300000"}"#,
/// ).unwrap();
/// assert_eq!(partial.total(), Decimal::new(300_000, 0));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariableRemuneration {
    /// Amount for the most recent full month before termination.
    #[serde(default)]
    pub first_prior_month: Decimal,
    /// Amount for the second month before termination.
    #[serde(default)]
    pub second_prior_month: Decimal,
    /// Amount for the third month before termination.
    #[serde(default)]
    pub third_prior_month: Decimal,
}

impl VariableRemuneration {
    /// Sum of the three monthly entries.
    pub fn total(&self) -> Decimal {
        self.first_prior_month + self.second_prior_month + self.third_prior_month
    }
}

/// The inputs of one severance calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettlementCase {
    /// The date the employee was hired.
    pub hire_date: NaiveDate,
    /// The last day of the contract; must not precede `hire_date`.
    pub termination_date: NaiveDate,
    /// The legal cause of termination.
    pub cause: TerminationCause,
    /// Vacation days already taken during employment.
    #[serde(default)]
    pub vacation_days_taken: u32,
    /// The monthly base salary.
    pub base_salary: Decimal,
    /// Other taxable remuneration for the final month.
    #[serde(default)]
    pub other_taxable_income: Decimal,
    /// Other non-taxable remuneration for the final month.
    #[serde(default)]
    pub other_non_taxable_income: Decimal,
    /// The variable-remuneration lookback, when the employee has variable pay.
    #[serde(default)]
    pub variable_remuneration: Option<VariableRemuneration>,
}

impl SettlementCase {
    /// Validates the case before any arithmetic runs.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidInput`] when the termination date
    /// precedes the hire date or any monetary amount is negative. A rejected
    /// case produces no partial result.
    pub fn validate(&self) -> EngineResult<()> {
        if self.termination_date < self.hire_date {
            return Err(EngineError::invalid_input(
                "termination_date",
                "must not be earlier than hire_date",
            ));
        }
        for (field, amount) in self.monetary_fields() {
            if amount < Decimal::ZERO {
                return Err(EngineError::invalid_input(field, "must not be negative"));
            }
        }
        Ok(())
    }

    fn monetary_fields(&self) -> Vec<(&'static str, Decimal)> {
        let mut fields = vec![
            ("base_salary", self.base_salary),
            ("other_taxable_income", self.other_taxable_income),
            ("other_non_taxable_income", self.other_non_taxable_income),
        ];
        if let Some(variable) = &self.variable_remuneration {
            fields.push(("variable_remuneration.first_prior_month", variable.first_prior_month));
            fields.push(("variable_remuneration.second_prior_month", variable.second_prior_month));
            fields.push(("variable_remuneration.third_prior_month", variable.third_prior_month));
        }
        fields
    }
}
