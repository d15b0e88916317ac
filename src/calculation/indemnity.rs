//! Seniority indemnity calculation.
//!
//! The indemnity for years of service is owed only when the employer
//! terminates for business needs (Art. 161). One month of remuneration is
//! paid per completed year of service, with the statutory cap of eleven
//! months; the month of remuneration includes the variable-pay average.

use rust_decimal::Decimal;

use crate::models::TerminationCause;

/// The statutory cap on indemnifiable months (Art. 163).
pub fn seniority_cap_months() -> Decimal {
    Decimal::new(11, 0)
}

/// The result of a seniority indemnity calculation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndemnityResult {
    /// Completed years of service (tenure floored).
    pub completed_years: Decimal,
    /// Months actually indemnified after applying the cap; zero when the
    /// cause does not trigger the indemnity.
    pub months_paid: Decimal,
    /// The indemnity amount.
    pub amount: Decimal,
}

/// Calculates the seniority indemnity.
///
/// # Arguments
///
/// * `cause` - The termination cause; only Art. 161 triggers the indemnity
/// * `years_worked` - Continuous years of service
/// * `base_salary` - The monthly base salary
/// * `variable_average` - The three-month variable-remuneration average
///
/// # Example
///
/// ```
/// use toolbox_engine::calculation::calculate_seniority_indemnity;
/// use toolbox_engine::models::TerminationCause;
/// use rust_decimal::Decimal;
///
/// let result = calculate_seniority_indemnity(
///     TerminationCause::BusinessNeeds,
///     Decimal::new(4, 0),
///     Decimal::new(1_000_000, 0),
///     Decimal::ZERO,
/// );
/// assert_eq!(result.amount, Decimal::new(4_000_000, 0));
/// ```
pub fn calculate_seniority_indemnity(
    cause: TerminationCause,
    years_worked: Decimal,
    base_salary: Decimal,
    variable_average: Decimal,
) -> IndemnityResult {
    let completed_years = years_worked.floor();

    if !cause.is_employer_initiated() {
        return IndemnityResult {
            completed_years,
            months_paid: Decimal::ZERO,
            amount: Decimal::ZERO,
        };
    }

    let months_paid = completed_years.min(seniority_cap_months());
    let amount = months_paid * (base_salary + variable_average);

    IndemnityResult {
        completed_years,
        months_paid,
        amount,
    }
}
