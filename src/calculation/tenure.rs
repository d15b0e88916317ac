//! Tenure calculation.
//!
//! Tenure is the continuous time worked between hire and termination,
//! expressed in average years of 365.25 days. The fractional value feeds the
//! vacation proration; the seniority indemnity floors it to completed years.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};

/// The average length of a year in days, accounting for leap years.
pub fn average_days_per_year() -> Decimal {
    Decimal::new(36525, 2)
}

/// The result of a tenure calculation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TenureResult {
    /// Whole days between hire and termination.
    pub days: i64,
    /// Continuous (non-integer) years of service.
    pub years: Decimal,
}

/// Calculates the tenure between two employment dates.
///
/// # Errors
///
/// Returns [`EngineError::InvalidInput`] when the termination date precedes
/// the hire date. The engine rejects such a case outright rather than
/// coercing it into a zero-tenure computation.
///
/// # Example
///
/// ```
/// use toolbox_engine::calculation::calculate_tenure;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let hire = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
/// let termination = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// let tenure = calculate_tenure(hire, termination).unwrap();
/// assert_eq!(tenure.days, 1461);
/// assert_eq!(tenure.years, Decimal::new(4, 0));
/// ```
pub fn calculate_tenure(
    hire_date: NaiveDate,
    termination_date: NaiveDate,
) -> EngineResult<TenureResult> {
    if termination_date < hire_date {
        return Err(EngineError::invalid_input(
            "termination_date",
            "must not be earlier than hire_date",
        ));
    }

    let days = (termination_date - hire_date).num_days();
    let years = Decimal::from(days) / average_days_per_year();

    Ok(TenureResult { days, years })
}
