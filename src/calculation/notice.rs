//! Notice-period pay calculation.
//!
//! When the employer terminates for business needs without the statutory
//! advance notice, one month of base salary substitutes for the notice
//! period. No other cause owes it.

use rust_decimal::Decimal;

use crate::models::TerminationCause;

/// The result of a notice-period pay calculation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoticePayResult {
    /// The amount payable in lieu of notice.
    pub amount: Decimal,
}

/// Calculates the notice-period pay.
///
/// # Example
///
/// ```
/// use toolbox_engine::calculation::calculate_notice_pay;
/// use toolbox_engine::models::TerminationCause;
/// use rust_decimal::Decimal;
///
/// let owed = calculate_notice_pay(TerminationCause::BusinessNeeds, Decimal::new(1_000_000, 0));
/// assert_eq!(owed.amount, Decimal::new(1_000_000, 0));
///
/// let not_owed = calculate_notice_pay(TerminationCause::Resignation, Decimal::new(1_000_000, 0));
/// assert_eq!(not_owed.amount, Decimal::ZERO);
/// ```
pub fn calculate_notice_pay(cause: TerminationCause, base_salary: Decimal) -> NoticePayResult {
    let amount = if cause.is_employer_initiated() {
        base_salary
    } else {
        Decimal::ZERO
    };
    NoticePayResult { amount }
}
