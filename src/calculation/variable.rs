//! Variable-remuneration averaging.
//!
//! When the employee has variable pay, the settlement uses the mean of the
//! fixed three-month lookback window. The divisor is always three - months
//! without an entry contribute zero rather than shrinking the window.

use rust_decimal::Decimal;

use crate::models::VariableRemuneration;

/// The fixed length of the lookback window, in months.
pub fn lookback_months() -> Decimal {
    Decimal::new(3, 0)
}

/// The result of averaging the variable remuneration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableAverageResult {
    /// Sum of the lookback entries; zero when the employee has no variable pay.
    pub total: Decimal,
    /// The three-month average feeding the indemnity and the total.
    pub average: Decimal,
}

/// Averages the variable remuneration over the lookback window.
///
/// `None` means the employee has no variable pay; both figures are zero.
///
/// # Example
///
/// ```
/// use toolbox_engine::calculation::average_variable_remuneration;
/// use toolbox_engine::models::VariableRemuneration;
/// use rust_decimal::Decimal;
///
/// let variable = VariableRemuneration {
///     first_prior_month: Decimal::new(300_000, 0),
///     second_prior_month: Decimal::new(150_000, 0),
///     third_prior_month: Decimal::ZERO,
/// };
/// let result = average_variable_remuneration(Some(&variable));
/// assert_eq!(result.average, Decimal::new(150_000, 0));
/// ```
pub fn average_variable_remuneration(
    variable: Option<&VariableRemuneration>,
) -> VariableAverageResult {
    match variable {
        Some(months) => {
            let total = months.total();
            VariableAverageResult {
                total,
                average: total / lookback_months(),
            }
        }
        None => VariableAverageResult {
            total: Decimal::ZERO,
            average: Decimal::ZERO,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    // ==========================================================================
    // VR-001: disabled variable pay averages to zero
    // ==========================================================================
    #[test]
    fn test_vr_001_disabled_variable_pay_is_zero() {
        let result = average_variable_remuneration(None);
        assert_eq!(result.total, Decimal::ZERO);
        assert_eq!(result.average, Decimal::ZERO);
    }

    // ==========================================================================
    // VR-002: the divisor is three even with partial history
    // ==========================================================================
    #[test]
    fn test_vr_002_divisor_is_three_with_partial_history() {
        let variable = VariableRemuneration {
            first_prior_month: dec("200000"),
            second_prior_month: dec("100000"),
            third_prior_month: Decimal::ZERO,
        };
        let result = average_variable_remuneration(Some(&variable));
        assert_eq!(result.total, dec("300000"));
        assert_eq!(result.average, dec("100000"));
    }

    // ==========================================================================
    // VR-003: full history averages normally
    // ==========================================================================
    #[test]
    fn test_vr_003_full_history_average() {
        let variable = VariableRemuneration {
            first_prior_month: dec("300000"),
            second_prior_month: dec("450000"),
            third_prior_month: dec("150000"),
        };
        let result = average_variable_remuneration(Some(&variable));
        assert_eq!(result.average, dec("300000"));
    }

    #[test]
    fn test_all_months_zero_average_is_zero() {
        let result = average_variable_remuneration(Some(&VariableRemuneration::default()));
        assert_eq!(result.average, Decimal::ZERO);
    }
}
