//! Prorated vacation pay calculation.
//!
//! Employees accrue fifteen vacation days per year of service. Days earned
//! are floored over the whole tenure, days already taken are subtracted
//! (never below zero), and each owed day is paid at one thirtieth of the
//! monthly base salary.

use rust_decimal::Decimal;

/// Vacation days accrued per year of service.
pub fn vacation_days_per_year() -> Decimal {
    Decimal::new(15, 0)
}

/// Days per month used to derive the daily wage from the monthly salary.
pub fn days_per_salary_month() -> Decimal {
    Decimal::new(30, 0)
}

/// The result of a vacation pay calculation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VacationPayResult {
    /// Vacation days earned over the whole tenure, floored.
    pub days_earned: Decimal,
    /// Days still owed after subtracting days taken; never negative.
    pub days_owed: Decimal,
    /// The amount payable for the owed days.
    pub amount: Decimal,
}

/// Calculates the prorated vacation pay.
///
/// # Arguments
///
/// * `years_worked` - Continuous years of service
/// * `vacation_days_taken` - Days already taken during employment
/// * `base_salary` - The monthly base salary
///
/// # Example
///
/// ```
/// use toolbox_engine::calculation::calculate_vacation_pay;
/// use rust_decimal::Decimal;
///
/// // Four years, nothing taken, base 1 000 000.
/// let result = calculate_vacation_pay(
///     Decimal::new(4, 0),
///     0,
///     Decimal::new(1_000_000, 0),
/// );
/// assert_eq!(result.days_earned, Decimal::new(60, 0));
/// assert_eq!(result.amount, Decimal::new(2_000_000, 0));
/// ```
pub fn calculate_vacation_pay(
    years_worked: Decimal,
    vacation_days_taken: u32,
    base_salary: Decimal,
) -> VacationPayResult {
    let days_earned = (years_worked * vacation_days_per_year()).floor();
    let days_owed = (days_earned - Decimal::from(vacation_days_taken)).max(Decimal::ZERO);
    // Multiply before dividing: whole-day amounts stay exact instead of
    // accumulating a truncated daily wage.
    let amount = base_salary * days_owed / days_per_salary_month();

    VacationPayResult {
        days_earned,
        days_owed,
        amount,
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
    // VP-001: four full years earn 60 days
    // ==========================================================================
    #[test]
    fn test_vp_001_four_years_earn_sixty_days() {
        let result = calculate_vacation_pay(dec("4"), 0, dec("1000000"));
        assert_eq!(result.days_earned, dec("60"));
        assert_eq!(result.days_owed, dec("60"));
        assert_eq!(result.amount, dec("2000000"));
    }

    // ==========================================================================
    // VP-002: fractional years floor the earned days
    // ==========================================================================
    #[test]
    fn test_vp_002_fractional_years_floor_earned_days() {
        // 2.5 years * 15 = 37.5, floored to 37.
        let result = calculate_vacation_pay(dec("2.5"), 0, dec("600000"));
        assert_eq!(result.days_earned, dec("37"));
        assert_eq!(result.amount, dec("740000"));
    }

    // ==========================================================================
    // VP-003: days taken reduce the owed balance
    // ==========================================================================
    #[test]
    fn test_vp_003_days_taken_reduce_owed() {
        let result = calculate_vacation_pay(dec("4"), 20, dec("1000000"));
        assert_eq!(result.days_owed, dec("40"));
        assert_eq!(result.amount, dec("4000000") / dec("3"));
    }

    // ==========================================================================
    // VP-004: overdrawn vacation clamps at zero, never negative
    // ==========================================================================
    #[test]
    fn test_vp_004_overdrawn_vacation_clamps_at_zero() {
        let result = calculate_vacation_pay(dec("1"), 30, dec("1000000"));
        assert_eq!(result.days_earned, dec("15"));
        assert_eq!(result.days_owed, dec("0"));
        assert_eq!(result.amount, dec("0"));
    }

    #[test]
    fn test_zero_tenure_earns_nothing() {
        let result = calculate_vacation_pay(dec("0"), 0, dec("1000000"));
        assert_eq!(result.days_earned, dec("0"));
        assert_eq!(result.amount, dec("0"));
    }
}
