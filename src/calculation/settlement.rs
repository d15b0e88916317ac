//! Settlement orchestration.
//!
//! This module combines the per-step calculations - tenure, vacation pay,
//! variable-remuneration average, seniority indemnity, and notice-period pay -
//! into the final settlement total. The total is the exact sum of its
//! components; rounding to whole pesos is left to the presentation layer.

use crate::error::EngineResult;
use crate::models::{SettlementCase, SettlementResult};

use super::indemnity::calculate_seniority_indemnity;
use super::notice::calculate_notice_pay;
use super::tenure::calculate_tenure;
use super::vacation::calculate_vacation_pay;
use super::variable::average_variable_remuneration;

/// Computes the full severance settlement for a case.
///
/// Validation runs before any arithmetic: a termination date earlier than
/// the hire date or any negative monetary amount rejects the whole case and
/// no partial result is produced.
///
/// # Example
///
/// ```
/// use toolbox_engine::calculation::compute_settlement;
/// use toolbox_engine::models::{SettlementCase, TerminationCause};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let case = SettlementCase {
///     hire_date: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
///     termination_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
///     cause: TerminationCause::BusinessNeeds,
///     vacation_days_taken: 0,
///     base_salary: Decimal::new(1_000_000, 0),
///     other_taxable_income: Decimal::ZERO,
///     other_non_taxable_income: Decimal::ZERO,
///     variable_remuneration: None,
/// };
///
/// let result = compute_settlement(&case).unwrap();
/// assert_eq!(result.total, Decimal::new(8_000_000, 0));
/// ```
pub fn compute_settlement(case: &SettlementCase) -> EngineResult<SettlementResult> {
    case.validate()?;

    let tenure = calculate_tenure(case.hire_date, case.termination_date)?;
    let vacation = calculate_vacation_pay(tenure.years, case.vacation_days_taken, case.base_salary);
    let variable = average_variable_remuneration(case.variable_remuneration.as_ref());
    let indemnity = calculate_seniority_indemnity(
        case.cause,
        tenure.years,
        case.base_salary,
        variable.average,
    );
    let notice = calculate_notice_pay(case.cause, case.base_salary);

    let total = case.base_salary
        + case.other_taxable_income
        + case.other_non_taxable_income
        + variable.average
        + vacation.amount
        + indemnity.amount
        + notice.amount;

    Ok(SettlementResult {
        tenure_days: tenure.days,
        years_worked: tenure.years,
        vacation_days_earned: vacation.days_earned,
        vacation_days_owed: vacation.days_owed,
        vacation_pay: vacation.amount,
        variable_average: variable.average,
        seniority_indemnity: indemnity.amount,
        notice_pay: notice.amount,
        base_salary: case.base_salary,
        other_taxable_income: case.other_taxable_income,
        other_non_taxable_income: case.other_non_taxable_income,
        total,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;
    use crate::models::{TerminationCause, VariableRemuneration};
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn four_year_case(cause: TerminationCause) -> SettlementCase {
        SettlementCase {
            hire_date: make_date("2020-01-01"),
            termination_date: make_date("2024-01-01"),
            cause,
            vacation_days_taken: 0,
            base_salary: dec("1000000"),
            other_taxable_income: Decimal::ZERO,
            other_non_taxable_income: Decimal::ZERO,
            variable_remuneration: None,
        }
    }

    // ==========================================================================
    // ST-001: resignation case
    // ==========================================================================
    #[test]
    fn test_st_001_resignation_settlement() {
        let result = compute_settlement(&four_year_case(TerminationCause::Resignation)).unwrap();

        assert_eq!(result.years_worked, dec("4"));
        assert_eq!(result.vacation_days_earned, dec("60"));
        assert_eq!(result.vacation_pay, dec("2000000"));
        assert_eq!(result.seniority_indemnity, Decimal::ZERO);
        assert_eq!(result.notice_pay, Decimal::ZERO);
        // base + vacation pay only
        assert_eq!(result.total, dec("3000000"));
    }

    // ==========================================================================
    // ST-002: business-needs case adds indemnity and notice
    // ==========================================================================
    #[test]
    fn test_st_002_business_needs_settlement() {
        let result = compute_settlement(&four_year_case(TerminationCause::BusinessNeeds)).unwrap();

        assert_eq!(result.seniority_indemnity, dec("4000000"));
        assert_eq!(result.notice_pay, dec("1000000"));
        assert_eq!(result.total, dec("8000000"));
    }

    // ==========================================================================
    // ST-003: termination before hire rejects the whole case
    // ==========================================================================
    #[test]
    fn test_st_003_termination_before_hire_rejected() {
        let mut case = four_year_case(TerminationCause::Resignation);
        case.termination_date = make_date("2019-12-31");

        let result = compute_settlement(&case);
        assert!(matches!(result, Err(EngineError::InvalidInput { .. })));
    }

    // ==========================================================================
    // ST-004: partial variable history still divides by three
    // ==========================================================================
    #[test]
    fn test_st_004_partial_variable_history_divides_by_three() {
        let mut case = four_year_case(TerminationCause::Resignation);
        case.variable_remuneration = Some(VariableRemuneration {
            first_prior_month: dec("200000"),
            second_prior_month: dec("100000"),
            third_prior_month: Decimal::ZERO,
        });

        let result = compute_settlement(&case).unwrap();
        assert_eq!(result.variable_average, dec("100000"));
        // base + variable average + vacation pay
        assert_eq!(result.total, dec("3100000"));
    }

    // ==========================================================================
    // ST-005: the total is the exact sum of its components
    // ==========================================================================
    #[test]
    fn test_st_005_total_is_exact_component_sum() {
        let mut case = four_year_case(TerminationCause::BusinessNeeds);
        case.other_taxable_income = dec("120000");
        case.other_non_taxable_income = dec("45000");
        case.vacation_days_taken = 18;
        case.variable_remuneration = Some(VariableRemuneration {
            first_prior_month: dec("90000"),
            second_prior_month: dec("120000"),
            third_prior_month: dec("60000"),
        });

        let result = compute_settlement(&case).unwrap();

        let expected = result.base_salary
            + result.other_taxable_income
            + result.other_non_taxable_income
            + result.variable_average
            + result.vacation_pay
            + result.seniority_indemnity
            + result.notice_pay;
        assert_eq!(result.total, expected);

        // No component is negative.
        for component in [
            result.vacation_pay,
            result.variable_average,
            result.seniority_indemnity,
            result.notice_pay,
        ] {
            assert!(component >= Decimal::ZERO);
        }
    }

    // ==========================================================================
    // ST-006: the indemnified month includes the variable average
    // ==========================================================================
    #[test]
    fn test_st_006_indemnity_includes_variable_average() {
        let mut case = four_year_case(TerminationCause::BusinessNeeds);
        case.variable_remuneration = Some(VariableRemuneration {
            first_prior_month: dec("150000"),
            second_prior_month: dec("150000"),
            third_prior_month: dec("150000"),
        });

        let result = compute_settlement(&case).unwrap();
        assert_eq!(result.variable_average, dec("150000"));
        // 4 * (1 000 000 + 150 000)
        assert_eq!(result.seniority_indemnity, dec("4600000"));
    }

    #[test]
    fn test_zero_tenure_case_computes() {
        let mut case = four_year_case(TerminationCause::Resignation);
        case.termination_date = case.hire_date;

        let result = compute_settlement(&case).unwrap();
        assert_eq!(result.vacation_pay, Decimal::ZERO);
        assert_eq!(result.total, dec("1000000"));
    }
}
