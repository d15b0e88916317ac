//! Deadline counting logic.
//!
//! This module implements the day-counting loop of the legal-deadline
//! calculator: starting from a given date, candidate days are advanced one at
//! a time and counted according to the selected [`DayCountRule`] until the
//! requested day total is reached.

use chrono::{Datelike, NaiveDate, Weekday};

use crate::error::{EngineError, EngineResult};
use crate::models::{CalculationSession, DayCountRule, DeadlineResult, HolidayCalendar};

/// Returns true iff the date falls on a Saturday or Sunday.
///
/// # Example
///
/// ```
/// use toolbox_engine::calculation::is_weekend;
/// use chrono::NaiveDate;
///
/// // 2024-01-06 is a Saturday
/// assert!(is_weekend(NaiveDate::from_ymd_opt(2024, 1, 6).unwrap()));
/// // 2024-01-08 is a Monday
/// assert!(!is_weekend(NaiveDate::from_ymd_opt(2024, 1, 8).unwrap()));
/// ```
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Computes the end date of a deadline.
///
/// Starting from `start_date` (which itself never counts), the loop advances
/// one calendar day at a time. Under [`DayCountRule::Calendar`] every
/// advanced day counts; under the business-day rules a day counts only if it
/// is not a weekend and the calendar does not skip it (national or custom
/// holiday, or an excluded full date). The day on which the remaining counter
/// reaches zero is the end date.
///
/// # Arguments
///
/// * `start_date` - The date the deadline starts running from
/// * `day_count` - How many days must be counted
/// * `rule` - The counting rule
/// * `calendar` - The session's holiday calendar
///
/// # Returns
///
/// A [`DeadlineResult`] with the end date and the chronological list of
/// counted dates, or an error if:
/// - `day_count` is zero (`NoComputationRequested` - there is nothing to
///   compute, and the engine refuses to silently return the start date)
/// - the walk leaves the supported date range or the calendar skips every
///   candidate day (`InvalidInput`)
///
/// # Example
///
/// ```
/// use toolbox_engine::calculation::compute_end_date;
/// use toolbox_engine::config::ConfigLoader;
/// use toolbox_engine::models::DayCountRule;
/// use chrono::NaiveDate;
///
/// let calendar = ConfigLoader::embedded().calendar();
/// // 2024-01-01 is a Monday; the following weekend is skipped.
/// let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// let result = compute_end_date(start, 5, DayCountRule::Business, &calendar).unwrap();
/// assert_eq!(result.end_date, NaiveDate::from_ymd_opt(2024, 1, 8).unwrap());
/// ```
pub fn compute_end_date(
    start_date: NaiveDate,
    day_count: u32,
    rule: DayCountRule,
    calendar: &HolidayCalendar,
) -> EngineResult<DeadlineResult> {
    if day_count == 0 {
        return Err(EngineError::NoComputationRequested);
    }

    // A calendar whose custom holidays cover every month-day would make the
    // business-day walk non-terminating; bail out once the scan has passed
    // far more days than any countable sequence could need.
    let max_steps =
        u64::from(day_count) * 7 + calendar.excluded().len() as u64 + 3660;

    let mut date = start_date;
    let mut remaining = day_count;
    let mut counted_dates = Vec::with_capacity(day_count as usize);
    let mut steps: u64 = 0;

    while remaining > 0 {
        steps += 1;
        if steps > max_steps {
            return Err(EngineError::invalid_input(
                "custom_holidays",
                "the calendar skips every candidate day",
            ));
        }
        date = date.succ_opt().ok_or_else(|| {
            EngineError::invalid_input("start_date", "deadline exceeds the supported date range")
        })?;

        let counts = if rule.counts_working_days_only() {
            !is_weekend(date) && !calendar.is_skipped(date)
        } else {
            true
        };

        if counts {
            remaining -= 1;
            counted_dates.push(date);
        }
    }

    Ok(DeadlineResult {
        end_date: date,
        counted_dates,
    })
}

/// Computes the end date for a [`CalculationSession`].
///
/// Reads the day count and rule from the session and delegates to
/// [`compute_end_date`] over the session's calendar.
///
/// # Errors
///
/// Returns [`EngineError::InvalidInput`] when the session has no day count
/// selected, plus everything [`compute_end_date`] can return.
pub fn compute_session_end_date(
    session: &CalculationSession,
    start_date: NaiveDate,
) -> EngineResult<DeadlineResult> {
    let day_count = session
        .day_count()
        .ok_or_else(|| EngineError::invalid_input("day_count", "no day count selected"))?;
    compute_end_date(start_date, day_count, session.rule(), session.calendar())
}
