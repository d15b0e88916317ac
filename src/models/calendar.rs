//! Holiday calendar model.
//!
//! This module defines the [`MonthDay`] type for year-independent recurring
//! holidays and the [`HolidayCalendar`] consulted by the deadline counting
//! loop. National holidays recur on a fixed month-day every year; custom
//! holidays and excluded dates belong to the current calculation session.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::EngineError;

/// A year-independent month-day pair, e.g. `09-18`.
///
/// National and custom holidays are defined on a month-day so that they match
/// on every year a deadline crosses. The textual form is `"MM-DD"`, which is
/// also how the type serializes.
///
/// # Example
///
/// ```
/// use toolbox_engine::models::MonthDay;
///
/// let dieciocho: MonthDay = "09-18".parse().unwrap();
/// assert_eq!(dieciocho.to_string(), "09-18");
/// assert!("13-01".parse::<MonthDay>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthDay {
    month: u32,
    day: u32,
}

/// Maximum day number per month. February allows 29 so a leap-year holiday
/// can be represented.
const DAYS_IN_MONTH: [u32; 12] = [31, 29, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

impl MonthDay {
    /// Creates a month-day pair, validating both components.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidInput`] if the month is outside `1..=12`
    /// or the day does not exist in that month.
    pub fn new(month: u32, day: u32) -> Result<Self, EngineError> {
        if !(1..=12).contains(&month) {
            return Err(EngineError::invalid_input(
                "month_day",
                format!("month {} is out of range 1-12", month),
            ));
        }
        if day < 1 || day > DAYS_IN_MONTH[(month - 1) as usize] {
            return Err(EngineError::invalid_input(
                "month_day",
                format!("day {} does not exist in month {}", day, month),
            ));
        }
        Ok(MonthDay { month, day })
    }

    /// Returns the month-day of a full calendar date.
    pub fn of(date: NaiveDate) -> Self {
        // A NaiveDate always carries a valid month and day.
        MonthDay {
            month: date.month(),
            day: date.day(),
        }
    }

    /// The month component (1-12).
    pub fn month(&self) -> u32 {
        self.month
    }

    /// The day component (1-31).
    pub fn day(&self) -> u32 {
        self.day
    }
}

impl fmt::Display for MonthDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}-{:02}", self.month, self.day)
    }
}

impl FromStr for MonthDay {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (month, day) = s.split_once('-').ok_or_else(|| {
            EngineError::invalid_input("month_day", format!("'{}' is not in MM-DD form", s))
        })?;
        let month: u32 = month.parse().map_err(|_| {
            EngineError::invalid_input("month_day", format!("'{}' is not in MM-DD form", s))
        })?;
        let day: u32 = day.parse().map_err(|_| {
            EngineError::invalid_input("month_day", format!("'{}' is not in MM-DD form", s))
        })?;
        MonthDay::new(month, day)
    }
}

impl Serialize for MonthDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for MonthDay {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// The holiday calendar consulted when counting business days.
///
/// Three layers feed the calendar:
///
/// - `national`: the fixed month-day table loaded from configuration,
///   immutable for the life of the calendar;
/// - `custom`: month-day holidays added by the caller for the current
///   calculation session (e.g. a movable holiday declared for this year);
/// - `excluded`: full dates removed from the counted sequence regardless of
///   their calendar status.
///
/// A date is a calendar holiday iff its month-day falls in
/// `national ∪ custom`, independent of year. Exclusion is a separate
/// predicate; [`HolidayCalendar::is_skipped`] composes the two for the
/// counting loop.
///
/// Concurrent calculations must use independent calendar instances; the
/// custom and excluded sets belong exclusively to one session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidayCalendar {
    national: BTreeSet<MonthDay>,
    custom: BTreeSet<MonthDay>,
    excluded: BTreeSet<NaiveDate>,
}

impl HolidayCalendar {
    /// Creates a calendar over the given national holiday table with empty
    /// session sets.
    pub fn new(national: impl IntoIterator<Item = MonthDay>) -> Self {
        HolidayCalendar {
            national: national.into_iter().collect(),
            custom: BTreeSet::new(),
            excluded: BTreeSet::new(),
        }
    }

    /// Adds a custom holiday for the current session.
    pub fn add_custom_holiday(&mut self, holiday: MonthDay) {
        self.custom.insert(holiday);
    }

    /// Excludes a full date from the counted sequence.
    pub fn exclude_date(&mut self, date: NaiveDate) {
        self.excluded.insert(date);
    }

    /// Returns true iff the date's month-day is a national or custom holiday.
    ///
    /// The match is year-independent: `09-18` is a holiday in every year.
    pub fn is_calendar_holiday(&self, date: NaiveDate) -> bool {
        let month_day = MonthDay::of(date);
        self.national.contains(&month_day) || self.custom.contains(&month_day)
    }

    /// Returns true iff the full date was explicitly excluded.
    ///
    /// An excluded date is removed from consideration even when it would
    /// otherwise be a valid business day.
    pub fn is_excluded(&self, date: NaiveDate) -> bool {
        self.excluded.contains(&date)
    }

    /// Returns true iff the date must be skipped when counting business days.
    ///
    /// This is `is_calendar_holiday || is_excluded`. Callers must treat the
    /// result as "skip this date", not as a legal holiday determination;
    /// use [`HolidayCalendar::is_calendar_holiday`] for the latter.
    pub fn is_skipped(&self, date: NaiveDate) -> bool {
        self.is_calendar_holiday(date) || self.is_excluded(date)
    }

    /// Clears the session's custom holidays and excluded dates.
    ///
    /// The national table is untouched.
    pub fn clear_session(&mut self) {
        self.custom.clear();
        self.excluded.clear();
    }

    /// The national holiday table.
    pub fn national(&self) -> &BTreeSet<MonthDay> {
        &self.national
    }

    /// The session's custom holidays.
    pub fn custom(&self) -> &BTreeSet<MonthDay> {
        &self.custom
    }

    /// The session's excluded dates.
    pub fn excluded(&self) -> &BTreeSet<NaiveDate> {
        &self.excluded
    }
}
