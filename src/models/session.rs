//! Calculation session model.
//!
//! This module defines the [`DayCountRule`] enum and the
//! [`CalculationSession`] value object holding the state of one deadline
//! calculation: the currently selected day count, the counting rule, and the
//! session's holiday calendar. A session is passed explicitly into the
//! calculation functions; there is no shared global selection state.

use serde::{Deserialize, Serialize};

use super::HolidayCalendar;

/// The rule deciding which advanced days count toward a deadline.
///
/// # Example
///
/// ```
/// use toolbox_engine::models::DayCountRule;
///
/// assert!(!DayCountRule::Calendar.counts_working_days_only());
/// assert!(DayCountRule::Business.counts_working_days_only());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DayCountRule {
    /// Días corridos: every advanced day counts.
    #[serde(rename = "corridos")]
    Calendar,
    /// Días hábiles: weekends, holidays, and excluded dates are skipped.
    #[serde(rename = "habiles")]
    Business,
    /// Días hábiles administrativos. Counted identically to
    /// [`DayCountRule::Business`]; kept as a distinct variant so an
    /// administrative-only holiday subset can diverge later without an
    /// interface break.
    #[serde(rename = "habiles_administrativos")]
    BusinessAdministrative,
}

impl DayCountRule {
    /// Returns true iff the rule skips weekends, holidays, and exclusions.
    pub fn counts_working_days_only(&self) -> bool {
        match self {
            DayCountRule::Calendar => false,
            DayCountRule::Business | DayCountRule::BusinessAdministrative => true,
        }
    }
}

impl std::fmt::Display for DayCountRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DayCountRule::Calendar => write!(f, "corridos"),
            DayCountRule::Business => write!(f, "habiles"),
            DayCountRule::BusinessAdministrative => write!(f, "habiles administrativos"),
        }
    }
}

/// The state of one deadline calculation session.
///
/// Holds the current day count (absent until the user or a preset supplies
/// one), the counting rule, and the holiday calendar with the session's
/// custom holidays and excluded dates. Selecting a legal-matter preset
/// overwrites day count and rule but never touches the calendar; resetting
/// clears the selection and the calendar's session sets while keeping the
/// national table.
///
/// Concurrent calculations must use independent sessions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationSession {
    day_count: Option<u32>,
    rule: DayCountRule,
    calendar: HolidayCalendar,
}

impl CalculationSession {
    /// Creates a session over the given calendar with no day count selected
    /// and the business-day rule, the default selection of the deadline form.
    pub fn new(calendar: HolidayCalendar) -> Self {
        CalculationSession {
            day_count: None,
            rule: DayCountRule::Business,
            calendar,
        }
    }

    /// The currently selected day count, if any.
    pub fn day_count(&self) -> Option<u32> {
        self.day_count
    }

    /// The currently selected counting rule.
    pub fn rule(&self) -> DayCountRule {
        self.rule
    }

    /// The session's holiday calendar.
    pub fn calendar(&self) -> &HolidayCalendar {
        &self.calendar
    }

    /// Mutable access to the session's holiday calendar, for adding custom
    /// holidays and exclusions.
    pub fn calendar_mut(&mut self) -> &mut HolidayCalendar {
        &mut self.calendar
    }

    /// Selects a day count.
    pub fn set_day_count(&mut self, day_count: u32) {
        self.day_count = Some(day_count);
    }

    /// Selects a counting rule.
    pub fn set_rule(&mut self, rule: DayCountRule) {
        self.rule = rule;
    }

    /// Resets the session: the day count selection is cleared, the rule
    /// returns to business days, and the calendar's custom holidays and
    /// excluded dates are emptied. The national holiday table survives.
    pub fn reset(&mut self) {
        self.day_count = None;
        self.rule = DayCountRule::Business;
        self.calendar.clear_session();
    }
}
