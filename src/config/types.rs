//! Configuration types for the calculation engine.
//!
//! This module contains the strongly-typed reference tables that are
//! deserialized from YAML configuration files: the legal-matter presets of
//! the deadline calculator and the national holiday table.

use serde::Deserialize;

use crate::models::{DayCountRule, MonthDay};

/// A legal-matter preset pairing a recognized procedural deadline type with
/// its statutory day count and counting rule.
///
/// Selecting a preset overwrites the session's current day count and rule;
/// it never touches custom holidays or exclusions.
#[derive(Debug, Clone, Deserialize)]
pub struct LegalMatter {
    /// The matter name shown in the selector, e.g. "Apelación en juicio civil".
    pub name: String,
    /// The statutory day count; always positive.
    pub days: u32,
    /// The counting rule the statute prescribes.
    pub rule: DayCountRule,
}

/// Legal-matters configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct MattersConfig {
    /// The preset table, in display order.
    pub matters: Vec<LegalMatter>,
}

/// A named national holiday recurring on a fixed month-day.
#[derive(Debug, Clone, Deserialize)]
pub struct NationalHoliday {
    /// The recurring month-day, e.g. "09-18".
    pub date: MonthDay,
    /// The holiday name, e.g. "Independencia Nacional".
    pub name: String,
}

/// National-holidays configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct HolidaysConfig {
    /// The holiday table.
    pub holidays: Vec<NationalHoliday>,
}
