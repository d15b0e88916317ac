//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the engine's
//! reference tables. The Chilean tables are compiled into the binary, so the
//! engine never fetches holiday data at runtime; an external configuration
//! directory in the same layout can be loaded instead.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::{EngineError, EngineResult};
use crate::models::{CalculationSession, HolidayCalendar};

use super::types::{HolidaysConfig, LegalMatter, MattersConfig, NationalHoliday};

/// The Chilean legal-matter presets, compiled in from `config/chile/`.
const EMBEDDED_MATTERS: &str = include_str!("../../config/chile/matters.yaml");

/// The Chilean national-holiday table, compiled in from `config/chile/`.
const EMBEDDED_HOLIDAYS: &str = include_str!("../../config/chile/holidays.yaml");

/// Loads and provides access to the engine's reference tables.
///
/// # Directory Structure
///
/// An external configuration directory has the following structure:
/// ```text
/// config/chile/
/// ├── matters.yaml   # Legal-matter presets (name, days, rule)
/// └── holidays.yaml  # National holidays (month-day, name)
/// ```
///
/// # Example
///
/// ```
/// use toolbox_engine::config::ConfigLoader;
///
/// let config = ConfigLoader::embedded();
/// let matter = config.find_matter("Apelación en juicio civil").unwrap();
/// assert_eq!(matter.days, 10);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    matters: Vec<LegalMatter>,
    holidays: Vec<NationalHoliday>,
}

impl ConfigLoader {
    /// Returns the compiled-in Chilean reference tables.
    pub fn embedded() -> Self {
        Self::from_sources(EMBEDDED_MATTERS, EMBEDDED_HOLIDAYS, "<embedded>")
            .expect("embedded configuration is valid")
    }

    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/chile")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Either required file is missing
    /// - Either file contains invalid YAML
    /// - A preset declares a zero day count
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let matters_path = path.join("matters.yaml");
        let matters_text = Self::read_file(&matters_path)?;

        let holidays_path = path.join("holidays.yaml");
        let holidays_text = Self::read_file(&holidays_path)?;

        Self::from_sources(
            &matters_text,
            &holidays_text,
            &matters_path.display().to_string(),
        )
    }

    fn read_file(path: &Path) -> EngineResult<String> {
        fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path.display().to_string(),
        })
    }

    fn from_sources(matters_yaml: &str, holidays_yaml: &str, origin: &str) -> EngineResult<Self> {
        let matters_config: MattersConfig = Self::parse_yaml(matters_yaml, origin)?;
        let holidays_config: HolidaysConfig = Self::parse_yaml(holidays_yaml, origin)?;

        for matter in &matters_config.matters {
            if matter.days == 0 {
                return Err(EngineError::ConfigParseError {
                    path: origin.to_string(),
                    message: format!("matter '{}' declares a zero day count", matter.name),
                });
            }
        }

        Ok(ConfigLoader {
            matters: matters_config.matters,
            holidays: holidays_config.holidays,
        })
    }

    fn parse_yaml<T: DeserializeOwned>(text: &str, origin: &str) -> EngineResult<T> {
        serde_yaml::from_str(text).map_err(|e| EngineError::ConfigParseError {
            path: origin.to_string(),
            message: e.to_string(),
        })
    }

    /// The legal-matter presets, in display order.
    pub fn matters(&self) -> &[LegalMatter] {
        &self.matters
    }

    /// Looks up a preset by its exact name.
    pub fn find_matter(&self, name: &str) -> Option<&LegalMatter> {
        self.matters.iter().find(|m| m.name == name)
    }

    /// The national holiday table.
    pub fn holidays(&self) -> &[NationalHoliday] {
        &self.holidays
    }

    /// Builds a fresh holiday calendar over the national table, with empty
    /// session sets.
    pub fn calendar(&self) -> HolidayCalendar {
        HolidayCalendar::new(self.holidays.iter().map(|h| h.date))
    }

    /// Builds a fresh calculation session over a fresh calendar.
    ///
    /// Each independent calculation gets its own session; sessions are never
    /// shared between concurrent runs.
    pub fn new_session(&self) -> CalculationSession {
        CalculationSession::new(self.calendar())
    }
}
