//! Configuration loading and management for the calculation engine.
//!
//! This module provides the YAML-backed reference tables consumed by the
//! deadline engine: legal-matter presets and the national holiday table.
//! The Chilean tables are embedded at compile time; an external directory
//! with the same layout can be loaded for other jurisdictions.
//!
//! # Example
//!
//! ```
//! use toolbox_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::embedded();
//! println!("{} presets loaded", config.matters().len());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{HolidaysConfig, LegalMatter, MattersConfig, NationalHoliday};
