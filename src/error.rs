//! Error types for the Tool Box calculation engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all conditions under which a calculation is rejected. Both engines
//! validate eagerly and return one of these errors before any date or
//! monetary arithmetic runs; no partial results are ever produced.

use thiserror::Error;

/// The main error type for the Tool Box calculation engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use toolbox_engine::error::EngineError;
///
/// let error = EngineError::InvalidInput {
///     field: "termination_date".to_string(),
///     message: "must not be earlier than hire_date".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Invalid input for 'termination_date': must not be earlier than hire_date"
/// );
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// An input field was missing, malformed, or out of range.
    #[error("Invalid input for '{field}': {message}")]
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// A deadline was requested over zero days.
    ///
    /// The counting loop never runs for a zero-day request, so there is no
    /// end date to report. The engine signals this explicitly instead of
    /// silently returning the start date.
    #[error("No computation requested: day count is zero")]
    NoComputationRequested,

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

impl EngineError {
    /// Convenience constructor for [`EngineError::InvalidInput`].
    pub fn invalid_input(field: impl Into<String>, message: impl Into<String>) -> Self {
        EngineError::InvalidInput {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
