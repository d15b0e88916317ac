//! Core data models for the Tool Box calculation engine.
//!
//! This module contains all the domain models used throughout the engine.

mod calendar;
mod results;
mod session;
mod settlement;

pub use calendar::{HolidayCalendar, MonthDay};
pub use results::{DeadlineResult, ReceiptsResult, SettlementResult};
pub use session::{CalculationSession, DayCountRule};
pub use settlement::{SettlementCase, TerminationCause, VariableRemuneration};
