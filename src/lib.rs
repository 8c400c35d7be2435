//! Investment Compare - projects a reference rate against a fixed-income fund
//!
//! This library provides:
//! - Parsing of pt-BR monetary and duration text into validated numbers
//! - Compound-growth projections on the 252 business-day convention
//! - Two-scenario comparison (reference rate vs. fund rate)
//! - The request gate that validates form input before projecting

pub mod error;
pub mod normalize;
pub mod projection;
pub mod scenario;
pub mod config;
pub mod request;

// Re-export commonly used types
pub use error::{AmountField, ComparisonError, ConfigError, NumberParseError};
pub use config::RateConfig;
pub use projection::{project, ProjectionEngine, ProjectionSchedule, ScheduleRow};
pub use scenario::{compare_scenarios, ScenarioComparison};
pub use request::{ComparisonReport, ComparisonRequest, ValidatedInputs};
