//! Error types shared by the normalization, configuration and request layers

use thiserror::Error;

/// Failure to read a number out of locale-formatted text
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NumberParseError {
    /// The cleaned text was not a decimal number
    #[error("not a number: {input:?}")]
    NotANumber { input: String },
}

/// Input field of a comparison request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmountField {
    Initial,
    Monthly,
}

impl std::fmt::Display for AmountField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AmountField::Initial => write!(f, "initialInvestment"),
            AmountField::Monthly => write!(f, "monthlyInvestment"),
        }
    }
}

/// Reasons a comparison request is rejected before any projection runs
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ComparisonError {
    #[error("investment duration is required")]
    MissingDuration,

    #[error("{field} is not a valid amount")]
    InvalidAmount {
        field: AmountField,
        #[source]
        source: NumberParseError,
    },

    #[error("at least one investment amount (initial or monthly) is required")]
    NoInvestmentAmount,

    #[error("investment duration must be a positive number of years")]
    InvalidDuration,
}

impl ComparisonError {
    /// Stable machine-readable code for API responses
    pub fn code(&self) -> &'static str {
        match self {
            ComparisonError::MissingDuration => "missing_duration",
            ComparisonError::InvalidAmount { .. } => "invalid_amount",
            ComparisonError::NoInvestmentAmount => "no_investment_amount",
            ComparisonError::InvalidDuration => "invalid_duration",
        }
    }
}

/// Rate configuration problems that cannot be recovered by falling back to defaults
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{key}={value} is out of range: annual rates must be finite and greater than -100%")]
    RateOutOfDomain { key: &'static str, value: f64 },
}
