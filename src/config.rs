//! Annual rate configuration for the two comparison scenarios
//!
//! Rates come from the environment, read fresh on every call:
//!
//! - `SELIC_ANNUAL_RATE` - reference rate (default 0.0925)
//! - `ARCA_ANNUAL_RATE` - fund rate (default 0.18)
//!
//! Values are decimals (0.18 for 18%). A value that does not parse is logged
//! and replaced by the default; a parsed value at or below -1 (or non-finite)
//! is rejected.

use log::warn;
use serde::{Deserialize, Serialize};
use std::env;
use crate::error::ConfigError;

/// Environment key for the reference rate
pub const REFERENCE_RATE_KEY: &str = "SELIC_ANNUAL_RATE";

/// Environment key for the fund rate
pub const FUND_RATE_KEY: &str = "ARCA_ANNUAL_RATE";

/// Reference rate used when the environment does not set one (9.25%)
pub const DEFAULT_REFERENCE_ANNUAL_RATE: f64 = 0.0925;

/// Fund rate used when the environment does not set one (18%)
pub const DEFAULT_FUND_ANNUAL_RATE: f64 = 0.18;

/// Annual rates for the reference and fund scenarios
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RateConfig {
    pub reference_rate: f64,
    pub fund_rate: f64,
}

impl Default for RateConfig {
    fn default() -> Self {
        Self {
            reference_rate: DEFAULT_REFERENCE_ANNUAL_RATE,
            fund_rate: DEFAULT_FUND_ANNUAL_RATE,
        }
    }
}

impl RateConfig {
    /// Explicit rates, checked for domain
    pub fn new(reference_rate: f64, fund_rate: f64) -> Result<Self, ConfigError> {
        Ok(Self {
            reference_rate: check_rate(REFERENCE_RATE_KEY, reference_rate)?,
            fund_rate: check_rate(FUND_RATE_KEY, fund_rate)?,
        })
    }

    /// Read rates from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Read rates through `lookup`, which maps a key to its raw value
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let reference_rate = read_rate(&lookup, REFERENCE_RATE_KEY, DEFAULT_REFERENCE_ANNUAL_RATE);
        let fund_rate = read_rate(&lookup, FUND_RATE_KEY, DEFAULT_FUND_ANNUAL_RATE);

        Ok(Self {
            reference_rate: check_rate(REFERENCE_RATE_KEY, reference_rate)?,
            fund_rate: check_rate(FUND_RATE_KEY, fund_rate)?,
        })
    }

    /// Replace either rate, keeping the other
    pub fn with_overrides(
        self,
        reference_rate: Option<f64>,
        fund_rate: Option<f64>,
    ) -> Result<Self, ConfigError> {
        Self::new(
            reference_rate.unwrap_or(self.reference_rate),
            fund_rate.unwrap_or(self.fund_rate),
        )
    }
}

fn read_rate<F>(lookup: &F, key: &'static str, default: f64) -> f64
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => default,
        Some(raw) => match raw.trim().parse::<f64>() {
            Ok(rate) => rate,
            Err(_) => {
                warn!("{}={:?} is not a number, using default {}", key, raw, default);
                default
            }
        },
    }
}

fn check_rate(key: &'static str, value: f64) -> Result<f64, ConfigError> {
    if value.is_finite() && value > -1.0 {
        Ok(value)
    } else {
        Err(ConfigError::RateOutOfDomain { key, value })
    }
}
