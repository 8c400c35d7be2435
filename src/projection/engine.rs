//! Compound-growth projection under the 252 business-day convention
//!
//! The annual rate is turned into a per-business-day factor
//! `(1 + rate)^(1/252)` and each month compounds 21 business days of it.
//! Contributions are added at the end of the month, after that month's growth.

use log::debug;
use super::schedule::ProjectionSchedule;
use super::state::ProjectionState;

/// Business days in a year for rates quoted on the business-day basis
pub const BUSINESS_DAYS_PER_YEAR: f64 = 252.0;

/// Business days compounded per month (252 / 12 = 21)
pub const BUSINESS_DAYS_PER_MONTH: f64 = BUSINESS_DAYS_PER_YEAR / 12.0;

/// Final balance of `principal` plus `monthly_contribution` after `months`
/// at `annual_rate` (decimal, 0.0925 for 9.25%).
///
/// Inputs are not validated. `months == 0` returns the principal unchanged;
/// an `annual_rate` of exactly -1 wipes the balance every month and one
/// below -1 yields NaN.
pub fn project(annual_rate: f64, principal: f64, monthly_contribution: f64, months: u32) -> f64 {
    ProjectionEngine::new(annual_rate).project(principal, monthly_contribution, months)
}

/// Per-business-day growth factor for an annual rate
pub fn daily_growth_factor(annual_rate: f64) -> f64 {
    (1.0 + annual_rate).powf(1.0 / BUSINESS_DAYS_PER_YEAR)
}

/// Projection engine for one rate scenario
#[derive(Debug, Clone, Copy)]
pub struct ProjectionEngine {
    annual_rate: f64,
    monthly_factor: f64,
}

impl ProjectionEngine {
    /// Create an engine for the given annual rate
    pub fn new(annual_rate: f64) -> Self {
        let monthly_factor = daily_growth_factor(annual_rate).powf(BUSINESS_DAYS_PER_MONTH);
        Self { annual_rate, monthly_factor }
    }

    pub fn annual_rate(&self) -> f64 {
        self.annual_rate
    }

    /// Growth multiplier applied each month
    pub fn monthly_factor(&self) -> f64 {
        self.monthly_factor
    }

    /// Final balance after `months`
    pub fn project(&self, principal: f64, monthly_contribution: f64, months: u32) -> f64 {
        let mut state = ProjectionState::from_principal(principal);

        for _month in 1..=months {
            state.advance_month(self.monthly_factor, monthly_contribution);
        }

        debug!(
            "projected {} months at {:.4}: {:.2} -> {:.2}",
            months, self.annual_rate, principal, state.amount
        );

        state.amount
    }

    /// Month-by-month trace; the last row's ending balance equals [`Self::project`]
    pub fn schedule(
        &self,
        principal: f64,
        monthly_contribution: f64,
        months: u32,
    ) -> ProjectionSchedule {
        let mut schedule = ProjectionSchedule::new(self.annual_rate, principal);
        let mut state = ProjectionState::from_principal(principal);

        for _month in 1..=months {
            let row = state.advance_month(self.monthly_factor, monthly_contribution);
            schedule.add_row(row);
        }

        schedule
    }
}
