//! Side-by-side projection of the reference and fund scenarios
//!
//! Both scenarios share principal, contribution and horizon and differ only
//! in their annual rate, so they go through the identical business-day
//! conversion and stay directly comparable.

use serde::{Deserialize, Serialize};
use crate::config::RateConfig;
use crate::projection::{ProjectionEngine, ProjectionSchedule};

/// Final amounts of the two scenarios
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScenarioComparison {
    pub reference: f64,
    pub fund: f64,
}

/// Project both scenarios with the same inputs
pub fn compare_scenarios(
    principal: f64,
    monthly_contribution: f64,
    months: u32,
    rates: &RateConfig,
) -> ScenarioComparison {
    ScenarioComparison {
        reference: ProjectionEngine::new(rates.reference_rate)
            .project(principal, monthly_contribution, months),
        fund: ProjectionEngine::new(rates.fund_rate)
            .project(principal, monthly_contribution, months),
    }
}

/// Monthly schedules of both scenarios
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioSchedules {
    pub reference: ProjectionSchedule,
    pub fund: ProjectionSchedule,
}

/// Monthly schedules for both scenarios, for detailed output
pub fn schedule_scenarios(
    principal: f64,
    monthly_contribution: f64,
    months: u32,
    rates: &RateConfig,
) -> ScenarioSchedules {
    ScenarioSchedules {
        reference: ProjectionEngine::new(rates.reference_rate)
            .schedule(principal, monthly_contribution, months),
        fund: ProjectionEngine::new(rates.fund_rate)
            .schedule(principal, monthly_contribution, months),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::project;

    #[test]
    fn test_fund_beats_reference_with_default_rates() {
        let rates = RateConfig::default();
        for &(principal, contribution, months) in &[
            (10_000.0, 1_000.0, 12),
            (0.0, 50.0, 2),
            (1.0, 0.0, 360),
            (250_000.0, 0.0, 6),
        ] {
            let comparison = compare_scenarios(principal, contribution, months, &rates);
            assert!(comparison.fund > comparison.reference);
        }
    }

    #[test]
    fn test_single_contribution_month_is_rate_independent() {
        // The contribution lands after the month's growth, so nothing has earned yet
        let comparison = compare_scenarios(0.0, 50.0, 1, &RateConfig::default());
        assert_eq!(comparison.reference, 50.0);
        assert_eq!(comparison.fund, 50.0);
    }

    #[test]
    fn test_each_scenario_matches_single_projection() {
        let rates = RateConfig::new(0.1, 0.15).unwrap();
        let comparison = compare_scenarios(5_000.0, 300.0, 48, &rates);

        assert_eq!(comparison.reference, project(0.1, 5_000.0, 300.0, 48));
        assert_eq!(comparison.fund, project(0.15, 5_000.0, 300.0, 48));
    }

    #[test]
    fn test_swapped_rates_swap_results() {
        let rates = RateConfig::new(0.0925, 0.18).unwrap();
        let swapped = RateConfig::new(0.18, 0.0925).unwrap();

        let a = compare_scenarios(1_000.0, 100.0, 24, &rates);
        let b = compare_scenarios(1_000.0, 100.0, 24, &swapped);

        assert_eq!(a.reference, b.fund);
        assert_eq!(a.fund, b.reference);
    }

    #[test]
    fn test_schedules_agree_with_comparison() {
        let rates = RateConfig::default();
        let comparison = compare_scenarios(1_000.0, 100.0, 24, &rates);
        let schedules = schedule_scenarios(1_000.0, 100.0, 24, &rates);

        assert_eq!(schedules.reference.final_amount(), comparison.reference);
        assert_eq!(schedules.fund.final_amount(), comparison.fund);
    }
}
