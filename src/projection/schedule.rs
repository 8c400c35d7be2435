//! Month-by-month output of a projection

use serde::{Deserialize, Serialize};

/// One month of a projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleRow {
    pub month: u32,
    pub bop_amount: f64,
    /// Interest earned this month on the beginning balance
    pub growth: f64,
    pub contribution: f64,
    pub eop_amount: f64,
}

/// Full monthly trace of one rate scenario
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionSchedule {
    pub annual_rate: f64,
    pub principal: f64,
    pub rows: Vec<ScheduleRow>,
}

impl ProjectionSchedule {
    pub fn new(annual_rate: f64, principal: f64) -> Self {
        Self {
            annual_rate,
            principal,
            rows: Vec::new(),
        }
    }

    /// Add a month
    pub fn add_row(&mut self, row: ScheduleRow) {
        self.rows.push(row);
    }

    /// Balance after the last month (the principal when no month was projected)
    pub fn final_amount(&self) -> f64 {
        self.rows.last().map(|r| r.eop_amount).unwrap_or(self.principal)
    }

    /// Get summary statistics
    pub fn summary(&self) -> ScheduleSummary {
        let total_contributed: f64 = self.rows.iter().map(|r| r.contribution).sum();
        let total_growth: f64 = self.rows.iter().map(|r| r.growth).sum();

        ScheduleSummary {
            total_months: self.rows.len() as u32,
            principal: self.principal,
            total_contributed,
            total_growth,
            final_amount: self.final_amount(),
        }
    }
}

/// Summary statistics for a schedule
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleSummary {
    pub total_months: u32,
    pub principal: f64,
    pub total_contributed: f64,
    pub total_growth: f64,
    pub final_amount: f64,
}
