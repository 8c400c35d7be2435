//! Running balance of a single projection

use super::schedule::ScheduleRow;

/// Balance at a point in time during projection
#[derive(Debug, Clone)]
pub struct ProjectionState {
    /// Months completed so far
    pub projection_month: u32,

    /// Current balance
    pub amount: f64,
}

impl ProjectionState {
    /// Initial state: the principal, nothing contributed yet
    pub fn from_principal(principal: f64) -> Self {
        Self {
            projection_month: 0,
            amount: principal,
        }
    }

    /// Roll the balance forward one month.
    ///
    /// Growth is applied first, then the contribution is added, so a
    /// contribution only starts earning in the following month.
    pub fn advance_month(&mut self, monthly_factor: f64, contribution: f64) -> ScheduleRow {
        let bop_amount = self.amount;

        self.projection_month += 1;
        self.amount *= monthly_factor;
        let grown = self.amount;
        self.amount += contribution;

        ScheduleRow {
            month: self.projection_month,
            bop_amount,
            growth: grown - bop_amount,
            contribution,
            eop_amount: self.amount,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contribution_added_after_growth() {
        let mut state = ProjectionState::from_principal(1000.0);
        let row = state.advance_month(1.5, 100.0);

        assert_eq!(row.month, 1);
        assert_eq!(row.bop_amount, 1000.0);
        assert_eq!(row.growth, 500.0);
        assert_eq!(row.eop_amount, 1600.0);
        assert_eq!(state.amount, 1600.0);
    }

    #[test]
    fn test_months_counted() {
        let mut state = ProjectionState::from_principal(0.0);
        for _ in 0..3 {
            state.advance_month(1.0, 10.0);
        }
        assert_eq!(state.projection_month, 3);
        assert_eq!(state.amount, 30.0);
    }
}
