//! Projection engine for single-scenario growth projections

mod state;
mod engine;
mod schedule;

pub use state::ProjectionState;
pub use engine::{
    daily_growth_factor, project, ProjectionEngine, BUSINESS_DAYS_PER_MONTH, BUSINESS_DAYS_PER_YEAR,
};
pub use schedule::{ProjectionSchedule, ScheduleRow, ScheduleSummary};
