use super::{conflict::Conflict, period::PeriodAggregate, validation::ValidationNote};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Everything a caller needs to render a timesheet: the aggregate, the
/// overlapping shifts and the per-entry validation notes.
///
/// `conflicts` depend on `evaluated_at` when active entries are involved;
/// `aggregate` never does.
#[derive(Debug, Clone, Serialize)]
pub struct TimesheetReport {
    pub employee_id: String,
    pub evaluated_at: DateTime<Utc>,
    pub aggregate: PeriodAggregate,
    pub conflicts: Vec<Conflict>,
    pub notes: Vec<ValidationNote>,
}

impl TimesheetReport {
    pub fn has_conflicts(&self) -> bool {
        !self.conflicts.is_empty()
    }
}
