use crate::core::clock::Clock;
use crate::core::logic::Core;
use crate::db::pool::DbPool;
use crate::db::queries::load_entries_in_range;
use crate::errors::AppResult;
use crate::models::report::TimesheetReport;
use chrono::NaiveDate;

/// Fetch from the store, then hand the snapshot to the engine.
pub struct ReportLogic;

impl ReportLogic {
    pub fn build(
        pool: &DbPool,
        employee_id: &str,
        start: NaiveDate,
        end: NaiveDate,
        hourly_rate: Option<f64>,
        clock: &dyn Clock,
    ) -> AppResult<TimesheetReport> {
        let rows = load_entries_in_range(&pool.conn, employee_id, &start, &end)?;
        Core::build_report(employee_id, &rows, start, end, hourly_rate, clock)
    }
}
