use crate::core::calculator::{aggregate, conflicts, pay};
use crate::core::clock::Clock;
use crate::core::validate::validate_entries;
use crate::errors::AppResult;
use crate::models::raw_entry::RawTimeEntry;
use crate::models::report::TimesheetReport;
use crate::models::time_entry::TimeEntry;
use chrono::NaiveDate;

/// Single recomputation entry point.
///
/// Always rebuilds from the full entry set handed in; there is no cached
/// total to patch. Call it again after every confirmed write.
pub struct Core;

impl Core {
    /// Validate store rows, then aggregate and detect conflicts for one
    /// employee over `[start, end]`.
    pub fn build_report(
        employee_id: &str,
        rows: &[RawTimeEntry],
        start: NaiveDate,
        end: NaiveDate,
        hourly_rate: Option<f64>,
        clock: &dyn Clock,
    ) -> AppResult<TimesheetReport> {
        let (entries, notes) = validate_entries(rows);

        let mut report = Self::build_report_from_entries(
            employee_id,
            &entries,
            start,
            end,
            hourly_rate,
            clock,
        )?;

        // Keep only notes for this employee's rows
        report.notes = notes
            .into_iter()
            .filter(|n| {
                rows.iter()
                    .any(|r| r.id == n.entry_id && r.employee_id == employee_id)
            })
            .collect();

        Ok(report)
    }

    /// Same as [`Core::build_report`] for entries that are already typed.
    pub fn build_report_from_entries(
        employee_id: &str,
        entries: &[TimeEntry],
        start: NaiveDate,
        end: NaiveDate,
        hourly_rate: Option<f64>,
        clock: &dyn Clock,
    ) -> AppResult<TimesheetReport> {
        let rate = pay::resolve_rate(hourly_rate);

        let mine: Vec<TimeEntry> = entries
            .iter()
            .filter(|e| e.employee_id == employee_id)
            .filter(|e| (start..=end).contains(&e.work_date()))
            .cloned()
            .collect();

        let aggregate = aggregate::aggregate(&mine, start, end, rate)?;
        let conflicts = conflicts::find_conflicts(&mine, clock);

        Ok(TimesheetReport {
            employee_id: employee_id.to_string(),
            evaluated_at: clock.now(),
            aggregate,
            conflicts,
            notes: Vec::new(),
        })
    }
}
