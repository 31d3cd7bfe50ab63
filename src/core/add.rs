use crate::core::calculator::duration;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::insert_entry;
use crate::errors::{AppError, AppResult};
use crate::models::time_entry::TimeEntry;
use chrono::{DateTime, FixedOffset};
use uuid::Uuid;

/// Manual backfill of a session (the editor's "add entry" form).
pub struct AddLogic;

impl AddLogic {
    /// Inserts a new entry. `clock_out == None` creates an active entry.
    ///
    /// Unlike the engine, the write path refuses an inverted interval:
    /// the engine only clamps what it finds in the store.
    pub fn apply(
        pool: &mut DbPool,
        employee_id: &str,
        clock_in: DateTime<FixedOffset>,
        clock_out: Option<DateTime<FixedOffset>>,
        break_minutes: Option<i64>,
        project_tag: Option<String>,
    ) -> AppResult<TimeEntry> {
        if employee_id.trim().is_empty() {
            return Err(AppError::InvalidEdit("employee id cannot be empty".into()));
        }

        if let Some(out) = clock_out
            && out <= clock_in
        {
            return Err(AppError::InvalidEdit(
                "clock-out must be later than clock-in".into(),
            ));
        }

        let mut entry = TimeEntry::new(&Uuid::new_v4().to_string(), employee_id, clock_in);
        entry.clock_out = clock_out;
        entry.break_minutes = duration::sanitize_break(break_minutes.unwrap_or(0));
        entry.project_tag = project_tag;
        duration::recompute_entry(&mut entry);

        pool.with_tx(|tx| -> AppResult<()> {
            insert_entry(tx, &entry)?;
            ttlog(
                tx,
                "add",
                &entry.id,
                &format!(
                    "{} {} → {} (break {}m)",
                    employee_id,
                    clock_in.to_rfc3339(),
                    clock_out
                        .map(|t| t.to_rfc3339())
                        .unwrap_or_else(|| "open".into()),
                    entry.break_minutes
                ),
            )
        })?;

        Ok(entry)
    }
}
