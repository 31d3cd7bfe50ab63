use crate::core::lifecycle::{EntryEdit, apply_edit};
use crate::core::validate::validate_entries;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::{insert_entry, load_active_entries, update_entry};
use crate::errors::{AppError, AppResult};
use crate::models::time_entry::TimeEntry;
use crate::ui::messages::warning;
use chrono::{DateTime, FixedOffset};
use uuid::Uuid;

/// Clock-in / clock-out actions.
pub struct PunchLogic;

impl PunchLogic {
    /// Opens a new active entry.
    ///
    /// A second open entry for the same employee is allowed (the engine
    /// tolerates it) but a warning is printed.
    pub fn clock_in(
        pool: &mut DbPool,
        employee_id: &str,
        at: DateTime<FixedOffset>,
        project_tag: Option<String>,
    ) -> AppResult<TimeEntry> {
        let (open, _) = validate_entries(&load_active_entries(&pool.conn, employee_id)?);
        if !open.is_empty() {
            warning(format!(
                "{} already has {} open entr{}; opening a new one anyway.",
                employee_id,
                open.len(),
                if open.len() == 1 { "y" } else { "ies" }
            ));
        }

        let mut entry = TimeEntry::new(&Uuid::new_v4().to_string(), employee_id, at);
        entry.project_tag = project_tag;

        pool.with_tx(|tx| -> AppResult<()> {
            insert_entry(tx, &entry)?;
            ttlog(
                tx,
                "clock_in",
                &entry.id,
                &format!("{} clocked in at {}", employee_id, at.to_rfc3339()),
            )
        })?;

        Ok(entry)
    }

    /// Closes the most recent open entry of `employee_id`.
    pub fn clock_out(
        pool: &mut DbPool,
        employee_id: &str,
        at: DateTime<FixedOffset>,
        break_minutes: Option<i64>,
    ) -> AppResult<TimeEntry> {
        let (open, _) = validate_entries(&load_active_entries(&pool.conn, employee_id)?);

        let last = open
            .into_iter()
            .max_by(|a, b| a.clock_in.cmp(&b.clock_in).then_with(|| a.id.cmp(&b.id)))
            .ok_or_else(|| AppError::NoActiveEntry(employee_id.to_string()))?;

        if at <= last.clock_in {
            return Err(AppError::InvalidEdit(format!(
                "clock-out {} must be later than clock-in {}",
                at.to_rfc3339(),
                last.clock_in.to_rfc3339()
            )));
        }

        let edit = EntryEdit {
            clock_out: Some(Some(at)),
            break_minutes,
            ..EntryEdit::default()
        };
        let outcome = apply_edit(&last, &edit)?;

        pool.with_tx(|tx| -> AppResult<()> {
            update_entry(tx, &outcome.entry)?;
            ttlog(
                tx,
                "clock_out",
                &outcome.entry.id,
                &format!(
                    "{} clocked out at {} ({:.2}h)",
                    employee_id,
                    at.to_rfc3339(),
                    outcome.entry.total_hours.unwrap_or(0.0)
                ),
            )
        })?;

        Ok(outcome.entry)
    }
}
