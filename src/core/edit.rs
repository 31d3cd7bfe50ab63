use crate::core::lifecycle::{EditOutcome, EntryEdit, apply_edit};
use crate::core::validate::validate_entry;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::{get_entry, update_entry};
use crate::errors::{AppError, AppResult};
use crate::models::time_entry::TimeEntry;

/// Persisted edit of an existing entry.
pub struct EditLogic;

impl EditLogic {
    /// Loads the entry, runs the edit through the state machine and writes
    /// the recomputed entry back.
    ///
    /// Reports built before this call are stale; rebuild them from a fresh
    /// read of the store.
    pub fn apply(pool: &mut DbPool, entry_id: &str, edit: &EntryEdit) -> AppResult<EditOutcome> {
        let current = Self::load(pool, entry_id)?;
        let outcome = apply_edit(&current, edit)?;

        pool.with_tx(|tx| -> AppResult<()> {
            update_entry(tx, &outcome.entry)?;
            ttlog(
                tx,
                "edit",
                entry_id,
                &format!(
                    "{} → {} ({})",
                    outcome.previous.as_str(),
                    outcome.current().as_str(),
                    describe_edit(edit)
                ),
            )
        })?;

        Ok(outcome)
    }

    /// Typed entry by id. A row that fails validation cannot be edited
    /// field-by-field; it has to be fixed with a full rewrite (import).
    pub fn load(pool: &DbPool, entry_id: &str) -> AppResult<TimeEntry> {
        let raw = get_entry(&pool.conn, entry_id)?
            .ok_or_else(|| AppError::EntryNotFound(entry_id.to_string()))?;

        validate_entry(&raw)
            .map(|(entry, _)| entry)
            .map_err(|note| AppError::InvalidEdit(note.to_string()))
    }
}

fn describe_edit(edit: &EntryEdit) -> String {
    let mut parts = Vec::new();

    if let Some(ci) = edit.clock_in {
        parts.push(format!("in={}", ci.to_rfc3339()));
    }
    match edit.clock_out {
        Some(Some(co)) => parts.push(format!("out={}", co.to_rfc3339())),
        Some(None) => parts.push("out=cleared".to_string()),
        None => {}
    }
    if let Some(b) = edit.break_minutes {
        parts.push(format!("break={}", b));
    }
    match &edit.project_tag {
        Some(Some(t)) => parts.push(format!("tag={}", t)),
        Some(None) => parts.push("tag=cleared".to_string()),
        None => {}
    }

    parts.join(", ")
}
