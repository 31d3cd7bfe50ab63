use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::{delete_entry, get_entry};
use crate::errors::{AppError, AppResult};
use crate::models::raw_entry::RawTimeEntry;

pub struct DeleteLogic;

impl DeleteLogic {
    /// Deletes one entry and returns the row as it was.
    pub fn apply(pool: &mut DbPool, entry_id: &str) -> AppResult<RawTimeEntry> {
        let row = get_entry(&pool.conn, entry_id)?
            .ok_or_else(|| AppError::EntryNotFound(entry_id.to_string()))?;

        pool.with_tx(|tx| -> AppResult<()> {
            delete_entry(tx, entry_id)?;
            ttlog(
                tx,
                "del",
                entry_id,
                &format!("Deleted entry of {} started {}", row.employee_id, row.clock_in),
            )
        })?;

        Ok(row)
    }
}
