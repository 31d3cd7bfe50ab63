use crate::core::validate::validate_entries;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::upsert_entry;
use crate::errors::AppResult;
use crate::models::raw_entry::RawTimeEntry;
use crate::models::validation::ValidationNote;
use std::fs;
use std::path::Path;

#[derive(Debug, Default)]
pub struct ImportSummary {
    pub inserted: usize,
    pub updated: usize,
    /// Rows that were skipped or clamped.
    pub notes: Vec<ValidationNote>,
}

/// Bulk load of wire-format entries (JSON array of records).
pub struct ImportLogic;

impl ImportLogic {
    pub fn read_file(path: &Path) -> AppResult<Vec<RawTimeEntry>> {
        let content = fs::read_to_string(path)?;
        let rows: Vec<RawTimeEntry> = serde_json::from_str(&content)?;
        Ok(rows)
    }

    /// Validates and stores rows. Invalid rows are skipped and reported;
    /// the rest are written in a single transaction.
    pub fn apply(pool: &mut DbPool, rows: &[RawTimeEntry]) -> AppResult<ImportSummary> {
        let (entries, notes) = validate_entries(rows);
        let mut summary = ImportSummary {
            notes,
            ..ImportSummary::default()
        };

        pool.with_tx(|tx| -> AppResult<()> {
            for e in &entries {
                if upsert_entry(tx, e)? {
                    summary.inserted += 1;
                } else {
                    summary.updated += 1;
                }
            }

            ttlog(
                tx,
                "import",
                "",
                &format!(
                    "Imported {} new, {} updated, {} skipped",
                    summary.inserted,
                    summary.updated,
                    summary.notes.iter().filter(|n| n.excludes_entry()).count()
                ),
            )
        })?;

        Ok(summary)
    }
}
