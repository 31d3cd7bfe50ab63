// src/export/json_csv.rs

use crate::errors::AppResult;
use crate::export::model::aggregate_to_rows;
use crate::export::notify_export_success;
use crate::models::report::TimesheetReport;
use crate::ui::messages::info;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Whole report (days, running totals, conflicts, notes), pretty-printed.
pub(crate) fn export_json(report: &TimesheetReport, path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let json_data = serde_json::to_string_pretty(report)?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success("JSON", path);
    Ok(())
}

/// One row per day (header comes from serde).
pub(crate) fn export_csv(report: &TimesheetReport, path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let mut wtr = csv::Writer::from_path(path)?;

    for row in aggregate_to_rows(&report.aggregate) {
        wtr.serialize(row)?;
    }

    wtr.flush()?;

    notify_export_success("CSV", path);
    Ok(())
}
