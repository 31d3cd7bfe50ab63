// src/export/logic.rs

use crate::core::clock::Clock;
use crate::core::report::ReportLogic;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::utils::path::expand_tilde;
use chrono::NaiveDate;

/// High-level export: rebuild the report, then format it.
pub struct ExportLogic;

pub struct ExportRequest<'a> {
    pub employee_id: &'a str,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub hourly_rate: Option<f64>,
    pub format: ExportFormat,
    pub file: &'a str,
    pub force: bool,
}

impl ExportLogic {
    pub fn export(pool: &DbPool, req: &ExportRequest<'_>, clock: &dyn Clock) -> AppResult<()> {
        let path = expand_tilde(req.file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "output file path must be absolute: {}",
                req.file
            )));
        }

        ensure_writable(&path, req.force)?;

        let report = ReportLogic::build(
            pool,
            req.employee_id,
            req.start,
            req.end,
            req.hourly_rate,
            clock,
        )?;

        match req.format {
            ExportFormat::Csv => export_csv(&report, &path),
            ExportFormat::Json => export_json(&report, &path),
        }
    }
}
