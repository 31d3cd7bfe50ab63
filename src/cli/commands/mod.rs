pub mod add;
pub mod clock;
pub mod config;
pub mod conflicts;
pub mod del;
pub mod edit;
pub mod export;
pub mod import;
pub mod init;
pub mod log;
pub mod report;

use crate::config::Config;
use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::utils::date;
use chrono::NaiveDate;

/// Open the configured DB, making sure the schema is current.
pub(crate) fn open_pool(cfg: &Config) -> AppResult<DbPool> {
    let pool = DbPool::new(&cfg.database)?;
    init_db(&pool.conn)?;
    Ok(pool)
}

/// `--employee`, else `default_employee` from the config.
pub(crate) fn resolve_employee(cfg: &Config, employee: &Option<String>) -> AppResult<String> {
    employee
        .clone()
        .or_else(|| cfg.default_employee.clone())
        .filter(|e| !e.trim().is_empty())
        .ok_or_else(|| {
            AppError::Config("no employee given (use --employee or set default_employee)".into())
        })
}

/// Reporting window: `--week DATE`, `--period RANGE`, or the current week.
pub(crate) fn resolve_window(
    cfg: &Config,
    week: &Option<String>,
    period: &Option<String>,
) -> AppResult<(NaiveDate, NaiveDate)> {
    let week_start = cfg.week_start_day()?;

    if let Some(w) = week {
        let d = date::parse_date(w).ok_or_else(|| AppError::InvalidDate(w.clone()))?;
        return Ok(date::week_bounds(d, week_start));
    }

    if let Some(p) = period {
        return date::parse_period(p);
    }

    Ok(date::current_week(week_start))
}

/// Explicit `--rate` wins over the configured one.
pub(crate) fn resolve_rate(cfg: &Config, employee: &str, rate: Option<f64>) -> AppResult<Option<f64>> {
    match rate {
        Some(r) if !r.is_finite() || r < 0.0 => Err(AppError::InvalidRate(r.to_string())),
        Some(r) => Ok(Some(r)),
        None => Ok(cfg.rate_for(employee)),
    }
}
