use crate::cli::commands::{open_pool, resolve_employee, resolve_rate, resolve_window};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::clock::SystemClock;
use crate::db::log::ttlog;
use crate::errors::AppResult;
use crate::export::{ExportLogic, ExportRequest};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        employee,
        format,
        file,
        week,
        period,
        rate,
        force,
    } = cmd
    {
        let employee = resolve_employee(cfg, employee)?;
        let (start, end) = resolve_window(cfg, week, period)?;
        let hourly_rate = resolve_rate(cfg, &employee, *rate)?;
        let pool = open_pool(cfg)?;

        let req = ExportRequest {
            employee_id: &employee,
            start,
            end,
            hourly_rate,
            format: *format,
            file,
            force: *force,
        };

        ExportLogic::export(&pool, &req, &SystemClock)?;

        ttlog(
            &pool.conn,
            "export",
            &employee,
            &format!("{} {}..{} → {}", format.as_str(), start, end, file),
        )?;
    }
    Ok(())
}
