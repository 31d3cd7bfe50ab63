use crate::cli::commands::{open_pool, resolve_employee};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::punch::PunchLogic;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::date;
use crate::utils::formatting::hours2readable;
use crate::utils::time::resolve_instant;
use chrono::{DateTime, FixedOffset, Local};

fn resolve_at(at: &Option<String>) -> AppResult<DateTime<FixedOffset>> {
    match at {
        Some(v) => resolve_instant(date::today(), v, None),
        None => Ok(Local::now().fixed_offset()),
    }
}

/// Handle `clock-in` and `clock-out`.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    match cmd {
        Commands::ClockIn { employee, at, tag } => {
            let employee = resolve_employee(cfg, employee)?;
            let at = resolve_at(at)?;
            let mut pool = open_pool(cfg)?;

            let entry = PunchLogic::clock_in(&mut pool, &employee, at, tag.clone())?;
            success(format!(
                "{} clocked in at {} (entry {}).",
                employee,
                entry.clock_in.format("%Y-%m-%d %H:%M"),
                entry.id
            ));
        }
        Commands::ClockOut {
            employee,
            at,
            break_minutes,
        } => {
            let employee = resolve_employee(cfg, employee)?;
            let at = resolve_at(at)?;
            let mut pool = open_pool(cfg)?;

            let entry = PunchLogic::clock_out(&mut pool, &employee, at, *break_minutes)?;
            success(format!(
                "{} clocked out at {}: {} worked (entry {}).",
                employee,
                at.format("%Y-%m-%d %H:%M"),
                hours2readable(entry.total_hours.unwrap_or(0.0)),
                entry.id
            ));
        }
        _ => {}
    }
    Ok(())
}
