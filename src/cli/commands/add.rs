use crate::cli::commands::{open_pool, resolve_employee};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::AddLogic;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use crate::utils::date;
use crate::utils::formatting::hours2readable;
use crate::utils::time::{parse_optional_instant, resolve_instant};

/// Backfill a session.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        date,
        employee,
        start,
        end,
        break_minutes,
        tag,
    } = cmd
    {
        //
        // 1. Parse date + times
        //
        let d = date::parse_date(date).ok_or_else(|| AppError::InvalidDate(date.to_string()))?;
        let clock_in = resolve_instant(d, start, None)?;
        // OUT nello stesso offset dell'IN
        let clock_out = parse_optional_instant(d, end.as_ref(), Some(*clock_in.offset()))?;

        //
        // 2. Resolve employee + open DB
        //
        let employee = resolve_employee(cfg, employee)?;
        let mut pool = open_pool(cfg)?;

        //
        // 3. Execute logic
        //
        let entry = AddLogic::apply(
            &mut pool,
            &employee,
            clock_in,
            clock_out,
            *break_minutes,
            tag.clone(),
        )?;

        match entry.total_hours {
            Some(h) => success(format!(
                "Added entry {} on {}: {} → {} ({}).",
                entry.id,
                d,
                entry.clock_in_str(),
                entry.clock_out_str(),
                hours2readable(h)
            )),
            None => success(format!(
                "Added open entry {} on {} from {}.",
                entry.id,
                d,
                entry.clock_in_str()
            )),
        }
    }

    Ok(())
}
