use crate::cli::commands::open_pool;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::edit::EditLogic;
use crate::core::lifecycle::EntryEdit;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::formatting::hours2readable;
use crate::utils::time::parse_optional_instant;

/// Edit an entry. HH:MM values are read on the entry's own day and offset.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit {
        id,
        start,
        end,
        reopen,
        break_minutes,
        tag,
        clear_tag,
    } = cmd
    {
        let mut pool = open_pool(cfg)?;
        let current = EditLogic::load(&pool, id)?;

        let day = current.work_date();
        let offset = Some(*current.clock_in.offset());

        let clock_out = if *reopen {
            Some(None)
        } else {
            parse_optional_instant(day, end.as_ref(), offset)?.map(Some)
        };

        let project_tag = if *clear_tag {
            Some(None)
        } else {
            tag.clone().map(Some)
        };

        let edit = EntryEdit {
            clock_in: parse_optional_instant(day, start.as_ref(), offset)?,
            clock_out,
            break_minutes: *break_minutes,
            project_tag,
        };

        let outcome = EditLogic::apply(&mut pool, id, &edit)?;

        let total = outcome
            .entry
            .total_hours
            .map(hours2readable)
            .unwrap_or_else(|| "open".to_string());

        success(format!(
            "✏️ Entry {} updated ({} → {}): {} → {}, break {}m, total {}.",
            id,
            outcome.previous.as_str(),
            outcome.current().as_str(),
            outcome.entry.clock_in_str(),
            outcome.entry.clock_out_str(),
            outcome.entry.break_minutes,
            total
        ));
    }

    Ok(())
}
