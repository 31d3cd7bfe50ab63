use crate::cli::commands::{open_pool, resolve_employee, resolve_window};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::clock::SystemClock;
use crate::core::report::ReportLogic;
use crate::errors::AppResult;
use crate::ui::messages::{conflict, note, success};

/// Overlapping shifts only. Open entries are treated as running until now,
/// so the answer can change between two runs.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Conflicts {
        employee,
        week,
        period,
    } = cmd
    {
        let employee = resolve_employee(cfg, employee)?;
        let (start, end) = resolve_window(cfg, week, period)?;
        let pool = open_pool(cfg)?;

        let report = ReportLogic::build(&pool, &employee, start, end, None, &SystemClock)?;

        if !report.has_conflicts() {
            success(format!(
                "No overlapping shifts for {} between {} and {}.",
                employee, start, end
            ));
        } else {
            println!(
                "{} overlapping pair(s) for {} between {} and {}:",
                report.conflicts.len(),
                employee,
                start,
                end
            );
            for c in &report.conflicts {
                conflict(c);
            }
        }

        for n in report.notes.iter().filter(|n| n.excludes_entry()) {
            note(n);
        }
    }
    Ok(())
}
