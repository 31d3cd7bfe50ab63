use crate::cli::commands::{open_pool, resolve_employee, resolve_rate, resolve_window};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::pay::period_pay;
use crate::core::clock::SystemClock;
use crate::core::report::ReportLogic;
use crate::errors::AppResult;
use crate::models::report::TimesheetReport;
use crate::ui::messages::{conflict, header, info, note};
use crate::utils::colors::{
    CYAN, GREEN, RESET, color_for_active, color_for_conflict, colorize_optional,
};
use crate::utils::formatting::{describe_tag, hours2readable, money, short_id};
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Report {
        employee,
        week,
        period,
        rate,
        details,
    } = cmd
    {
        let employee = resolve_employee(cfg, employee)?;
        let (start, end) = resolve_window(cfg, week, period)?;
        let hourly_rate = resolve_rate(cfg, &employee, *rate)?;
        let pool = open_pool(cfg)?;

        let report = ReportLogic::build(&pool, &employee, start, end, hourly_rate, &SystemClock)?;
        print_report(&report, *details);
    }
    Ok(())
}

fn print_report(report: &TimesheetReport, details: bool) {
    let agg = &report.aggregate;

    header(format!(
        "{} · {} → {} · rate {}/h",
        report.employee_id,
        agg.period_start,
        agg.period_end,
        money(agg.hourly_rate)
    ));

    let mut table = Table::new(vec![
        Column::new("DATE", 14),
        Column::new("ENTRIES", 7),
        Column::new("HOURS", 8),
        Column::new("BREAK", 6),
        Column::new("PAY", 10),
        Column::new("RUN.HOURS", 9),
        Column::new("RUN.PAY", 10),
    ]);

    for (i, day) in agg.days.iter().enumerate() {
        let has_conflict = report.conflicts.iter().any(|c| c.day == day.date);
        let date_color = if has_conflict {
            color_for_conflict(true)
        } else {
            color_for_active(day.active_entries())
        };

        table.add_row(vec![
            format!("{}{}{}", date_color, day.date.format("%a %Y-%m-%d"), RESET),
            day.entries.len().to_string(),
            colorize_optional(&hours2readable(day.daily_hours)),
            format!("{}m", day.daily_break_minutes),
            money(day.daily_pay),
            hours2readable(agg.running_hours[i]),
            money(agg.running_pay[i]),
        ]);

        if details {
            for e in &day.entries {
                let total = e
                    .total_hours
                    .map(hours2readable)
                    .unwrap_or_else(|| "open".to_string());
                table.add_row(vec![
                    format!("  {}", short_id(&e.id)),
                    String::new(),
                    total,
                    format!("{}m", e.break_minutes),
                    colorize_optional(&format!("{} → {}", e.clock_in_str(), e.clock_out_str())),
                    colorize_optional(&describe_tag(e.project_tag.as_deref())),
                    String::new(),
                ]);
            }
        }
    }

    println!("{}", table.render());

    let weeks = agg.weekly_totals();
    if weeks.len() > 1 {
        println!("{}Weekly totals{}", CYAN, RESET);
        for w in &weeks {
            println!(
                "  {}-W{:02}: {} · {}",
                w.iso_year,
                w.iso_week,
                hours2readable(w.hours),
                money(w.pay)
            );
        }
        println!();
    }

    println!(
        "{}TOTAL{}: {} · break {}m · pay {}",
        GREEN,
        RESET,
        hours2readable(agg.total_hours()),
        agg.total_break_minutes(),
        money(period_pay(&agg.running_hours, agg.hourly_rate))
    );

    if report.has_conflicts() {
        println!();
        for c in &report.conflicts {
            conflict(c);
        }
    }

    if !report.notes.is_empty() {
        println!();
        for n in &report.notes {
            note(n);
        }
    }

    let open: usize = agg.days.iter().map(|d| d.active_entries()).sum();
    if open > 0 {
        info(format!(
            "{} open entr{} counted as 0h until clocked out.",
            open,
            if open == 1 { "y" } else { "ies" }
        ));
    }
}
