// src/export/model.rs

use crate::models::period::PeriodAggregate;
use serde::Serialize;

/// Flat per-day row for CSV export.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct DayExport {
    pub date: String,
    pub entries: usize,
    pub active_entries: usize,
    pub daily_hours: f64,
    pub daily_break_minutes: u64,
    pub daily_pay: f64,
    pub running_hours: f64,
    pub running_pay: f64,
}

/// One row per day of the period, running totals included.
pub fn aggregate_to_rows(agg: &PeriodAggregate) -> Vec<DayExport> {
    agg.days
        .iter()
        .enumerate()
        .map(|(i, d)| DayExport {
            date: d.date.format("%Y-%m-%d").to_string(),
            entries: d.entries.len(),
            active_entries: d.active_entries(),
            daily_hours: d.daily_hours,
            daily_break_minutes: d.daily_break_minutes,
            daily_pay: d.daily_pay,
            running_hours: agg.running_hours.get(i).copied().unwrap_or(0.0),
            running_pay: agg.running_pay.get(i).copied().unwrap_or(0.0),
        })
        .collect()
}
