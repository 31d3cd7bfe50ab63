use super::time_entry::TimeEntry;
use chrono::{Datelike, NaiveDate};
use serde::Serialize;

/// One calendar day of the reporting window.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayAggregate {
    pub date: NaiveDate,
    pub entries: Vec<TimeEntry>,
    pub daily_hours: f64,
    pub daily_break_minutes: u64,
    pub daily_pay: f64,
}

impl DayAggregate {
    pub fn active_entries(&self) -> usize {
        self.entries.iter().filter(|e| e.is_active()).count()
    }
}

/// Subtotal for one ISO week inside a period.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeekTotal {
    pub iso_year: i32,
    pub iso_week: u32,
    pub hours: f64,
    pub pay: f64,
}

/// Whole reporting window: one `DayAggregate` per calendar day plus the
/// running (prefix) sums of hours and pay.
///
/// `running_hours` and `running_pay` have the same length as `days`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PeriodAggregate {
    pub period_start: NaiveDate,
    pub period_end: NaiveDate,
    pub hourly_rate: f64,
    pub days: Vec<DayAggregate>,
    pub running_hours: Vec<f64>,
    pub running_pay: Vec<f64>,
}

impl PeriodAggregate {
    pub fn total_hours(&self) -> f64 {
        self.running_hours.last().copied().unwrap_or(0.0)
    }

    pub fn total_pay(&self) -> f64 {
        self.running_pay.last().copied().unwrap_or(0.0)
    }

    pub fn total_break_minutes(&self) -> u64 {
        self.days.iter().map(|d| d.daily_break_minutes).sum()
    }

    pub fn day(&self, date: NaiveDate) -> Option<&DayAggregate> {
        self.days.iter().find(|d| d.date == date)
    }

    /// Folds the days into ISO-week subtotals, in chronological order.
    pub fn weekly_totals(&self) -> Vec<WeekTotal> {
        let mut out: Vec<WeekTotal> = Vec::new();

        for day in &self.days {
            let iso = day.date.iso_week();

            match out.last_mut() {
                Some(w) if w.iso_year == iso.year() && w.iso_week == iso.week() => {
                    w.hours += day.daily_hours;
                    w.pay += day.daily_pay;
                }
                _ => out.push(WeekTotal {
                    iso_year: iso.year(),
                    iso_week: iso.week(),
                    hours: day.daily_hours,
                    pay: day.daily_pay,
                }),
            }
        }

        out
    }
}
