//! Daily/weekly aggregation with running totals.
//!
//! Fully deterministic: no "now" involved. Active entries contribute 0 hours
//! until they are closed.

use crate::core::calculator::{duration, pay};
use crate::errors::{AppError, AppResult};
use crate::models::period::{DayAggregate, PeriodAggregate};
use crate::models::time_entry::TimeEntry;
use chrono::NaiveDate;

/// Builds the aggregate for `[period_start, period_end]` (both inclusive).
///
/// - each entry lands on the day of its `clock_in`, never split;
/// - entries outside the window are ignored;
/// - empty days are still emitted with 0 hours;
/// - `total_hours` of every returned entry is recomputed from its times.
pub fn aggregate(
    entries: &[TimeEntry],
    period_start: NaiveDate,
    period_end: NaiveDate,
    hourly_rate: f64,
) -> AppResult<PeriodAggregate> {
    if period_end < period_start {
        return Err(AppError::InvalidPeriod(format!(
            "period end {} is before period start {}",
            period_end, period_start
        )));
    }

    // -----------------------------
    // One bucket per calendar day
    // -----------------------------
    let mut days: Vec<DayAggregate> = period_start
        .iter_days()
        .take_while(|d| *d <= period_end)
        .map(|date| DayAggregate {
            date,
            entries: Vec::new(),
            daily_hours: 0.0,
            daily_break_minutes: 0,
            daily_pay: 0.0,
        })
        .collect();

    let mut sorted: Vec<TimeEntry> = entries.to_vec();
    sorted.sort_by(|a, b| a.clock_in.cmp(&b.clock_in).then_with(|| a.id.cmp(&b.id)));

    for mut entry in sorted {
        let date = entry.work_date();
        if date < period_start || date > period_end {
            continue;
        }

        duration::recompute_entry(&mut entry);

        let idx = (date - period_start).num_days() as usize;
        let day = &mut days[idx];
        day.daily_hours += entry.total_hours.unwrap_or(0.0);
        day.daily_break_minutes += u64::from(entry.break_minutes);
        day.entries.push(entry);
    }

    // -----------------------------
    // Pay + running sums, left to right
    // -----------------------------
    let mut running_hours = Vec::with_capacity(days.len());
    let mut running_pay = Vec::with_capacity(days.len());
    let mut acc_hours = 0.0;
    let mut acc_pay = 0.0;

    for day in days.iter_mut() {
        day.daily_pay = pay::daily_pay(day.daily_hours, hourly_rate);

        acc_hours += day.daily_hours;
        acc_pay += day.daily_pay;
        running_hours.push(acc_hours);
        running_pay.push(acc_pay);
    }

    Ok(PeriodAggregate {
        period_start,
        period_end,
        hourly_rate,
        days,
        running_hours,
        running_pay,
    })
}

