use chrono::{DateTime, FixedOffset, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// One real or in-progress work session.
///
/// `clock_out == None` means the employee is still clocked in (active entry).
/// `total_hours` is derived: it is `None` while the entry is active and is
/// rewritten by the duration recalculator on every edit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeEntry {
    pub id: String,
    pub employee_id: String,
    pub clock_in: DateTime<FixedOffset>,
    pub clock_out: Option<DateTime<FixedOffset>>,
    pub break_minutes: u32,
    pub total_hours: Option<f64>,
    pub project_tag: Option<String>,
}

impl TimeEntry {
    /// New active entry (no clock-out yet).
    pub fn new(id: &str, employee_id: &str, clock_in: DateTime<FixedOffset>) -> Self {
        Self {
            id: id.to_string(),
            employee_id: employee_id.to_string(),
            clock_in,
            clock_out: None,
            break_minutes: 0,
            total_hours: None,
            project_tag: None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.clock_out.is_none()
    }

    /// Calendar day the entry belongs to: the date of `clock_in` in the
    /// offset it was recorded with. An entry is never split across days.
    pub fn work_date(&self) -> NaiveDate {
        self.clock_in.date_naive()
    }

    /// `clock_out` if present, otherwise `now`.
    pub fn effective_end(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        match self.clock_out {
            Some(out) => out.with_timezone(&Utc),
            None => now,
        }
    }

    pub fn start_utc(&self) -> DateTime<Utc> {
        self.clock_in.with_timezone(&Utc)
    }

    pub fn clock_in_str(&self) -> String {
        self.clock_in.format("%H:%M").to_string()
    }

    pub fn clock_out_str(&self) -> String {
        self.clock_out
            .map(|t| t.format("%H:%M").to_string())
            .unwrap_or_else(|| "--:--".to_string())
    }
}
