//! Duration recalculator: derives `total_hours` from clock-in, clock-out
//! and the unpaid break.

use crate::models::time_entry::TimeEntry;
use chrono::{DateTime, FixedOffset};

/// Net worked hours for a session.
///
/// - `clock_out == None` → `None` (entry still active)
/// - otherwise `max(0, minutes(out - in) - break) / 60`
///
/// An inverted interval (out before in) clamps to `0.0`.
pub fn recompute(
    clock_in: DateTime<FixedOffset>,
    clock_out: Option<DateTime<FixedOffset>>,
    break_minutes: u32,
) -> Option<f64> {
    let out = clock_out?;
    let raw_minutes = (out - clock_in).num_minutes();
    let net = (raw_minutes - break_minutes as i64).max(0);
    Some(net as f64 / 60.0)
}

/// Break value as received from an editor or a store row: negative input
/// becomes 0.
pub fn sanitize_break(value: i64) -> u32 {
    value.clamp(0, u32::MAX as i64) as u32
}

/// Rewrites `entry.total_hours` from its own times and break.
pub fn recompute_entry(entry: &mut TimeEntry) {
    entry.total_hours = recompute(entry.clock_in, entry.clock_out, entry.break_minutes);
}

