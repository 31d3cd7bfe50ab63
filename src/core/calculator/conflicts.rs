//! Overlapping-shift detection.
//!
//! Entries are grouped by employee and calendar day of `clock_in`, then every
//! unordered pair in a group is tested. Daily counts are small (tens), so the
//! quadratic scan is fine.
//!
//! Active entries run until `clock.now()`: calling this twice at different
//! wall-clock instants may give different answers for them.

use crate::core::clock::Clock;
use crate::models::conflict::Conflict;
use crate::models::time_entry::TimeEntry;
use chrono::{DateTime, NaiveDate, Utc};
use std::collections::BTreeMap;

/// Half-open interval test, strict on both ends: touching intervals
/// (one ends exactly when the other starts) do not overlap.
pub fn overlaps(
    start_a: DateTime<Utc>,
    end_a: DateTime<Utc>,
    start_b: DateTime<Utc>,
    end_b: DateTime<Utc>,
) -> bool {
    start_a < end_b && start_b < end_a
}

pub fn find_conflicts(entries: &[TimeEntry], clock: &dyn Clock) -> Vec<Conflict> {
    let now = clock.now();

    // (employee, day) → entries; BTreeMap keeps the output ordered by day
    let mut groups: BTreeMap<(NaiveDate, &str), Vec<&TimeEntry>> = BTreeMap::new();
    for e in entries {
        groups
            .entry((e.work_date(), e.employee_id.as_str()))
            .or_default()
            .push(e);
    }

    let mut out = Vec::new();

    for ((day, _employee), mut group) in groups {
        group.sort_by(|a, b| {
            a.start_utc()
                .cmp(&b.start_utc())
                .then_with(|| a.id.cmp(&b.id))
        });

        for (i, a) in group.iter().enumerate() {
            let a_end = a.effective_end(now);

            for b in &group[i + 1..] {
                if overlaps(a.start_utc(), a_end, b.start_utc(), b.effective_end(now)) {
                    out.push(Conflict {
                        day,
                        entry_a: a.id.clone(),
                        entry_b: b.id.clone(),
                    });
                }
            }
        }
    }

    out
}

/// Conflicts touching a single entry, e.g. to flag it in an editor.
pub fn conflicts_for_entry<'a>(conflicts: &'a [Conflict], entry_id: &str) -> Vec<&'a Conflict> {
    conflicts.iter().filter(|c| c.involves(entry_id)).collect()
}
