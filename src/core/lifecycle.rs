//! Edit/recompute state machine for a single entry.
//!
//! ```text
//! Active ──┐                 ┌──▶ Active     (clock_out absent / cleared)
//!          ├──▶ Edited ──────┤
//! Completed┘   (recompute)   └──▶ Completed  (clock_out present)
//! ```
//!
//! Every edit, including a break-only one, goes through the duration
//! recalculator before the entry is handed back.

use crate::core::calculator::duration;
use crate::errors::{AppError, AppResult};
use crate::models::time_entry::TimeEntry;
use chrono::{DateTime, FixedOffset};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EntryState {
    Active,
    Completed,
    Edited,
}

impl EntryState {
    /// Settled state of an entry (never `Edited`).
    pub fn of(entry: &TimeEntry) -> Self {
        if entry.is_active() {
            EntryState::Active
        } else {
            EntryState::Completed
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EntryState::Active => "active",
            EntryState::Completed => "completed",
            EntryState::Edited => "edited",
        }
    }
}

/// A discrete "entry changed" event. `None` leaves the field untouched;
/// `Some(None)` on the optional fields clears them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntryEdit {
    pub clock_in: Option<DateTime<FixedOffset>>,
    pub clock_out: Option<Option<DateTime<FixedOffset>>>,
    pub break_minutes: Option<i64>,
    pub project_tag: Option<Option<String>>,
}

impl EntryEdit {
    pub fn is_empty(&self) -> bool {
        self.clock_in.is_none()
            && self.clock_out.is_none()
            && self.break_minutes.is_none()
            && self.project_tag.is_none()
    }

    pub fn set_break(minutes: i64) -> Self {
        Self {
            break_minutes: Some(minutes),
            ..Self::default()
        }
    }

    pub fn close_at(out: DateTime<FixedOffset>) -> Self {
        Self {
            clock_out: Some(Some(out)),
            ..Self::default()
        }
    }

    pub fn reopen() -> Self {
        Self {
            clock_out: Some(None),
            ..Self::default()
        }
    }
}

/// Result of running one edit through the machine.
#[derive(Debug, Clone, PartialEq)]
pub struct EditOutcome {
    pub entry: TimeEntry,
    pub previous: EntryState,
    /// States visited, always `[Edited, <settled>]`.
    pub path: Vec<EntryState>,
}

impl EditOutcome {
    pub fn current(&self) -> EntryState {
        self.path.last().copied().unwrap_or(self.previous)
    }
}

/// Applies `edit` to a copy of `entry` and recomputes its duration.
///
/// The input entry is not touched; the caller persists `outcome.entry` and
/// refetches before aggregating again.
pub fn apply_edit(entry: &TimeEntry, edit: &EntryEdit) -> AppResult<EditOutcome> {
    if edit.is_empty() {
        return Err(AppError::InvalidEdit(format!(
            "nothing to change for entry {}",
            entry.id
        )));
    }

    let previous = EntryState::of(entry);
    let mut updated = entry.clone();

    if let Some(ci) = edit.clock_in {
        updated.clock_in = ci;
    }
    if let Some(co) = edit.clock_out {
        updated.clock_out = co;
    }
    if let Some(b) = edit.break_minutes {
        updated.break_minutes = duration::sanitize_break(b);
    }
    if let Some(tag) = &edit.project_tag {
        updated.project_tag = tag.clone();
    }

    duration::recompute_entry(&mut updated);

    let settled = EntryState::of(&updated);

    Ok(EditOutcome {
        entry: updated,
        previous,
        path: vec![EntryState::Edited, settled],
    })
}
