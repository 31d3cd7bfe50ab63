//! Store-adapter boundary: turns loosely-typed rows into `TimeEntry` values.
//!
//! Per-entry faults never abort the batch. An entry is either kept (possibly
//! clamped, with a note) or excluded (with a note).

use crate::core::calculator::duration;
use crate::models::raw_entry::RawTimeEntry;
use crate::models::time_entry::TimeEntry;
use crate::models::validation::{NoteKind, ValidationNote};
use crate::utils::time::parse_timestamp;
use serde_json::Value;

/// Tolerance when comparing a stored total with the recomputed one.
const TOTAL_EPSILON: f64 = 1e-6;

/// Validates a single row. `Err` means the entry must be excluded.
pub fn validate_entry(raw: &RawTimeEntry) -> Result<(TimeEntry, Vec<ValidationNote>), ValidationNote> {
    let mut notes = Vec::new();

    let clock_in = parse_timestamp(&raw.clock_in).ok_or_else(|| {
        ValidationNote::new(
            &raw.id,
            NoteKind::InvalidClockIn {
                value: raw.clock_in.clone(),
            },
        )
    })?;

    let clock_out = match raw.clock_out.as_deref().map(str::trim) {
        None | Some("") => None,
        Some(s) => Some(parse_timestamp(s).ok_or_else(|| {
            ValidationNote::new(
                &raw.id,
                NoteKind::InvalidClockOut {
                    value: s.to_string(),
                },
            )
        })?),
    };

    let break_minutes = match read_break(raw.break_minutes.as_ref()) {
        BreakInput::Minutes(m) if m < 0 => {
            notes.push(ValidationNote::new(&raw.id, NoteKind::NegativeBreak { value: m }));
            0
        }
        BreakInput::Minutes(m) => match u32::try_from(m) {
            Ok(b) => b,
            Err(_) => {
                notes.push(ValidationNote::new(
                    &raw.id,
                    NoteKind::OversizedBreak {
                        value: m.to_string(),
                    },
                ));
                u32::MAX
            }
        },
        BreakInput::TooLarge(v) => {
            notes.push(ValidationNote::new(&raw.id, NoteKind::OversizedBreak { value: v }));
            u32::MAX
        }
        BreakInput::Invalid(v) => {
            notes.push(ValidationNote::new(&raw.id, NoteKind::InvalidBreak { value: v }));
            0
        }
    };

    if let Some(out) = clock_out
        && out < clock_in
    {
        notes.push(ValidationNote::new(&raw.id, NoteKind::InvertedInterval));
    }

    let recomputed = duration::recompute(clock_in, clock_out, break_minutes);

    if let (Some(stored), Some(fresh)) = (raw.total_hours, recomputed)
        && (stored - fresh).abs() > TOTAL_EPSILON
    {
        notes.push(ValidationNote::new(
            &raw.id,
            NoteKind::StaleTotal {
                stored,
                recomputed: fresh,
            },
        ));
    }

    let project_tag = raw
        .project_tag
        .as_ref()
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty());

    let entry = TimeEntry {
        id: raw.id.clone(),
        employee_id: raw.employee_id.clone(),
        clock_in,
        clock_out,
        break_minutes,
        total_hours: recomputed,
        project_tag,
    };

    Ok((entry, notes))
}

enum BreakInput {
    Minutes(i64),
    /// Integer that does not even fit in i64.
    TooLarge(String),
    Invalid(String),
}

/// Missing/null → 0. Integers, integral floats (REAL columns) and numeric
/// text are accepted as minutes; anything else is invalid.
fn read_break(value: Option<&Value>) -> BreakInput {
    match value {
        None | Some(Value::Null) => BreakInput::Minutes(0),
        Some(Value::Number(n)) => {
            if let Some(i) = n.as_i64() {
                BreakInput::Minutes(i)
            } else if n.is_u64() {
                BreakInput::TooLarge(n.to_string())
            } else {
                match n.as_f64() {
                    Some(f) if f.fract() == 0.0 && f.abs() < i64::MAX as f64 => {
                        BreakInput::Minutes(f as i64)
                    }
                    Some(f) if f.fract() == 0.0 && f > 0.0 => BreakInput::TooLarge(n.to_string()),
                    _ => BreakInput::Invalid(n.to_string()),
                }
            }
        }
        Some(Value::String(s)) => match s.trim().parse::<i64>() {
            Ok(i) => BreakInput::Minutes(i),
            Err(_) => BreakInput::Invalid(format!("'{}'", s)),
        },
        Some(other) => BreakInput::Invalid(other.to_string()),
    }
}

/// Validates a batch, keeping every usable entry.
pub fn validate_entries(rows: &[RawTimeEntry]) -> (Vec<TimeEntry>, Vec<ValidationNote>) {
    let mut entries = Vec::with_capacity(rows.len());
    let mut notes = Vec::new();

    for raw in rows {
        match validate_entry(raw) {
            Ok((entry, mut n)) => {
                entries.push(entry);
                notes.append(&mut n);
            }
            Err(note) => notes.push(note),
        }
    }

    (entries, notes)
}

/// Back to the wire shape, e.g. for persisting or JSON export.
pub fn to_raw(entry: &TimeEntry) -> RawTimeEntry {
    RawTimeEntry {
        id: entry.id.clone(),
        employee_id: entry.employee_id.clone(),
        clock_in: entry.clock_in.to_rfc3339(),
        clock_out: entry.clock_out.map(|t| t.to_rfc3339()),
        break_minutes: Some(Value::from(entry.break_minutes)),
        total_hours: entry.total_hours,
        project_tag: entry.project_tag.clone(),
    }
}
