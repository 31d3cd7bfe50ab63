use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NoteKind {
    /// clock_in missing or unparseable; entry excluded.
    InvalidClockIn { value: String },
    /// clock_out present but unparseable; entry excluded.
    InvalidClockOut { value: String },
    /// Negative break clamped to 0; entry kept.
    NegativeBreak { value: i64 },
    /// Break above the supported maximum clamped to it; entry kept.
    OversizedBreak { value: String },
    /// Break not an integer number of minutes, counted as 0; entry kept.
    InvalidBreak { value: String },
    /// clock_out before clock_in; entry kept with 0 hours.
    InvertedInterval,
    /// Stored total disagreed with the recomputed one; recomputed wins.
    StaleTotal { stored: f64, recomputed: f64 },
}

/// Per-entry fault found while validating store rows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationNote {
    pub entry_id: String,
    #[serde(flatten)]
    pub kind: NoteKind,
}

impl ValidationNote {
    pub fn new(entry_id: &str, kind: NoteKind) -> Self {
        Self {
            entry_id: entry_id.to_string(),
            kind,
        }
    }

    /// true when the entry was dropped from aggregation.
    pub fn excludes_entry(&self) -> bool {
        matches!(
            self.kind,
            NoteKind::InvalidClockIn { .. } | NoteKind::InvalidClockOut { .. }
        )
    }
}

impl fmt::Display for ValidationNote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            NoteKind::InvalidClockIn { value } => {
                write!(f, "{}: invalid clock_in '{}' (excluded)", self.entry_id, value)
            }
            NoteKind::InvalidClockOut { value } => {
                write!(f, "{}: invalid clock_out '{}' (excluded)", self.entry_id, value)
            }
            NoteKind::NegativeBreak { value } => {
                write!(f, "{}: negative break {} min clamped to 0", self.entry_id, value)
            }
            NoteKind::OversizedBreak { value } => write!(
                f,
                "{}: break {} min clamped to {}",
                self.entry_id,
                value,
                u32::MAX
            ),
            NoteKind::InvalidBreak { value } => {
                write!(f, "{}: invalid break {} counted as 0", self.entry_id, value)
            }
            NoteKind::InvertedInterval => {
                write!(f, "{}: clock_out before clock_in, counted as 0h", self.entry_id)
            }
            NoteKind::StaleTotal { stored, recomputed } => write!(
                f,
                "{}: stored total {:.2}h replaced by {:.2}h",
                self.entry_id, stored, recomputed
            ),
        }
    }
}
