use chrono::NaiveDate;
use serde::Serialize;

/// Overlap between two entries of the same employee on the same day.
///
/// `entry_a` is always the entry that sorts first by `(clock_in, id)`, so a
/// pair is reported the same way whatever the input order was.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Conflict {
    pub day: NaiveDate,
    pub entry_a: String,
    pub entry_b: String,
}

impl Conflict {
    pub fn involves(&self, entry_id: &str) -> bool {
        self.entry_a == entry_id || self.entry_b == entry_id
    }
}
