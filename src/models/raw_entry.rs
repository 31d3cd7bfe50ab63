use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Time entry exactly as the store (or a JSON import) hands it over.
///
/// Nothing here is trusted: timestamps are unparsed ISO-8601 strings and
/// `break_minutes` is whatever value the record carried (negative, huge,
/// text...). `core::validate` turns these rows into
/// [`TimeEntry`](super::time_entry::TimeEntry) values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawTimeEntry {
    pub id: String,
    pub employee_id: String,
    pub clock_in: String,
    #[serde(default)]
    pub clock_out: Option<String>,
    #[serde(default)]
    pub break_minutes: Option<Value>,
    #[serde(default)]
    pub total_hours: Option<f64>,
    #[serde(default)]
    pub project_tag: Option<String>,
}
