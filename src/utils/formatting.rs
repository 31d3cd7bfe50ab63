//! Formatting utilities used for CLI and export outputs.

/// 7.5 → "7.50h"
pub fn hours2readable(hours: f64) -> String {
    format!("{:.2}h", hours)
}

/// Display-layer rounding to cents happens here and only here.
pub fn money(amount: f64) -> String {
    format!("{:.2}", amount)
}

/// Shortened entry id for tables (UUIDs are long).
pub fn short_id(id: &str) -> String {
    id.chars().take(8).collect()
}

pub fn describe_tag(tag: Option<&str>) -> String {
    match tag {
        Some(t) if !t.trim().is_empty() => t.to_string(),
        _ => "--".to_string(),
    }
}
