/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Grey out placeholders ("--:--", "--", "0.00h") so real values stand out.
pub fn colorize_optional(value: &str) -> String {
    let v = value.trim();
    if v.is_empty() || v == "--:--" || v == "--" || v == "0.00h" {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}

/// Red for days that contain an overlapping shift.
pub fn color_for_conflict(has_conflict: bool) -> &'static str {
    if has_conflict { RED } else { RESET }
}

/// Yellow when the day still has an open (active) entry.
pub fn color_for_active(active: usize) -> &'static str {
    if active > 0 { YELLOW } else { RESET }
}
