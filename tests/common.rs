#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{DateTime, FixedOffset, NaiveDate};
use rtimesheet::models::raw_entry::RawTimeEntry;
use rtimesheet::models::time_entry::TimeEntry;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rts() -> Command {
    cargo_bin_cmd!("rtimesheet")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rtimesheet.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// "2025-09-01T09:00" → 2025-09-01T09:00:00+02:00
pub fn ts(s: &str) -> DateTime<FixedOffset> {
    DateTime::parse_from_rfc3339(&format!("{}:00+02:00", s)).expect("valid test timestamp")
}

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid test date")
}

/// Completed entry for employee "emp-1".
pub fn entry(id: &str, start: &str, end: &str, break_minutes: u32) -> TimeEntry {
    let mut e = TimeEntry::new(id, "emp-1", ts(start));
    e.clock_out = Some(ts(end));
    e.break_minutes = break_minutes;
    rtimesheet::core::calculator::duration::recompute_entry(&mut e);
    e
}

/// Active entry for employee "emp-1".
pub fn open_entry(id: &str, start: &str) -> TimeEntry {
    TimeEntry::new(id, "emp-1", ts(start))
}

pub fn raw(id: &str, clock_in: &str, clock_out: Option<&str>, break_minutes: i64) -> RawTimeEntry {
    RawTimeEntry {
        id: id.to_string(),
        employee_id: "emp-1".to_string(),
        clock_in: clock_in.to_string(),
        clock_out: clock_out.map(str::to_string),
        break_minutes: Some(break_minutes.into()),
        total_hours: None,
        project_tag: None,
    }
}

/// Init a DB through the CLI (test mode: no config file is touched).
pub fn init_db(db_path: &str) {
    rts()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Add a completed session through the CLI.
pub fn add_session(db_path: &str, employee: &str, day: &str, start: &str, end: &str, brk: &str) {
    rts()
        .args([
            "--db", db_path, "--test", "add", day, "--employee", employee, "--in", start, "--out",
            end, "--break", brk,
        ])
        .assert()
        .success();
}

pub fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}
