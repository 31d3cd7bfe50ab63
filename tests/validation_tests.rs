mod common;
use chrono::Utc;
use common::{date, raw, ts};
use rtimesheet::core::clock::FixedClock;
use rtimesheet::core::logic::Core;
use rtimesheet::core::validate::{to_raw, validate_entries, validate_entry};
use rtimesheet::models::validation::NoteKind;
use serde_json::json;

#[test]
fn test_valid_row_has_no_notes() {
    let row = raw("a", "2025-09-01T09:00:00+02:00", Some("2025-09-01T17:00:00+02:00"), 30);
    let (entry, notes) = validate_entry(&row).expect("valid row");

    assert!(notes.is_empty());
    assert_eq!(entry.total_hours, Some(7.5));
    assert_eq!(entry.clock_in, ts("2025-09-01T09:00"));
}

#[test]
fn test_bad_clock_in_excludes_entry() {
    let row = raw("bad", "yesterday-ish", None, 0);
    let note = validate_entry(&row).expect_err("must be excluded");

    assert!(note.excludes_entry());
    assert!(matches!(note.kind, NoteKind::InvalidClockIn { .. }));
}

#[test]
fn test_bad_clock_out_excludes_entry() {
    let row = raw("bad", "2025-09-01T09:00:00+02:00", Some("17h00"), 0);
    let note = validate_entry(&row).expect_err("must be excluded");
    assert!(matches!(note.kind, NoteKind::InvalidClockOut { .. }));
}

#[test]
fn test_empty_clock_out_means_active() {
    let row = raw("a", "2025-09-01T09:00:00+02:00", Some("  "), 0);
    let (entry, notes) = validate_entry(&row).expect("valid row");
    assert!(entry.is_active());
    assert!(notes.is_empty());
}

#[test]
fn test_negative_break_and_inverted_interval_are_kept() {
    let row = raw("a", "2025-09-01T17:00:00+02:00", Some("2025-09-01T09:00:00+02:00"), -20);
    let (entry, notes) = validate_entry(&row).expect("kept");

    assert_eq!(entry.break_minutes, 0);
    assert_eq!(entry.total_hours, Some(0.0));
    assert_eq!(notes.len(), 2);
    assert!(notes.iter().all(|n| !n.excludes_entry()));
    assert!(notes.iter().any(|n| n.kind == NoteKind::NegativeBreak { value: -20 }));
    assert!(notes.iter().any(|n| n.kind == NoteKind::InvertedInterval));
}

#[test]
fn test_stale_total_is_flagged() {
    let mut row = raw("a", "2025-09-01T09:00:00+02:00", Some("2025-09-01T17:00:00+02:00"), 30);
    row.total_hours = Some(8.0);

    let (entry, notes) = validate_entry(&row).expect("kept");
    assert_eq!(entry.total_hours, Some(7.5));
    assert_eq!(
        notes[0].kind,
        NoteKind::StaleTotal {
            stored: 8.0,
            recomputed: 7.5
        }
    );
}

#[test]
fn test_blank_tag_is_dropped() {
    let mut row = raw("a", "2025-09-01T09:00:00+02:00", None, 0);
    row.project_tag = Some("   ".to_string());
    let (entry, _) = validate_entry(&row).expect("kept");
    assert_eq!(entry.project_tag, None);
}

#[test]
fn test_batch_keeps_good_rows() {
    let rows = vec![
        raw("ok", "2025-09-01T09:00:00+02:00", Some("2025-09-01T12:00:00+02:00"), 0),
        raw("bad", "", None, 0),
    ];
    let (entries, notes) = validate_entries(&rows);

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].id, "ok");
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].entry_id, "bad");
}

#[test]
fn test_to_raw_keeps_fields() {
    let row = raw("a", "2025-09-01T09:00:00+02:00", Some("2025-09-01T17:00:00+02:00"), 30);
    let (entry, _) = validate_entry(&row).expect("valid");
    let back = to_raw(&entry);

    assert_eq!(back.id, "a");
    assert_eq!(back.clock_in, "2025-09-01T09:00:00+02:00");
    assert_eq!(back.break_minutes, Some(serde_json::json!(30)));
    assert_eq!(back.total_hours, Some(7.5));
}

#[test]
fn test_build_report_from_rows() {
    let mut other = raw("x", "2025-09-01T09:00:00+02:00", Some("2025-09-01T10:00:00+02:00"), 0);
    other.employee_id = "emp-2".to_string();
    let mut other_bad = raw("y", "garbage", None, 0);
    other_bad.employee_id = "emp-2".to_string();

    let rows = vec![
        raw("a", "2025-09-01T08:00:00+02:00", Some("2025-09-01T12:30:00+02:00"), 0),
        raw("b", "2025-09-01T12:00:00+02:00", Some("2025-09-01T16:00:00+02:00"), 0),
        raw("c", "not a time", None, 0),
        other,
        other_bad,
    ];
    let clock = FixedClock(ts("2025-09-02T12:00").with_timezone(&Utc));

    let report = Core::build_report("emp-1", &rows, date("2025-09-01"), date("2025-09-07"), Some(10.0), &clock)
        .expect("report");

    assert_eq!(report.employee_id, "emp-1");
    assert_eq!(report.evaluated_at, clock.0);
    assert_eq!(report.aggregate.days.len(), 7);
    assert!((report.aggregate.total_hours() - 8.5).abs() < 1e-9);
    assert!((report.aggregate.total_pay() - 85.0).abs() < 1e-9);
    assert!(report.has_conflicts());
    assert_eq!(report.conflicts.len(), 1);
    // only emp-1 notes survive
    assert_eq!(report.notes.len(), 1);
    assert_eq!(report.notes[0].entry_id, "c");
}

#[test]
fn test_build_report_default_rate() {
    let rows = vec![raw("a", "2025-09-01T09:00:00+02:00", Some("2025-09-01T10:00:00+02:00"), 0)];
    let clock = FixedClock(Utc::now());
    let report = Core::build_report("emp-1", &rows, date("2025-09-01"), date("2025-09-01"), None, &clock)
        .expect("report");

    assert_eq!(report.aggregate.hourly_rate, 20.0);
    assert!((report.aggregate.total_pay() - 20.0).abs() < 1e-9);
}

#[test]
fn test_non_numeric_break_counts_as_zero() {
    let mut row = raw("a", "2025-09-01T09:00:00+02:00", Some("2025-09-01T17:00:00+02:00"), 0);
    row.break_minutes = Some(json!("thirty"));

    let (entry, notes) = validate_entry(&row).expect("kept");
    assert_eq!(entry.break_minutes, 0);
    assert_eq!(entry.total_hours, Some(8.0));
    assert_eq!(notes.len(), 1);
    assert!(!notes[0].excludes_entry());
    assert!(matches!(notes[0].kind, NoteKind::InvalidBreak { .. }));
}

#[test]
fn test_fractional_and_structured_breaks_are_invalid() {
    for value in [json!(12.5), json!(true), json!([30])] {
        let mut row = raw("a", "2025-09-01T09:00:00+02:00", Some("2025-09-01T10:00:00+02:00"), 0);
        row.break_minutes = Some(value);

        let (entry, notes) = validate_entry(&row).expect("kept");
        assert_eq!(entry.break_minutes, 0);
        assert!(matches!(notes[0].kind, NoteKind::InvalidBreak { .. }));
    }
}

#[test]
fn test_numeric_text_and_integral_real_breaks_are_accepted() {
    for value in [json!("45"), json!(45.0)] {
        let mut row = raw("a", "2025-09-01T09:00:00+02:00", Some("2025-09-01T17:00:00+02:00"), 0);
        row.break_minutes = Some(value);

        let (entry, notes) = validate_entry(&row).expect("kept");
        assert!(notes.is_empty());
        assert_eq!(entry.break_minutes, 45);
        assert_eq!(entry.total_hours, Some(7.25));
    }
}

#[test]
fn test_null_break_is_zero_without_note() {
    let mut row = raw("a", "2025-09-01T09:00:00+02:00", Some("2025-09-01T10:00:00+02:00"), 0);
    row.break_minutes = Some(serde_json::Value::Null);

    let (entry, notes) = validate_entry(&row).expect("kept");
    assert_eq!(entry.break_minutes, 0);
    assert!(notes.is_empty());
}

#[test]
fn test_oversized_break_is_clamped_with_note() {
    let row = raw("a", "2025-09-01T09:00:00+02:00", Some("2025-09-01T17:00:00+02:00"), 5_000_000_000);
    let (entry, notes) = validate_entry(&row).expect("kept");

    assert_eq!(entry.break_minutes, u32::MAX);
    assert_eq!(entry.total_hours, Some(0.0));
    assert_eq!(
        notes[0].kind,
        NoteKind::OversizedBreak {
            value: "5000000000".to_string()
        }
    );

    let mut huge = row.clone();
    huge.break_minutes = Some(json!(u64::MAX));
    let (_, notes) = validate_entry(&huge).expect("kept");
    assert!(matches!(notes[0].kind, NoteKind::OversizedBreak { .. }));
}
