mod common;
use common::{entry, open_entry, ts};
use rtimesheet::core::lifecycle::{EntryEdit, EntryState, apply_edit};
use rtimesheet::errors::AppError;

#[test]
fn test_break_edit_recomputes_total() {
    let e = entry("a", "2025-09-01T09:00", "2025-09-01T17:00", 30);
    assert_eq!(e.total_hours, Some(7.5));

    let outcome = apply_edit(&e, &EntryEdit::set_break(60)).expect("edit");

    assert_eq!(outcome.entry.total_hours, Some(7.0));
    assert_eq!(outcome.entry.break_minutes, 60);
    assert_eq!(outcome.previous, EntryState::Completed);
    assert_eq!(outcome.path, vec![EntryState::Edited, EntryState::Completed]);
    // input untouched
    assert_eq!(e.total_hours, Some(7.5));
}

#[test]
fn test_closing_active_entry() {
    let e = open_entry("a", "2025-09-01T09:00");
    let outcome = apply_edit(&e, &EntryEdit::close_at(ts("2025-09-01T13:00"))).expect("edit");

    assert_eq!(outcome.previous, EntryState::Active);
    assert_eq!(outcome.current(), EntryState::Completed);
    assert_eq!(outcome.entry.total_hours, Some(4.0));
}

#[test]
fn test_reopen_clears_total() {
    let e = entry("a", "2025-09-01T09:00", "2025-09-01T17:00", 0);
    let outcome = apply_edit(&e, &EntryEdit::reopen()).expect("edit");

    assert_eq!(outcome.current(), EntryState::Active);
    assert!(outcome.entry.clock_out.is_none());
    assert_eq!(outcome.entry.total_hours, None);
}

#[test]
fn test_negative_break_edit_is_clamped() {
    let e = entry("a", "2025-09-01T09:00", "2025-09-01T17:00", 30);
    let outcome = apply_edit(&e, &EntryEdit::set_break(-15)).expect("edit");

    assert_eq!(outcome.entry.break_minutes, 0);
    assert_eq!(outcome.entry.total_hours, Some(8.0));
}

#[test]
fn test_tag_only_edit_still_recomputes() {
    let mut e = entry("a", "2025-09-01T09:00", "2025-09-01T17:00", 30);
    e.total_hours = Some(3.0);

    let edit = EntryEdit {
        project_tag: Some(Some("ops".to_string())),
        ..EntryEdit::default()
    };
    let outcome = apply_edit(&e, &edit).expect("edit");

    assert_eq!(outcome.entry.project_tag.as_deref(), Some("ops"));
    assert_eq!(outcome.entry.total_hours, Some(7.5));
}

#[test]
fn test_empty_edit_is_rejected() {
    let e = entry("a", "2025-09-01T09:00", "2025-09-01T17:00", 30);
    let res = apply_edit(&e, &EntryEdit::default());
    assert!(matches!(res, Err(AppError::InvalidEdit(_))));
}

#[test]
fn test_state_names() {
    assert_eq!(EntryState::Active.as_str(), "active");
    assert_eq!(EntryState::Completed.as_str(), "completed");
    assert_eq!(EntryState::Edited.as_str(), "edited");
}
