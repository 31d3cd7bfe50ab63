mod common;
use chrono::Utc;
use common::{date, raw, temp_out, ts};
use rtimesheet::core::add::AddLogic;
use rtimesheet::core::clock::FixedClock;
use rtimesheet::core::del::DeleteLogic;
use rtimesheet::core::edit::EditLogic;
use rtimesheet::core::import::ImportLogic;
use rtimesheet::core::lifecycle::{EntryEdit, EntryState};
use rtimesheet::core::punch::PunchLogic;
use rtimesheet::core::report::ReportLogic;
use rtimesheet::db::initialize::init_db;
use rtimesheet::db::log::load_log;
use rtimesheet::db::pool::DbPool;
use rtimesheet::db::queries::{get_entry, list_employees, load_active_entries, load_entries_in_range};
use rtimesheet::errors::AppError;
use rtimesheet::models::validation::NoteKind;
use std::fs;
use std::path::Path;

fn pool() -> DbPool {
    let pool = DbPool::in_memory().expect("in-memory db");
    init_db(&pool.conn).expect("migrations");
    pool
}

#[test]
fn test_migrations_are_idempotent() {
    let pool = pool();
    init_db(&pool.conn).expect("second run");

    let applied = load_log(&pool.conn)
        .expect("log")
        .into_iter()
        .filter(|(_, _, op, ..)| op == "migration_applied")
        .count();
    assert_eq!(applied, 2);
}

#[test]
fn test_add_and_reload() {
    let mut pool = pool();
    let e = AddLogic::apply(
        &mut pool,
        "alice",
        ts("2025-09-01T09:00"),
        Some(ts("2025-09-01T17:00")),
        Some(30),
        Some("ops".into()),
    )
    .expect("add");

    assert_eq!(e.total_hours, Some(7.5));

    let row = get_entry(&pool.conn, &e.id).expect("query").expect("row");
    assert_eq!(row.employee_id, "alice");
    assert_eq!(row.break_minutes, Some(serde_json::json!(30)));
    assert_eq!(row.total_hours, Some(7.5));
    assert_eq!(row.project_tag.as_deref(), Some("ops"));

    let rows = load_entries_in_range(&pool.conn, "alice", &date("2025-09-01"), &date("2025-09-01"))
        .expect("range");
    assert_eq!(rows.len(), 1);
    assert_eq!(list_employees(&pool.conn).expect("employees"), vec!["alice".to_string()]);
}

#[test]
fn test_add_rejects_inverted_interval() {
    let mut pool = pool();
    let res = AddLogic::apply(
        &mut pool,
        "alice",
        ts("2025-09-01T17:00"),
        Some(ts("2025-09-01T09:00")),
        None,
        None,
    );
    assert!(matches!(res, Err(AppError::InvalidEdit(_))));
}

#[test]
fn test_clock_in_then_out() {
    let mut pool = pool();
    let opened = PunchLogic::clock_in(&mut pool, "bob", ts("2025-09-01T09:00"), None).expect("in");
    assert!(opened.is_active());
    assert_eq!(load_active_entries(&pool.conn, "bob").expect("active").len(), 1);

    let closed = PunchLogic::clock_out(&mut pool, "bob", ts("2025-09-01T13:00"), Some(30))
        .expect("out");
    assert_eq!(closed.id, opened.id);
    assert_eq!(closed.total_hours, Some(3.5));
    assert!(load_active_entries(&pool.conn, "bob").expect("active").is_empty());
}

#[test]
fn test_clock_out_without_open_entry() {
    let mut pool = pool();
    let res = PunchLogic::clock_out(&mut pool, "bob", ts("2025-09-01T13:00"), None);
    assert!(matches!(res, Err(AppError::NoActiveEntry(_))));
}

#[test]
fn test_clock_out_before_clock_in_is_rejected() {
    let mut pool = pool();
    PunchLogic::clock_in(&mut pool, "bob", ts("2025-09-01T09:00"), None).expect("in");
    let res = PunchLogic::clock_out(&mut pool, "bob", ts("2025-09-01T09:00"), None);
    assert!(matches!(res, Err(AppError::InvalidEdit(_))));
}

#[test]
fn test_edit_then_report_sees_new_total() {
    let mut pool = pool();
    let e = AddLogic::apply(
        &mut pool,
        "alice",
        ts("2025-09-01T09:00"),
        Some(ts("2025-09-01T17:00")),
        Some(30),
        None,
    )
    .expect("add");

    let clock = FixedClock(Utc::now());
    let before = ReportLogic::build(&pool, "alice", date("2025-09-01"), date("2025-09-01"), Some(20.0), &clock)
        .expect("report");
    assert_eq!(before.aggregate.total_hours(), 7.5);

    let outcome = EditLogic::apply(&mut pool, &e.id, &EntryEdit::set_break(60)).expect("edit");
    assert_eq!(outcome.entry.total_hours, Some(7.0));
    assert_eq!(outcome.path, vec![EntryState::Edited, EntryState::Completed]);

    let after = ReportLogic::build(&pool, "alice", date("2025-09-01"), date("2025-09-01"), Some(20.0), &clock)
        .expect("report");
    assert_eq!(after.aggregate.total_hours(), 7.0);
    assert!((after.aggregate.total_pay() - 140.0).abs() < 1e-9);
}

#[test]
fn test_edit_unknown_entry() {
    let mut pool = pool();
    let res = EditLogic::apply(&mut pool, "missing", &EntryEdit::set_break(10));
    assert!(matches!(res, Err(AppError::EntryNotFound(_))));
}

#[test]
fn test_delete_entry() {
    let mut pool = pool();
    let e = AddLogic::apply(&mut pool, "alice", ts("2025-09-01T09:00"), None, None, None)
        .expect("add");

    let row = DeleteLogic::apply(&mut pool, &e.id).expect("delete");
    assert_eq!(row.id, e.id);
    assert!(get_entry(&pool.conn, &e.id).expect("query").is_none());

    let again = DeleteLogic::apply(&mut pool, &e.id);
    assert!(matches!(again, Err(AppError::EntryNotFound(_))));
}

#[test]
fn test_import_inserts_updates_and_skips() {
    let mut pool = pool();

    let rows = vec![
        raw("r1", "2025-09-01T09:00:00+02:00", Some("2025-09-01T17:00:00+02:00"), 30),
        raw("r2", "2025-09-02T09:00:00+02:00", None, 0),
        raw("bad", "??", None, 0),
    ];
    let first = ImportLogic::apply(&mut pool, &rows).expect("import");
    assert_eq!(first.inserted, 2);
    assert_eq!(first.updated, 0);
    assert_eq!(first.notes.len(), 1);
    assert!(first.notes[0].excludes_entry());

    let mut changed = rows[0].clone();
    changed.break_minutes = Some(60.into());
    let second = ImportLogic::apply(&mut pool, &[changed]).expect("re-import");
    assert_eq!(second.inserted, 0);
    assert_eq!(second.updated, 1);

    let stored = get_entry(&pool.conn, "r1").expect("query").expect("row");
    assert_eq!(stored.total_hours, Some(7.0));
}

#[test]
fn test_malformed_rows_in_store_become_notes() {
    let pool = pool();
    pool.conn
        .execute(
            "INSERT INTO time_entries (id, employee_id, work_date, clock_in, clock_out, break_minutes, total_hours, created_at, updated_at)
             VALUES ('m1', 'alice', '2025-09-01', '2025-09-01T09:00:00+02:00', '2025-09-01T17:00:00+02:00', -30, 99.0, 'x', 'x'),
                    ('m2', 'alice', '2025-09-01', 'garbage', NULL, 0, NULL, 'x', 'x')",
            [],
        )
        .expect("seed");

    let clock = FixedClock(Utc::now());
    let report = ReportLogic::build(&pool, "alice", date("2025-09-01"), date("2025-09-01"), None, &clock)
        .expect("report");

    assert_eq!(report.aggregate.total_hours(), 8.0);
    assert_eq!(report.aggregate.days[0].entries.len(), 1);
    // negative break + stale total on m1, invalid clock_in on m2
    assert_eq!(report.notes.len(), 3);
}

#[test]
fn test_writes_are_logged() {
    let mut pool = pool();
    let e = AddLogic::apply(&mut pool, "alice", ts("2025-09-01T09:00"), None, None, None)
        .expect("add");
    EditLogic::apply(&mut pool, &e.id, &EntryEdit::close_at(ts("2025-09-01T12:00"))).expect("edit");
    DeleteLogic::apply(&mut pool, &e.id).expect("delete");

    let ops: Vec<String> = load_log(&pool.conn)
        .expect("log")
        .into_iter()
        .filter(|(_, _, _, target, _)| target == &e.id)
        .map(|(_, _, op, ..)| op)
        .collect();
    assert_eq!(ops, vec!["add", "edit", "del"]);
}

#[test]
fn test_import_file_with_text_break_keeps_every_row() {
    let mut pool = pool();
    let input = temp_out("store_import_text_break", "json");
    fs::write(
        &input,
        r#"[
  {"id": "t1", "employee_id": "alice", "clock_in": "2025-09-01T09:00:00+02:00", "clock_out": "2025-09-01T17:00:00+02:00", "break_minutes": 30},
  {"id": "t2", "employee_id": "alice", "clock_in": "2025-09-02T09:00:00+02:00", "clock_out": "2025-09-02T17:00:00+02:00", "break_minutes": "thirty"}
]"#,
    )
    .expect("write input");

    let rows = ImportLogic::read_file(Path::new(&input)).expect("file is readable");
    assert_eq!(rows.len(), 2);

    let summary = ImportLogic::apply(&mut pool, &rows).expect("import");
    assert_eq!(summary.inserted, 2);
    assert_eq!(summary.notes.len(), 1);
    assert!(matches!(summary.notes[0].kind, NoteKind::InvalidBreak { .. }));

    let stored = get_entry(&pool.conn, "t2").expect("query").expect("row");
    assert_eq!(stored.total_hours, Some(8.0));
}

#[test]
fn test_text_and_real_breaks_in_store_do_not_block_report() {
    let pool = pool();
    pool.conn
        .execute(
            "INSERT INTO time_entries (id, employee_id, work_date, clock_in, clock_out, break_minutes, total_hours, created_at, updated_at)
             VALUES ('s1', 'alice', '2025-09-01', '2025-09-01T09:00:00+02:00', '2025-09-01T17:00:00+02:00', 'lunch', NULL, 'x', 'x'),
                    ('s2', 'alice', '2025-09-01', '2025-09-01T18:00:00+02:00', '2025-09-01T20:00:00+02:00', 30.0, NULL, 'x', 'x')",
            [],
        )
        .expect("seed");

    let clock = FixedClock(Utc::now());
    let report = ReportLogic::build(&pool, "alice", date("2025-09-01"), date("2025-09-01"), None, &clock)
        .expect("report");

    assert_eq!(report.aggregate.days[0].entries.len(), 2);
    assert_eq!(report.aggregate.total_hours(), 9.5);
    assert_eq!(report.aggregate.total_break_minutes(), 30);
    assert_eq!(report.notes.len(), 1);
    assert_eq!(report.notes[0].entry_id, "s1");
}
