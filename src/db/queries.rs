//! Time-entry store backed by SQLite.
//!
//! Reads hand back `RawTimeEntry` rows; typing and validation happen in
//! `core::validate`, never here.

use crate::errors::{AppError, AppResult};
use crate::models::raw_entry::RawTimeEntry;
use crate::models::time_entry::TimeEntry;
use chrono::{Local, NaiveDate};
use rusqlite::types::Value as SqlValue;
use rusqlite::{Connection, OptionalExtension, Result, Row, params};
use serde_json::Value;

const SELECT_COLUMNS: &str = "SELECT id, employee_id, clock_in, clock_out, break_minutes, total_hours, project_tag
     FROM time_entries";

pub fn map_row(row: &Row) -> Result<RawTimeEntry> {
    Ok(RawTimeEntry {
        id: row.get("id")?,
        employee_id: row.get("employee_id")?,
        clock_in: row.get("clock_in")?,
        clock_out: row.get("clock_out")?,
        break_minutes: sql_to_json(row.get("break_minutes")?),
        total_hours: row.get("total_hours")?,
        project_tag: row.get("project_tag")?,
    })
}

/// Column values are passed through untyped; `core::validate` decides.
fn sql_to_json(v: SqlValue) -> Option<Value> {
    match v {
        SqlValue::Null => None,
        SqlValue::Integer(i) => Some(Value::from(i)),
        SqlValue::Real(f) => Some(Value::from(f)),
        SqlValue::Text(s) => Some(Value::from(s)),
        SqlValue::Blob(b) => Some(Value::from(format!("<{} byte blob>", b.len()))),
    }
}

fn collect_rows(
    rows: impl Iterator<Item = Result<RawTimeEntry>>,
) -> AppResult<Vec<RawTimeEntry>> {
    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Entries of `employee_id` whose `clock_in` day falls in `[start, end]`.
pub fn load_entries_in_range(
    conn: &Connection,
    employee_id: &str,
    start: &NaiveDate,
    end: &NaiveDate,
) -> AppResult<Vec<RawTimeEntry>> {
    let sql = format!(
        "{SELECT_COLUMNS}
         WHERE employee_id = ?1 AND work_date BETWEEN ?2 AND ?3
         ORDER BY clock_in ASC, id ASC"
    );
    let mut stmt = conn.prepare(&sql)?;

    let rows = stmt.query_map(
        params![
            employee_id,
            start.format("%Y-%m-%d").to_string(),
            end.format("%Y-%m-%d").to_string()
        ],
        map_row,
    )?;

    collect_rows(rows)
}

/// Open entries (no clock-out) for an employee, oldest first.
pub fn load_active_entries(conn: &Connection, employee_id: &str) -> AppResult<Vec<RawTimeEntry>> {
    let sql = format!(
        "{SELECT_COLUMNS}
         WHERE employee_id = ?1 AND clock_out IS NULL
         ORDER BY clock_in ASC, id ASC"
    );
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map([employee_id], map_row)?;
    collect_rows(rows)
}

pub fn get_entry(conn: &Connection, id: &str) -> AppResult<Option<RawTimeEntry>> {
    let sql = format!("{SELECT_COLUMNS} WHERE id = ?1");
    let row = conn.query_row(&sql, [id], map_row).optional()?;
    Ok(row)
}

pub fn list_employees(conn: &Connection) -> AppResult<Vec<String>> {
    let mut stmt =
        conn.prepare("SELECT DISTINCT employee_id FROM time_entries ORDER BY employee_id ASC")?;
    let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn insert_entry(conn: &Connection, e: &TimeEntry) -> AppResult<()> {
    let now = Local::now().to_rfc3339();
    conn.execute(
        "INSERT INTO time_entries
            (id, employee_id, work_date, clock_in, clock_out, break_minutes, total_hours, project_tag, created_at, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?9)",
        params![
            e.id,
            e.employee_id,
            e.work_date().format("%Y-%m-%d").to_string(),
            e.clock_in.to_rfc3339(),
            e.clock_out.map(|t| t.to_rfc3339()),
            e.break_minutes,
            e.total_hours,
            e.project_tag,
            now,
        ],
    )?;
    Ok(())
}

/// Update every mutable field of an entry (all but id / employee).
pub fn update_entry(conn: &Connection, e: &TimeEntry) -> AppResult<()> {
    let changed = conn.execute(
        "UPDATE time_entries
         SET work_date = ?1, clock_in = ?2, clock_out = ?3,
             break_minutes = ?4, total_hours = ?5, project_tag = ?6,
             updated_at = ?7
         WHERE id = ?8",
        params![
            e.work_date().format("%Y-%m-%d").to_string(),
            e.clock_in.to_rfc3339(),
            e.clock_out.map(|t| t.to_rfc3339()),
            e.break_minutes,
            e.total_hours,
            e.project_tag,
            Local::now().to_rfc3339(),
            e.id,
        ],
    )?;

    if changed == 0 {
        return Err(AppError::EntryNotFound(e.id.clone()));
    }
    Ok(())
}

/// Insert, or overwrite an entry with the same id (used by import).
/// Returns true when a new row was created.
pub fn upsert_entry(conn: &Connection, e: &TimeEntry) -> AppResult<bool> {
    if get_entry(conn, &e.id)?.is_some() {
        update_entry(conn, e)?;
        Ok(false)
    } else {
        insert_entry(conn, e)?;
        Ok(true)
    }
}

pub fn delete_entry(conn: &Connection, id: &str) -> AppResult<()> {
    let changed = conn.execute("DELETE FROM time_entries WHERE id = ?1", [id])?;
    if changed == 0 {
        return Err(AppError::EntryNotFound(id.to_string()));
    }
    Ok(())
}

