use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `log` table exists.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
    let exists: Option<String> = conn
        .query_row(
            "SELECT name FROM sqlite_master WHERE type='table' AND name=?1",
            [name],
            |row| row.get(0),
        )
        .optional()?;
    Ok(exists.is_some())
}

fn column_exists(conn: &Connection, table: &str, column: &str) -> Result<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info('{}')", table))?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

    for c in cols {
        if c? == column {
            return Ok(true);
        }
    }
    Ok(false)
}

fn migration_applied(conn: &Connection, version: &str) -> Result<bool> {
    let found: Option<i64> = conn
        .query_row(
            "SELECT id FROM log WHERE operation = 'migration_applied' AND target = ?1 LIMIT 1",
            [version],
            |row| row.get(0),
        )
        .optional()?;
    Ok(found.is_some())
}

fn mark_applied(conn: &Connection, version: &str, message: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [version, message],
    )?;
    Ok(())
}

/// Create the `time_entries` table.
///
/// Timestamps are RFC 3339 text; `work_date` is the date of `clock_in` in
/// the offset it was recorded with and drives range queries.
fn create_time_entries_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS time_entries (
            id             TEXT PRIMARY KEY,
            employee_id    TEXT NOT NULL,
            work_date      TEXT NOT NULL,
            clock_in       TEXT NOT NULL,
            clock_out      TEXT,
            break_minutes  INTEGER NOT NULL DEFAULT 0,
            total_hours    REAL,
            created_at     TEXT NOT NULL,
            updated_at     TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_entries_employee_date
            ON time_entries(employee_id, work_date);
        "#,
    )?;
    Ok(())
}

/// 0.2.0: entries gain an optional project tag.
fn migrate_add_project_tag(conn: &Connection) -> Result<()> {
    let version = "0.2.0_project_tag";

    if migration_applied(conn, version)? {
        return Ok(());
    }

    if !column_exists(conn, "time_entries", "project_tag")? {
        conn.execute("ALTER TABLE time_entries ADD COLUMN project_tag TEXT", [])?;
    }

    mark_applied(conn, version, "Added project_tag to time_entries")?;
    success(format!(
        "Migration applied: {} → added 'project_tag' to time_entries",
        version
    ));

    Ok(())
}

/// Public entry point: run all pending migrations. Safe to call repeatedly.
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_log_table(conn)?;

    if !table_exists(conn, "time_entries")? {
        create_time_entries_table(conn)?;
        mark_applied(conn, "0.1.0_time_entries", "Created time_entries table")?;
        success("Created time_entries table.");
    }

    migrate_add_project_tag(conn)?;

    Ok(())
}
