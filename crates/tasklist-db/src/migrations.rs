use rusqlite::Connection;

use crate::DbError;

/// Idempotent schema setup, safe to run on every startup.
pub fn run(conn: &Connection) -> Result<(), DbError> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS tasks (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            title       TEXT NOT NULL,
            completed   INTEGER NOT NULL DEFAULT 0,
            created_at  TEXT NOT NULL
        );
        ",
    )?;
    Ok(())
}
