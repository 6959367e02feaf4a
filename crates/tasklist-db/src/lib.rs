mod migrations;
pub mod queries;

use std::path::Path;
use std::sync::{Arc, Mutex};

use rusqlite::Connection;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DbError {
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("lock poisoned")]
    LockPoisoned,
}

/// Handle to the task store. Cheap to clone; all clones share one
/// mutex-guarded connection, so each operation is a short exclusive
/// critical section and its own implicit transaction.
#[derive(Clone)]
pub struct Db {
    conn: Arc<Mutex<Connection>>,
}

impl Db {
    /// Open (creating if needed) the store at `path`, ensuring the parent
    /// directory exists and the schema is present. Errors here are fatal to
    /// startup.
    pub fn open(path: &Path) -> Result<Self, DbError> {
        if let Some(dir) = path.parent() {
            if !dir.as_os_str().is_empty() {
                std::fs::create_dir_all(dir)?;
            }
        }
        let conn = Connection::open(path)?;
        conn.execute_batch(
            "PRAGMA journal_mode=WAL;
             PRAGMA busy_timeout=5000;",
        )?;
        let db = Self {
            conn: Arc::new(Mutex::new(conn)),
        };
        db.run_migrations()?;
        tracing::debug!("task store open at {}", path.display());
        Ok(db)
    }

    pub fn open_in_memory() -> Result<Self, DbError> {
        let conn = Connection::open_in_memory()?;
        let db = Self {
            conn: Arc::new(Mutex::new(conn)),
        };
        db.run_migrations()?;
        Ok(db)
    }

    pub(crate) fn with_conn<F, T>(&self, f: F) -> Result<T, DbError>
    where
        F: FnOnce(&Connection) -> Result<T, DbError>,
    {
        let conn = self.conn.lock().map_err(|_| DbError::LockPoisoned)?;
        f(&conn)
    }

    fn run_migrations(&self) -> Result<(), DbError> {
        self.with_conn(|conn| {
            migrations::run(conn)?;
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_in_memory_creates_schema() {
        let db = Db::open_in_memory().unwrap();
        db.with_conn(|conn| {
            let count: i64 = conn.query_row(
                "SELECT count(*) FROM sqlite_master WHERE name = 'tasks'",
                [],
                |row| row.get(0),
            )?;
            assert_eq!(count, 1);
            Ok(())
        })
        .unwrap();
    }

    #[test]
    fn open_creates_missing_parent_dir_and_file() {
        let tmp = tempfile::tempdir().unwrap();
        let db_path = tmp.path().join("data").join("tasks.db");
        assert!(!db_path.exists());

        let _db = Db::open(&db_path).unwrap();
        assert!(db_path.exists());
    }

    #[test]
    fn open_is_idempotent_across_restarts() {
        let tmp = tempfile::tempdir().unwrap();
        let db_path = tmp.path().join("tasks.db");

        {
            let db = Db::open(&db_path).unwrap();
            db.add_task("survives reopen").unwrap();
        }
        let db = Db::open(&db_path).unwrap();
        let tasks = db.list_tasks(tasklist_core::StatusFilter::All).unwrap();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].title, "survives reopen");
    }
}
