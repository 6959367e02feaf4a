use chrono::Utc;
use rusqlite::{params, Row};

use tasklist_core::{StatusFilter, Task};

use crate::{Db, DbError};

fn row_to_task(row: &Row) -> rusqlite::Result<Task> {
    Ok(Task {
        id: row.get("id")?,
        title: row.get("title")?,
        completed: row.get("completed")?,
        created_at: row.get("created_at")?,
    })
}

impl Db {
    /// All tasks matching `filter`, newest first.
    pub fn list_tasks(&self, filter: StatusFilter) -> Result<Vec<Task>, DbError> {
        let mut sql = String::from("SELECT id, title, completed, created_at FROM tasks");
        match filter {
            StatusFilter::Active => sql.push_str(" WHERE completed = 0"),
            StatusFilter::Done => sql.push_str(" WHERE completed = 1"),
            StatusFilter::All => {}
        }
        sql.push_str(" ORDER BY id DESC");

        self.with_conn(|conn| {
            let mut stmt = conn.prepare(&sql)?;
            let tasks = stmt
                .query_map([], row_to_task)?
                .collect::<rusqlite::Result<Vec<_>>>()?;
            Ok(tasks)
        })
    }

    /// Insert a task with the trimmed `title`. A title that is empty after
    /// trimming is a silent no-op, not an error.
    pub fn add_task(&self, title: &str) -> Result<(), DbError> {
        let clean = title.trim();
        if clean.is_empty() {
            return Ok(());
        }

        // Stored as ISO-8601 text, second precision, trailing Z.
        let now = Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string();
        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO tasks (title, completed, created_at) VALUES (?1, 0, ?2)",
                params![clean, now],
            )?;
            Ok(())
        })
    }

    /// Flip `completed` for the task with `id`. Missing rows are a silent
    /// no-op; callers depend on that.
    pub fn toggle_task(&self, id: i64) -> Result<(), DbError> {
        self.with_conn(|conn| {
            conn.execute(
                "UPDATE tasks
                 SET completed = CASE WHEN completed = 1 THEN 0 ELSE 1 END
                 WHERE id = ?1",
                params![id],
            )?;
            Ok(())
        })
    }

    /// Hard-delete the task with `id`. Same no-op-on-absence semantics as
    /// [`Db::toggle_task`].
    pub fn delete_task(&self, id: i64) -> Result<(), DbError> {
        self.with_conn(|conn| {
            conn.execute("DELETE FROM tasks WHERE id = ?1", params![id])?;
            Ok(())
        })
    }
}
