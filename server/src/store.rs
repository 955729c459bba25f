//! SQLite-backed task store.
//!
//! # Design
//! `TaskStore` owns the connection and is the single authority over task
//! state and id assignment. Ids come from SQLite's `AUTOINCREMENT`, which
//! never hands out the id of a deleted row again. The schema statement is
//! idempotent and runs on every open, so first start and restart are the
//! same code path.
//!
//! The title presence rule lives here, not in the HTTP layer: a missing
//! `title` field deserializes to the empty string, so "missing" and "empty"
//! are rejected by one check, on create and on update alike.

use std::fmt;
use std::path::Path;

use rusqlite::{params, Connection, OptionalExtension};
use serde::{Deserialize, Serialize};

/// A single task as stored and as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Task {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub completed: bool,
}

/// Request payload for creating a new task. A missing `title` deserializes
/// to the empty string and fails the same presence check as an empty one.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTask {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
}

/// Request payload for updating an existing task. Only the fields present
/// in the JSON are applied; omitted fields keep their stored values.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateTask {
    pub title: Option<String>,
    pub description: Option<String>,
    pub completed: Option<bool>,
}

/// Errors returned by `TaskStore` operations.
///
/// The three variants map one-to-one onto the HTTP statuses the API layer
/// answers with: validation -> 400, not found -> 404, storage -> 500.
#[derive(Debug)]
pub enum StoreError {
    /// A required field is missing or empty, or an id is not an integer.
    Validation(String),

    /// No task with the given id exists.
    NotFound(i64),

    /// The underlying SQLite operation failed.
    Storage(rusqlite::Error),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Validation(msg) => write!(f, "{msg}"),
            StoreError::NotFound(id) => write!(f, "task {id} not found"),
            StoreError::Storage(err) => write!(f, "storage error: {err}"),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StoreError::Storage(err) => Some(err),
            _ => None,
        }
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(err: rusqlite::Error) -> Self {
        StoreError::Storage(err)
    }
}

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS tasks (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    title       TEXT    NOT NULL,
    description TEXT    NOT NULL DEFAULT '',
    completed   INTEGER NOT NULL DEFAULT 0
);
";

/// Owner of the task collection.
pub struct TaskStore {
    conn: Connection,
}

impl TaskStore {
    /// Opens (or creates) a task database file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        Self::init(Connection::open(path)?)
    }

    /// Opens a fresh in-memory task database. State lives as long as the
    /// store value; used by tests and throwaway servers.
    pub fn open_in_memory() -> Result<Self, StoreError> {
        Self::init(Connection::open_in_memory()?)
    }

    fn init(conn: Connection) -> Result<Self, StoreError> {
        conn.execute_batch(SCHEMA)?;
        Ok(Self { conn })
    }

    /// Returns all tasks in insertion order.
    pub fn list(&self) -> Result<Vec<Task>, StoreError> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, title, description, completed FROM tasks ORDER BY id")?;
        let rows = stmt.query_map([], row_to_task)?;
        let mut tasks = Vec::new();
        for task in rows {
            tasks.push(task?);
        }
        Ok(tasks)
    }

    /// Inserts a new task with the next unused id and `completed = false`.
    pub fn create(&self, input: CreateTask) -> Result<Task, StoreError> {
        if input.title.is_empty() {
            return Err(StoreError::Validation("title is required".to_string()));
        }
        self.conn.execute(
            "INSERT INTO tasks (title, description) VALUES (?1, ?2)",
            params![input.title, input.description],
        )?;
        Ok(Task {
            id: self.conn.last_insert_rowid(),
            title: input.title,
            description: input.description,
            completed: false,
        })
    }

    /// Returns the task with the given id.
    pub fn get(&self, id: i64) -> Result<Task, StoreError> {
        self.conn
            .query_row(
                "SELECT id, title, description, completed FROM tasks WHERE id = ?1",
                params![id],
                row_to_task,
            )
            .optional()?
            .ok_or(StoreError::NotFound(id))
    }

    /// Merges the supplied fields into an existing task and persists it.
    ///
    /// A patch that carries an empty title is rejected: a stored task never
    /// has an empty title, and an update cannot introduce one.
    pub fn update(&self, id: i64, patch: UpdateTask) -> Result<Task, StoreError> {
        if patch.title.as_deref() == Some("") {
            return Err(StoreError::Validation("title is required".to_string()));
        }
        let mut task = self.get(id)?;
        if let Some(title) = patch.title {
            task.title = title;
        }
        if let Some(description) = patch.description {
            task.description = description;
        }
        if let Some(completed) = patch.completed {
            task.completed = completed;
        }
        self.conn.execute(
            "UPDATE tasks SET title = ?2, description = ?3, completed = ?4 WHERE id = ?1",
            params![task.id, task.title, task.description, task.completed],
        )?;
        Ok(task)
    }

    /// Permanently removes the task with the given id.
    pub fn delete(&self, id: i64) -> Result<(), StoreError> {
        let deleted = self
            .conn
            .execute("DELETE FROM tasks WHERE id = ?1", params![id])?;
        if deleted == 0 {
            return Err(StoreError::NotFound(id));
        }
        Ok(())
    }
}

fn row_to_task(row: &rusqlite::Row<'_>) -> rusqlite::Result<Task> {
    Ok(Task {
        id: row.get(0)?,
        title: row.get(1)?,
        description: row.get(2)?,
        completed: row.get(3)?,
    })
}
