//! Row decoding shared by every store.
//!
//! Columns are read by position, in the canonical order of each table, so every
//! `SELECT` must list them through the `select_*!` macros below.

use sqlx::sqlite::{Sqlite, SqliteRow};
use sqlx::{Decode, Row, Type};

use super::{StoreError, StoreResult};
use crate::models::{Project, Task, User};

macro_rules! select_users {
    ($tail:literal) => {
        concat!(
            "SELECT id, full_name, email, register_date, user_role FROM users",
            $tail
        )
    };
}

macro_rules! select_tasks {
    ($tail:literal) => {
        concat!(
            "SELECT id, title, descript, task_type, task_priority, user_id, project_id, created_at, updated_at FROM tasks",
            $tail
        )
    };
}

macro_rules! select_projects {
    ($tail:literal) => {
        concat!(
            "SELECT id, title, descript, created_at, updated_at, manager_id FROM projects",
            $tail
        )
    };
}

pub(crate) use select_projects;
pub(crate) use select_tasks;
pub(crate) use select_users;

fn column<'r, T>(row: &'r SqliteRow, index: usize, entity: &'static str) -> StoreResult<T>
where
    T: Decode<'r, Sqlite> + Type<Sqlite>,
{
    row.try_get(index).map_err(|e| StoreError::Decode {
        entity,
        message: e.to_string(),
    })
}

pub fn scan_user(row: &SqliteRow) -> StoreResult<User> {
    Ok(User {
        id: column(row, 0, "user")?,
        full_name: column(row, 1, "user")?,
        email: column(row, 2, "user")?,
        register_date: column(row, 3, "user")?,
        user_role: column(row, 4, "user")?,
    })
}

pub fn scan_task(row: &SqliteRow) -> StoreResult<Task> {
    Ok(Task {
        id: column(row, 0, "task")?,
        title: column(row, 1, "task")?,
        descript: column(row, 2, "task")?,
        task_type: column(row, 3, "task")?,
        task_priority: column(row, 4, "task")?,
        user_id: column(row, 5, "task")?,
        project_id: column(row, 6, "task")?,
        created_at: column(row, 7, "task")?,
        updated_at: column(row, 8, "task")?,
    })
}

pub fn scan_project(row: &SqliteRow) -> StoreResult<Project> {
    Ok(Project {
        id: column(row, 0, "project")?,
        title: column(row, 1, "project")?,
        descript: column(row, 2, "project")?,
        created_at: column(row, 3, "project")?,
        updated_at: column(row, 4, "project")?,
        manager_id: column(row, 5, "project")?,
    })
}

/// Decodes every row, failing on the first mismatch.
pub fn scan_all<T>(
    rows: &[SqliteRow],
    scan: fn(&SqliteRow) -> StoreResult<T>,
) -> StoreResult<Vec<T>> {
    rows.iter().map(scan).collect()
}

/// Decodes a lookup-by-id result. Rows are decoded in order and the last one
/// wins; no rows at all is `NotFound`.
pub fn scan_last<T>(
    rows: &[SqliteRow],
    scan: fn(&SqliteRow) -> StoreResult<T>,
    entity: &'static str,
) -> StoreResult<T> {
    let mut found = None;
    for row in rows {
        found = Some(scan(row)?);
    }
    found.ok_or_else(|| StoreError::not_found(entity))
}
