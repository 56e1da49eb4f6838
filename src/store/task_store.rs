use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;

use super::query::{contains_ignore_case, parse_id, variant, TaskQuery};
use super::rows::{scan_all, scan_last, scan_task, select_tasks};
use super::{StoreResult, TaskStore};
use crate::models::{Task, TaskFields, TaskPriority, TaskType};

pub struct SqlTaskStore {
    pool: SqlitePool,
}

impl SqlTaskStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TaskStore for SqlTaskStore {
    async fn list_tasks(&self) -> StoreResult<Vec<Task>> {
        let rows = sqlx::query(select_tasks!(""))
            .fetch_all(&self.pool)
            .await?;

        scan_all(&rows, scan_task)
    }

    async fn create_task(&self, task: TaskFields) -> StoreResult<i64> {
        let now = Utc::now();
        let result = sqlx::query(
            "INSERT INTO tasks (title, descript, task_type, task_priority, user_id, project_id, created_at, updated_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&task.title)
        .bind(&task.descript)
        .bind(task.task_type)
        .bind(task.task_priority)
        .bind(task.user_id)
        .bind(task.project_id)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    async fn get_task_by_id(&self, task_id: i64) -> StoreResult<Task> {
        let rows = sqlx::query(select_tasks!(" WHERE id = ?"))
            .bind(task_id)
            .fetch_all(&self.pool)
            .await?;

        scan_last(&rows, scan_task, "task")
    }

    async fn get_tasks_by_query(&self, query_type: &str, query: &str) -> StoreResult<Vec<Task>> {
        let statement = match TaskQuery::parse(query_type)? {
            TaskQuery::Title => {
                let mut tasks = self.list_tasks().await?;
                tasks.retain(|t| contains_ignore_case(&t.title, query));
                return Ok(tasks);
            }
            TaskQuery::Status => match variant::<TaskPriority>(query) {
                Some(status) => {
                    sqlx::query(select_tasks!(" WHERE task_priority = ?")).bind(status)
                }
                None => return Ok(Vec::new()),
            },
            TaskQuery::Priority => match variant::<TaskType>(query) {
                Some(priority) => sqlx::query(select_tasks!(" WHERE task_type = ?")).bind(priority),
                None => return Ok(Vec::new()),
            },
            TaskQuery::Assignee => sqlx::query(select_tasks!(" WHERE user_id = ?"))
                .bind(parse_id(query_type, query)?),
            TaskQuery::Project => sqlx::query(select_tasks!(" WHERE project_id = ?"))
                .bind(parse_id(query_type, query)?),
        };

        let rows = statement.fetch_all(&self.pool).await?;
        scan_all(&rows, scan_task)
    }

    async fn update_task(&self, task_id: i64, task: TaskFields) -> StoreResult<()> {
        sqlx::query(
            "UPDATE tasks SET title = ?, descript = ?, task_type = ?, task_priority = ?, \
             user_id = ?, project_id = ?, updated_at = ? WHERE id = ?",
        )
        .bind(&task.title)
        .bind(&task.descript)
        .bind(task.task_type)
        .bind(task.task_priority)
        .bind(task.user_id)
        .bind(task.project_id)
        .bind(Utc::now())
        .bind(task_id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete_task(&self, task_id: i64) -> StoreResult<()> {
        sqlx::query("DELETE FROM tasks WHERE id = ?")
            .bind(task_id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
