use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// Stored in the `task_type` column and searched with the `priority` discriminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "TEXT", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum TaskType {
    Low,
    Medium,
    High,
}

// Workflow state, stored in `task_priority` and searched with the `status` discriminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "TEXT", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum TaskPriority {
    New,
    InProcess,
    Done,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: i64,
    pub title: String,
    pub descript: String,
    pub task_type: TaskType,
    pub task_priority: TaskPriority,
    pub user_id: i64,
    pub project_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Every mutable task field; used for both insert and full update.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskFields {
    pub title: String,
    pub descript: String,
    pub task_type: TaskType,
    pub task_priority: TaskPriority,
    pub user_id: i64,
    pub project_id: i64,
}
