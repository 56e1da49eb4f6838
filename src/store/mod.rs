//! Data access for users, tasks and projects.
//!
//! Each entity has a store trait and a SQL implementation that owns every
//! statement against its table. Rows are decoded by the shared routines in
//! [`rows`], so cross-entity reads (tasks of a user, tasks of a project) do not
//! need a handle on a sibling store.

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{NewUser, Project, ProjectFields, Task, TaskFields, User, UserChanges};

pub mod memory;
pub mod project_store;
pub mod query;
pub mod rows;
pub mod task_store;
pub mod user_store;

pub use memory::MemoryStore;
pub use project_store::SqlProjectStore;
pub use query::{ProjectQuery, TaskQuery, UserQuery};
pub use task_store::SqlTaskStore;
pub use user_store::SqlUserStore;

#[derive(Debug, Error)]
pub enum StoreError {
    /// Unknown search discriminator or a value the discriminator cannot use.
    #[error("{0}")]
    InvalidArgument(String),

    #[error("{entity} not found")]
    NotFound { entity: &'static str },

    /// Database failure. `source` carries the driver error when there is one.
    #[error("{message}")]
    Persistence {
        message: String,
        #[source]
        source: Option<sqlx::Error>,
    },

    #[error("failed to decode {entity} row: {message}")]
    Decode { entity: &'static str, message: String },
}

impl StoreError {
    pub fn not_found(entity: &'static str) -> Self {
        Self::NotFound { entity }
    }

    pub fn persistence(message: impl Into<String>) -> Self {
        Self::Persistence {
            message: message.into(),
            source: None,
        }
    }
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        Self::Persistence {
            message: err.to_string(),
            source: Some(err),
        }
    }
}

pub type StoreResult<T> = Result<T, StoreError>;

#[async_trait]
pub trait UserStore: Send + Sync {
    async fn list_users(&self) -> StoreResult<Vec<User>>;

    /// Inserts the user and returns its assigned id.
    async fn create_user(&self, user: NewUser) -> StoreResult<i64>;

    async fn get_user_by_id(&self, user_id: i64) -> StoreResult<User>;

    /// Searches by `name` or `email`, both case-insensitive substring matches.
    async fn get_users_by_query(&self, query_type: &str, query: &str) -> StoreResult<Vec<User>>;

    /// Applies the given changes. A missing id affects nothing and still succeeds.
    async fn update_user(&self, user_id: i64, changes: UserChanges) -> StoreResult<()>;

    async fn delete_user(&self, user_id: i64) -> StoreResult<()>;

    async fn get_user_tasks(&self, user_id: i64) -> StoreResult<Vec<Task>>;
}

#[async_trait]
pub trait TaskStore: Send + Sync {
    async fn list_tasks(&self) -> StoreResult<Vec<Task>>;

    /// Inserts the task and returns its assigned id.
    async fn create_task(&self, task: TaskFields) -> StoreResult<i64>;

    async fn get_task_by_id(&self, task_id: i64) -> StoreResult<Task>;

    /// Searches by `title`, `status`, `priority`, `assignee` or `project`.
    async fn get_tasks_by_query(&self, query_type: &str, query: &str) -> StoreResult<Vec<Task>>;

    /// Replaces every mutable field and refreshes `updated_at`.
    async fn update_task(&self, task_id: i64, task: TaskFields) -> StoreResult<()>;

    async fn delete_task(&self, task_id: i64) -> StoreResult<()>;
}

#[async_trait]
pub trait ProjectStore: Send + Sync {
    async fn list_projects(&self) -> StoreResult<Vec<Project>>;

    /// Inserts the project and returns its assigned id.
    async fn create_project(&self, project: ProjectFields) -> StoreResult<i64>;

    async fn get_project_by_id(&self, project_id: i64) -> StoreResult<Project>;

    /// Searches by `title` or `manager`.
    async fn get_projects_by_query(
        &self,
        query_type: &str,
        query: &str,
    ) -> StoreResult<Vec<Project>>;

    /// Replaces every mutable field and refreshes `updated_at`.
    async fn update_project(&self, project_id: i64, project: ProjectFields) -> StoreResult<()>;

    async fn delete_project(&self, project_id: i64) -> StoreResult<()>;

    async fn get_project_tasks(&self, project_id: i64) -> StoreResult<Vec<Task>>;
}
