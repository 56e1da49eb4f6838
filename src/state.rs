use std::sync::Arc;

use sqlx::SqlitePool;

use crate::store::{
    MemoryStore, ProjectStore, SqlProjectStore, SqlTaskStore, SqlUserStore, TaskStore, UserStore,
};
use crate::utils::Validator;

/// Stores and validator shared by every worker.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserStore>,
    pub tasks: Arc<dyn TaskStore>,
    pub projects: Arc<dyn ProjectStore>,
    pub validator: Validator,
}

impl AppState {
    /// SQL stores over one shared pool.
    pub fn new(pool: SqlitePool) -> Self {
        AppState {
            users: Arc::new(SqlUserStore::new(pool.clone())),
            tasks: Arc::new(SqlTaskStore::new(pool.clone())),
            projects: Arc::new(SqlProjectStore::new(pool)),
            validator: Validator::new(),
        }
    }

    pub fn in_memory() -> Self {
        let store = Arc::new(MemoryStore::new());
        AppState {
            users: store.clone(),
            tasks: store.clone(),
            projects: store,
            validator: Validator::new(),
        }
    }
}
