use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;

use super::query::{contains_ignore_case, parse_id, ProjectQuery};
use super::rows::{scan_all, scan_last, scan_project, scan_task, select_projects, select_tasks};
use super::{ProjectStore, StoreResult};
use crate::models::{Project, ProjectFields, Task};

pub struct SqlProjectStore {
    pool: SqlitePool,
}

impl SqlProjectStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProjectStore for SqlProjectStore {
    async fn list_projects(&self) -> StoreResult<Vec<Project>> {
        let rows = sqlx::query(select_projects!(""))
            .fetch_all(&self.pool)
            .await?;

        scan_all(&rows, scan_project)
    }

    async fn create_project(&self, project: ProjectFields) -> StoreResult<i64> {
        let now = Utc::now();
        let result = sqlx::query(
            "INSERT INTO projects (title, descript, created_at, updated_at, manager_id) \
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&project.title)
        .bind(&project.descript)
        .bind(now)
        .bind(now)
        .bind(project.manager_id)
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    async fn get_project_by_id(&self, project_id: i64) -> StoreResult<Project> {
        let rows = sqlx::query(select_projects!(" WHERE id = ?"))
            .bind(project_id)
            .fetch_all(&self.pool)
            .await?;

        scan_last(&rows, scan_project, "project")
    }

    async fn get_projects_by_query(
        &self,
        query_type: &str,
        query: &str,
    ) -> StoreResult<Vec<Project>> {
        let manager_id = match ProjectQuery::parse(query_type)? {
            ProjectQuery::Title => {
                let mut projects = self.list_projects().await?;
                projects.retain(|p| contains_ignore_case(&p.title, query));
                return Ok(projects);
            }
            ProjectQuery::Manager => parse_id(query_type, query)?,
        };

        let rows = sqlx::query(select_projects!(" WHERE manager_id = ?"))
            .bind(manager_id)
            .fetch_all(&self.pool)
            .await?;
        scan_all(&rows, scan_project)
    }

    async fn update_project(&self, project_id: i64, project: ProjectFields) -> StoreResult<()> {
        sqlx::query(
            "UPDATE projects SET title = ?, descript = ?, manager_id = ?, updated_at = ? WHERE id = ?",
        )
        .bind(&project.title)
        .bind(&project.descript)
        .bind(project.manager_id)
        .bind(Utc::now())
        .bind(project_id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete_project(&self, project_id: i64) -> StoreResult<()> {
        sqlx::query("DELETE FROM projects WHERE id = ?")
            .bind(project_id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn get_project_tasks(&self, project_id: i64) -> StoreResult<Vec<Task>> {
        let rows = sqlx::query(select_tasks!(" WHERE project_id = ?"))
            .bind(project_id)
            .fetch_all(&self.pool)
            .await?;

        scan_all(&rows, scan_task)
    }
}
