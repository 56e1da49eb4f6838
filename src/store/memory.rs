//! In-memory implementation of the store traits.
//!
//! Mirrors the SQL stores closely enough to stand in for them in handler tests:
//! ids are assigned per table, timestamps on write, email is unique, references to
//! users and projects must resolve, and deleting a user or project removes the tasks
//! that reference it. Locks are always taken in the order users, projects, tasks.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use super::query::{contains_ignore_case, parse_id, variant, ProjectQuery, TaskQuery, UserQuery};
use super::{ProjectStore, StoreError, StoreResult, TaskStore, UserStore};
use crate::models::{
    NewUser, Project, ProjectFields, Task, TaskFields, TaskPriority, TaskType, User, UserChanges,
};

#[derive(Debug)]
struct Table<T> {
    rows: BTreeMap<i64, T>,
    last_id: i64,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: BTreeMap::new(),
            last_id: 0,
        }
    }
}

impl<T: Clone> Table<T> {
    fn next_id(&mut self) -> i64 {
        self.last_id += 1;
        self.last_id
    }

    fn all(&self) -> Vec<T> {
        self.rows.values().cloned().collect()
    }

    fn filter(&self, keep: impl Fn(&T) -> bool) -> Vec<T> {
        self.rows.values().filter(|row| keep(row)).cloned().collect()
    }
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    users: RwLock<Table<User>>,
    tasks: RwLock<Table<Task>>,
    projects: RwLock<Table<Project>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn foreign_key_failed() -> StoreError {
    StoreError::persistence("FOREIGN KEY constraint failed")
}

fn check_task_refs(
    users: &Table<User>,
    projects: &Table<Project>,
    task: &TaskFields,
) -> StoreResult<()> {
    if !users.rows.contains_key(&task.user_id) || !projects.rows.contains_key(&task.project_id) {
        return Err(foreign_key_failed());
    }
    Ok(())
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn list_users(&self) -> StoreResult<Vec<User>> {
        Ok(self.users.read().await.all())
    }

    async fn create_user(&self, user: NewUser) -> StoreResult<i64> {
        let mut users = self.users.write().await;
        if users.rows.values().any(|u| u.email == user.email) {
            return Err(StoreError::persistence(
                "UNIQUE constraint failed: users.email",
            ));
        }

        let id = users.next_id();
        users.rows.insert(
            id,
            User {
                id,
                full_name: user.full_name,
                email: user.email,
                register_date: Utc::now(),
                user_role: user.user_role,
            },
        );
        Ok(id)
    }

    async fn get_user_by_id(&self, user_id: i64) -> StoreResult<User> {
        self.users
            .read()
            .await
            .rows
            .get(&user_id)
            .cloned()
            .ok_or_else(|| StoreError::not_found("user"))
    }

    async fn get_users_by_query(&self, query_type: &str, query: &str) -> StoreResult<Vec<User>> {
        let users = self.users.read().await;
        Ok(match UserQuery::parse(query_type)? {
            UserQuery::Name => users.filter(|u| contains_ignore_case(&u.full_name, query)),
            UserQuery::Email => users.filter(|u| contains_ignore_case(&u.email, query)),
        })
    }

    async fn update_user(&self, user_id: i64, changes: UserChanges) -> StoreResult<()> {
        if let Some(user) = self.users.write().await.rows.get_mut(&user_id) {
            if let Some(full_name) = changes.full_name {
                user.full_name = full_name;
            }
            if let Some(user_role) = changes.user_role {
                user.user_role = user_role;
            }
        }
        Ok(())
    }

    async fn delete_user(&self, user_id: i64) -> StoreResult<()> {
        let mut users = self.users.write().await;
        let projects = self.projects.read().await;
        let mut tasks = self.tasks.write().await;
        if projects.rows.values().any(|p| p.manager_id == user_id) {
            return Err(foreign_key_failed());
        }

        users.rows.remove(&user_id);
        tasks.rows.retain(|_, task| task.user_id != user_id);
        Ok(())
    }

    async fn get_user_tasks(&self, user_id: i64) -> StoreResult<Vec<Task>> {
        Ok(self.tasks.read().await.filter(|t| t.user_id == user_id))
    }
}

#[async_trait]
impl TaskStore for MemoryStore {
    async fn list_tasks(&self) -> StoreResult<Vec<Task>> {
        Ok(self.tasks.read().await.all())
    }

    async fn create_task(&self, task: TaskFields) -> StoreResult<i64> {
        let users = self.users.read().await;
        let projects = self.projects.read().await;
        let mut tasks = self.tasks.write().await;
        check_task_refs(&users, &projects, &task)?;

        let id = tasks.next_id();
        let now = Utc::now();
        tasks.rows.insert(
            id,
            Task {
                id,
                title: task.title,
                descript: task.descript,
                task_type: task.task_type,
                task_priority: task.task_priority,
                user_id: task.user_id,
                project_id: task.project_id,
                created_at: now,
                updated_at: now,
            },
        );
        Ok(id)
    }

    async fn get_task_by_id(&self, task_id: i64) -> StoreResult<Task> {
        self.tasks
            .read()
            .await
            .rows
            .get(&task_id)
            .cloned()
            .ok_or_else(|| StoreError::not_found("task"))
    }

    async fn get_tasks_by_query(&self, query_type: &str, query: &str) -> StoreResult<Vec<Task>> {
        let tasks = self.tasks.read().await;
        Ok(match TaskQuery::parse(query_type)? {
            TaskQuery::Title => tasks.filter(|t| contains_ignore_case(&t.title, query)),
            TaskQuery::Status => {
                let status = variant::<TaskPriority>(query);
                tasks.filter(|t| Some(t.task_priority) == status)
            }
            TaskQuery::Priority => {
                let priority = variant::<TaskType>(query);
                tasks.filter(|t| Some(t.task_type) == priority)
            }
            TaskQuery::Assignee => {
                let user_id = parse_id(query_type, query)?;
                tasks.filter(|t| t.user_id == user_id)
            }
            TaskQuery::Project => {
                let project_id = parse_id(query_type, query)?;
                tasks.filter(|t| t.project_id == project_id)
            }
        })
    }

    async fn update_task(&self, task_id: i64, task: TaskFields) -> StoreResult<()> {
        let users = self.users.read().await;
        let projects = self.projects.read().await;
        let mut tasks = self.tasks.write().await;
        if let Some(existing) = tasks.rows.get_mut(&task_id) {
            check_task_refs(&users, &projects, &task)?;
            existing.title = task.title;
            existing.descript = task.descript;
            existing.task_type = task.task_type;
            existing.task_priority = task.task_priority;
            existing.user_id = task.user_id;
            existing.project_id = task.project_id;
            existing.updated_at = Utc::now();
        }
        Ok(())
    }

    async fn delete_task(&self, task_id: i64) -> StoreResult<()> {
        self.tasks.write().await.rows.remove(&task_id);
        Ok(())
    }
}

#[async_trait]
impl ProjectStore for MemoryStore {
    async fn list_projects(&self) -> StoreResult<Vec<Project>> {
        Ok(self.projects.read().await.all())
    }

    async fn create_project(&self, project: ProjectFields) -> StoreResult<i64> {
        let users = self.users.read().await;
        let mut projects = self.projects.write().await;
        if !users.rows.contains_key(&project.manager_id) {
            return Err(foreign_key_failed());
        }

        let id = projects.next_id();
        let now = Utc::now();
        projects.rows.insert(
            id,
            Project {
                id,
                title: project.title,
                descript: project.descript,
                manager_id: project.manager_id,
                created_at: now,
                updated_at: now,
            },
        );
        Ok(id)
    }

    async fn get_project_by_id(&self, project_id: i64) -> StoreResult<Project> {
        self.projects
            .read()
            .await
            .rows
            .get(&project_id)
            .cloned()
            .ok_or_else(|| StoreError::not_found("project"))
    }

    async fn get_projects_by_query(
        &self,
        query_type: &str,
        query: &str,
    ) -> StoreResult<Vec<Project>> {
        let projects = self.projects.read().await;
        Ok(match ProjectQuery::parse(query_type)? {
            ProjectQuery::Title => projects.filter(|p| contains_ignore_case(&p.title, query)),
            ProjectQuery::Manager => {
                let manager_id = parse_id(query_type, query)?;
                projects.filter(|p| p.manager_id == manager_id)
            }
        })
    }

    async fn update_project(&self, project_id: i64, project: ProjectFields) -> StoreResult<()> {
        let users = self.users.read().await;
        let mut projects = self.projects.write().await;
        if let Some(existing) = projects.rows.get_mut(&project_id) {
            if !users.rows.contains_key(&project.manager_id) {
                return Err(foreign_key_failed());
            }
            existing.title = project.title;
            existing.descript = project.descript;
            existing.manager_id = project.manager_id;
            existing.updated_at = Utc::now();
        }
        Ok(())
    }

    async fn delete_project(&self, project_id: i64) -> StoreResult<()> {
        let mut projects = self.projects.write().await;
        let mut tasks = self.tasks.write().await;
        projects.rows.remove(&project_id);
        tasks.rows.retain(|_, task| task.project_id != project_id);
        Ok(())
    }

    async fn get_project_tasks(&self, project_id: i64) -> StoreResult<Vec<Task>> {
        Ok(self.tasks.read().await.filter(|t| t.project_id == project_id))
    }
}
