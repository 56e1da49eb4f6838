use serde::Deserialize;

use crate::models::{TaskFields, TaskPriority, TaskType};
use crate::utils::{Validate, Violations};

#[derive(Debug, Deserialize)]
pub struct CreateTaskPayload {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub descript: String,
    pub task_type: Option<TaskType>,
    pub task_priority: Option<TaskPriority>,
    #[serde(default)]
    pub user_id: i64,
    #[serde(default)]
    pub project_id: i64,
}

impl Validate for CreateTaskPayload {
    type Output = TaskFields;

    fn check(self) -> Result<TaskFields, Violations> {
        let mut violations = Violations::default();
        violations.text("title", &self.title);
        let task_type = violations.present("task_type", self.task_type);
        let task_priority = violations.present("task_priority", self.task_priority);
        violations.id("user_id", self.user_id);
        violations.id("project_id", self.project_id);

        match (task_type, task_priority) {
            (Some(task_type), Some(task_priority)) if violations.is_empty() => Ok(TaskFields {
                title: self.title,
                descript: self.descript,
                task_type,
                task_priority,
                user_id: self.user_id,
                project_id: self.project_id,
            }),
            _ => Err(violations),
        }
    }
}

// Same shape as the create payload, but every field is required.
#[derive(Debug, Deserialize)]
pub struct UpdateTaskPayload {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub descript: String,
    pub task_type: Option<TaskType>,
    pub task_priority: Option<TaskPriority>,
    #[serde(default)]
    pub user_id: i64,
    #[serde(default)]
    pub project_id: i64,
}

impl Validate for UpdateTaskPayload {
    type Output = TaskFields;

    fn check(self) -> Result<TaskFields, Violations> {
        let mut violations = Violations::default();
        violations.text("title", &self.title);
        violations.text("descript", &self.descript);
        let task_type = violations.present("task_type", self.task_type);
        let task_priority = violations.present("task_priority", self.task_priority);
        violations.id("user_id", self.user_id);
        violations.id("project_id", self.project_id);

        match (task_type, task_priority) {
            (Some(task_type), Some(task_priority)) if violations.is_empty() => Ok(TaskFields {
                title: self.title,
                descript: self.descript,
                task_type,
                task_priority,
                user_id: self.user_id,
                project_id: self.project_id,
            }),
            _ => Err(violations),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct TaskSearchQuery {
    pub title: Option<String>,
    pub status: Option<String>,
    pub priority: Option<String>,
    pub assignee: Option<String>,
    pub project: Option<String>,
}

impl TaskSearchQuery {
    /// First non-empty parameter in the order title, status, priority, assignee, project.
    pub fn discriminator(&self) -> Option<(&'static str, &str)> {
        [
            ("title", &self.title),
            ("status", &self.status),
            ("priority", &self.priority),
            ("assignee", &self.assignee),
            ("project", &self.project),
        ]
        .into_iter()
        .find_map(|(key, value)| match value.as_deref() {
            Some(value) if !value.is_empty() => Some((key, value)),
            _ => None,
        })
    }
}
