// src/models/mod.rs

pub mod project;
pub mod task;
pub mod user;

pub use project::{Project, ProjectFields};
pub use task::{Task, TaskFields, TaskPriority, TaskType};
pub use user::{NewUser, User, UserChanges, UserRole};
