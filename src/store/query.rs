use serde::de::{value, DeserializeOwned, IntoDeserializer};

use super::{StoreError, StoreResult};

/// Search discriminators accepted by the user store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserQuery {
    Name,
    Email,
}

impl UserQuery {
    pub fn parse(query_type: &str) -> StoreResult<Self> {
        match query_type {
            "name" => Ok(UserQuery::Name),
            "email" => Ok(UserQuery::Email),
            other => Err(invalid_query_type(other)),
        }
    }
}

/// Search discriminators accepted by the task store.
///
/// `Status` filters the `task_priority` column and `Priority` filters the
/// `task_type` column; clients depend on this mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskQuery {
    Title,
    Status,
    Priority,
    Assignee,
    Project,
}

impl TaskQuery {
    pub fn parse(query_type: &str) -> StoreResult<Self> {
        match query_type {
            "title" => Ok(TaskQuery::Title),
            "status" => Ok(TaskQuery::Status),
            "priority" => Ok(TaskQuery::Priority),
            "assignee" => Ok(TaskQuery::Assignee),
            "project" => Ok(TaskQuery::Project),
            other => Err(invalid_query_type(other)),
        }
    }
}

/// Search discriminators accepted by the project store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectQuery {
    Title,
    Manager,
}

impl ProjectQuery {
    pub fn parse(query_type: &str) -> StoreResult<Self> {
        match query_type {
            "title" => Ok(ProjectQuery::Title),
            "manager" => Ok(ProjectQuery::Manager),
            other => Err(invalid_query_type(other)),
        }
    }
}

fn invalid_query_type(query_type: &str) -> StoreError {
    StoreError::InvalidArgument(format!("invalid query type: {}", query_type))
}

/// Parses the value of an exact-match id discriminator.
pub fn parse_id(query_type: &str, query: &str) -> StoreResult<i64> {
    query.trim().parse::<i64>().map_err(|_| {
        StoreError::InvalidArgument(format!("invalid {} id: {}", query_type, query))
    })
}

/// Reads a stored enum value from its wire name. `None` means no row can match.
pub fn variant<T: DeserializeOwned>(query: &str) -> Option<T> {
    let de: value::StrDeserializer<'_, value::Error> = query.into_deserializer();
    T::deserialize(de).ok()
}

/// Case-insensitive substring match. Both sides are folded with Unicode
/// lowercasing, which SQLite's `LOWER` does not do past ASCII.
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
