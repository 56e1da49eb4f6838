use serde::Deserialize;

use crate::models::ProjectFields;
use crate::utils::{Validate, Violations};

#[derive(Debug, Deserialize)]
pub struct CreateProjectPayload {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub descript: String,
    #[serde(default)]
    pub manager_id: i64,
}

impl Validate for CreateProjectPayload {
    type Output = ProjectFields;

    fn check(self) -> Result<ProjectFields, Violations> {
        let mut violations = Violations::default();
        violations.text("title", &self.title);
        violations.id("manager_id", self.manager_id);

        if !violations.is_empty() {
            return Err(violations);
        }
        Ok(ProjectFields {
            title: self.title,
            descript: self.descript,
            manager_id: self.manager_id,
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdateProjectPayload {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub descript: String,
    #[serde(default)]
    pub manager_id: i64,
}

impl Validate for UpdateProjectPayload {
    type Output = ProjectFields;

    fn check(self) -> Result<ProjectFields, Violations> {
        let mut violations = Violations::default();
        violations.text("title", &self.title);
        violations.text("descript", &self.descript);
        violations.id("manager_id", self.manager_id);

        if !violations.is_empty() {
            return Err(violations);
        }
        Ok(ProjectFields {
            title: self.title,
            descript: self.descript,
            manager_id: self.manager_id,
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct ProjectSearchQuery {
    pub title: Option<String>,
    pub manager: Option<String>,
}

impl ProjectSearchQuery {
    pub fn discriminator(&self) -> Option<(&'static str, &str)> {
        [("title", &self.title), ("manager", &self.manager)]
            .into_iter()
            .find_map(|(key, value)| match value.as_deref() {
                Some(value) if !value.is_empty() => Some((key, value)),
                _ => None,
            })
    }
}
