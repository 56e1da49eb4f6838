use serde::Deserialize;

use crate::models::{NewUser, UserChanges, UserRole};
use crate::utils::{Validate, Violations};

#[derive(Debug, Deserialize)]
pub struct CreateUserPayload {
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub email: String,
    pub user_role: Option<UserRole>,
}

impl Validate for CreateUserPayload {
    type Output = NewUser;

    fn check(self) -> Result<NewUser, Violations> {
        let mut violations = Violations::default();
        violations.text("full_name", &self.full_name);
        violations.text("email", &self.email);
        let user_role = violations.present("user_role", self.user_role);

        match user_role {
            Some(user_role) if violations.is_empty() => Ok(NewUser {
                full_name: self.full_name,
                email: self.email,
                user_role,
            }),
            _ => Err(violations),
        }
    }
}

// Both fields are optional; email cannot be changed.
#[derive(Debug, Deserialize)]
pub struct UpdateUserPayload {
    pub full_name: Option<String>,
    pub user_role: Option<UserRole>,
}

impl Validate for UpdateUserPayload {
    type Output = UserChanges;

    fn check(self) -> Result<UserChanges, Violations> {
        Ok(UserChanges {
            full_name: self.full_name.filter(|name| !name.trim().is_empty()),
            user_role: self.user_role,
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct UserSearchQuery {
    pub name: Option<String>,
    pub email: Option<String>,
}

impl UserSearchQuery {
    /// First non-empty parameter, checked as `name` then `email`.
    pub fn discriminator(&self) -> Option<(&'static str, &str)> {
        [("name", &self.name), ("email", &self.email)]
            .into_iter()
            .find_map(|(key, value)| match value.as_deref() {
                Some(value) if !value.is_empty() => Some((key, value)),
                _ => None,
            })
    }
}
