//! Required-field validation for request payloads.
//!
//! [`Validator`] carries no state; one value is built at startup and handed to
//! every handler as application data.

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
#[error("invalid payload: missing required fields: {}", .fields.join(", "))]
pub struct ValidationError {
    pub fields: Vec<&'static str>,
}

/// Collects the names of required fields that were absent or empty.
#[derive(Debug, Default)]
pub struct Violations {
    fields: Vec<&'static str>,
}

impl Violations {
    pub fn text(&mut self, name: &'static str, value: &str) {
        if value.trim().is_empty() {
            self.fields.push(name);
        }
    }

    pub fn id(&mut self, name: &'static str, value: i64) {
        if value <= 0 {
            self.fields.push(name);
        }
    }

    pub fn present<T>(&mut self, name: &'static str, value: Option<T>) -> Option<T> {
        if value.is_none() {
            self.fields.push(name);
        }
        value
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn into_error(self) -> ValidationError {
        ValidationError {
            fields: self.fields,
        }
    }
}

/// A payload that turns into its validated form or reports what is missing.
pub trait Validate {
    type Output;

    fn check(self) -> Result<Self::Output, Violations>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Validator;

impl Validator {
    pub fn new() -> Self {
        Validator
    }

    pub fn validate<P: Validate>(&self, payload: P) -> Result<P::Output, ValidationError> {
        payload.check().map_err(Violations::into_error)
    }
}
