// ABOUTME: Validated cloud project identifier.
// ABOUTME: Rejects empty ids and ids containing whitespace.

use serde::{Deserialize, Deserializer};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProjectIdError {
    #[error("project id cannot be empty")]
    Empty,

    #[error("project id cannot contain whitespace")]
    Whitespace,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProjectId(String);

impl ProjectId {
    pub fn new(value: &str) -> Result<Self, ProjectIdError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ProjectIdError::Empty);
        }

        if trimmed.chars().any(char::is_whitespace) {
            return Err(ProjectIdError::Whitespace);
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<'de> Deserialize<'de> for ProjectId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        ProjectId::new(&s).map_err(serde::de::Error::custom)
    }
}
