// ABOUTME: Credentials setting that is either a literal path or an environment lookup.
// ABOUTME: CI runners usually expose the service account file through GOOGLE_APPLICATION_CREDENTIALS.

use crate::error::{Error, Result};
use serde::Deserialize;

/// Where the service account file path comes from.
///
/// ```yaml
/// credentials: ./sa.json
/// credentials: { env: GOOGLE_APPLICATION_CREDENTIALS, default: ./sa.json }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum EnvValue {
    Literal(String),
    /// An empty variable counts as unset and falls back to `default`.
    FromEnv {
        #[serde(rename = "env")]
        var: String,
        #[serde(default)]
        default: Option<String>,
    },
}

impl EnvValue {
    /// The configured path, or [`Error::MissingEnvVar`] when neither the
    /// variable nor a default is available.
    pub fn resolve(&self) -> Result<String> {
        match self {
            EnvValue::Literal(s) => Ok(s.clone()),
            EnvValue::FromEnv { var, default } => match std::env::var(var) {
                Ok(val) if !val.is_empty() => Ok(val),
                _ => default
                    .clone()
                    .ok_or_else(|| Error::MissingEnvVar(var.clone())),
            },
        }
    }
}
