// ABOUTME: Application-wide error types for firedeploy.
// ABOUTME: Uses thiserror for ergonomic error handling.

use std::path::PathBuf;
use thiserror::Error;

use crate::deploy::{DeployError, InterpretError};

#[derive(Debug, Error)]
pub enum Error {
    #[error("file already exists: {0}")]
    AlreadyExists(PathBuf),

    #[error("configuration file not found in {0}")]
    ConfigNotFound(PathBuf),

    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("no project id given (use --project or set `project` in the config file)")]
    MissingProject,

    #[error("no credentials file given (use --credentials or set `credentials` in the config file)")]
    MissingCredentials,

    #[error("credentials file not found: {0}")]
    CredentialsNotFound(PathBuf),

    #[error(transparent)]
    Deploy(#[from] DeployError),

    #[error(transparent)]
    Interpret(#[from] InterpretError),

    #[error("deploy failed: {0}")]
    DeployReported(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
