// ABOUTME: Configuration types and parsing for firedeploy.yml.
// ABOUTME: Merges file settings with command-line overrides into deploy configs.

mod env_value;
mod init;

pub use env_value::EnvValue;
pub use init::init_config;

use crate::deploy::DeploymentConfig;
use crate::error::{Error, Result};
use crate::tool::DEFAULT_LAUNCHER;
use crate::types::ProjectId;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const CONFIG_FILENAME: &str = "firedeploy.yml";
pub const CONFIG_FILENAME_ALT: &str = "firedeploy.yaml";
pub const CONFIG_FILENAME_DIR: &str = ".firedeploy/config.yml";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub project: Option<ProjectId>,

    #[serde(default)]
    pub target: Option<String>,

    #[serde(default)]
    pub firebase_tools_version: Option<String>,

    #[serde(default)]
    pub functions: Option<String>,

    #[serde(default)]
    pub expires: Option<String>,

    #[serde(default)]
    pub credentials: Option<EnvValue>,

    /// Program used to run firebase-tools.
    #[serde(default)]
    pub launcher: Option<String>,

    /// Per-attempt limit for firebase-tools.
    #[serde(default, with = "humantime_serde")]
    pub timeout: Option<Duration>,

    /// Directory holding the functions package.json, relative to the working directory.
    #[serde(default)]
    pub functions_dir: Option<PathBuf>,
}

/// Command-line values that take precedence over the config file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub project: Option<String>,
    pub target: Option<String>,
    pub functions: Option<String>,
    pub firebase_tools_version: Option<String>,
    pub credentials: Option<PathBuf>,
    pub functions_dir: Option<PathBuf>,
}

/// Pipelines pass unset inputs as empty strings.
fn present(value: Option<&String>) -> Option<String> {
    value
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

impl Config {
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).map_err(Error::from)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    pub fn discover(dir: &Path) -> Result<Self> {
        let candidates = [
            dir.join(CONFIG_FILENAME),
            dir.join(CONFIG_FILENAME_ALT),
            dir.join(CONFIG_FILENAME_DIR),
        ];

        for path in &candidates {
            if path.exists() {
                tracing::debug!("Loading config from {}", path.display());
                return Self::load(path);
            }
        }

        Err(Error::ConfigNotFound(dir.to_path_buf()))
    }

    /// Like [`Config::discover`], but a missing file yields an empty config.
    pub fn discover_or_default(dir: &Path) -> Result<Self> {
        match Self::discover(dir) {
            Err(Error::ConfigNotFound(_)) => Ok(Self::default()),
            other => other,
        }
    }

    /// Resolve the settings shared by production and preview deploys.
    pub fn deployment(&self, overrides: &Overrides) -> Result<DeploymentConfig> {
        let project_id = match present(overrides.project.as_ref()) {
            Some(p) => ProjectId::new(&p).map_err(|e| Error::InvalidConfig(e.to_string()))?,
            None => self.project.clone().ok_or(Error::MissingProject)?,
        };

        Ok(DeploymentConfig {
            project_id,
            target: present(overrides.target.as_ref()).or_else(|| present(self.target.as_ref())),
            firebase_tools_version: present(overrides.firebase_tools_version.as_ref())
                .or_else(|| present(self.firebase_tools_version.as_ref())),
            functions: present(overrides.functions.as_ref())
                .or_else(|| present(self.functions.as_ref())),
        })
    }

    /// Path of the service account file handed to firebase-tools.
    pub fn credentials_file(&self, overrides: &Overrides) -> Result<PathBuf> {
        let path = match (&overrides.credentials, &self.credentials) {
            (Some(path), _) => path.clone(),
            (None, Some(value)) => PathBuf::from(value.resolve()?),
            (None, None) => return Err(Error::MissingCredentials),
        };

        if !path.is_file() {
            return Err(Error::CredentialsNotFound(path));
        }
        Ok(path)
    }

    /// Directory whose package.json is rewritten for preview channels.
    pub fn functions_dir(&self, cwd: &Path, overrides: &Overrides) -> PathBuf {
        match overrides.functions_dir.as_ref().or(self.functions_dir.as_ref()) {
            Some(dir) => cwd.join(dir),
            None => cwd.to_path_buf(),
        }
    }

    pub fn launcher(&self) -> &str {
        self.launcher
            .as_deref()
            .filter(|l| !l.trim().is_empty())
            .unwrap_or(DEFAULT_LAUNCHER)
    }
}
