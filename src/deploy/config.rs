// ABOUTME: Per-invocation deployment settings for production and preview deploys.
// ABOUTME: Built once by the caller and never mutated by the orchestrators.

use crate::types::{ChannelId, ProjectId};

/// Settings shared by every deploy kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeploymentConfig {
    pub project_id: ProjectId,
    /// Named hosting target within the project.
    pub target: Option<String>,
    /// firebase-tools version to run; `latest` when unset.
    pub firebase_tools_version: Option<String>,
    /// Comma-separated function names. `None` deploys every function.
    pub functions: Option<String>,
}

impl DeploymentConfig {
    pub fn new(project_id: ProjectId) -> Self {
        Self {
            project_id,
            target: None,
            firebase_tools_version: None,
            functions: None,
        }
    }

    pub fn target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    pub fn firebase_tools_version(mut self, version: impl Into<String>) -> Self {
        self.firebase_tools_version = Some(version.into());
        self
    }

    pub fn functions(mut self, functions: impl Into<String>) -> Self {
        self.functions = Some(functions.into());
        self
    }
}

/// Production deploys need nothing beyond the shared settings.
pub type ProductionDeployConfig = DeploymentConfig;

/// Settings for a preview channel deploy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelDeployConfig {
    pub base: DeploymentConfig,
    pub channel_id: ChannelId,
    /// Channel time-to-live, e.g. `7d`.
    pub expires: Option<String>,
}

impl ChannelDeployConfig {
    pub fn new(base: DeploymentConfig, channel_id: ChannelId) -> Self {
        Self {
            base,
            channel_id,
            expires: None,
        }
    }

    pub fn expires(mut self, expires: impl Into<String>) -> Self {
        self.expires = Some(expires.into());
        self
    }
}
