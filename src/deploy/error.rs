// ABOUTME: Unified deploy error with SNAFU pattern.
// ABOUTME: Wraps tool, rewrite, and output parsing failures for programmatic handling.

use snafu::Snafu;

use super::rewrite::RewriteError;
use crate::tool::ToolError;

/// Fatal failure of a deploy flow.
///
/// A deploy that firebase-tools itself reports as failed is not an error here;
/// it comes back as [`DeployResult::Error`](super::DeployResult::Error).
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum DeployError {
    #[snafu(display("firebase-tools invocation failed: {source}"))]
    Tool { source: ToolError },

    #[snafu(display("channel entry-point rewrite failed: {source}"))]
    Rewrite { source: RewriteError },

    #[snafu(display("firebase-tools output is not a deploy result: {source}"))]
    MalformedOutput { source: serde_json::Error },
}

/// Error kind for programmatic handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeployErrorKind {
    /// The tool could not be launched.
    Launch,
    /// The tool ran out of time.
    Timeout,
    /// The tool exited unsuccessfully, also after the --debug retry.
    ToolFailed,
    /// Reading or writing the project's build artifacts failed.
    Artifacts,
    /// Stdout was empty or not the expected JSON.
    MalformedOutput,
}

impl DeployError {
    /// Returns the error kind for programmatic handling.
    pub fn kind(&self) -> DeployErrorKind {
        match self {
            DeployError::Tool { source } => match source {
                ToolError::Spawn { .. } => DeployErrorKind::Launch,
                ToolError::TimedOut(_) => DeployErrorKind::Timeout,
                ToolError::Failed { .. } | ToolError::Io(_) => DeployErrorKind::ToolFailed,
            },
            DeployError::Rewrite { .. } => DeployErrorKind::Artifacts,
            DeployError::MalformedOutput { .. } => DeployErrorKind::MalformedOutput,
        }
    }
}

impl From<ToolError> for DeployError {
    fn from(source: ToolError) -> Self {
        DeployError::Tool { source }
    }
}

impl From<RewriteError> for DeployError {
    fn from(source: RewriteError) -> Self {
        DeployError::Rewrite { source }
    }
}

impl From<serde_json::Error> for DeployError {
    fn from(source: serde_json::Error) -> Self {
        DeployError::MalformedOutput { source }
    }
}
