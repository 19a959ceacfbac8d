// ABOUTME: Error types for firebase-tools invocations.
// ABOUTME: Distinguishes launch failures, timeouts, and unsuccessful exits.

use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ToolError {
    #[error("failed to launch '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error while reading firebase-tools output: {0}")]
    Io(#[from] std::io::Error),

    #[error("firebase-tools timed out after {0:?}")]
    TimedOut(Duration),

    #[error("firebase-tools exited unsuccessfully (exit code {exit_code:?})")]
    Failed {
        exit_code: Option<i32>,
        /// Everything the failing attempt wrote to stdout.
        output: String,
    },
}

impl ToolError {
    /// Captured stdout of the failing attempt, if the tool ran at all.
    pub fn output(&self) -> Option<&str> {
        match self {
            ToolError::Failed { output, .. } => Some(output),
            _ => None,
        }
    }
}
