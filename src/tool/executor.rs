// ABOUTME: Runs firebase-tools with injected credentials and a verbose retry.
// ABOUTME: A failed --json attempt is retried once with --debug; a failed debug attempt is fatal.

use std::path::Path;

use super::error::ToolError;
use super::invocation::{Invocation, RunOptions};
use super::runner::ToolRunner;
use crate::types::ProjectId;

/// Invokes firebase-tools through a [`ToolRunner`].
#[derive(Debug, Clone)]
pub struct Executor<R> {
    runner: R,
}

impl<R: ToolRunner> Executor<R> {
    pub fn new(runner: R) -> Self {
        Self { runner }
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Run firebase-tools and return the last chunk it wrote to stdout.
    ///
    /// Returns an empty string when the tool wrote nothing. When an attempt in
    /// `--json` mode fails it is repeated exactly once in `--debug` mode, whose
    /// outcome is final. A launch failure or timeout is returned immediately.
    pub async fn run_with_credentials(
        &self,
        args: &[String],
        project_id: Option<&ProjectId>,
        credentials_file: &Path,
        options: &RunOptions,
    ) -> Result<String, ToolError> {
        let mut debug = options.debug;

        loop {
            let invocation = Invocation::build(args, project_id, credentials_file, options, debug);
            tracing::info!("Running {}", invocation.display());

            let output = match options.timeout {
                Some(limit) => tokio::time::timeout(limit, self.runner.run(&invocation))
                    .await
                    .map_err(|_| ToolError::TimedOut(limit))??,
                None => self.runner.run(&invocation).await?,
            };

            if output.success {
                return Ok(output.last_chunk().unwrap_or_default().to_string());
            }

            let accumulated = output.stdout();
            if !accumulated.trim().is_empty() {
                tracing::error!("{}", accumulated.trim_end());
            }
            tracing::error!(
                "firebase-tools exited unsuccessfully (exit code {:?})",
                output.exit_code
            );

            if debug {
                return Err(ToolError::Failed {
                    exit_code: output.exit_code,
                    output: accumulated,
                });
            }

            tracing::warn!("Retrying with --debug for a more detailed error");
            debug = true;
        }
    }
}
