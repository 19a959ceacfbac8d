// ABOUTME: Deployer ties the executor, export discovery, and project directory together.
// ABOUTME: Channel and production flows are implemented as impl blocks in sibling modules.

use std::path::{Path, PathBuf};
use std::time::Duration;

use super::config::DeploymentConfig;
use super::discovery::{ExportDiscovery, RegexExportScanner};
use crate::tool::{Executor, RunOptions, ToolRunner};
use crate::types::ChannelId;

/// Memory flag sent with every functions deploy. Passed as a single argument.
pub const FUNCTIONS_MEMORY_FLAG: &str = "--memory 512MiB";

/// Runs deploy flows against one project directory.
#[derive(Debug)]
pub struct Deployer<R, D = RegexExportScanner> {
    pub(super) executor: Executor<R>,
    pub(super) discovery: D,
    pub(super) project_dir: PathBuf,
    pub(super) timeout: Option<Duration>,
}

impl<R: ToolRunner> Deployer<R> {
    pub fn new(runner: R, project_dir: impl Into<PathBuf>) -> Self {
        Self {
            executor: Executor::new(runner),
            discovery: RegexExportScanner,
            project_dir: project_dir.into(),
            timeout: None,
        }
    }
}

impl<R: ToolRunner, D: ExportDiscovery> Deployer<R, D> {
    /// Replace the export discovery used for channel rewrites.
    pub fn with_discovery<D2: ExportDiscovery>(self, discovery: D2) -> Deployer<R, D2> {
        Deployer {
            executor: self.executor,
            discovery,
            project_dir: self.project_dir,
            timeout: self.timeout,
        }
    }

    /// Bound every firebase-tools attempt.
    pub fn timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn project_dir(&self) -> &Path {
        &self.project_dir
    }

    pub fn executor(&self) -> &Executor<R> {
        &self.executor
    }

    pub(super) fn run_options(
        &self,
        config: &DeploymentConfig,
        channel: Option<&ChannelId>,
    ) -> RunOptions {
        // Results are parsed as JSON, so the first attempt never runs in --debug mode.
        let options = RunOptions::new()
            .tool_version(config.firebase_tools_version.clone())
            .timeout(self.timeout);
        match channel {
            Some(channel) => options.channel(channel.clone()),
            None => options,
        }
    }
}
