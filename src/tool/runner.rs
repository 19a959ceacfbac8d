// ABOUTME: Subprocess boundary for firebase-tools.
// ABOUTME: Defines the ToolRunner trait and the npx-backed implementation.

use async_trait::async_trait;
use std::process::Stdio;
use std::sync::Arc;
use tokio::io::AsyncReadExt;
use tokio::process::Command;

use super::error::ToolError;
use super::invocation::{DEFAULT_LAUNCHER, Invocation};

/// Everything one attempt produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolOutput {
    pub success: bool,
    pub exit_code: Option<i32>,
    /// Stdout in the order it was read from the pipe.
    pub chunks: Vec<String>,
}

impl ToolOutput {
    /// The final stdout chunk, which carries the tool's result payload.
    pub fn last_chunk(&self) -> Option<&str> {
        self.chunks.last().map(String::as_str)
    }

    /// All captured stdout concatenated.
    pub fn stdout(&self) -> String {
        self.chunks.concat()
    }
}

/// Size of a single stdout read, matching the default Linux pipe capacity.
const READ_BUFFER_SIZE: usize = 64 * 1024;

/// Groups raw stdout reads into chunks.
///
/// Reads are joined until the buffered bytes end on a line break, so a payload
/// split across several reads stays one chunk. Chunks are only cut after
/// `\n`, which never falls inside a multi-byte UTF-8 sequence.
#[derive(Debug, Default)]
pub struct ChunkCollector {
    pending: Vec<u8>,
    chunks: Vec<String>,
}

impl ChunkCollector {
    pub fn push(&mut self, bytes: &[u8]) {
        self.pending.extend_from_slice(bytes);
        if self.pending.last() == Some(&b'\n') {
            self.flush();
        }
    }

    /// Flush whatever is still buffered and return the chunks in read order.
    pub fn finish(mut self) -> Vec<String> {
        self.flush();
        self.chunks
    }

    fn flush(&mut self) {
        if self.pending.is_empty() {
            return;
        }
        let chunk = String::from_utf8_lossy(&self.pending).into_owned();
        self.pending.clear();
        tracing::debug!(target: "firedeploy::tool", "{}", chunk.trim_end());
        self.chunks.push(chunk);
    }
}

/// Runs a single firebase-tools invocation to completion.
///
/// A non-zero exit is reported through [`ToolOutput::success`], not as an
/// error; errors are reserved for failures to run or read the process.
#[async_trait]
pub trait ToolRunner: Send + Sync {
    async fn run(&self, invocation: &Invocation) -> Result<ToolOutput, ToolError>;
}

#[async_trait]
impl<R: ToolRunner + ?Sized> ToolRunner for Arc<R> {
    async fn run(&self, invocation: &Invocation) -> Result<ToolOutput, ToolError> {
        (**self).run(invocation).await
    }
}

/// Runs firebase-tools through a package launcher (`npx` by default).
#[derive(Debug, Clone)]
pub struct NpxRunner {
    launcher: String,
}

impl NpxRunner {
    pub fn new(launcher: impl Into<String>) -> Self {
        Self {
            launcher: launcher.into(),
        }
    }

    pub fn launcher(&self) -> &str {
        &self.launcher
    }
}

impl Default for NpxRunner {
    fn default() -> Self {
        Self::new(DEFAULT_LAUNCHER)
    }
}

#[async_trait]
impl ToolRunner for NpxRunner {
    async fn run(&self, invocation: &Invocation) -> Result<ToolOutput, ToolError> {
        let mut child = Command::new(&self.launcher)
            .arg(&invocation.package)
            .args(&invocation.args)
            .envs(&invocation.env)
            // npx would otherwise prompt before installing the package
            .env("npm_config_yes", "true")
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .kill_on_drop(true)
            .spawn()
            .map_err(|source| ToolError::Spawn {
                program: self.launcher.clone(),
                source,
            })?;

        let mut stdout = child
            .stdout
            .take()
            .ok_or_else(|| std::io::Error::other("stdout was not captured"))?;

        let mut collector = ChunkCollector::default();
        let mut buf = vec![0u8; READ_BUFFER_SIZE];
        loop {
            let n = stdout.read(&mut buf).await?;
            if n == 0 {
                break;
            }
            collector.push(&buf[..n]);
        }

        let status = child.wait().await?;

        Ok(ToolOutput {
            success: status.success(),
            exit_code: status.code(),
            chunks: collector.finish(),
        })
    }
}
