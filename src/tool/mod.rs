// ABOUTME: firebase-tools invocation: command building, subprocess runner, retry policy.
// ABOUTME: Exports Executor, the ToolRunner seam, and the injected environment names.

mod error;
mod executor;
mod invocation;
mod runner;

pub use error::ToolError;
pub use executor::Executor;
pub use invocation::{
    AGENT_ENV, AGENT_NAME, CHANNEL_ENV, CREDENTIALS_ENV, DEFAULT_LAUNCHER, DEFAULT_TOOL_VERSION,
    Invocation, RunOptions, TOOL_PACKAGE,
};
pub use runner::{ChunkCollector, NpxRunner, ToolOutput, ToolRunner};
