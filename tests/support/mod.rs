// ABOUTME: Test support utilities.
// ABOUTME: Scripted firebase-tools runner, fixture projects, and tracing setup.

use async_trait::async_trait;
use firedeploy::tool::{Invocation, ToolError, ToolOutput, ToolRunner};
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::fs;
use std::path::Path;
use std::sync::{Arc, Once};

#[allow(dead_code)]
static TRACING_INIT: Once = Once::new();

/// Initialize tracing for tests. Safe to call multiple times.
#[allow(dead_code)]
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::EnvFilter;
        let filter =
            EnvFilter::from_default_env().add_directive("firedeploy=debug".parse().unwrap());
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init()
            .ok();
    });
}

/// Replays canned outputs and records every invocation it receives.
#[allow(dead_code)]
pub struct ScriptedRunner {
    responses: Mutex<VecDeque<ToolOutput>>,
    calls: Mutex<Vec<Invocation>>,
}

#[allow(dead_code)]
impl ScriptedRunner {
    pub fn new(responses: impl IntoIterator<Item = ToolOutput>) -> Arc<Self> {
        Arc::new(Self {
            responses: Mutex::new(responses.into_iter().collect()),
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> Vec<Invocation> {
        self.calls.lock().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }
}

#[async_trait]
impl ToolRunner for ScriptedRunner {
    async fn run(&self, invocation: &Invocation) -> Result<ToolOutput, ToolError> {
        self.calls.lock().push(invocation.clone());
        let next = self.responses.lock().pop_front();
        Ok(next.unwrap_or_else(|| panic!("unexpected invocation: {}", invocation.display())))
    }
}

/// Successful exit with the given stdout chunks.
#[allow(dead_code)]
pub fn ok(chunks: &[&str]) -> ToolOutput {
    ToolOutput {
        success: true,
        exit_code: Some(0),
        chunks: chunks.iter().map(|c| c.to_string()).collect(),
    }
}

/// Failed exit with the given stdout chunks.
#[allow(dead_code)]
pub fn failed(code: i32, chunks: &[&str]) -> ToolOutput {
    ToolOutput {
        success: false,
        exit_code: Some(code),
        chunks: chunks.iter().map(|c| c.to_string()).collect(),
    }
}

#[allow(dead_code)]
pub fn strings(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

#[allow(dead_code)]
pub const CHANNEL_SUCCESS: &str = r#"{
  "status": "success",
  "result": {
    "demo": {
      "site": "demo",
      "url": "https://demo--pr123-x1y2z3.web.app",
      "expireTime": "2026-10-26T09:30:00.000Z"
    }
  }
}"#;

#[allow(dead_code)]
pub const FUNCTIONS_SUCCESS: &str = r#"{"status":"success","result":{"functions":{}}}"#;

/// Write a functions package with the given manifest and entry point.
#[allow(dead_code)]
pub fn write_project(dir: &Path, manifest: &str, entry_name: &str, entry_source: &str) {
    fs::write(dir.join("package.json"), manifest).unwrap();
    let entry = dir.join(entry_name);
    if let Some(parent) = entry.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(entry, entry_source).unwrap();
}

/// Write an executable shell script.
#[allow(dead_code)]
#[cfg(unix)]
pub fn write_script(path: &Path, script: &str) {
    use std::os::unix::fs::PermissionsExt;

    fs::write(path, script).unwrap();
    let mut perms = fs::metadata(path).unwrap().permissions();
    perms.set_mode(0o755);
    fs::set_permissions(path, perms).unwrap();
}
