// ABOUTME: Builds firebase-tools command lines and the injected environment.
// ABOUTME: Appends --project and exactly one of --debug / --json to caller arguments.

use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

use crate::types::{ChannelId, LIVE_CHANNEL, ProjectId};

/// npm package of the external deployment tool.
pub const TOOL_PACKAGE: &str = "firebase-tools";
pub const DEFAULT_TOOL_VERSION: &str = "latest";
pub const DEFAULT_LAUNCHER: &str = "npx";

/// Identifies this agent to firebase-tools.
pub const AGENT_ENV: &str = "FIREBASE_DEPLOY_AGENT";
pub const AGENT_NAME: &str = "firedeploy";
/// Channel the build is being deployed to (`live` for production).
pub const CHANNEL_ENV: &str = "FIREBASE_CHANNEL_ID";
/// Service account file used for non-interactive authentication.
pub const CREDENTIALS_ENV: &str = "GOOGLE_APPLICATION_CREDENTIALS";

/// Per-call options for [`Executor::run_with_credentials`](super::Executor::run_with_credentials).
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Start in `--debug` mode. No retry happens for a failing debug attempt.
    pub debug: bool,
    /// firebase-tools version to run. Defaults to `latest`.
    pub tool_version: Option<String>,
    /// Channel tag exported to the tool. Defaults to [`LIVE_CHANNEL`].
    pub channel_id: Option<ChannelId>,
    /// Upper bound for a single attempt.
    pub timeout: Option<Duration>,
}

impl RunOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    pub fn tool_version(mut self, version: Option<String>) -> Self {
        self.tool_version = version;
        self
    }

    pub fn channel(mut self, channel_id: ChannelId) -> Self {
        self.channel_id = Some(channel_id);
        self
    }

    pub fn timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn resolved_tool_version(&self) -> &str {
        self.tool_version
            .as_deref()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or(DEFAULT_TOOL_VERSION)
    }

    pub fn channel_tag(&self) -> &str {
        self.channel_id
            .as_ref()
            .map(ChannelId::as_str)
            .unwrap_or(LIVE_CHANNEL)
    }
}

/// A fully resolved firebase-tools invocation for one attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Versioned package spec, e.g. `firebase-tools@latest`.
    pub package: String,
    pub args: Vec<String>,
    /// Variables added on top of the inherited process environment.
    pub env: HashMap<String, String>,
    pub debug: bool,
}

impl Invocation {
    pub fn build(
        args: &[String],
        project_id: Option<&ProjectId>,
        credentials_file: &Path,
        options: &RunOptions,
        debug: bool,
    ) -> Self {
        let mut full_args = args.to_vec();
        if let Some(project) = project_id {
            full_args.push("--project".to_string());
            full_args.push(project.to_string());
        }
        full_args.push(if debug { "--debug" } else { "--json" }.to_string());

        let mut env = HashMap::new();
        env.insert(AGENT_ENV.to_string(), AGENT_NAME.to_string());
        env.insert(CHANNEL_ENV.to_string(), options.channel_tag().to_string());
        env.insert(
            CREDENTIALS_ENV.to_string(),
            credentials_file.to_string_lossy().into_owned(),
        );

        Self {
            package: format!("{}@{}", TOOL_PACKAGE, options.resolved_tool_version()),
            args: full_args,
            env,
            debug,
        }
    }

    /// Human-readable command line for logs. Never includes the environment.
    pub fn display(&self) -> String {
        std::iter::once(self.package.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn appends_project_then_json() {
        let project = ProjectId::new("my-project").unwrap();
        let invocation = Invocation::build(
            &args(&["deploy", "--only", "hosting"]),
            Some(&project),
            Path::new("/tmp/creds.json"),
            &RunOptions::new(),
            false,
        );

        assert_eq!(
            invocation.args,
            args(&["deploy", "--only", "hosting", "--project", "my-project", "--json"])
        );
        assert_eq!(invocation.package, "firebase-tools@latest");
    }

    #[test]
    fn debug_replaces_json() {
        let invocation = Invocation::build(
            &args(&["deploy"]),
            None,
            Path::new("creds.json"),
            &RunOptions::new(),
            true,
        );

        assert_eq!(invocation.args, args(&["deploy", "--debug"]));
    }

    #[test]
    fn pins_tool_version() {
        let options = RunOptions::new().tool_version(Some("13.3.0".to_string()));
        let invocation =
            Invocation::build(&[], None, Path::new("creds.json"), &options, false);
        assert_eq!(invocation.package, "firebase-tools@13.3.0");
    }

    #[test]
    fn blank_tool_version_falls_back_to_latest() {
        let options = RunOptions::new().tool_version(Some("  ".to_string()));
        assert_eq!(options.resolved_tool_version(), "latest");
    }

    #[test]
    fn injects_agent_channel_and_credentials() {
        let options = RunOptions::new().channel(ChannelId::new("pr7").unwrap());
        let invocation =
            Invocation::build(&[], None, Path::new("/ci/sa.json"), &options, false);

        assert_eq!(invocation.env.get(AGENT_ENV), Some(&"firedeploy".to_string()));
        assert_eq!(invocation.env.get(CHANNEL_ENV), Some(&"pr7".to_string()));
        assert_eq!(
            invocation.env.get(CREDENTIALS_ENV),
            Some(&"/ci/sa.json".to_string())
        );
    }

    #[test]
    fn channel_defaults_to_live() {
        let invocation =
            Invocation::build(&[], None, Path::new("c.json"), &RunOptions::new(), false);
        assert_eq!(invocation.env.get(CHANNEL_ENV), Some(&"live".to_string()));
    }
}
