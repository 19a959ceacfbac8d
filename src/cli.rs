// ABOUTME: Command-line interface definition using clap derive macros.
// ABOUTME: Defines all subcommands and their arguments.

use clap::{Args, Parser, Subcommand};
use firedeploy::config::Overrides;
use firedeploy::output::OutputMode;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "firedeploy")]
#[command(about = "Firebase Hosting and Functions deploys for CI, with isolated preview channels")]
#[command(version)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output for CI (only final result)
    #[arg(short, long, global = true, conflicts_with = "json")]
    pub quiet: bool,

    /// Output JSON lines for scripting
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn output_mode(&self) -> OutputMode {
        if self.json {
            OutputMode::Json
        } else if self.quiet {
            OutputMode::Quiet
        } else {
            OutputMode::Normal
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a firedeploy.yml configuration file
    Init {
        /// Firebase project id
        #[arg(short, long)]
        project: Option<String>,

        /// Overwrite an existing config file
        #[arg(short, long)]
        force: bool,
    },

    /// Deploy hosting and channel-scoped functions to a preview channel
    Preview {
        /// Preview channel id (letters, digits, '_')
        #[arg(short, long)]
        channel: String,

        /// Channel lifetime, e.g. 7d
        #[arg(short, long)]
        expires: Option<String>,

        #[command(flatten)]
        deploy: DeployArgs,
    },

    /// Deploy hosting and functions to the live site
    Production {
        #[command(flatten)]
        deploy: DeployArgs,
    },
}

/// Arguments shared by preview and production deploys.
#[derive(Args)]
pub struct DeployArgs {
    /// Firebase project id
    #[arg(short, long)]
    pub project: Option<String>,

    /// Hosting target to deploy
    #[arg(short, long)]
    pub target: Option<String>,

    /// Comma-separated functions to deploy (default: all)
    #[arg(short, long)]
    pub functions: Option<String>,

    /// Service account JSON file
    #[arg(long)]
    pub credentials: Option<PathBuf>,

    /// firebase-tools version (default: latest)
    #[arg(long)]
    pub tool_version: Option<String>,

    /// Directory containing the functions package.json
    #[arg(long)]
    pub functions_dir: Option<PathBuf>,
}

impl DeployArgs {
    pub fn overrides(&self) -> Overrides {
        Overrides {
            project: self.project.clone(),
            target: self.target.clone(),
            functions: self.functions.clone(),
            firebase_tools_version: self.tool_version.clone(),
            credentials: self.credentials.clone(),
            functions_dir: self.functions_dir.clone(),
        }
    }
}
