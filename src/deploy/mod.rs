// ABOUTME: Deploy orchestration for preview channels and production.
// ABOUTME: Exports configs, typed results, the Deployer, and channel rewrite helpers.

mod channel;
mod config;
mod deployer;
mod discovery;
mod error;
mod production;
mod result;
mod rewrite;

pub use channel::{channel_deploy_args, functions_deploy_args, scoped_functions};
pub use config::{ChannelDeployConfig, DeploymentConfig, ProductionDeployConfig};
pub use deployer::{Deployer, FUNCTIONS_MEMORY_FLAG};
pub use discovery::{ExportDecl, ExportDiscovery, ExportKind, RegexExportScanner};
pub use error::{DeployError, DeployErrorKind};
pub use production::{production_deploy_args, production_only_filter};
pub use result::{
    ChannelSummary, DeployResult, HostingVersions, InterpretError, ProductionResult, SiteDeploy,
    SiteDeploys, interpret_channel_deploy_result, parse_deploy_result,
};
pub use rewrite::{
    ChannelRewrite, MANIFEST_FILE, RewriteError, channel_main, render_reexports,
    rewrite_entry_point,
};
