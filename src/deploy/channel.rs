// ABOUTME: Preview channel deploy: hosting channel deploy, entry-point rewrite, scoped functions deploy.
// ABOUTME: Each channel gets its own suffixed functions so previews never collide.

use std::path::Path;

use super::config::ChannelDeployConfig;
use super::deployer::{Deployer, FUNCTIONS_MEMORY_FLAG};
use super::discovery::ExportDiscovery;
use super::error::DeployError;
use super::result::{DeployResult, SiteDeploys, parse_deploy_result};
use super::rewrite::rewrite_entry_point;
use crate::diagnostics::{Diagnostics, Warning};
use crate::tool::ToolRunner;
use crate::types::ChannelId;

/// Arguments for `hosting:channel:deploy`.
pub fn channel_deploy_args(config: &ChannelDeployConfig) -> Vec<String> {
    let mut args = vec![
        "hosting:channel:deploy".to_string(),
        config.channel_id.to_string(),
    ];
    if let Some(target) = &config.base.target {
        args.push("--only".to_string());
        args.push(target.clone());
    }
    if let Some(expires) = &config.expires {
        args.push("--expires".to_string());
        args.push(expires.clone());
    }
    args
}

/// Suffix every listed function with the channel id: `"api, jobs"` becomes `"apipr1,jobspr1"`.
///
/// Returns `None` when no functions are listed, meaning all functions.
pub fn scoped_functions(functions: Option<&str>, channel: &ChannelId) -> Option<String> {
    let scoped: Vec<String> = functions?
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(|name| format!("{name}{channel}"))
        .collect();

    if scoped.is_empty() {
        None
    } else {
        Some(scoped.join(","))
    }
}

/// Arguments for the functions deploy that follows a channel rewrite.
pub fn functions_deploy_args(scoped: Option<&str>) -> Vec<String> {
    let only = match scoped {
        Some(functions) => format!("functions:{functions}"),
        None => "functions".to_string(),
    };
    vec![
        "deploy".to_string(),
        "--only".to_string(),
        only,
        FUNCTIONS_MEMORY_FLAG.to_string(),
    ]
}

impl<R: ToolRunner, D: ExportDiscovery> Deployer<R, D> {
    /// Deploy hosting to a preview channel, then deploy channel-scoped functions.
    ///
    /// Only the hosting result is returned. Rewriting and the functions deploy
    /// run only when hosting succeeded; an error result passes through as-is.
    /// A fatal functions deploy failure is returned as `Err`.
    pub async fn deploy_preview(
        &self,
        credentials_file: &Path,
        config: &ChannelDeployConfig,
        diag: &mut Diagnostics,
    ) -> Result<DeployResult<SiteDeploys>, DeployError> {
        let options = self.run_options(&config.base, Some(&config.channel_id));
        let output = self
            .executor
            .run_with_credentials(
                &channel_deploy_args(config),
                Some(&config.base.project_id),
                credentials_file,
                &options,
            )
            .await?;

        let result: DeployResult<SiteDeploys> = parse_deploy_result(output.trim())?;
        if !result.is_success() {
            return Ok(result);
        }

        let rewrite = rewrite_entry_point(&self.project_dir, &config.channel_id, &self.discovery)?;
        if rewrite.exports.is_empty() {
            diag.warn(Warning::no_exports_discovered(format!(
                "no exports found in {}; channel {} will deploy no functions",
                rewrite.original_main, config.channel_id
            )));
        }

        let scoped = scoped_functions(config.base.functions.as_deref(), &config.channel_id);
        let functions_output = self
            .executor
            .run_with_credentials(
                &functions_deploy_args(scoped.as_deref()),
                Some(&config.base.project_id),
                credentials_file,
                &options,
            )
            .await?;

        if let Ok(DeployResult::Error { error }) =
            parse_deploy_result::<serde_json::Value>(functions_output.trim())
        {
            diag.warn(Warning::functions_deploy(format!(
                "functions deploy for channel {} reported an error: {}",
                config.channel_id, error
            )));
        }

        Ok(result)
    }
}
