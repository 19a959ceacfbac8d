// ABOUTME: Preview command implementation.
// ABOUTME: Resolves a channel deploy config, runs the channel flow, and reports URLs.

use crate::cli::DeployArgs;
use firedeploy::config::Config;
use firedeploy::deploy::{
    ChannelDeployConfig, DeployResult, Deployer, interpret_channel_deploy_result,
};
use firedeploy::diagnostics::Diagnostics;
use firedeploy::error::{Error, Result};
use firedeploy::output::Output;
use firedeploy::tool::NpxRunner;
use firedeploy::types::ChannelId;
use std::path::Path;

/// Deploy to a preview channel.
pub async fn preview(
    config: &Config,
    cwd: &Path,
    channel: &str,
    expires: Option<String>,
    args: &DeployArgs,
    mut output: Output,
) -> Result<()> {
    let overrides = args.overrides();
    let channel_id = ChannelId::new(channel).map_err(|e| Error::InvalidConfig(e.to_string()))?;
    let credentials = config.credentials_file(&overrides)?;

    let mut channel_config = ChannelDeployConfig::new(config.deployment(&overrides)?, channel_id);
    if let Some(expires) = expires
        .filter(|e| !e.trim().is_empty())
        .or_else(|| config.expires.clone())
    {
        channel_config = channel_config.expires(expires);
    }

    output.start_timer();
    output.progress(&format!(
        "Deploying {} to preview channel {}",
        channel_config.base.project_id, channel_config.channel_id
    ));

    let deployer = Deployer::new(
        NpxRunner::new(config.launcher()),
        config.functions_dir(cwd, &overrides),
    )
    .timeout(config.timeout);

    let mut diag = Diagnostics::default();
    let result = deployer
        .deploy_preview(&credentials, &channel_config, &mut diag)
        .await?;

    // Emit collected warnings
    for warning in diag.warnings() {
        output.warning(&warning.message);
    }

    if let DeployResult::Error { error } = &result {
        return Err(Error::DeployReported(error.clone()));
    }

    let summary = interpret_channel_deploy_result(&result)?;
    output.preview(channel_config.channel_id.as_str(), &summary);
    output.success("Preview deploy complete!");
    Ok(())
}
