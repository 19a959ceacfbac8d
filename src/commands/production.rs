// ABOUTME: Production command implementation.
// ABOUTME: Resolves the deploy config and runs the combined hosting and functions deploy.

use crate::cli::DeployArgs;
use firedeploy::config::Config;
use firedeploy::deploy::{DeployResult, Deployer};
use firedeploy::error::{Error, Result};
use firedeploy::output::Output;
use firedeploy::tool::NpxRunner;
use std::path::Path;

/// Deploy hosting and functions to the live site.
pub async fn production(
    config: &Config,
    cwd: &Path,
    args: &DeployArgs,
    mut output: Output,
) -> Result<()> {
    let overrides = args.overrides();
    let deployment = config.deployment(&overrides)?;
    let credentials = config.credentials_file(&overrides)?;

    output.start_timer();
    output.progress(&format!("Deploying {} to production", deployment.project_id));

    let deployer = Deployer::new(
        NpxRunner::new(config.launcher()),
        config.functions_dir(cwd, &overrides),
    )
    .timeout(config.timeout);

    match deployer
        .deploy_production_site(&credentials, &deployment)
        .await?
    {
        DeployResult::Success { result } => {
            for version in result.hosting.to_vec() {
                output.progress(&format!("  ✓ Released {version}"));
            }
            output.success("Production deploy complete!");
            Ok(())
        }
        DeployResult::Error { error } => Err(Error::DeployReported(error)),
    }
}
