// ABOUTME: Production deploy: one combined hosting and functions invocation.
// ABOUTME: No rewriting; the parsed result is returned directly.

use std::path::Path;

use super::config::{DeploymentConfig, ProductionDeployConfig};
use super::deployer::{Deployer, FUNCTIONS_MEMORY_FLAG};
use super::discovery::ExportDiscovery;
use super::error::DeployError;
use super::result::{DeployResult, ProductionResult, parse_deploy_result};
use crate::tool::ToolRunner;

/// The `--only` filter for production: `hosting[:target],functions[:names]`.
pub fn production_only_filter(config: &DeploymentConfig) -> String {
    let hosting = match &config.target {
        Some(target) => format!("hosting:{target}"),
        None => "hosting".to_string(),
    };
    let functions = match &config.functions {
        Some(functions) => format!("functions:{functions}"),
        None => "functions".to_string(),
    };
    format!("{hosting},{functions}")
}

pub fn production_deploy_args(config: &DeploymentConfig) -> Vec<String> {
    vec![
        "deploy".to_string(),
        "--only".to_string(),
        production_only_filter(config),
        FUNCTIONS_MEMORY_FLAG.to_string(),
    ]
}

impl<R: ToolRunner, D: ExportDiscovery> Deployer<R, D> {
    /// Deploy hosting and functions to the live site.
    pub async fn deploy_production_site(
        &self,
        credentials_file: &Path,
        config: &ProductionDeployConfig,
    ) -> Result<DeployResult<ProductionResult>, DeployError> {
        let options = self.run_options(config, None);
        let output = self
            .executor
            .run_with_credentials(
                &production_deploy_args(config),
                Some(&config.project_id),
                credentials_file,
                &options,
            )
            .await?;

        Ok(parse_deploy_result(&output)?)
    }
}
