// ABOUTME: Config scaffolding for new projects.
// ABOUTME: Writes a commented firedeploy.yml template.

use std::path::Path;

use crate::error::{Error, Result};
use crate::tool::CREDENTIALS_ENV;
use crate::types::ProjectId;

use super::CONFIG_FILENAME;

pub fn init_config(dir: &Path, project: Option<&str>, force: bool) -> Result<()> {
    let config_path = dir.join(CONFIG_FILENAME);

    if config_path.exists() && !force {
        return Err(Error::AlreadyExists(config_path));
    }

    let project = match project {
        Some(p) => ProjectId::new(p).map_err(|e| Error::InvalidConfig(e.to_string()))?,
        None => ProjectId::new("my-firebase-project")
            .map_err(|e| Error::InvalidConfig(e.to_string()))?,
    };

    std::fs::write(&config_path, generate_template_yaml(&project))?;

    Ok(())
}

fn generate_template_yaml(project: &ProjectId) -> String {
    format!(
        r#"project: {project}
credentials:
  env: {CREDENTIALS_ENV}
# Hosting target to deploy (default: all sites)
# target: web
# Comma-separated functions to deploy (default: all functions)
# functions: api, jobs
# Preview channel lifetime
# expires: 7d
# firebase_tools_version: latest
# timeout: 15m
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn template_parses_back() {
        let yaml = generate_template_yaml(&ProjectId::new("demo").unwrap());
        let config = Config::from_yaml(&yaml).unwrap();
        assert_eq!(config.project.unwrap().as_str(), "demo");
        assert!(config.credentials.is_some());
    }
}
