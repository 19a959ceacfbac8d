// ABOUTME: Integration tests for configuration parsing and resolution.
// ABOUTME: Tests YAML parsing, env-backed credentials, and command-line overrides.

use firedeploy::config::*;
use firedeploy::error::Error;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;
use tempfile::TempDir;

mod parsing {
    use super::*;

    #[test]
    fn parse_empty_config() {
        let config = Config::from_yaml("{}").unwrap();
        assert!(config.project.is_none());
        assert!(config.credentials.is_none());
        assert_eq!(config.launcher(), "npx");
    }

    #[test]
    fn parse_full_config() {
        let yaml = r#"
project: my-project
target: web
firebase_tools_version: 13.0.2
functions: api, jobs
expires: 7d
credentials: /ci/service-account.json
launcher: bunx
timeout: 10m
functions_dir: functions
"#;
        let config = Config::from_yaml(yaml).unwrap();
        assert_eq!(config.project.as_ref().unwrap().as_str(), "my-project");
        assert_eq!(config.target.as_deref(), Some("web"));
        assert_eq!(config.firebase_tools_version.as_deref(), Some("13.0.2"));
        assert_eq!(config.functions.as_deref(), Some("api, jobs"));
        assert_eq!(config.expires.as_deref(), Some("7d"));
        assert_eq!(
            config.credentials,
            Some(EnvValue::Literal("/ci/service-account.json".to_string()))
        );
        assert_eq!(config.launcher(), "bunx");
        assert_eq!(config.timeout, Some(Duration::from_secs(600)));
        assert_eq!(config.functions_dir, Some(PathBuf::from("functions")));
    }

    #[test]
    fn parse_env_credentials() {
        let yaml = r#"
credentials:
  env: FIREBASE_SA_PATH
  default: /fallback.json
"#;
        let config = Config::from_yaml(yaml).unwrap();
        assert_eq!(
            config.credentials,
            Some(EnvValue::FromEnv {
                var: "FIREBASE_SA_PATH".to_string(),
                default: Some("/fallback.json".to_string()),
            })
        );
    }

    #[test]
    fn invalid_project_returns_error() {
        let err = Config::from_yaml("project: \"my project\"").unwrap_err();
        assert!(err.to_string().contains("whitespace"));
    }

    #[test]
    fn invalid_timeout_returns_error() {
        assert!(Config::from_yaml("timeout: soon").is_err());
    }
}

mod resolution {
    use super::*;

    fn file_config() -> Config {
        Config::from_yaml(
            r#"
project: from-file
target: web
functions: api
"#,
        )
        .unwrap()
    }

    #[test]
    fn file_values_are_used() {
        let deployment = file_config().deployment(&Overrides::default()).unwrap();
        assert_eq!(deployment.project_id.as_str(), "from-file");
        assert_eq!(deployment.target.as_deref(), Some("web"));
        assert_eq!(deployment.functions.as_deref(), Some("api"));
        assert!(deployment.firebase_tools_version.is_none());
    }

    #[test]
    fn overrides_take_precedence() {
        let overrides = Overrides {
            project: Some("from-cli".to_string()),
            target: Some("admin".to_string()),
            firebase_tools_version: Some("13.0.0".to_string()),
            ..Default::default()
        };
        let deployment = file_config().deployment(&overrides).unwrap();
        assert_eq!(deployment.project_id.as_str(), "from-cli");
        assert_eq!(deployment.target.as_deref(), Some("admin"));
        assert_eq!(deployment.functions.as_deref(), Some("api"));
        assert_eq!(deployment.firebase_tools_version.as_deref(), Some("13.0.0"));
    }

    #[test]
    fn empty_overrides_are_ignored() {
        let overrides = Overrides {
            target: Some("".to_string()),
            functions: Some("  ".to_string()),
            ..Default::default()
        };
        let deployment = file_config().deployment(&overrides).unwrap();
        assert_eq!(deployment.target.as_deref(), Some("web"));
        assert_eq!(deployment.functions.as_deref(), Some("api"));
    }

    #[test]
    fn missing_project_is_an_error() {
        let err = Config::default()
            .deployment(&Overrides::default())
            .unwrap_err();
        assert!(matches!(err, Error::MissingProject));
    }

    #[test]
    fn missing_credentials_is_an_error() {
        let err = Config::default()
            .credentials_file(&Overrides::default())
            .unwrap_err();
        assert!(matches!(err, Error::MissingCredentials));
    }

    #[test]
    fn credentials_override_must_exist() {
        let overrides = Overrides {
            credentials: Some(PathBuf::from("/nonexistent/sa.json")),
            ..Default::default()
        };
        let err = Config::default().credentials_file(&overrides).unwrap_err();
        assert!(matches!(err, Error::CredentialsNotFound(_)));
    }

    #[test]
    fn credentials_from_environment() {
        let temp_dir = TempDir::new().unwrap();
        let sa = temp_dir.path().join("sa.json");
        fs::write(&sa, "{}").unwrap();

        let config = Config::from_yaml("credentials:\n  env: FIREDEPLOY_TEST_SA\n").unwrap();
        let resolved = temp_env::with_var("FIREDEPLOY_TEST_SA", Some(&sa), || {
            config.credentials_file(&Overrides::default())
        })
        .unwrap();

        assert_eq!(resolved, sa);
    }

    #[test]
    fn unset_credentials_variable_is_an_error() {
        let config = Config::from_yaml("credentials:\n  env: FIREDEPLOY_TEST_UNSET\n").unwrap();
        let err = temp_env::with_var_unset("FIREDEPLOY_TEST_UNSET", || {
            config.credentials_file(&Overrides::default())
        })
        .unwrap_err();

        assert!(matches!(err, Error::MissingEnvVar(var) if var == "FIREDEPLOY_TEST_UNSET"));
    }

    #[test]
    fn functions_dir_is_relative_to_cwd() {
        let config = Config::from_yaml("functions_dir: functions").unwrap();
        let cwd = PathBuf::from("/work");
        assert_eq!(
            config.functions_dir(&cwd, &Overrides::default()),
            PathBuf::from("/work/functions")
        );
        assert_eq!(
            Config::default().functions_dir(&cwd, &Overrides::default()),
            cwd
        );
    }
}

mod discovery {
    use super::*;

    #[test]
    fn discovers_primary_file() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(CONFIG_FILENAME), "project: demo\n").unwrap();

        let config = Config::discover(temp_dir.path()).unwrap();
        assert_eq!(config.project.unwrap().as_str(), "demo");
    }

    #[test]
    fn discovers_alternate_file() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(CONFIG_FILENAME_ALT), "project: alt\n").unwrap();

        let config = Config::discover(temp_dir.path()).unwrap();
        assert_eq!(config.project.unwrap().as_str(), "alt");
    }

    #[test]
    fn missing_file_is_not_found() {
        let temp_dir = TempDir::new().unwrap();
        assert!(matches!(
            Config::discover(temp_dir.path()),
            Err(Error::ConfigNotFound(_))
        ));
        assert!(Config::discover_or_default(temp_dir.path()).is_ok());
    }

    #[test]
    fn init_refuses_to_overwrite() {
        let temp_dir = TempDir::new().unwrap();
        init_config(temp_dir.path(), Some("demo"), false).unwrap();
        assert!(matches!(
            init_config(temp_dir.path(), Some("demo"), false),
            Err(Error::AlreadyExists(_))
        ));
        init_config(temp_dir.path(), Some("other"), true).unwrap();

        let config = Config::discover(temp_dir.path()).unwrap();
        assert_eq!(config.project.unwrap().as_str(), "other");
    }
}
