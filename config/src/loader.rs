//! Configuration loading from the YAML file and the environment.
//!
//! The file path comes from `REPOVAULT_CONFIG` when set, otherwise
//! `repovault.yaml` in the working directory. The GitHub credential is only
//! ever read from the environment, never from the file.

use crate::config::Config;
use std::env;
use std::path::Path;
use thiserror::Error;

pub const DEFAULT_CONFIG_PATH: &str = "repovault.yaml";
pub const CONFIG_PATH_ENV: &str = "REPOVAULT_CONFIG";
pub const TOKEN_ENV: &str = "GITHUB_TOKEN";

pub type ConfigResult<T> = Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config file not found: {path}")]
    FileNotFound { path: String },

    #[error("Failed to parse config {path}: {reason}")]
    YamlParse { path: String, reason: String },

    #[error("GITHUB_TOKEN not set; export it or add it to a .env file")]
    MissingToken
}

/// Load configuration from a YAML file.
pub fn load_from_yaml(path: &Path) -> ConfigResult<Config> {
    let contents = std::fs::read_to_string(path).map_err(|_e| ConfigError::FileNotFound {
        path: path.display().to_string()
    })?;

    serde_yaml::from_str(&contents).map_err(|e| ConfigError::YamlParse {
        path: path.display().to_string(),
        reason: e.to_string()
    })
}

/// Load configuration from the default location, honoring the
/// `REPOVAULT_CONFIG` override.
pub fn load() -> ConfigResult<Config> {
    let path = env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
    load_from_yaml(Path::new(&path))
}

/// Read the GitHub API credential from the environment.
///
/// Must succeed before any remote call is attempted; a missing token aborts
/// the process.
pub fn github_token() -> ConfigResult<String> {
    match env::var(TOKEN_ENV) {
        Ok(token) if !token.is_empty() => Ok(token),
        _ => Err(ConfigError::MissingToken)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_from_yaml_parses_full_config() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            "github:\n  owner: octo\n  repo: demo\n  api_base: https://github.example.com/api/v3\n\
             vault:\n  root: /vault\n  sync_path: GitHub/{{repo}}\n\
             whitelist:\n  filename: '{{repo}}-whitelist.md'\n"
        )
        .unwrap();

        let config = load_from_yaml(file.path()).unwrap();
        assert_eq!(config.github.owner, "octo");
        assert_eq!(config.github.repo, "demo");
        assert_eq!(config.github.api_base, "https://github.example.com/api/v3");
        assert_eq!(config.vault.sync_path, "GitHub/{repo}");
    }

    #[test]
    fn test_load_from_yaml_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_from_yaml(&dir.path().join("absent.yaml"));
        assert!(matches!(result, Err(ConfigError::FileNotFound { .. })));
    }

    #[test]
    fn test_load_from_yaml_malformed_document() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "github: [not, a, mapping]").unwrap();

        let result = load_from_yaml(file.path());
        assert!(matches!(result, Err(ConfigError::YamlParse { .. })));
    }
}
