use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Complete configuration file contents.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub github: GithubConfig,
    pub vault: VaultConfig,
    pub whitelist: WhitelistConfig
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GithubConfig {
    pub owner: String,
    pub repo: String,
    #[serde(default = "default_api_base")]
    pub api_base: String
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VaultConfig {
    /// Root directory of the note vault.
    pub root: PathBuf,
    /// Subdirectory of the vault holding synced notes. Accepts a `{repo}`
    /// substitution.
    pub sync_path: String
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WhitelistConfig {
    /// Whitelist document file name. Accepts a `{repo}` substitution.
    pub filename: String
}

fn default_api_base() -> String {
    "https://api.github.com".to_string()
}

/// Filesystem paths resolved from a [`Config`].
///
/// Notes are written under `sync_root`; the whitelist document lives at
/// `whitelist_path` inside it.
#[derive(Debug, Clone)]
pub struct Settings {
    pub sync_root: PathBuf,
    pub whitelist_path: PathBuf
}

impl Settings {
    pub fn resolve(config: &Config) -> Self {
        let sync_path = substitute_repo(&config.vault.sync_path, &config.github.repo);
        let filename = substitute_repo(&config.whitelist.filename, &config.github.repo);
        let sync_root = config.vault.root.join(sync_path);
        let whitelist_path = sync_root.join(filename);

        Self {
            sync_root,
            whitelist_path
        }
    }
}

fn substitute_repo(template: &str, repo: &str) -> String {
    template.replace("{repo}", repo)
}
