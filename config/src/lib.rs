//! # Configuration
//!
//! Static settings for a repovault run: the GitHub repository to mirror,
//! the vault to mirror it into, and the whitelist document location. Loaded
//! once at process start and passed into each component; no ambient global
//! state.

pub mod config;
pub mod loader;

pub use config::{Config, GithubConfig, Settings, VaultConfig, WhitelistConfig};
pub use loader::{ConfigError, ConfigResult, github_token, load, load_from_yaml};
