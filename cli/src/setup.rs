//! Process bootstrap shared by both binaries: `.env` loading, tracing to
//! console and a persistent log file, and config/client assembly.

use anyhow::{Context, Result};
use config::{Config, Settings};
use github::GithubClient;
use std::fs::OpenOptions;
use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

pub const LOG_FILE: &str = "repovault.log";

/// Initialize tracing with a console layer and an append-mode file layer.
pub fn init_tracing() -> Result<()> {
    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(LOG_FILE)
        .with_context(|| format!("failed to open {LOG_FILE}"))?;

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(fmt::layer().with_ansi(false).with_writer(Arc::new(log_file)))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    Ok(())
}

/// Load configuration and build the authenticated client.
///
/// The token check runs before the client is built, so a missing credential
/// aborts the process before any network activity.
pub fn bootstrap() -> Result<(Config, Settings, Arc<GithubClient>)> {
    let config = config::load().context("failed to load configuration")?;
    let token = config::github_token()?;
    let settings = Settings::resolve(&config);

    let client = Arc::new(GithubClient::new(&config.github, token)?);
    Ok((config, settings, client))
}
