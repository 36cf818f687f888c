use github::GithubError;
use thiserror::Error;
use vault::VaultError;

pub type SyncResult<T> = Result<T, SyncError>;

/// Failures that abort a whole run: loading the whitelist, listing the
/// repository root, or (in the initializer) any listing at all. The sync
/// engine records per-file and per-subtree failures in the run report
/// instead of surfacing them here.
#[derive(Debug, Error)]
pub enum SyncError {
    #[error("Remote error: {0}")]
    Remote(#[from] GithubError),

    #[error("Vault error: {0}")]
    Vault(#[from] VaultError)
}
