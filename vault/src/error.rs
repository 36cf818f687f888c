use std::path::PathBuf;
use thiserror::Error;

pub type VaultResult<T> = Result<T, VaultError>;

#[derive(Debug, Error)]
pub enum VaultError {
    #[error("Failed to read whitelist {path}: {source}")]
    WhitelistRead {
        path: PathBuf,
        source: std::io::Error
    },

    #[error("Failed to write whitelist {path}: {source}")]
    WhitelistWrite {
        path: PathBuf,
        source: std::io::Error
    },

    #[error("Failed to write note {path}: {source}")]
    NoteWrite {
        path: PathBuf,
        source: std::io::Error
    }
}
