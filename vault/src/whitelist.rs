//! Whitelist checklist document.
//!
//! One markdown task line per remote file. A checked box approves the path
//! for sync; everything else in the document (headings, unchecked boxes,
//! prose) is ignored by the parser.

use crate::error::{VaultError, VaultResult};
use std::collections::HashSet;
use std::io::ErrorKind;
use std::path::Path;

const CHECKED_MARKER: &str = "- [x]";

/// Remote paths approved for sync.
pub type Whitelist = HashSet<String>;

/// Extract the approved paths from a checklist document.
///
/// A line contributes iff it trims to start with `- [x]`; the path is
/// everything after the first `]`, trimmed.
pub fn parse_whitelist(text: &str) -> Whitelist {
    let mut approved = HashSet::new();

    for line in text.lines() {
        let trimmed = line.trim();
        if !trimmed.starts_with(CHECKED_MARKER) {
            continue;
        }
        if let Some((_, rest)) = trimmed.split_once(']') {
            approved.insert(rest.trim().to_string());
        }
    }

    approved
}

/// Load the whitelist document. A missing file yields an empty whitelist.
pub fn load_whitelist(path: &Path) -> VaultResult<Whitelist> {
    match std::fs::read_to_string(path) {
        Ok(text) => Ok(parse_whitelist(&text)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(HashSet::new()),
        Err(e) => Err(VaultError::WhitelistRead {
            path: path.to_path_buf(),
            source: e
        })
    }
}

/// Persist a freshly generated checklist document, creating parent
/// directories and overwriting any previous document.
pub fn write_whitelist(path: &Path, content: &str) -> VaultResult<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| VaultError::WhitelistWrite {
            path: path.to_path_buf(),
            source: e
        })?;
    }
    std::fs::write(path, content).map_err(|e| VaultError::WhitelistWrite {
        path: path.to_path_buf(),
        source: e
    })
}

pub fn document_title(repo: &str) -> String {
    format!("# Whitelist for {}\n\n", repo)
}

pub fn unchecked_line(path: &str) -> String {
    format!("- [ ] {}\n", path)
}

pub fn directory_heading(name: &str) -> String {
    format!("\n## {}\n", name)
}
