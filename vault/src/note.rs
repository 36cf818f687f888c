//! Synced note rendering and persistence.
//!
//! Each note mirrors one remote file: front matter with provenance
//! metadata, a heading with the file's base name, and the original content
//! inside a fenced code block.

use crate::error::{VaultError, VaultResult};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tracing::debug;

const NOTE_EXTENSION: &str = "md";

/// Derive the note path for a remote file path: the original extension
/// (whatever follows the last dot, or nothing) is swapped for `.md`.
pub fn note_path(remote_path: &str) -> PathBuf {
    Path::new(remote_path).with_extension(NOTE_EXTENSION)
}

/// Fence language tag for a remote file, by extension. Unmapped extensions
/// get an untagged fence.
fn language_for(remote_path: &str) -> &'static str {
    let extension = Path::new(remote_path)
        .extension()
        .and_then(OsStr::to_str)
        .map(str::to_ascii_lowercase);

    match extension.as_deref() {
        Some("js") => "javascript",
        Some("py") => "python",
        Some("html") => "html",
        Some("css") => "css",
        _ => ""
    }
}

/// Render the full note document for a remote file.
pub fn render_note(remote_path: &str, content: &str, last_updated: &str) -> String {
    let base_name = Path::new(remote_path)
        .file_name()
        .and_then(OsStr::to_str)
        .unwrap_or(remote_path);
    let language = language_for(remote_path);

    format!(
        "---\noriginal_file: {remote_path}\nlast_updated: {last_updated}\n---\n\n# {base_name}\n\n```{language}\n{content}\n```"
    )
}

/// Write the note for a remote file under `sync_root`, creating parent
/// directories and overwriting any existing note. Returns the destination
/// path.
pub fn write_note(
    sync_root: &Path,
    remote_path: &str,
    content: &str,
    last_updated: &str
) -> VaultResult<PathBuf> {
    let destination = sync_root.join(note_path(remote_path));

    if let Some(parent) = destination.parent() {
        std::fs::create_dir_all(parent).map_err(|e| VaultError::NoteWrite {
            path: destination.clone(),
            source: e
        })?;
    }

    std::fs::write(&destination, render_note(remote_path, content, last_updated)).map_err(|e| {
        VaultError::NoteWrite {
            path: destination.clone(),
            source: e
        }
    })?;

    debug!(path = %destination.display(), "Note written");
    Ok(destination)
}
