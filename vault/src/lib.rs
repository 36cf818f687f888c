//! # Vault
//!
//! The local side of a sync: parsing and rendering the whitelist checklist
//! document, deriving note paths from remote paths, and writing formatted
//! notes into the vault.

pub mod error;
pub mod note;
pub mod whitelist;

pub use error::{VaultError, VaultResult};
pub use note::{note_path, render_note, write_note};
pub use whitelist::{Whitelist, load_whitelist, parse_whitelist, write_whitelist};
