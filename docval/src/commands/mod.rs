//! Command implementations for the `docval` CLI.
//!
//! Each command returns whether it succeeded from the user's point of view
//! (e.g. the document was valid); `main` turns that into an exit code.

pub mod check;
pub mod info;
pub mod mask;
pub mod validate;

use anyhow::Result;
use log::debug;
use std::path::Path;

use docval_core::{default_catalog_path, MessageCatalog};

/// Picks the message catalog: an explicit file, else the per-user default
/// file when it exists, else the built-in Portuguese messages.
pub fn resolve_catalog(explicit: Option<&Path>) -> Result<MessageCatalog> {
    if let Some(path) = explicit {
        return MessageCatalog::load_from_file(path);
    }
    match default_catalog_path() {
        Some(path) if path.is_file() => MessageCatalog::load_from_file(&path),
        _ => {
            debug!("No message catalog file found; using built-in messages.");
            Ok(MessageCatalog::default())
        }
    }
}
