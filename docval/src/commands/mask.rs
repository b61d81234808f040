//! `docval mask`: live punctuation, no validation.

use anyhow::Result;
use std::io::{self, Write};

use docval_core::{apply_mask, DocumentKind};

pub fn run_mask(value: &str, kind: DocumentKind) -> Result<()> {
    let mut writer = io::stdout().lock();
    writeln!(writer, "{}", apply_mask(value, kind))?;
    Ok(())
}
