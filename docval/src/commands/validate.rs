//! `docval validate`: one document, one verdict.

use anyhow::{Context, Result};
use is_terminal::IsTerminal;
use log::info;
use std::io::{self, Write};

use docval_core::{validate_document_with, DocumentKind, MessageCatalog, ValidationResult};

use crate::ui::output_format::styled;
use crate::ui::theme::{ThemeEntry, ThemeMap};

/// Writes the human-readable form: the punctuated value (if any) followed
/// by the message.
pub fn write_result<W: Write>(
    writer: &mut W,
    result: &ValidationResult,
    theme: &ThemeMap,
    supports_color: bool,
) -> io::Result<()> {
    if !result.formatted_value.is_empty() {
        writeln!(writer, "{}", styled(&result.formatted_value, ThemeEntry::FormattedValue, theme, supports_color))?;
    }
    let entry = if result.is_valid { ThemeEntry::Success } else { ThemeEntry::Error };
    writeln!(writer, "{}", styled(&result.message, entry, theme, supports_color))
}

/// Validates `value` and prints the verdict. Returns `true` if valid.
pub fn run_validate(
    value: &str,
    kind: DocumentKind,
    catalog: &MessageCatalog,
    json: bool,
    theme: &ThemeMap,
) -> Result<bool> {
    info!("Starting docval validate for {}.", kind.label());
    let result = validate_document_with(value, kind, catalog);

    let stdout = io::stdout();
    let supports_color = stdout.is_terminal();
    let mut writer = stdout.lock();
    if json {
        let text = serde_json::to_string_pretty(&result).context("Failed to serialize result")?;
        writeln!(writer, "{text}")?;
    } else {
        write_result(&mut writer, &result, theme, supports_color)?;
    }

    Ok(result.is_valid)
}
