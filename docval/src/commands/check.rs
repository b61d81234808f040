//! `docval check`: batch validation of one document per line.

use anyhow::{Context, Result};
use is_terminal::IsTerminal;
use log::{debug, info};
use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use docval_core::{validate_lines, BatchReport, DocumentKind, MessageCatalog};

use crate::ui::output_format::print_warn_message;
use crate::ui::report_table::print_report;
use crate::ui::theme::ThemeMap;

/// Options for the `check` command.
pub struct CheckOptions<'a> {
    pub input_file: Option<&'a Path>,
    pub kind: DocumentKind,
    pub json: bool,
    pub fail_on_invalid: bool,
}

fn read_input(input_file: Option<&Path>) -> Result<String> {
    match input_file {
        Some(path) => {
            info!("Reading input from file: {}", path.display());
            fs::read_to_string(path)
                .with_context(|| format!("Failed to read input file: {}", path.display()))
        }
        None => {
            info!("Reading input from stdin...");
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

/// Runs the batch check. Returns `false` only when `fail_on_invalid` is set
/// and at least one line is invalid.
pub fn run_check(opts: CheckOptions<'_>, catalog: &MessageCatalog, theme: &ThemeMap) -> Result<bool> {
    let text = read_input(opts.input_file)?;
    let report: BatchReport = validate_lines(&text, opts.kind, catalog);
    debug!(
        "Checked {} line(s): {} valid, {} invalid.",
        report.entries.len(),
        report.valid_count(),
        report.invalid_count()
    );

    let stdout = io::stdout();
    let supports_color = stdout.is_terminal();
    let mut writer = stdout.lock();
    if opts.json {
        let json = serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
        writeln!(writer, "{json}")?;
    } else {
        print_report(&mut writer, &report, theme, supports_color)?;
    }

    if opts.fail_on_invalid && !report.all_valid() {
        let stderr = io::stderr();
        let stderr_supports_color = stderr.is_terminal();
        print_warn_message(
            &mut stderr.lock(),
            &format!("{} invalid document(s) found.", report.invalid_count()),
            theme,
            stderr_supports_color,
        )?;
        return Ok(false);
    }
    Ok(true)
}
