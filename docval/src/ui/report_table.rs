//! Tables for batch (`check`) output, rendered with `comfy-table`.

use comfy_table::{presets::UTF8_FULL_CONDENSED, Cell, ContentArrangement, Table};
use std::io::{self, Write};

use docval_core::{BatchReport, StatusSummaryItem};

use crate::ui::output_format::{print_info_message, styled};
use crate::ui::theme::{ThemeEntry, ThemeMap};

fn new_table(header: &[&str]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header.iter().map(|h| Cell::new(*h)));
    table
}

/// One row per validated line.
pub fn entries_table(report: &BatchReport, theme: &ThemeMap, supports_color: bool) -> Table {
    let mut table = new_table(&["Line", "Document", "Valid", "Message"]);
    for entry in &report.entries {
        let result = &entry.result;
        let message_style = if result.is_valid { ThemeEntry::Success } else { ThemeEntry::Error };
        table.add_row(vec![
            Cell::new(entry.line),
            Cell::new(styled(&result.formatted_value, ThemeEntry::FormattedValue, theme, supports_color)),
            Cell::new(if result.is_valid { "yes" } else { "no" }),
            Cell::new(styled(&result.message, message_style, theme, supports_color)),
        ]);
    }
    table
}

/// Occurrences per status.
pub fn summary_table(summary: &[StatusSummaryItem], theme: &ThemeMap, supports_color: bool) -> Table {
    let mut table = new_table(&["Status", "Occurrences"]);
    for item in summary {
        table.add_row(vec![
            Cell::new(styled(item.status.key(), ThemeEntry::SummaryStatus, theme, supports_color)),
            Cell::new(styled(&item.occurrences.to_string(), ThemeEntry::SummaryOccurrences, theme, supports_color)),
        ]);
    }
    table
}

/// Writes both tables and a one-line total.
pub fn print_report<W: Write>(
    writer: &mut W,
    report: &BatchReport,
    theme: &ThemeMap,
    supports_color: bool,
) -> io::Result<()> {
    if report.entries.is_empty() {
        return print_info_message(writer, "No documents to check.", theme, supports_color);
    }
    writeln!(writer, "{}", entries_table(report, theme, supports_color))?;
    writeln!(writer, "{}", styled("Summary", ThemeEntry::Header, theme, supports_color))?;
    writeln!(writer, "{}", summary_table(&report.summary, theme, supports_color))?;
    writeln!(
        writer,
        "{} valid, {} invalid, {} total",
        report.valid_count(),
        report.invalid_count(),
        report.entries.len()
    )
}
