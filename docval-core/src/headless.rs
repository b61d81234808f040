// File: docval-core/src/headless.rs

//! `headless.rs`
//! Convenience wrappers for validating many documents in one call (non-UI).
//!
//! Used for files or piped input with one document per line. Each entry is
//! validated independently; the report adds per-status counts on top.

use log::{debug, info};
use serde::Serialize;

use crate::config::MessageCatalog;
use crate::document::{DocumentKind, ValidationResult, ValidationStatus};
use crate::engine::validate_document_with;

/// One validated input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchEntry {
    /// 1-based position of the input (line number for `validate_lines`).
    pub line: usize,
    pub input: String,
    pub result: ValidationResult,
}

/// Number of entries that ended with a given status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusSummaryItem {
    pub status: ValidationStatus,
    pub occurrences: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BatchReport {
    pub entries: Vec<BatchEntry>,
    /// Ordered by `ValidationStatus`; statuses with no entries are omitted.
    pub summary: Vec<StatusSummaryItem>,
}

impl BatchReport {
    pub fn valid_count(&self) -> usize {
        self.entries.iter().filter(|e| e.result.is_valid).count()
    }

    pub fn invalid_count(&self) -> usize {
        self.entries.len() - self.valid_count()
    }

    /// True when every entry is valid. An empty batch counts as all valid.
    pub fn all_valid(&self) -> bool {
        self.entries.iter().all(|e| e.result.is_valid)
    }
}

fn summarize(entries: &[BatchEntry]) -> Vec<StatusSummaryItem> {
    ValidationStatus::ALL
        .iter()
        .map(|&status| StatusSummaryItem {
            status,
            occurrences: entries.iter().filter(|e| e.result.status == status).count(),
        })
        .filter(|item| item.occurrences > 0)
        .collect()
}

fn build_report<'a, I>(numbered: I, kind: DocumentKind, catalog: &MessageCatalog) -> BatchReport
where
    I: IntoIterator<Item = (usize, &'a str)>,
{
    let entries: Vec<BatchEntry> = numbered
        .into_iter()
        .map(|(line, input)| BatchEntry {
            line,
            input: input.to_string(),
            result: validate_document_with(input, kind, catalog),
        })
        .collect();
    let summary = summarize(&entries);

    info!("Validated {} {} value(s).", entries.len(), kind.label());
    debug!("Batch summary: {:?}", summary);

    BatchReport { entries, summary }
}

/// Validates every input in order. Blank inputs are kept and report
/// `Required`.
pub fn validate_batch<'a, I>(inputs: I, kind: DocumentKind, catalog: &MessageCatalog) -> BatchReport
where
    I: IntoIterator<Item = &'a str>,
{
    build_report(inputs.into_iter().enumerate().map(|(i, s)| (i + 1, s)), kind, catalog)
}

/// Validates one document per line, skipping whitespace-only lines.
/// Line numbers refer to the original text.
pub fn validate_lines(text: &str, kind: DocumentKind, catalog: &MessageCatalog) -> BatchReport {
    let numbered = text
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty());
    build_report(numbered, kind, catalog)
}
