// docval-core/src/lib.rs
//! # docval Core Library
//!
//! `docval-core` validates and formats Brazilian taxpayer numbers: CPF
//! (individuals, 11 digits) and CNPJ (legal entities, 14 digits). Given a raw
//! string and a document kind it strips non-digits, checks the two modulo-11
//! verification digits, produces the canonical punctuated form and returns a
//! verdict with a human-readable message.
//!
//! The library is pure and stateless. No function here performs I/O on the
//! validation path, holds state between calls or panics on malformed input:
//! every string maps to a well-defined `ValidationResult`.
//!
//! ## Modules
//!
//! * `document`: Value types (`DocumentKind`, `ValidationResult`, `ValidationStatus`, ...).
//! * `sanitizers`: Reduces raw input to its ASCII digits.
//! * `classifier`: Length and repeated-digit checks that run before checksum work.
//! * `validators`: CPF and CNPJ verification-digit arithmetic.
//! * `formatter`: Positional masks, including partial masks while typing.
//! * `engine`: The public entry points tying the pipeline together.
//! * `config`: Message catalog with the Portuguese defaults and YAML overrides.
//! * `headless`: Batch validation over many inputs.
//! * `redaction`: PII-safe rendering of document numbers in logs.
//! * `errors`: The crate's typed error enum.
//!
//! ## Usage Example
//!
//! ```rust
//! use docval_core::{apply_mask, validate_document, DocumentKind};
//!
//! assert_eq!(apply_mask("1234", DocumentKind::Cpf), "123.4");
//!
//! let result = validate_document("11222333000181", DocumentKind::Cnpj);
//! assert!(result.is_valid);
//! assert_eq!(result.formatted_value, "11.222.333/0001-81");
//! assert_eq!(result.message, "CNPJ válido");
//! ```
//!
//! ## Error Handling
//!
//! Validation never returns an error. Fallible operations exist only at the
//! boundaries (parsing a `DocumentKind`, loading a message catalog) and use
//! `DocvalError` or `anyhow::Error` with context.
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod classifier;
pub mod config;
pub mod document;
pub mod engine;
pub mod errors;
pub mod formatter;
pub mod headless;
pub mod redaction;
pub mod sanitizers;
pub mod validators;

/// Re-exports the value types shared across the pipeline.
pub use document::{
    DocumentKind,
    Requirements,
    StructuralVerdict,
    ValidationResult,
    ValidationStatus,
};

/// Re-exports the custom error type for clear error reporting.
pub use errors::DocvalError;

/// Re-exports the individual pipeline stages.
pub use classifier::classify;
pub use formatter::format;
pub use sanitizers::clean;
pub use validators::{check_digits, verification_digits};

/// Re-exports the top-level entry points.
pub use engine::{
    apply_mask,
    check_requirements,
    is_complete,
    validate_document,
    validate_document_with,
};

/// Re-exports message catalog configuration.
pub use config::{default_catalog_path, merge_catalogs, CatalogOverrides, MessageCatalog};

/// Re-exports types and functions for batch, non-interactive use.
pub use headless::{validate_batch, validate_lines, BatchEntry, BatchReport, StatusSummaryItem};
