// docval-core/src/engine.rs
//! The result builder: the public entry points that tie the pipeline together.
//!
//! raw input -> `clean` -> `classify` -> `check_digits` -> `ValidationResult`
//!
//! Each exit point formats whatever digits are available, so
//! `formatted_value` is populated even when validation fails. Every function
//! here is a pure function of its arguments.
//!
//! License: MIT OR APACHE 2.0

use crate::classifier::{all_same_digit, classify};
use crate::config::MessageCatalog;
use crate::document::{DocumentKind, Requirements, StructuralVerdict, ValidationResult, ValidationStatus};
use crate::formatter::format;
use crate::redaction::log_validation_debug;
use crate::sanitizers::clean;
use crate::validators::check_digits;

/// Decides the status of a raw value without rendering any message.
pub fn evaluate(raw: &str, kind: DocumentKind) -> (String, ValidationStatus) {
    let digits = clean(raw);
    let status = match classify(&digits, kind) {
        StructuralVerdict::Empty => ValidationStatus::Required,
        StructuralVerdict::WrongLength => ValidationStatus::WrongLength,
        StructuralVerdict::AllSameDigit => ValidationStatus::RepeatedDigits,
        StructuralVerdict::StructurallyOk if check_digits(&digits, kind) => ValidationStatus::Valid,
        StructuralVerdict::StructurallyOk => ValidationStatus::ChecksumMismatch,
    };
    log_validation_debug(module_path!(), kind.label(), &digits, status.key());
    (digits, status)
}

fn build_result(digits: &str, kind: DocumentKind, status: ValidationStatus, message: String) -> ValidationResult {
    ValidationResult {
        is_valid: status.is_valid(),
        message,
        formatted_value: format(digits, kind),
        status,
    }
}

/// Validates a raw CPF/CNPJ and returns the verdict with the built-in
/// Portuguese message.
///
/// # Example
///
/// ```rust
/// use docval_core::{validate_document, DocumentKind};
///
/// let result = validate_document("111.444.777-35", DocumentKind::Cpf);
/// assert!(result.is_valid);
/// assert_eq!(result.message, "CPF válido");
/// assert_eq!(result.formatted_value, "111.444.777-35");
/// ```
pub fn validate_document(raw: &str, kind: DocumentKind) -> ValidationResult {
    let (digits, status) = evaluate(raw, kind);
    build_result(&digits, kind, status, status.default_message(kind))
}

/// Same as [`validate_document`], with messages rendered from `catalog`.
pub fn validate_document_with(raw: &str, kind: DocumentKind, catalog: &MessageCatalog) -> ValidationResult {
    let (digits, status) = evaluate(raw, kind);
    build_result(&digits, kind, status, catalog.message(status, kind))
}

/// Live mask for a value that is still being typed: `format(clean(raw))`.
pub fn apply_mask(raw: &str, kind: DocumentKind) -> String {
    format(&clean(raw), kind)
}

/// True once the value holds exactly the kind's digit count.
pub fn is_complete(raw: &str, kind: DocumentKind) -> bool {
    clean(raw).len() == kind.digit_len()
}

/// Checklist of individual requirements for a possibly partial value.
pub fn check_requirements(raw: &str, kind: DocumentKind) -> Requirements {
    let digits = clean(raw);
    let len = digits.len();
    Requirements {
        has_correct_length: len == kind.digit_len(),
        has_varied_digits: len < 2 || !all_same_digit(&digits),
        is_complete: len >= kind.digit_len(),
        is_formatted: raw.contains(kind.distinguishing_separator()),
    }
}
