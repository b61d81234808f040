//! Structural checks that run before checksum work.
//!
//! The classifier only looks at the shape of the digit string: how many
//! digits there are and whether they are all the same. Order matters:
//! length is checked before the repeated-digit test, so a short run of
//! zeros reports a length problem rather than an invalid document.

use crate::document::{DocumentKind, StructuralVerdict};

/// Classifies a cleaned digit string for the given document kind.
///
/// `digits` is expected to already be sanitized. Length is measured in
/// characters, so stray non-digits would only ever cause `WrongLength`.
pub fn classify(digits: &str, kind: DocumentKind) -> StructuralVerdict {
    if digits.is_empty() {
        return StructuralVerdict::Empty;
    }

    if digits.chars().count() != kind.digit_len() {
        return StructuralVerdict::WrongLength;
    }

    if all_same_digit(digits) {
        return StructuralVerdict::AllSameDigit;
    }

    StructuralVerdict::StructurallyOk
}

/// True when every character equals the first one. Empty strings are not
/// considered repeated.
pub(crate) fn all_same_digit(digits: &str) -> bool {
    let mut chars = digits.chars();
    let Some(first) = chars.next() else { return false; };
    chars.all(|c| c == first)
}
