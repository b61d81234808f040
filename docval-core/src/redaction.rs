//! PII-safe rendering of document numbers for log output.
//!
//! CPF and CNPJ numbers identify real people and companies, so the engine
//! never writes them to logs verbatim unless explicitly allowed through
//! `DOCVAL_ALLOW_DEBUG_PII=true`. Otherwise a value is replaced by its digit
//! count plus a short fingerprint, which is enough to correlate log lines.

use lazy_static::lazy_static;
use log::debug;
use sha2::{Digest, Sha256};

lazy_static! {
    /// Read once: whether raw document digits may appear in debug logs.
    static ref PII_DEBUG_ALLOWED: bool = {
        std::env::var("DOCVAL_ALLOW_DEBUG_PII")
            .map(|s| s.eq_ignore_ascii_case("true"))
            .unwrap_or(false)
    };
}

/// Number of hex characters kept from the SHA-256 digest.
const FINGERPRINT_LEN: usize = 12;

/// Short, stable fingerprint of a value.
pub fn fingerprint(value: &str) -> String {
    let digest = Sha256::digest(value.as_bytes());
    let mut hex = hex::encode(digest);
    hex.truncate(FINGERPRINT_LEN);
    hex
}

/// Replaces a digit string with a non-reversible placeholder.
pub fn redact_digits(digits: &str) -> String {
    if digits.is_empty() {
        return "[EMPTY]".to_string();
    }
    format!("[REDACTED: {} digits #{}]", digits.len(), fingerprint(digits))
}

/// Returns what may be written to a log for `digits`.
pub fn loggable(digits: &str) -> String {
    if *PII_DEBUG_ALLOWED {
        digits.to_string()
    } else {
        redact_digits(digits)
    }
}

pub fn log_validation_debug(module_path: &str, kind: &str, digits: &str, status: &str) {
    debug!(
        "{} Validated {}: value={}, status={}",
        module_path,
        kind,
        loggable(digits),
        status
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fingerprint_is_stable_and_short() {
        let a = fingerprint("11144477735");
        assert_eq!(a, fingerprint("11144477735"));
        assert_eq!(a.len(), FINGERPRINT_LEN);
        assert_ne!(a, fingerprint("11144477736"));
    }

    #[test]
    fn redaction_hides_digits() {
        let redacted = redact_digits("11144477735");
        assert!(redacted.starts_with("[REDACTED: 11 digits #"));
        assert!(!redacted.contains("11144477735"));
        assert_eq!(redact_digits(""), "[EMPTY]");
    }
}
