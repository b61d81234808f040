// File: docval-core/src/validators.rs
//! Check-digit validation for CPF and CNPJ.
//!
//! Both documents end in two verification digits computed with a weighted
//! modulo-11 sum over the preceding digits. The second pass always includes
//! the first verification digit. The weights and remainder rules below are
//! the official Receita Federal ones; a single off-by-one here silently
//! accepts wrong documents, so they are kept as literal tables.
//!
//! License: MIT OR APACHE 2.0

use crate::document::DocumentKind;

/// Weights for the first CNPJ verification digit (12 terms).
pub const CNPJ_FIRST_WEIGHTS: [u32; 12] = [5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

/// Weights for the second CNPJ verification digit (13 terms).
pub const CNPJ_SECOND_WEIGHTS: [u32; 13] = [6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

/// CPF verification digit over `digits`, with weights descending from
/// `top_weight` to 2.
fn cpf_verification_digit(digits: &[u32], top_weight: u32) -> u32 {
    let sum: u32 = digits
        .iter()
        .zip((2..=top_weight).rev())
        .map(|(&d, w)| d * w)
        .sum();
    let remainder = (sum * 10) % 11;
    if remainder >= 10 { 0 } else { remainder }
}

/// CNPJ verification digit over `digits` with the given weight table.
fn cnpj_verification_digit(digits: &[u32], weights: &[u32]) -> u32 {
    let sum: u32 = digits.iter().zip(weights).map(|(&d, &w)| d * w).sum();
    let remainder = sum % 11;
    if remainder < 2 { 0 } else { 11 - remainder }
}

fn to_digit_values(digits: &str) -> Option<Vec<u32>> {
    digits.chars().map(|c| c.to_digit(10)).collect()
}

/// Computes the two verification digits for a document base.
///
/// # Arguments
///
/// * `base` - The first 9 (CPF) or 12 (CNPJ) digits, with no punctuation.
/// * `kind` - Which document the base belongs to.
///
/// # Returns
///
/// `None` if `base` contains a non-digit or has the wrong number of digits.
pub fn verification_digits(base: &str, kind: DocumentKind) -> Option<[u8; 2]> {
    let mut values = to_digit_values(base)?;
    if values.len() != kind.digit_len() - 2 {
        return None;
    }

    let (first, second) = match kind {
        DocumentKind::Cpf => {
            let first = cpf_verification_digit(&values, 10);
            values.push(first);
            (first, cpf_verification_digit(&values, 11))
        }
        DocumentKind::Cnpj => {
            let first = cnpj_verification_digit(&values, &CNPJ_FIRST_WEIGHTS);
            values.push(first);
            (first, cnpj_verification_digit(&values, &CNPJ_SECOND_WEIGHTS))
        }
    };

    // Both are remainders below 10, so they fit in a u8.
    Some([first as u8, second as u8])
}

/// Checks both verification digits of a complete, cleaned document.
///
/// Meant to run only after the classifier reported `StructurallyOk`, but it
/// is total: anything that is not exactly `digit_len` ASCII digits is
/// simply `false`.
pub fn check_digits(digits: &str, kind: DocumentKind) -> bool {
    let len = kind.digit_len();
    if digits.len() != len || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }

    let (base, provided) = digits.split_at(len - 2);
    let Some(expected) = verification_digits(base, kind) else { return false; };

    provided
        .bytes()
        .map(|b| b - b'0')
        .eq(expected.iter().copied())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Rebuilds a CNPJ weight table from the cyclic rule: start at
    /// `len - 7`, decrement, wrap back to 9 below 2.
    fn cyclic_weights(len: usize) -> Vec<u32> {
        let mut weight = len as u32 - 7;
        let mut out = Vec::with_capacity(len);
        for _ in 0..len {
            out.push(weight);
            weight -= 1;
            if weight < 2 {
                weight = 9;
            }
        }
        out
    }

    #[test]
    fn cnpj_tables_follow_the_cyclic_rule() {
        assert_eq!(cyclic_weights(12), CNPJ_FIRST_WEIGHTS.to_vec());
        assert_eq!(cyclic_weights(13), CNPJ_SECOND_WEIGHTS.to_vec());
    }

    #[test]
    fn known_valid_cpfs() {
        for cpf in ["11144477735", "12345678909", "98765432100", "52998224725"] {
            assert!(check_digits(cpf, DocumentKind::Cpf), "{cpf} should be valid");
        }
    }

    #[test]
    fn known_valid_cnpjs() {
        for cnpj in ["11222333000181", "12345678000195", "00623904000173"] {
            assert!(check_digits(cnpj, DocumentKind::Cnpj), "{cnpj} should be valid");
        }
    }

    #[test]
    fn altered_check_digits_fail() {
        assert!(!check_digits("11144477736", DocumentKind::Cpf));
        assert!(!check_digits("11144477725", DocumentKind::Cpf));
        assert!(!check_digits("11222333000182", DocumentKind::Cnpj));
        assert!(!check_digits("11222333000171", DocumentKind::Cnpj));
    }

    #[test]
    fn rejects_wrong_shapes_without_panicking() {
        assert!(!check_digits("", DocumentKind::Cpf));
        assert!(!check_digits("1114447773", DocumentKind::Cpf));
        assert!(!check_digits("111.444.777-35", DocumentKind::Cpf));
        assert!(!check_digits("1114447773a", DocumentKind::Cpf));
        assert!(!check_digits("11144477735", DocumentKind::Cnpj));
    }

    #[test]
    fn repeated_digit_documents_against_checksum_alone() {
        // Every repeated-digit CPF satisfies the arithmetic, as does the
        // all-zero CNPJ. Only the classifier keeps them out.
        for d in b'0'..=b'9' {
            let cpf = char::from(d).to_string().repeat(11);
            assert!(check_digits(&cpf, DocumentKind::Cpf), "{cpf}");
        }
        assert!(check_digits("00000000000000", DocumentKind::Cnpj));
        for d in b'1'..=b'9' {
            let cnpj = char::from(d).to_string().repeat(14);
            assert!(!check_digits(&cnpj, DocumentKind::Cnpj), "{cnpj}");
        }
    }

    #[test]
    fn verification_digits_for_bases() {
        assert_eq!(verification_digits("111444777", DocumentKind::Cpf), Some([3, 5]));
        assert_eq!(verification_digits("112223330001", DocumentKind::Cnpj), Some([8, 1]));
        assert_eq!(verification_digits("11144477", DocumentKind::Cpf), None);
        assert_eq!(verification_digits("11144477x", DocumentKind::Cpf), None);
    }
}
