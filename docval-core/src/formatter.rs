//! Positional masks for CPF and CNPJ.
//!
//! A mask is a list of `(offset, separator)` pairs: the separator is written
//! right before the digit at that offset, and only if that digit exists.
//! This makes every partial mask a prefix of the full one, which is what
//! keystroke-by-keystroke masking needs.

use crate::document::DocumentKind;

const CPF_SEPARATORS: &[(usize, char)] = &[(3, '.'), (6, '.'), (9, '-')];
const CNPJ_SEPARATORS: &[(usize, char)] = &[(2, '.'), (5, '.'), (8, '/'), (12, '-')];

fn separators(kind: DocumentKind) -> &'static [(usize, char)] {
    match kind {
        DocumentKind::Cpf => CPF_SEPARATORS,
        DocumentKind::Cnpj => CNPJ_SEPARATORS,
    }
}

/// Punctuates `digits` according to the kind's mask.
///
/// Non-digit characters are ignored and at most `kind.digit_len()` digits
/// are used, so the output never exceeds `kind.masked_len()` characters.
/// Never fails; short input yields a partial mask with no trailing
/// separator.
pub fn format(digits: &str, kind: DocumentKind) -> String {
    let layout = separators(kind);
    let mut out = String::with_capacity(kind.masked_len());

    for (idx, digit) in digits
        .chars()
        .filter(char::is_ascii_digit)
        .take(kind.digit_len())
        .enumerate()
    {
        if let Some(&(_, sep)) = layout.iter().find(|(offset, _)| *offset == idx) {
            out.push(sep);
        }
        out.push(digit);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cpf_progressive_mask() {
        let full = "11144477735";
        let expected = [
            "", "1", "11", "111", "111.4", "111.44", "111.444", "111.444.7",
            "111.444.77", "111.444.777", "111.444.777-3", "111.444.777-35",
        ];
        for (n, want) in expected.iter().enumerate() {
            assert_eq!(format(&full[..n], DocumentKind::Cpf), *want, "prefix length {n}");
        }
    }

    #[test]
    fn cnpj_progressive_mask() {
        assert_eq!(format("12", DocumentKind::Cnpj), "12");
        assert_eq!(format("123", DocumentKind::Cnpj), "12.3");
        assert_eq!(format("12345", DocumentKind::Cnpj), "12.345");
        assert_eq!(format("123456", DocumentKind::Cnpj), "12.345.6");
        assert_eq!(format("12345678", DocumentKind::Cnpj), "12.345.678");
        assert_eq!(format("123456789", DocumentKind::Cnpj), "12.345.678/9");
        assert_eq!(format("123456780001", DocumentKind::Cnpj), "12.345.678/0001");
        assert_eq!(format("1234567800019", DocumentKind::Cnpj), "12.345.678/0001-9");
        assert_eq!(format("11222333000181", DocumentKind::Cnpj), "11.222.333/0001-81");
    }

    #[test]
    fn truncates_excess_digits() {
        assert_eq!(format("1114447773599999", DocumentKind::Cpf), "111.444.777-35");
        assert_eq!(format("112223330001819999", DocumentKind::Cnpj), "11.222.333/0001-81");
    }

    #[test]
    fn ignores_existing_punctuation() {
        assert_eq!(format("111.444.777-35", DocumentKind::Cpf), "111.444.777-35");
        assert_eq!(format("11.222.333/0001-81", DocumentKind::Cnpj), "11.222.333/0001-81");
    }

    #[test]
    fn output_never_exceeds_masked_len() {
        let long = "9".repeat(40);
        for kind in DocumentKind::ALL {
            assert_eq!(format(&long, kind).len(), kind.masked_len());
        }
    }
}
