// File: docval-core/src/sanitizers/digits.rs

/// Removes every character that is not an ASCII decimal digit.
///
/// Total: empty or digit-free input yields an empty string. Non-ASCII
/// numerals (e.g. Arabic-Indic digits) are dropped, not transliterated.
pub fn clean(input: &str) -> String {
    input.chars().filter(char::is_ascii_digit).collect()
}
