//! Input sanitization for docval.
//!
//! Raw input arrives exactly as the user typed or pasted it: punctuation,
//! spaces and stray letters included. This module reduces it to the bare
//! digit string that every later stage (classifier, validators, formatter)
//! works on.

pub mod digits;

pub use digits::clean;
