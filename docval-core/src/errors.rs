//! errors.rs - Custom error types for the docval-core library.
//!
//! The validation engine itself never fails: every input maps to a
//! `ValidationResult`. This enum only covers the boundaries around it,
//! such as parsing a document kind from text or loading a message catalog.
//!
//! License: MIT OR APACHE 2.0

use thiserror::Error;

/// This enum represents all possible error types in the `docval-core` library.
///
/// By using `#[non_exhaustive]`, we signal to consumers of this library that
/// new variants may be added in future versions.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum DocvalError {
    #[error("Tipo de documento inválido: '{0}'")]
    UnknownDocumentKind(String),

    #[error("Message template '{key}' could not be compiled or rendered: {source}")]
    Template {
        key: String,
        #[source]
        source: tinytemplate::error::Error,
    },

    #[error("Invalid message catalog: {0}")]
    InvalidCatalog(String),

    #[error("An unexpected I/O error occurred: {0}")]
    IoError(#[from] std::io::Error),
}
