//! Value types shared by every stage of the validation pipeline.
//!
//! All of these are plain values created per call and dropped right after the
//! caller reads them. Nothing here holds state between validations.
//!
//! License: MIT OR Apache-2.0

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::DocvalError;

/// The two Brazilian taxpayer documents understood by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    /// Cadastro de Pessoa Física, 11 digits.
    Cpf,
    /// Cadastro Nacional da Pessoa Jurídica, 14 digits.
    Cnpj,
}

impl DocumentKind {
    /// Every supported kind, in display order.
    pub const ALL: [DocumentKind; 2] = [DocumentKind::Cpf, DocumentKind::Cnpj];

    /// Number of digits in a complete document.
    pub const fn digit_len(self) -> usize {
        match self {
            DocumentKind::Cpf => 11,
            DocumentKind::Cnpj => 14,
        }
    }

    /// Number of characters in a complete, punctuated document.
    pub const fn masked_len(self) -> usize {
        match self {
            DocumentKind::Cpf => 14,
            DocumentKind::Cnpj => 18,
        }
    }

    /// Upper-case label used in messages.
    pub const fn label(self) -> &'static str {
        match self {
            DocumentKind::Cpf => "CPF",
            DocumentKind::Cnpj => "CNPJ",
        }
    }

    /// Lower-case tag, as accepted by `FromStr` and used in serialized form.
    pub const fn as_str(self) -> &'static str {
        match self {
            DocumentKind::Cpf => "cpf",
            DocumentKind::Cnpj => "cnpj",
        }
    }

    pub const fn mask_pattern(self) -> &'static str {
        match self {
            DocumentKind::Cpf => "000.000.000-00",
            DocumentKind::Cnpj => "00.000.000/0000-00",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            DocumentKind::Cpf => "Cadastro de Pessoa Física",
            DocumentKind::Cnpj => "Cadastro Nacional da Pessoa Jurídica",
        }
    }

    /// Separator whose presence marks a value as typed with punctuation.
    pub const fn distinguishing_separator(self) -> char {
        match self {
            DocumentKind::Cpf => '-',
            DocumentKind::Cnpj => '/',
        }
    }

    /// Short user-facing hints about the document layout.
    pub fn tips(self) -> &'static [&'static str] {
        match self {
            DocumentKind::Cpf => &[
                "Deve conter exatamente 11 dígitos",
                "Formato: XXX.XXX.XXX-XX",
                "Não pode ter todos os dígitos iguais",
                "Os dois últimos dígitos são verificadores",
            ],
            DocumentKind::Cnpj => &[
                "Deve conter exatamente 14 dígitos",
                "Formato: XX.XXX.XXX/XXXX-XX",
                "Não pode ter todos os dígitos iguais",
                "Os dois últimos dígitos são verificadores",
            ],
        }
    }

    /// Sample values in their punctuated form.
    pub fn examples(self) -> &'static [&'static str] {
        match self {
            DocumentKind::Cpf => &["123.456.789-09", "987.654.321-00"],
            DocumentKind::Cnpj => &["11.222.333/0001-81", "12.345.678/0001-95"],
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DocumentKind {
    type Err = DocvalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("cpf") {
            Ok(DocumentKind::Cpf)
        } else if trimmed.eq_ignore_ascii_case("cnpj") {
            Ok(DocumentKind::Cnpj)
        } else {
            Err(DocvalError::UnknownDocumentKind(s.to_string()))
        }
    }
}

/// Outcome of the structural checks that run before any checksum work.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StructuralVerdict {
    Empty,
    WrongLength,
    AllSameDigit,
    StructurallyOk,
}

/// The reason behind a `ValidationResult`, one per message key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationStatus {
    Required,
    WrongLength,
    RepeatedDigits,
    ChecksumMismatch,
    Valid,
}

impl ValidationStatus {
    pub const ALL: [ValidationStatus; 5] = [
        ValidationStatus::Required,
        ValidationStatus::WrongLength,
        ValidationStatus::RepeatedDigits,
        ValidationStatus::ChecksumMismatch,
        ValidationStatus::Valid,
    ];

    /// Key used by message catalogs.
    pub const fn key(self) -> &'static str {
        match self {
            ValidationStatus::Required => "required",
            ValidationStatus::WrongLength => "wrong_length",
            ValidationStatus::RepeatedDigits => "repeated_digits",
            ValidationStatus::ChecksumMismatch => "checksum_mismatch",
            ValidationStatus::Valid => "valid",
        }
    }

    pub const fn is_valid(self) -> bool {
        matches!(self, ValidationStatus::Valid)
    }

    /// The built-in Portuguese text for this status.
    pub fn default_message(self, kind: DocumentKind) -> String {
        let label = kind.label();
        match self {
            ValidationStatus::Required => format!("{label} é obrigatório"),
            ValidationStatus::WrongLength => {
                format!("{label} deve ter {} dígitos", kind.digit_len())
            }
            ValidationStatus::RepeatedDigits | ValidationStatus::ChecksumMismatch => {
                format!("{label} inválido")
            }
            ValidationStatus::Valid => format!("{label} válido"),
        }
    }
}

impl fmt::Display for ValidationStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// The verdict handed back to callers.
///
/// Serializes with the field names the presentation layer expects
/// (`isValid`, `message`, `formattedValue`). `status` is kept for callers
/// that want to branch on the reason without matching message text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    pub message: String,
    pub formatted_value: String,
    #[serde(skip)]
    pub status: ValidationStatus,
}

/// Per-requirement checklist for a value that may still be mid-typing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Requirements {
    pub has_correct_length: bool,
    pub has_varied_digits: bool,
    pub is_complete: bool,
    pub is_formatted: bool,
}
