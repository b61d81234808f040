//! Message catalog configuration for `docval-core`.
//!
//! Every validation outcome has a message key (`required`, `wrong_length`,
//! `repeated_digits`, `checksum_mismatch`, `valid`). The built-in catalog
//! renders the fixed Portuguese text; a YAML file can override any subset of
//! keys so a presentation layer can localize without touching the algorithm.
//!
//! Templates use `tinytemplate` syntax and may reference `{kind}` (the
//! upper-case document label) and `{length}` (the expected digit count).
//!
//! License: MIT OR Apache-2.0

use anyhow::{Context, Result};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tinytemplate::{format_unescaped, TinyTemplate};

use crate::document::{DocumentKind, ValidationStatus};
use crate::errors::DocvalError;

/// File name looked up under the user's configuration directory.
pub const DEFAULT_CATALOG_FILE: &str = "messages.yaml";

/// One template per validation outcome.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct MessageCatalog {
    pub required: String,
    pub wrong_length: String,
    pub repeated_digits: String,
    pub checksum_mismatch: String,
    pub valid: String,
}

impl Default for MessageCatalog {
    fn default() -> Self {
        Self {
            required: "{kind} é obrigatório".to_string(),
            wrong_length: "{kind} deve ter {length} dígitos".to_string(),
            repeated_digits: "{kind} inválido".to_string(),
            checksum_mismatch: "{kind} inválido".to_string(),
            valid: "{kind} válido".to_string(),
        }
    }
}

/// A partial catalog as read from disk. Absent keys keep their base value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct CatalogOverrides {
    pub required: Option<String>,
    pub wrong_length: Option<String>,
    pub repeated_digits: Option<String>,
    pub checksum_mismatch: Option<String>,
    pub valid: Option<String>,
}

#[derive(Serialize)]
struct MessageContext {
    kind: &'static str,
    length: usize,
}

impl MessageCatalog {
    /// Loads overrides from a YAML file and applies them on top of the
    /// built-in catalog. Every resulting template is compiled and rendered
    /// once for each document kind, so a broken template fails here rather
    /// than at validation time.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading message catalog from: {}", path.display());
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read message catalog {}", path.display()))?;
        let overrides: CatalogOverrides = serde_yml::from_str(&text)
            .with_context(|| format!("Failed to parse message catalog {}", path.display()))?;

        let catalog = merge_catalogs(MessageCatalog::default(), Some(overrides));
        catalog
            .validate()
            .with_context(|| format!("Message catalog {} is invalid", path.display()))?;
        Ok(catalog)
    }

    /// The raw template for a status.
    pub fn template(&self, status: ValidationStatus) -> &str {
        match status {
            ValidationStatus::Required => &self.required,
            ValidationStatus::WrongLength => &self.wrong_length,
            ValidationStatus::RepeatedDigits => &self.repeated_digits,
            ValidationStatus::ChecksumMismatch => &self.checksum_mismatch,
            ValidationStatus::Valid => &self.valid,
        }
    }

    /// Renders the template for `status`, reporting template errors.
    pub fn render(&self, status: ValidationStatus, kind: DocumentKind) -> Result<String, DocvalError> {
        let key = status.key();
        let template = self.template(status);
        if template.trim().is_empty() {
            return Err(DocvalError::InvalidCatalog(format!("template '{key}' is empty")));
        }

        let mut tt = TinyTemplate::new();
        tt.set_default_formatter(&format_unescaped);
        tt.add_template(key, template)
            .map_err(|source| DocvalError::Template { key: key.to_string(), source })?;

        let context = MessageContext { kind: kind.label(), length: kind.digit_len() };
        tt.render(key, &context)
            .map_err(|source| DocvalError::Template { key: key.to_string(), source })
    }

    /// Renders the message for `status`, falling back to the built-in
    /// Portuguese text if the template cannot be rendered.
    pub fn message(&self, status: ValidationStatus, kind: DocumentKind) -> String {
        match self.render(status, kind) {
            Ok(text) => text,
            Err(e) => {
                warn!("{}; using built-in message.", e);
                status.default_message(kind)
            }
        }
    }

    /// Checks that every template renders for every document kind.
    pub fn validate(&self) -> Result<(), DocvalError> {
        for status in ValidationStatus::ALL {
            for kind in DocumentKind::ALL {
                self.render(status, kind)?;
            }
        }
        Ok(())
    }
}

/// Applies user overrides on top of a base catalog.
pub fn merge_catalogs(base: MessageCatalog, overrides: Option<CatalogOverrides>) -> MessageCatalog {
    let Some(user) = overrides else {
        return base;
    };

    let mut merged = base;
    let slots = [
        (&mut merged.required, user.required, "required"),
        (&mut merged.wrong_length, user.wrong_length, "wrong_length"),
        (&mut merged.repeated_digits, user.repeated_digits, "repeated_digits"),
        (&mut merged.checksum_mismatch, user.checksum_mismatch, "checksum_mismatch"),
        (&mut merged.valid, user.valid, "valid"),
    ];
    for (slot, value, key) in slots {
        if let Some(text) = value {
            debug!("Overriding message template '{}'.", key);
            *slot = text;
        }
    }
    merged
}

/// `<config_dir>/docval/messages.yaml`, if the platform has a config dir.
pub fn default_catalog_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("docval").join(DEFAULT_CATALOG_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_catalog_matches_built_in_messages() {
        let catalog = MessageCatalog::default();
        for status in ValidationStatus::ALL {
            for kind in DocumentKind::ALL {
                assert_eq!(catalog.render(status, kind).unwrap(), status.default_message(kind));
            }
        }
    }

    #[test]
    fn no_html_escaping() {
        let catalog = MessageCatalog { valid: "<{kind}> & ok".to_string(), ..Default::default() };
        assert_eq!(catalog.message(ValidationStatus::Valid, DocumentKind::Cpf), "<CPF> & ok");
    }

    #[test]
    fn broken_template_falls_back() {
        let catalog = MessageCatalog { valid: "{missing}".to_string(), ..Default::default() };
        assert!(catalog.validate().is_err());
        assert_eq!(catalog.message(ValidationStatus::Valid, DocumentKind::Cnpj), "CNPJ válido");
    }

    #[test]
    fn empty_template_is_rejected() {
        let catalog = MessageCatalog { required: "  ".to_string(), ..Default::default() };
        assert!(matches!(
            catalog.render(ValidationStatus::Required, DocumentKind::Cpf),
            Err(DocvalError::InvalidCatalog(_))
        ));
    }

    #[test]
    fn merge_only_touches_given_keys() {
        let overrides = CatalogOverrides {
            valid: Some("{kind} is valid".to_string()),
            ..Default::default()
        };
        let merged = merge_catalogs(MessageCatalog::default(), Some(overrides));
        assert_eq!(merged.valid, "{kind} is valid");
        assert_eq!(merged.required, MessageCatalog::default().required);
        assert_eq!(merge_catalogs(MessageCatalog::default(), None), MessageCatalog::default());
    }

    #[test]
    fn default_path_ends_with_catalog_file() {
        if let Some(path) = default_catalog_path() {
            assert!(path.ends_with("docval/messages.yaml"));
        }
    }
}
