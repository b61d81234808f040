// docval-core/tests/catalog_integration_tests.rs
use anyhow::Result;
use std::io::Write;
use tempfile::NamedTempFile;

use docval_core::config::{merge_catalogs, CatalogOverrides, MessageCatalog};
use docval_core::{validate_document_with, DocumentKind, ValidationStatus};

fn catalog_file(yaml: &str) -> Result<NamedTempFile> {
    let mut file = NamedTempFile::new()?;
    file.write_all(yaml.as_bytes())?;
    Ok(file)
}

#[test]
fn test_load_partial_catalog_from_file() -> Result<()> {
    let file = catalog_file(
        r#"
valid: "{kind} is valid"
wrong_length: "{kind} must have {length} digits"
"#,
    )?;
    let catalog = MessageCatalog::load_from_file(file.path())?;

    assert_eq!(catalog.valid, "{kind} is valid");
    assert_eq!(catalog.required, MessageCatalog::default().required);

    let result = validate_document_with("123", DocumentKind::Cnpj, &catalog);
    assert_eq!(result.message, "CNPJ must have 14 digits");
    let result = validate_document_with("", DocumentKind::Cnpj, &catalog);
    assert_eq!(result.message, "CNPJ é obrigatório");
    Ok(())
}

#[test]
fn test_load_rejects_unknown_template_variable() -> Result<()> {
    let file = catalog_file("valid: \"{kind} {nope}\"\n")?;
    let err = MessageCatalog::load_from_file(file.path()).unwrap_err();
    let chain = format!("{err:#}");
    assert!(chain.contains("is invalid"), "{chain}");
    assert!(chain.contains("valid"), "{chain}");
    Ok(())
}

#[test]
fn test_load_rejects_unknown_keys() -> Result<()> {
    let file = catalog_file("vallid: \"typo\"\n")?;
    assert!(MessageCatalog::load_from_file(file.path()).is_err());
    Ok(())
}

#[test]
fn test_load_missing_file() {
    let err = MessageCatalog::load_from_file("/definitely/not/here/messages.yaml").unwrap_err();
    assert!(err.to_string().contains("Failed to read message catalog"));
}

#[test]
fn test_empty_file_keeps_defaults() -> Result<()> {
    let file = catalog_file("{}\n")?;
    let catalog = MessageCatalog::load_from_file(file.path())?;
    assert_eq!(catalog, MessageCatalog::default());
    Ok(())
}

#[test]
fn test_merge_then_render_each_status() {
    let overrides = CatalogOverrides {
        required: Some("Informe o {kind}".to_string()),
        checksum_mismatch: Some("{kind}: dígitos verificadores não conferem".to_string()),
        ..Default::default()
    };
    let catalog = merge_catalogs(MessageCatalog::default(), Some(overrides));

    assert_eq!(catalog.message(ValidationStatus::Required, DocumentKind::Cpf), "Informe o CPF");
    assert_eq!(
        catalog.message(ValidationStatus::ChecksumMismatch, DocumentKind::Cpf),
        "CPF: dígitos verificadores não conferem"
    );
    assert_eq!(catalog.message(ValidationStatus::RepeatedDigits, DocumentKind::Cpf), "CPF inválido");
}
