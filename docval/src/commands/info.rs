//! `docval info`: what a document looks like.

use anyhow::Result;
use is_terminal::IsTerminal;
use std::io::{self, Write};

use docval_core::DocumentKind;

use crate::ui::output_format::styled;
use crate::ui::theme::{ThemeEntry, ThemeMap};

pub fn write_info<W: Write>(
    writer: &mut W,
    kind: DocumentKind,
    theme: &ThemeMap,
    supports_color: bool,
) -> io::Result<()> {
    let title = format!("{} - {}", kind.label(), kind.description());
    writeln!(writer, "{}", styled(&title, ThemeEntry::Header, theme, supports_color))?;
    writeln!(writer, "Formato: {}", styled(kind.mask_pattern(), ThemeEntry::FormattedValue, theme, supports_color))?;
    writeln!(writer, "Dígitos: {}", kind.digit_len())?;
    writeln!(writer)?;
    for tip in kind.tips() {
        writeln!(writer, "  - {tip}")?;
    }
    writeln!(writer)?;
    writeln!(writer, "Exemplos: {}", kind.examples().join(", "))
}

pub fn run_info(kind: DocumentKind, theme: &ThemeMap) -> Result<()> {
    let stdout = io::stdout();
    let supports_color = stdout.is_terminal();
    write_info(&mut stdout.lock(), kind, theme, supports_color)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theme::ThemeStyle;

    #[test]
    fn info_for_cnpj() {
        let mut buf = Vec::new();
        write_info(&mut buf, DocumentKind::Cnpj, &ThemeStyle::default_theme_map(), false).unwrap();
        let out = String::from_utf8(buf).unwrap();
        assert!(out.starts_with("CNPJ - Cadastro Nacional da Pessoa Jurídica\n"));
        assert!(out.contains("Formato: 00.000.000/0000-00"));
        assert!(out.contains("Deve conter exatamente 14 dígitos"));
        assert!(out.contains("11.222.333/0001-81"));
    }
}
