// docval/src/cli.rs
//! This file defines the command-line interface (CLI) for the docval
//! application, including all available commands and their arguments.

use clap::{Parser, Subcommand, ValueEnum};
use docval_core::DocumentKind;
use std::path::PathBuf;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "docval",
    author = "Obscura Team (Relay)",
    version = env!("CARGO_PKG_VERSION"),
    about = "Validate and format Brazilian CPF and CNPJ numbers",
    long_about = "docval checks CPF (individual) and CNPJ (legal entity) numbers against the official modulo-11 verification digits and prints them in their canonical punctuated form. Punctuation, spaces and other non-digit characters in the input are ignored.",
    arg_required_else_help = true,
)]
pub struct Cli {
    /// Disable informational messages
    #[arg(long, short = 'q', global = true, help = "Suppress all log output.")]
    pub quiet: bool,

    /// Enable debug logging (overrides RUST_LOG)
    #[arg(long, short = 'd', global = true, conflicts_with = "quiet", help = "Enable debug logging.")]
    pub debug: bool,

    /// Specify the path to a custom YAML theme file.
    #[arg(long = "theme", value_name = "FILE", global = true, help = "Specify the path to a custom YAML theme file.")]
    pub theme: Option<PathBuf>,

    /// Message catalog overriding the built-in Portuguese messages.
    #[arg(
        long = "messages",
        value_name = "FILE",
        global = true,
        env = "DOCVAL_MESSAGES",
        help = "YAML file overriding validation messages (defaults to <config dir>/docval/messages.yaml when present)."
    )]
    pub messages: Option<PathBuf>,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// All available commands for the `docval` CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validates a single document and prints the verdict.
    #[command(about = "Validate a single document. Exits with status 1 if it is invalid.")]
    Validate(ValidateCommand),

    /// Prints the live mask for a possibly partial value.
    #[command(about = "Print the punctuated form of a (possibly partial) value without validating it.")]
    Mask(MaskCommand),

    /// Validates one document per line from a file or stdin.
    #[command(about = "Validate one document per line from a file or stdin and print a summary.")]
    Check(CheckCommand),

    /// Prints format information and tips about a document kind.
    #[command(about = "Show format, tips and examples for a document kind.")]
    Info(InfoCommand),
}

/// Document kind as selected on the command line.
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum KindChoice {
    /// Individual taxpayer (11 digits).
    Cpf,
    /// Legal entity (14 digits).
    Cnpj,
}

impl From<KindChoice> for DocumentKind {
    fn from(choice: KindChoice) -> Self {
        match choice {
            KindChoice::Cpf => DocumentKind::Cpf,
            KindChoice::Cnpj => DocumentKind::Cnpj,
        }
    }
}

/// Arguments for the `validate` command.
#[derive(Parser, Debug)]
pub struct ValidateCommand {
    /// The raw value; punctuation is allowed.
    #[arg(value_name = "VALUE", allow_hyphen_values = true)]
    pub value: String,

    #[arg(long, short = 'k', value_enum, help = "Document kind.")]
    pub kind: KindChoice,

    #[arg(long, help = "Print the result as JSON.")]
    pub json: bool,
}

/// Arguments for the `mask` command.
#[derive(Parser, Debug)]
pub struct MaskCommand {
    #[arg(value_name = "VALUE", allow_hyphen_values = true)]
    pub value: String,

    #[arg(long, short = 'k', value_enum, help = "Document kind.")]
    pub kind: KindChoice,
}

/// Arguments for the `check` command.
#[derive(Parser, Debug)]
pub struct CheckCommand {
    /// Path to an input file (reads from stdin if not provided).
    #[arg(long, short = 'i', visible_alias = "input", value_name = "FILE", help = "Read input from a specified file instead of stdin.")]
    pub input_file: Option<PathBuf>,

    #[arg(long, short = 'k', value_enum, help = "Document kind.")]
    pub kind: KindChoice,

    #[arg(long, help = "Print the full report as JSON.")]
    pub json: bool,

    #[arg(long = "fail-on-invalid", help = "Exit with status 1 if any line is invalid.")]
    pub fail_on_invalid: bool,
}

/// Arguments for the `info` command.
#[derive(Parser, Debug)]
pub struct InfoCommand {
    #[arg(long, short = 'k', value_enum, help = "Document kind.")]
    pub kind: KindChoice,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_validate_with_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["docval", "validate", "111.444.777-35", "-k", "cpf", "--debug"]).unwrap();
        assert!(cli.debug);
        match cli.command {
            Commands::Validate(cmd) => {
                assert_eq!(cmd.value, "111.444.777-35");
                assert_eq!(DocumentKind::from(cmd.kind), DocumentKind::Cpf);
                assert!(!cmd.json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn rejects_unknown_kind() {
        assert!(Cli::try_parse_from(["docval", "mask", "123", "--kind", "rg"]).is_err());
    }
}
