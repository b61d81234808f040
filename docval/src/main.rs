// docval/src/main.rs
//! docval entry point.
//!
//! Sets up logging, theme and message catalog, then dispatches to the
//! selected command. Exit status: 0 on success, 1 when a validated document
//! is invalid (or, with `--fail-on-invalid`, when any checked line is),
//! 2 on operational errors.

use anyhow::{Context, Result};
use clap::Parser;
use is_terminal::IsTerminal;
use log::{LevelFilter, debug, info};
use std::process::ExitCode;

use docval::cli::{CheckCommand, Cli, Commands};
use docval::commands::check::{CheckOptions, run_check};
use docval::commands::info::run_info;
use docval::commands::mask::run_mask;
use docval::commands::resolve_catalog;
use docval::commands::validate::run_validate;
use docval::logger;
use docval::ui::output_format::print_error_message;
use docval::ui::theme::{ThemeStyle, build_theme_map};

fn run(args: Cli) -> Result<bool> {
    let theme_map = build_theme_map(args.theme.as_deref()).context("Theme error")?;

    match args.command {
        Commands::Validate(cmd) => {
            let catalog = resolve_catalog(args.messages.as_deref())?;
            run_validate(&cmd.value, cmd.kind.into(), &catalog, cmd.json, &theme_map)
        }
        Commands::Mask(cmd) => {
            run_mask(&cmd.value, cmd.kind.into())?;
            Ok(true)
        }
        Commands::Check(CheckCommand { input_file, kind, json, fail_on_invalid }) => {
            let catalog = resolve_catalog(args.messages.as_deref())?;
            let opts = CheckOptions {
                input_file: input_file.as_deref(),
                kind: kind.into(),
                json,
                fail_on_invalid,
            };
            run_check(opts, &catalog, &theme_map)
        }
        Commands::Info(cmd) => {
            run_info(cmd.kind.into(), &theme_map)?;
            Ok(true)
        }
    }
}

fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let args = Cli::parse();

    let level = if args.quiet {
        Some(LevelFilter::Off)
    } else if args.debug {
        Some(LevelFilter::Debug)
    } else {
        None
    };
    logger::init_logger(level);
    info!("docval started. Version: {}", env!("CARGO_PKG_VERSION"));

    match run(args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => {
            debug!("Command finished with an invalid document.");
            ExitCode::from(1)
        }
        Err(e) => {
            let stderr = std::io::stderr();
            let supports_color = stderr.is_terminal();
            let _ = print_error_message(
                &mut stderr.lock(),
                &format!("{e:#}"),
                &ThemeStyle::default_theme_map(),
                supports_color,
            );
            ExitCode::from(2)
        }
    }
}
