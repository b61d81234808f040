//! Logger setup for the `docval` binary.
//!
//! Defaults to `warn` and honours `RUST_LOG`. An explicit level (from
//! `--debug` / `--quiet`) overrides both for every module.

use env_logger::{Builder, Env};
use log::LevelFilter;

/// Installs the global logger. Safe to call more than once; later calls
/// are ignored.
pub fn init_logger(level_override: Option<LevelFilter>) {
    let mut builder = Builder::from_env(Env::default().default_filter_or("warn"));
    if let Some(level) = level_override {
        builder.filter_level(level);
    }
    builder.format_timestamp(None);
    let _ = builder.try_init();
}
