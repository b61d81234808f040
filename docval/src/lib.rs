// docval/src/lib.rs
//! # docval CLI Application
//!
//! Terminal front-end for `docval-core`. Everything presentation-related
//! lives here: argument parsing, colors, tables and exit codes. The
//! validation rules themselves come from the core crate unchanged.

pub mod cli;
pub mod commands;
pub mod logger;
pub mod ui;
