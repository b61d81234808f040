//! Presentation helpers: theme handling, styled messages and tables.

pub mod output_format;
pub mod report_table;
pub mod theme;
