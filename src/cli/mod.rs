//! Command-line interface for zhconvert.

mod commands;

pub use commands::{parse_cli, run, run_with_cli, Cli};
