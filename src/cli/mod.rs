//! CLI module for the blog service
//!
//! Provides the command-line interface:
//! - start: Load config, open the store, boot the server

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{run, run_command, start, Config};
pub use errors::{CliError, CliErrorCode, CliResult};
