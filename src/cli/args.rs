//! CLI argument definitions using clap
//!
//! Commands:
//! - bloglist start --config <path>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// bloglist - a minimal blog-post CRUD service over a document store
#[derive(Parser, Debug)]
#[command(name = "bloglist")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the blog API server
    Start {
        /// Path to configuration file
        #[arg(long, default_value = "./bloglist.json")]
        config: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
