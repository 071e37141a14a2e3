//! CLI command implementations
//!
//! `start` is the only command: load config, open the store, boot the
//! tokio runtime, serve until the process is stopped.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::http_server::{HttpServer, HttpServerConfig};
use crate::observability::Logger;
use crate::repository::BlogRepository;
use crate::store::open_store;

use super::args::Command;
use super::errors::{CliError, CliResult};

/// Configuration file structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Store connection string (required): `mem:` or `file:<path>`
    pub store_uri: String,

    /// Host to bind to (optional, default "0.0.0.0")
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to (optional, default 3003)
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3003
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

        let config: Config = serde_json::from_str(&content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration
    fn validate(&self) -> CliResult<()> {
        if self.store_uri.is_empty() {
            return Err(CliError::config_error("store_uri must not be empty"));
        }

        if self.host.is_empty() {
            return Err(CliError::config_error("host must not be empty"));
        }

        Ok(())
    }
}

/// Parse CLI args and run the selected command
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Start { config } => start(&config),
    }
}

/// Start the blog API server
///
/// Boot sequence: load and validate config, open the store named by the
/// connection string, build the server over a repository, then enter the
/// serving loop on a fresh tokio runtime. main stays synchronous.
pub fn start(config_path: &Path) -> CliResult<()> {
    let config = Config::load(config_path)?;

    let store = open_store(&config.store_uri)
        .map_err(|e| CliError::store_error(e.to_string()))?;
    Logger::info("store_opened", &[("uri", config.store_uri.as_str())]);

    let repository = BlogRepository::new(store);
    let server = HttpServer::with_config(
        repository,
        HttpServerConfig::new(config.host.clone(), config.port),
    );

    let runtime = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("Failed to start runtime: {}", e)))?;

    runtime
        .block_on(server.start())
        .map_err(|e| CliError::boot_failed(format!("Server error: {}", e)))
}
