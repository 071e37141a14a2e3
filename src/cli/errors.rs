//! CLI-specific error types
//!
//! Every CLI error is fatal: it is printed to stderr and the process
//! exits non-zero. Nothing here is retried.

use std::fmt;
use std::io;

/// CLI error codes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliErrorCode {
    /// Configuration file error
    ConfigError,
    /// Store could not be opened
    StoreError,
    /// Server failed to boot or serve
    BootFailed,
}

impl CliErrorCode {
    /// Get the error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::ConfigError => "BLOG_CLI_CONFIG_ERROR",
            Self::StoreError => "BLOG_CLI_STORE_ERROR",
            Self::BootFailed => "BLOG_CLI_BOOT_FAILED",
        }
    }
}

/// CLI error
#[derive(Debug)]
pub struct CliError {
    code: CliErrorCode,
    message: String,
}

impl CliError {
    /// Create a new CLI error
    pub fn new(code: CliErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Config error
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::ConfigError, msg)
    }

    /// Store open error
    pub fn store_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::StoreError, msg)
    }

    /// Boot failed
    pub fn boot_failed(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::BootFailed, msg)
    }

    /// Get the error code
    pub fn code(&self) -> &CliErrorCode {
        &self.code
    }

    /// Get the error code string
    pub fn code_str(&self) -> &'static str {
        self.code.code()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.code(), self.message)
    }
}

impl std::error::Error for CliError {}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        Self::boot_failed(e.to_string())
    }
}

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_code_and_message() {
        let err = CliError::config_error("missing store_uri");
        assert_eq!(err.to_string(), "BLOG_CLI_CONFIG_ERROR: missing store_uri");
    }

    #[test]
    fn test_code_accessors() {
        let err = CliError::store_error("bad uri");
        assert_eq!(err.code(), &CliErrorCode::StoreError);
        assert_eq!(err.code_str(), "BLOG_CLI_STORE_ERROR");
        assert_eq!(err.message(), "bad uri");
    }
}
