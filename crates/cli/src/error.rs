//! CLI errors and exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error types.
//! - Define `CliError` for failures the commands raise themselves.
//! - Map errors found anywhere in an `anyhow` chain to an exit code.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//!
//! Invariants:
//! - Exit codes 1-9 are reserved for specific error categories.

use cheatsheet_config::ConfigError;
use thiserror::Error;

/// Structured exit codes for html-cheatsheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - command completed successfully.
    Success = 0,

    /// General error - unhandled or generic failure.
    GeneralError = 1,

    /// Not found - no element matches the requested name.
    ///
    /// Scripts should check the spelling or run `search` first.
    NotFound = 4,

    /// Validation error - bad output format or configuration value.
    ///
    /// Scripts should fix the input and not retry the same invocation.
    ValidationError = 5,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

/// Failures raised by the commands themselves.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("No element named '{0}'. Try `html-cheatsheet search {0}`")]
    ElementNotFound(String),

    #[error("Invalid output format: {0}. Valid options: table, json, csv")]
    InvalidOutputFormat(String),
}

impl From<&CliError> for ExitCode {
    fn from(err: &CliError) -> Self {
        match err {
            CliError::ElementNotFound(_) => ExitCode::NotFound,
            CliError::InvalidOutputFormat(_) => ExitCode::ValidationError,
        }
    }
}

impl From<&ConfigError> for ExitCode {
    fn from(err: &ConfigError) -> Self {
        match err {
            ConfigError::InvalidValue { .. } | ConfigError::InvalidReferenceUrl { .. } => {
                ExitCode::ValidationError
            }
            // A broken .env file is an environment problem, not bad input
            ConfigError::DotenvParse { .. }
            | ConfigError::DotenvIo { .. }
            | ConfigError::DotenvUnknown => ExitCode::GeneralError,
        }
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Extract the appropriate exit code from this error.
    ///
    /// Returns ExitCode::GeneralError if no known error is in the chain.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        for cause in self.chain() {
            if let Some(err) = cause.downcast_ref::<CliError>() {
                return ExitCode::from(err);
            }
            if let Some(err) = cause.downcast_ref::<ConfigError>() {
                return ExitCode::from(err);
            }
        }
        ExitCode::GeneralError
    }
}
