//! CLI-level errors (what gets displayed to the user)

use thiserror::Error;

use crate::errors::OpError;
use crate::exitcode;

/// Top-level error for a command invocation.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Op(#[from] OpError),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Op(_) => exitcode::VALIDATION,
        }
    }
}
