//! CLI-level errors (wraps application errors)

use std::path::PathBuf;

use thiserror::Error;

use crate::application::ApplicationError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Application(#[from] ApplicationError),

    #[error("invalid arguments: {0}")]
    InvalidArgs(String),

    #[error("network has no rings: {0}")]
    EmptyNetwork(PathBuf),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::InvalidArgs(_) => crate::exitcode::USAGE,
            CliError::EmptyNetwork(_) => crate::exitcode::DATAERR,
            CliError::Application(e) => match e {
                ApplicationError::NetworkFile { .. }
                | ApplicationError::DuplicateRing(_)
                | ApplicationError::InvalidName { .. } => crate::exitcode::DATAERR,
                ApplicationError::Config { .. } => crate::exitcode::CONFIG,
                ApplicationError::OperationFailed { .. } => crate::exitcode::IOERR,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_errors_when_mapping_exit_codes_then_sysexits_values() {
        assert_eq!(CliError::InvalidArgs("x".into()).exit_code(), 64);
        assert_eq!(CliError::EmptyNetwork(PathBuf::from("n.toml")).exit_code(), 65);
        assert_eq!(
            CliError::from(ApplicationError::DuplicateRing("m".into())).exit_code(),
            65
        );
        assert_eq!(
            CliError::from(ApplicationError::Config { message: "x".into() }).exit_code(),
            78
        );
    }
}
