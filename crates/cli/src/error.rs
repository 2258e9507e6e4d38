//! CLI errors and exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error types.
//! - Map client, config and CLI errors to those codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//!
//! Invariants:
//! - Exit codes 1-7 are reserved for specific error categories.

use splunk_client::ClientError;
use splunk_config::{ConfigError, StateError};
use thiserror::Error;

/// Errors raised by the CLI layer itself.
#[derive(Debug, Error)]
pub enum CliError {
    /// The user declined a confirmation prompt.
    #[error("user aborted")]
    UserAborted,

    /// A required value was neither given as an argument nor entered.
    #[error("please provide {0}")]
    MissingArgument(&'static str),

    /// The state file could not be loaded.
    #[error("failed to load config file: {0}\ntry `splunk-cli init`")]
    StateUnavailable(StateError),
}

/// Structured exit codes for splunk-cli.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - command completed successfully.
    Success = 0,

    /// General error - unhandled or generic failure.
    GeneralError = 1,

    /// Authentication failure - rejected login, expired or missing session.
    ///
    /// Scripts should run `splunk-cli login` again.
    AuthenticationFailed = 2,

    /// Connection error - network, timeout, or DNS failure.
    ConnectionError = 3,

    /// Search job not found.
    NotFound = 4,

    /// Validation error - missing time range, bad arguments.
    ///
    /// Scripts should fix the input and not retry the same request.
    ValidationError = 5,

    /// Permission denied - insufficient privileges.
    PermissionDenied = 6,

    /// The user declined a confirmation prompt.
    UserAborted = 7,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<&ClientError> for ExitCode {
    fn from(err: &ClientError) -> Self {
        match err {
            // Authentication errors (exit code 2)
            ClientError::AuthFailed(_) => ExitCode::AuthenticationFailed,
            ClientError::SessionExpired => ExitCode::AuthenticationFailed,
            ClientError::NotAuthenticated => ExitCode::AuthenticationFailed,
            ClientError::ApiError { status: 401, .. } => ExitCode::AuthenticationFailed,

            // Connection errors (exit code 3)
            ClientError::InvalidUrl(_) => ExitCode::ConnectionError,
            ClientError::HttpError(e) => {
                if e.is_connect() || e.is_timeout() {
                    ExitCode::ConnectionError
                } else {
                    ExitCode::GeneralError
                }
            }

            // Not found (exit code 4)
            ClientError::ApiError { status: 404, .. } => ExitCode::NotFound,

            // Validation errors (exit code 5)
            ClientError::ValidationError(_) => ExitCode::ValidationError,
            ClientError::InvalidResponse(_) => ExitCode::ValidationError,
            ClientError::ApiError { status: 400, .. } => ExitCode::ValidationError,

            // Permission denied (exit code 6)
            ClientError::ApiError { status: 403, .. } => ExitCode::PermissionDenied,

            ClientError::ApiError { .. } => ExitCode::GeneralError,
            ClientError::MalformedSid(_) => ExitCode::GeneralError,
        }
    }
}

impl From<&CliError> for ExitCode {
    fn from(err: &CliError) -> Self {
        match err {
            CliError::UserAborted => ExitCode::UserAborted,
            CliError::MissingArgument(_) => ExitCode::ValidationError,
            CliError::StateUnavailable(_) => ExitCode::GeneralError,
        }
    }
}

/// `--help` and `--version` exit 0; every other parse failure is a validation error.
impl From<&clap::Error> for ExitCode {
    fn from(err: &clap::Error) -> Self {
        if err.use_stderr() {
            ExitCode::ValidationError
        } else {
            ExitCode::Success
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
            if let Some(client_err) = cause.downcast_ref::<ClientError>() {
                return ExitCode::from(client_err);
            }
            if let Some(cli_err) = cause.downcast_ref::<CliError>() {
                return ExitCode::from(cli_err);
            }
            if let Some(config_err) = cause.downcast_ref::<ConfigError>() {
                return match config_err {
                    ConfigError::InvalidTimeout { .. } => ExitCode::ValidationError,
                    _ => ExitCode::GeneralError,
                };
            }
            if let Some(StateError::InvalidAddress { .. }) = cause.downcast_ref::<StateError>() {
                return ExitCode::ValidationError;
            }
        }

        ExitCode::GeneralError
    }
}
