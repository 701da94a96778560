use std::io;
use thiserror::Error;

use crate::config::ConfigError;
use crate::connection::CommandError;

/// Errors that can occur during git operations
#[derive(Debug, Error)]
pub enum GitError {
    #[error("No git executable is available on the remote host")]
    GitUnavailable,

    #[error("{0} is not a git repository")]
    NotARepository(String),

    #[error("Git command failed with exit code {exit_code}: {stderr}")]
    CommandFailed { exit_code: i32, stderr: String },

    #[error("Failed to parse git output: {0}")]
    ParseError(String),

    #[error("Remote git version {0} is too old. Minimum required: 2.20")]
    UnsupportedVersion(String),

    #[error("IO error: {0}")]
    IoError(#[from] io::Error),
}

impl From<CommandError> for GitError {
    fn from(err: CommandError) -> Self {
        GitError::CommandFailed {
            exit_code: err.exit_code,
            stderr: err.stderr,
        }
    }
}

/// Top-level application error that wraps all module-specific errors
///
/// This provides a unified error type for application-level code while
/// preserving the specific error context from each module. All module errors
/// automatically convert to AppError via the `From` trait.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Git error: {0}")]
    Git(#[from] GitError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Result type for git operations
pub type GitResult<T> = std::result::Result<T, GitError>;

/// Result type for application-level operations
pub type AppResult<T> = std::result::Result<T, AppError>;
