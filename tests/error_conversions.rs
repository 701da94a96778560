use ifsgit::config::ConfigError;
use ifsgit::connection::CommandError;
use ifsgit::error::{AppError, GitError};

/// Test that GitError converts to AppError::Git
#[test]
fn test_git_error_converts_to_app_error() {
    let git_err = GitError::GitUnavailable;
    let app_err: AppError = git_err.into();
    assert!(matches!(app_err, AppError::Git(_)));
}

/// Test that ConfigError converts to AppError::Config
#[test]
fn test_config_error_converts_to_app_error() {
    let config_err = ConfigError::DirectoryNotFound;
    let app_err: AppError = config_err.into();
    assert!(matches!(app_err, AppError::Config(_)));
}

/// Test that std::io::Error converts to AppError::Io
#[test]
fn test_io_error_converts_to_app_error() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "test");
    let app_err: AppError = io_err.into();
    assert!(matches!(app_err, AppError::Io(_)));
}

/// A failed remote command keeps its exit code and stderr through conversion
#[test]
fn test_command_error_converts_to_git_error() {
    let cmd_err = CommandError::new(128, "fatal: not a git repository");
    let git_err: GitError = cmd_err.into();

    match git_err {
        GitError::CommandFailed { exit_code, stderr } => {
            assert_eq!(exit_code, 128);
            assert_eq!(stderr, "fatal: not a git repository");
        }
        other => panic!("expected CommandFailed, got {other:?}"),
    }
}

/// Error messages keep enough context to display on their own
#[test]
fn test_error_display_messages() {
    let err = GitError::NotARepository("/home/dev/repo".to_string());
    assert_eq!(err.to_string(), "/home/dev/repo is not a git repository");

    let err = GitError::CommandFailed {
        exit_code: 1,
        stderr: "merge conflict".to_string(),
    };
    assert!(err.to_string().contains("exit code 1"));
    assert!(err.to_string().contains("merge conflict"));

    let err = ConfigError::InvalidFormat("expected array".to_string());
    assert!(err.to_string().contains("incorrect format"));
}
