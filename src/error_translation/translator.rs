use crate::error::{AppError, GitError};

/// A failure rephrased for display by the host UI
#[derive(Debug, Clone)]
pub struct UserFriendlyError {
    pub simple_message: String,
    pub suggestion: Option<String>,
    pub raw_error: String,
}

pub struct ErrorTranslator;

impl ErrorTranslator {
    /// Translate an AppError into a user-friendly error message
    pub fn translate_app_error(error: &AppError) -> UserFriendlyError {
        match error {
            AppError::Git(git_err) => Self::translate(git_err),
            AppError::Config(config_err) => UserFriendlyError {
                simple_message: "Configuration error occurred.".to_string(),
                suggestion: Some(
                    "Check ~/.config/ifsgit/config.toml and the remote /.gitlibs.json".to_string(),
                ),
                raw_error: config_err.to_string(),
            },
            AppError::Io(io_err) => UserFriendlyError {
                simple_message: "I/O error occurred.".to_string(),
                suggestion: Some("Check file permissions and disk space".to_string()),
                raw_error: io_err.to_string(),
            },
        }
    }

    /// Translate a GitError into a user-friendly error message
    pub fn translate(error: &GitError) -> UserFriendlyError {
        let raw_error = error.to_string();

        let (simple_message, suggestion) = match error {
            GitError::GitUnavailable => (
                "Git is not installed on the remote host.".to_string(),
                Some("Install it from the IBM i package repository: yum install git".to_string()),
            ),
            GitError::NotARepository(path) => (
                format!("{path} is not a git repository."),
                Some("Initialize one remotely with: git init".to_string()),
            ),
            GitError::UnsupportedVersion(version) => (
                format!("The remote git version {version} is too old."),
                Some("Update the git package on the IBM i host".to_string()),
            ),
            GitError::CommandFailed { stderr, .. } => Self::match_error_patterns(stderr),
            GitError::ParseError(_) => (
                "Could not understand the output git produced.".to_string(),
                None,
            ),
            GitError::IoError(_) => ("I/O error occurred.".to_string(), None),
        };

        UserFriendlyError {
            simple_message,
            suggestion,
            raw_error,
        }
    }

    /// Match common git stderr patterns and provide user-friendly messages
    fn match_error_patterns(error_text: &str) -> (String, Option<String>) {
        let lower = error_text.to_lowercase();

        // No upstream branch
        if lower.contains("no upstream") || lower.contains("does not have an upstream") {
            return (
                "No remote branch is configured for tracking.".to_string(),
                Some("Try: git push -u origin <branch-name>".to_string()),
            );
        }

        // Merge conflicts
        if lower.contains("merge conflict") || lower.contains("conflict") {
            return (
                "Merge has conflicts that need to be resolved.".to_string(),
                Some("Fix conflicts in the listed files, then stage and commit them.".to_string()),
            );
        }

        // Nothing to commit
        if lower.contains("nothing to commit") || lower.contains("working tree clean") {
            return (
                "No changes to commit - working directory is clean.".to_string(),
                None,
            );
        }

        // Pathspec did not match
        if lower.contains("pathspec") && lower.contains("did not match") {
            return (
                "File path not found in the repository.".to_string(),
                Some("Refresh the status view and check the file path.".to_string()),
            );
        }

        // Branch already exists
        if lower.contains("already exists") && (lower.contains("branch") || lower.contains("ref")) {
            return (
                "A branch with that name already exists.".to_string(),
                Some("Use a different name or delete the existing branch first.".to_string()),
            );
        }

        // Not a git repository
        if lower.contains("not a git repository") {
            return (
                "The directory is not a git repository.".to_string(),
                Some("Initialize with: git init".to_string()),
            );
        }

        // Remote not found
        if lower.contains("remote")
            && (lower.contains("not found") || lower.contains("does not appear"))
        {
            return (
                "Remote repository not found.".to_string(),
                Some("Check the remote URL with: git remote -v".to_string()),
            );
        }

        // Authentication failed
        if lower.contains("authentication failed") || lower.contains("permission denied") {
            return (
                "Authentication failed - check your credentials.".to_string(),
                Some("Verify the SSH keys or access token on the remote host.".to_string()),
            );
        }

        // Network failure on push/pull
        if lower.contains("could not resolve host") || lower.contains("connection timed out") {
            return (
                "Could not reach the remote repository from the IBM i host.".to_string(),
                Some("Check the host's network access to the git server.".to_string()),
            );
        }

        // Uncommitted changes
        if lower.contains("uncommitted changes") || lower.contains("would be overwritten") {
            return (
                "Operation would overwrite uncommitted changes.".to_string(),
                Some("Commit or restore your changes first.".to_string()),
            );
        }

        // Divergent branches
        if lower.contains("diverged") || (lower.contains("rejected") && lower.contains("non-fast-forward")) {
            return (
                "The local and remote branches have diverged.".to_string(),
                Some("Pull the remote changes before pushing.".to_string()),
            );
        }

        // Generic fallback
        ("Git operation failed.".to_string(), None)
    }
}
