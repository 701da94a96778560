use async_trait::async_trait;
use std::collections::HashMap;
use thiserror::Error;

/// A remotely executed command exited with a non-zero code
#[derive(Debug, Clone, Error)]
#[error("remote command exited with code {exit_code}: {stderr}")]
pub struct CommandError {
    pub exit_code: i32,
    pub stderr: String,
}

impl CommandError {
    pub fn new(exit_code: i32, stderr: impl Into<String>) -> Self {
        Self {
            exit_code,
            stderr: stderr.into(),
        }
    }
}

/// Resolved paths of optional executables on the remote host
///
/// Populated once when the connection is established; a missing entry means
/// the tool is not installed remotely.
#[derive(Debug, Clone, Default)]
pub struct RemoteFeatures {
    paths: HashMap<String, String>,
}

impl RemoteFeatures {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, path: impl Into<String>) {
        self.paths.insert(name.into(), path.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.paths.get(name).map(String::as_str)
    }

    /// Path to the git binary on the remote host, if installed
    pub fn git(&self) -> Option<&str> {
        self.get("git")
    }
}

/// An established session with a remote host that can run shell commands
///
/// This is the single entry point all git operations go through. The crate
/// never opens its own transport; the caller supplies a live connection.
#[async_trait]
pub trait Connection: Send + Sync {
    /// Feature table resolved for this connection
    fn features(&self) -> &RemoteFeatures;

    /// Repository root directory configured for this connection
    fn home_directory(&self) -> &str;

    /// Run a shell command on the remote host and capture its stdout
    ///
    /// Implementations must return stdout verbatim: short-status lines carry
    /// significant leading spaces, and trimming them corrupts parsing.
    /// A non-zero exit reports the code and remote stderr as `CommandError`.
    async fn execute(&self, command: &str, working_dir: &str) -> Result<String, CommandError>;
}
