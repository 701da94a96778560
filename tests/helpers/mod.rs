use async_trait::async_trait;
use ifsgit::connection::{CommandError, Connection, RemoteFeatures};
use std::sync::Mutex;

pub const GIT_PATH: &str = "/QOpenSys/pkgs/bin/git";
pub const REPO_PATH: &str = "/home/dev/repo";

/// Scripted stand-in for a live IBM i connection
///
/// Expected commands are registered as the argument vector a POSIX shell
/// would produce; incoming command lines are tokenized the same way before
/// matching, so tests assert what git actually receives rather than a
/// particular quoting style. Anything unregistered fails loudly.
pub struct MockConnection {
    features: RemoteFeatures,
    home: String,
    responses: Vec<(Vec<String>, Result<String, CommandError>)>,
    executed: Mutex<Vec<String>>,
}

impl MockConnection {
    /// Connection to a host with git installed
    pub fn new() -> Self {
        let mut features = RemoteFeatures::new();
        features.insert("git", GIT_PATH);

        Self {
            features,
            home: REPO_PATH.to_string(),
            responses: Vec::new(),
            executed: Mutex::new(Vec::new()),
        }
    }

    /// Connection to a host without a git binary
    pub fn without_git() -> Self {
        Self {
            features: RemoteFeatures::new(),
            ..Self::new()
        }
    }

    /// Connection whose home directory answers the working-tree probe
    pub fn repo() -> Self {
        Self::new().on_ok(&["rev-parse", "--is-inside-work-tree"], "true\n")
    }

    /// Script stdout for a git invocation with the given arguments
    pub fn on_ok(mut self, args: &[&str], stdout: &str) -> Self {
        self.responses
            .push((Self::argv(args), Ok(stdout.to_string())));
        self
    }

    /// Script a failure for a git invocation with the given arguments
    pub fn on_err(mut self, args: &[&str], exit_code: i32, stderr: &str) -> Self {
        self.responses
            .push((Self::argv(args), Err(CommandError::new(exit_code, stderr))));
        self
    }

    fn argv(args: &[&str]) -> Vec<String> {
        let mut argv = vec![GIT_PATH.to_string()];
        argv.extend(args.iter().map(|arg| arg.to_string()));
        argv
    }

    /// Every command line executed so far, in order
    pub fn executed(&self) -> Vec<String> {
        self.executed.lock().unwrap().clone()
    }

    /// The executed commands as the remote shell would tokenize them
    pub fn executed_argv(&self) -> Vec<Vec<String>> {
        self.executed()
            .iter()
            .map(|command| shlex::split(command).expect("command must tokenize cleanly"))
            .collect()
    }
}

#[async_trait]
impl Connection for MockConnection {
    fn features(&self) -> &RemoteFeatures {
        &self.features
    }

    fn home_directory(&self) -> &str {
        &self.home
    }

    async fn execute(&self, command: &str, working_dir: &str) -> Result<String, CommandError> {
        assert_eq!(
            working_dir, self.home,
            "commands must run in the repository root"
        );

        self.executed.lock().unwrap().push(command.to_string());

        let argv = shlex::split(command)
            .unwrap_or_else(|| panic!("command does not tokenize: {command}"));

        match self.responses.iter().find(|(expected, _)| *expected == argv) {
            Some((_, Ok(stdout))) => Ok(stdout.clone()),
            Some((_, Err(err))) => Err(err.clone()),
            None => Err(CommandError::new(
                127,
                format!("unexpected command: {command}"),
            )),
        }
    }
}
