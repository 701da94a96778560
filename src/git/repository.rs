use crate::audit::AuditLogger;
use crate::connection::Connection;
use crate::error::{GitError, GitResult};
use crate::git::commands::GitCommands;
use crate::git::parser::{self, Branch, BranchList, ChangedFile, CommitSummary, WorkingStatus};
use crate::git::version::GitVersion;

/// A git repository on the remote host, reached through a live connection
///
/// Every method issues exactly one remote command and parses its output.
/// Methods run to completion independently; nothing here serializes callers,
/// and there is no cancellation of an in-flight remote command.
pub struct Repository<'a> {
    conn: &'a dyn Connection,
    path: String,
    commands: GitCommands,
    audit: Option<AuditLogger>,
}

impl std::fmt::Debug for Repository<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Repository")
            .field("path", &self.path)
            .field("commands", &self.commands)
            .finish_non_exhaustive()
    }
}

impl<'a> Repository<'a> {
    /// Create a repository handle without probing the remote directory
    ///
    /// Fails only when the connection's feature table has no git binary.
    /// Callers that have not already established the directory is a working
    /// tree should use [`Repository::detect`] instead.
    pub fn new(conn: &'a dyn Connection, path: impl Into<String>) -> GitResult<Self> {
        let git_path = conn
            .features()
            .git()
            .ok_or(GitError::GitUnavailable)?
            .to_string();

        Ok(Self {
            conn,
            path: path.into(),
            commands: GitCommands::new(git_path),
            audit: None,
        })
    }

    /// Create a repository handle, checking both preconditions once
    ///
    /// The gate matches how views load: git must be installed remotely and
    /// the directory must be inside a working tree. Operations afterwards
    /// assume both hold and do not re-check per call.
    pub async fn detect(conn: &'a dyn Connection, path: impl Into<String>) -> GitResult<Repository<'a>> {
        let repo = Self::new(conn, path)?;

        if !repo.is_git_repo().await {
            return Err(GitError::NotARepository(repo.path));
        }

        Ok(repo)
    }

    /// Create a repository handle for the connection's configured home directory
    pub async fn detect_home(conn: &'a dyn Connection) -> GitResult<Repository<'a>> {
        let home = conn.home_directory().to_string();
        Self::detect(conn, home).await
    }

    /// Attach an audit logger that records every remote git invocation
    pub fn with_audit_logger(mut self, logger: AuditLogger) -> Self {
        self.audit = Some(logger);
        self
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn commands(&self) -> &GitCommands {
        &self.commands
    }

    /// Whether the directory is inside a git working tree
    ///
    /// A failing probe is a negative answer, not an error to propagate.
    pub async fn is_git_repo(&self) -> bool {
        self.conn
            .execute(&self.commands.rev_parse_work_tree(), &self.path)
            .await
            .is_ok()
    }

    /// Run one command remotely, recording it in the audit log if attached
    async fn run(&self, command: String) -> GitResult<String> {
        let result = self.conn.execute(&command, &self.path).await;

        if let Some(audit) = &self.audit {
            let exit_code = match &result {
                Ok(_) => 0,
                Err(err) => err.exit_code,
            };
            // A full audit log must not fail the operation being audited
            let _ = audit.log_command(&command, &self.path, exit_code);
        }

        result.map_err(GitError::from)
    }

    /// Status of the working tree, split into staged and unstaged entries
    pub async fn status(&self) -> GitResult<WorkingStatus> {
        let output = self.run(self.commands.status()).await?;
        parser::parse_status(&output)
    }

    /// Most recent commits on the current branch
    pub async fn commits(&self, count: usize) -> GitResult<Vec<CommitSummary>> {
        self.log(count, None).await
    }

    /// Most recent commits touching one file
    pub async fn commits_for_file(&self, count: usize, file: &str) -> GitResult<Vec<CommitSummary>> {
        self.log(count, Some(file)).await
    }

    async fn log(&self, count: usize, file: Option<&str>) -> GitResult<Vec<CommitSummary>> {
        match self.run(self.commands.log(count, file)).await {
            Ok(output) => parser::parse_log(&output),
            // A history-less repository exits non-zero; that is an empty log
            Err(GitError::CommandFailed { .. }) => Ok(Vec::new()),
            Err(err) => Err(err),
        }
    }

    /// Files changed by one commit
    pub async fn changes_in_commit(&self, hash: &str) -> GitResult<Vec<ChangedFile>> {
        let output = self.run(self.commands.changed_files(hash)).await?;
        parser::parse_changed_files(&output, hash)
    }

    /// Contents of a file as of a commit
    pub async fn file_content(&self, hash: &str, path: &str) -> GitResult<String> {
        self.run(self.commands.show_file(hash, path)).await
    }

    pub async fn stage(&self, path: &str) -> GitResult<()> {
        self.run(self.commands.stage(path)).await?;
        Ok(())
    }

    pub async fn unstage(&self, path: &str) -> GitResult<()> {
        self.run(self.commands.unstage(path)).await?;
        Ok(())
    }

    /// Discard working-tree changes to one file
    pub async fn restore(&self, path: &str) -> GitResult<()> {
        self.run(self.commands.restore(path)).await?;
        Ok(())
    }

    pub async fn commit(&self, message: &str) -> GitResult<()> {
        self.run(self.commands.commit(message)).await?;
        Ok(())
    }

    pub async fn push(&self) -> GitResult<()> {
        self.run(self.commands.push()).await?;
        Ok(())
    }

    pub async fn pull(&self) -> GitResult<()> {
        self.run(self.commands.pull()).await?;
        Ok(())
    }

    /// All branches, local and remote
    pub async fn branches(&self) -> GitResult<BranchList> {
        let output = self.run(self.commands.list_branches()).await?;
        parser::parse_branches(&output)
    }

    pub async fn create_branch(&self, name: &str) -> GitResult<()> {
        self.run(self.commands.create_branch(name)).await?;
        Ok(())
    }

    pub async fn delete_branch(&self, branch: &Branch) -> GitResult<()> {
        self.run(self.commands.delete_branch(branch)).await?;
        Ok(())
    }

    pub async fn checkout(&self, branch: &Branch) -> GitResult<()> {
        self.run(self.commands.checkout(branch)).await?;
        Ok(())
    }

    /// Merge the named branch into the current branch
    pub async fn merge(&self, name: &str) -> GitResult<()> {
        self.run(self.commands.merge(name)).await?;
        Ok(())
    }

    /// Version of the git binary on the remote host
    pub async fn git_version(&self) -> GitResult<GitVersion> {
        let output = self.run(self.commands.version()).await?;
        GitVersion::parse(&output)
    }

    /// Detect the remote git version and error if it is too old
    pub async fn validate_version(&self) -> GitResult<GitVersion> {
        let version = self.git_version().await?;
        version.ensure_supported()?;
        Ok(version)
    }
}
