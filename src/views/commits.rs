use crate::config::Settings;
use crate::git::parser::CommitSummary;
use crate::git::repository::Repository;
use crate::views::Node;

/// Commit list shown when no explicit limit is configured
pub const DEFAULT_COMMIT_COUNT: usize = 20;

/// Two-level tree of recent commits over the files each one changed
#[derive(Debug)]
pub struct CommitsView {
    limit: usize,
}

impl Default for CommitsView {
    fn default() -> Self {
        Self::new(DEFAULT_COMMIT_COUNT)
    }
}

impl CommitsView {
    pub fn new(limit: usize) -> Self {
        Self { limit }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.ui.max_commits_display)
    }

    /// Root nodes: the most recent commits on the current branch
    pub async fn roots(&self, repo: &Repository<'_>) -> Vec<Node> {
        match repo.commits(self.limit).await {
            Ok(commits) => commits.into_iter().map(commit_node).collect(),
            Err(_) => vec![Node::Message(format!(
                "Error fetching commits for {}",
                repo.path()
            ))],
        }
    }

    /// Children of one commit: the files it changed
    ///
    /// Fetched per commit hash, so no cache is involved.
    pub async fn children(&self, repo: &Repository<'_>, hash: &str) -> Vec<Node> {
        match repo.changes_in_commit(hash).await {
            Ok(files) => files
                .into_iter()
                .map(|file| Node::ChangedFile {
                    hash: file.hash,
                    path: file.path,
                })
                .collect(),
            Err(_) => vec![Node::Message(format!(
                "Error fetching files for {}:{}",
                repo.path(),
                hash
            ))],
        }
    }
}

pub(crate) fn commit_node(commit: CommitSummary) -> Node {
    Node::Commit {
        hash: commit.hash,
        subject: commit.subject,
        author: commit.author,
        when: commit.when,
    }
}
