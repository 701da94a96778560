use crate::error::{GitError, GitResult};

/// One file from git short-status output
///
/// `index_state` is the first status character (staging area), and
/// `worktree_state` the second (working tree), per git's porcelain format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusEntry {
    pub path: String,
    pub index_state: char,
    pub worktree_state: char,
}

/// Status of the working tree, split the way the status panel shows it
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkingStatus {
    pub staged: Vec<StatusEntry>,
    pub unstaged: Vec<StatusEntry>,
}

impl WorkingStatus {
    pub fn is_clean(&self) -> bool {
        self.staged.is_empty() && self.unstaged.is_empty()
    }
}

/// One commit from the log listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitSummary {
    pub hash: String,
    pub author: String,
    /// Relative timestamp as git prints it, e.g. "2 days ago"
    pub when: String,
    pub subject: String,
}

/// One file touched by a commit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangedFile {
    pub hash: String,
    pub path: String,
}

/// A branch in the local repository
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalBranch {
    pub name: String,
    pub checked_out: bool,
}

/// A branch on a remote, as listed under `remotes/` by git
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteBranch {
    /// Full name as printed by git, e.g. `remotes/origin/main`
    pub name: String,
    /// Remote the branch lives on, e.g. `origin`
    pub remote: String,
    /// Branch name without the remote prefix, e.g. `main`
    pub short_name: String,
}

/// All branches known to the repository, tagged by location at parse time
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BranchList {
    pub local: Vec<LocalBranch>,
    pub remote: Vec<RemoteBranch>,
}

/// A branch selected for an operation whose form depends on location
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Branch {
    Local(LocalBranch),
    Remote(RemoteBranch),
}

/// Parse `git status --short` output
///
/// Lines are fixed-width: two status characters and one separator space,
/// then the path. The path must be sliced, not tokenized, since it may
/// contain spaces. The index character decides the staged list and the
/// worktree character the unstaged list, except untracked entries (`??`)
/// which are unstaged only.
pub fn parse_status(output: &str) -> GitResult<WorkingStatus> {
    let mut status = WorkingStatus::default();

    for line in output.lines() {
        if line.trim().is_empty() {
            continue;
        }

        let bytes = line.as_bytes();
        if bytes.len() < 4 || !bytes[0].is_ascii() || !bytes[1].is_ascii() || bytes[2] != b' ' {
            return Err(GitError::ParseError(format!(
                "malformed status line: {line:?}"
            )));
        }

        let entry = StatusEntry {
            path: line[3..].to_string(),
            index_state: bytes[0] as char,
            worktree_state: bytes[1] as char,
        };

        if entry.index_state == '?' && entry.worktree_state == '?' {
            status.unstaged.push(entry);
            continue;
        }

        if entry.index_state != ' ' {
            status.staged.push(entry.clone());
        }
        if entry.worktree_state != ' ' {
            status.unstaged.push(entry);
        }
    }

    Ok(status)
}

/// Parse log output with format `%h|%an|%ar|%s`
///
/// Empty output means no matching history, which is a valid empty result.
pub fn parse_log(output: &str) -> GitResult<Vec<CommitSummary>> {
    let mut commits = Vec::new();

    for line in output.lines() {
        if line.is_empty() {
            continue;
        }

        // splitn keeps any further pipes inside the subject field
        let mut parts = line.splitn(4, '|');
        match (parts.next(), parts.next(), parts.next(), parts.next()) {
            (Some(hash), Some(author), Some(when), Some(subject)) => {
                commits.push(CommitSummary {
                    hash: hash.to_string(),
                    author: author.to_string(),
                    when: when.to_string(),
                    subject: subject.to_string(),
                });
            }
            _ => {
                return Err(GitError::ParseError(format!(
                    "malformed log line: {line:?}"
                )));
            }
        }
    }

    Ok(commits)
}

/// Parse `diff-tree --name-only` output for a given commit
pub fn parse_changed_files(output: &str, hash: &str) -> GitResult<Vec<ChangedFile>> {
    let mut files = Vec::new();

    for line in output.lines() {
        if line.trim().is_empty() {
            continue;
        }

        files.push(ChangedFile {
            hash: hash.to_string(),
            path: line.to_string(),
        });
    }

    Ok(files)
}

/// Parse `git branch --all --list` output
///
/// A leading `*` marks the checked-out local branch. Names whose first path
/// segment is `remotes` are remote branches; the location tag is fixed here
/// and never re-derived from the name downstream. Symbolic ref aliases
/// (`remotes/origin/HEAD -> origin/main`) and the detached-HEAD placeholder
/// are listing artifacts, not branches, and are skipped.
pub fn parse_branches(output: &str) -> GitResult<BranchList> {
    let mut branches = BranchList::default();

    for line in output.lines() {
        if line.trim().is_empty() {
            continue;
        }

        let checked_out = line.starts_with('*');
        let name = line.trim_start_matches('*').trim();

        if name.contains(" -> ") || name.starts_with('(') {
            continue;
        }

        if name.split('/').next() == Some("remotes") {
            let mut segments = name.splitn(3, '/');
            match (segments.next(), segments.next(), segments.next()) {
                (Some(_), Some(remote), Some(short)) if !remote.is_empty() && !short.is_empty() => {
                    branches.remote.push(RemoteBranch {
                        name: name.to_string(),
                        remote: remote.to_string(),
                        short_name: short.to_string(),
                    });
                }
                _ => {
                    return Err(GitError::ParseError(format!(
                        "malformed remote branch name: {name:?}"
                    )));
                }
            }
        } else {
            branches.local.push(LocalBranch {
                name: name.to_string(),
                checked_out,
            });
        }
    }

    Ok(branches)
}

/// Human word for a porcelain status character, for display next to a path
pub fn describe_state(state: char) -> &'static str {
    match state {
        ' ' => "unmodified",
        'M' => "modified",
        'A' => "added",
        'D' => "deleted",
        'R' => "renamed",
        'C' => "copied",
        'U' => "unmerged",
        'T' => "type changed",
        '?' => "untracked",
        '!' => "ignored",
        _ => "unknown",
    }
}
