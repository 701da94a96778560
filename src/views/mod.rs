//! View models for the four repository panels
//!
//! Each view produces plain tagged records for a host renderer to turn into
//! tree items. Views own the cache for their two-level tree: the root query
//! fetches from the repository and the child query answers from the cache,
//! so expanding a category never re-issues the parent command. `refresh`
//! drops the cache explicitly.

pub mod branches;
pub mod commits;
pub mod history;
pub mod status;

pub use branches::BranchesView;
pub use commits::CommitsView;
pub use history::FileHistoryView;
pub use status::StatusView;

use crate::error::GitError;

/// Category headers of the two-level trees
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Staged,
    Changes,
    RemoteBranches,
    LocalBranches,
}

impl Category {
    pub fn label(self) -> &'static str {
        match self {
            Category::Staged => "Staged Changes",
            Category::Changes => "Changes",
            Category::RemoteBranches => "Remote Branches",
            Category::LocalBranches => "Local Branches",
        }
    }
}

/// A renderable tree node
///
/// Plain data, free of any UI toolkit type; the host maps these onto
/// whatever tree-item class its framework wants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Category(Category),
    File {
        path: String,
        state: char,
        description: &'static str,
    },
    Commit {
        hash: String,
        subject: String,
        author: String,
        when: String,
    },
    ChangedFile {
        hash: String,
        path: String,
    },
    LocalBranch {
        name: String,
        checked_out: bool,
    },
    RemoteBranch {
        name: String,
    },
    /// Informational leaf shown instead of data, e.g. for an unmet
    /// precondition or a failed fetch
    Message(String),
}

impl Node {
    pub fn not_connected() -> Node {
        Node::Message("Please connect to an IBM i and refresh.".to_string())
    }

    pub fn not_a_repository(path: &str) -> Node {
        Node::Message(format!("{path} is not a git repository."))
    }

    /// Informational node for a failed repository gate
    pub fn unavailable(error: &GitError, path: &str) -> Node {
        match error {
            GitError::GitUnavailable => {
                Node::Message("Git is not installed on the remote host.".to_string())
            }
            GitError::NotARepository(_) => Node::not_a_repository(path),
            other => Node::Message(other.to_string()),
        }
    }
}
