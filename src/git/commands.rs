use std::borrow::Cow;

use crate::git::parser::Branch;

/// Log format producing one `hash|author|relative-time|subject` line per commit
const LOG_FORMAT: &str = "--pretty=format:%h|%an|%ar|%s";

/// Builds command lines for the git binary on the remote host
///
/// Pure string assembly: execution belongs to the connection. Every
/// user-supplied value (path, branch name, commit message) is quoted so the
/// remote POSIX shell passes it to git as one literal token.
#[derive(Debug, Clone)]
pub struct GitCommands {
    git_path: String,
}

impl GitCommands {
    /// Create a builder for the git binary at the given remote path
    pub fn new(git_path: impl Into<String>) -> Self {
        Self {
            git_path: git_path.into(),
        }
    }

    pub fn git_path(&self) -> &str {
        &self.git_path
    }

    /// Quote an argument for the remote shell
    ///
    /// NUL bytes cannot appear in a command line at all and are dropped
    /// before quoting.
    fn quote(arg: &str) -> String {
        let arg: Cow<'_, str> = if arg.contains('\0') {
            Cow::Owned(arg.chars().filter(|&c| c != '\0').collect())
        } else {
            Cow::Borrowed(arg)
        };

        shlex::try_quote(&arg)
            .map(|quoted| quoted.into_owned())
            .unwrap_or_default()
    }

    /// Probe whether the directory is inside a git working tree
    pub fn rev_parse_work_tree(&self) -> String {
        format!("{} rev-parse --is-inside-work-tree", self.git_path)
    }

    pub fn version(&self) -> String {
        format!("{} --version", self.git_path)
    }

    pub fn status(&self) -> String {
        format!("{} status --short", self.git_path)
    }

    /// Log of recent commits, optionally restricted to one pathspec
    pub fn log(&self, count: usize, file: Option<&str>) -> String {
        let mut command = format!(
            "{} --no-pager log --max-count={} {}",
            self.git_path,
            count,
            Self::quote(LOG_FORMAT)
        );

        if let Some(file) = file {
            command.push_str(" -- ");
            command.push_str(&Self::quote(file));
        }

        command
    }

    /// Files touched by one commit
    pub fn changed_files(&self, hash: &str) -> String {
        format!(
            "{} diff-tree --no-commit-id --name-only -r {}",
            self.git_path,
            Self::quote(hash)
        )
    }

    /// Contents of a file as of a commit
    pub fn show_file(&self, hash: &str, path: &str) -> String {
        format!(
            "{} show {}",
            self.git_path,
            Self::quote(&format!("{hash}:{path}"))
        )
    }

    pub fn stage(&self, path: &str) -> String {
        format!("{} add {}", self.git_path, Self::quote(path))
    }

    pub fn unstage(&self, path: &str) -> String {
        format!("{} reset -- {}", self.git_path, Self::quote(path))
    }

    /// Discard working-tree changes to one file
    pub fn restore(&self, path: &str) -> String {
        format!("{} checkout -- {}", self.git_path, Self::quote(path))
    }

    pub fn commit(&self, message: &str) -> String {
        format!("{} commit -m {}", self.git_path, Self::quote(message))
    }

    pub fn push(&self) -> String {
        format!("{} push", self.git_path)
    }

    pub fn pull(&self) -> String {
        format!("{} pull", self.git_path)
    }

    pub fn list_branches(&self) -> String {
        format!("{} branch --all --list", self.git_path)
    }

    pub fn create_branch(&self, name: &str) -> String {
        format!("{} branch {}", self.git_path, Self::quote(name))
    }

    /// Check out a branch
    ///
    /// A remote branch has no local ref to check out; instead a local
    /// tracking branch with its short name is created from `remote/branch`.
    pub fn checkout(&self, branch: &Branch) -> String {
        match branch {
            Branch::Local(local) => {
                format!("{} checkout {}", self.git_path, Self::quote(&local.name))
            }
            Branch::Remote(remote) => format!(
                "{} checkout -b {} {}",
                self.git_path,
                Self::quote(&remote.short_name),
                Self::quote(&format!("{}/{}", remote.remote, remote.short_name))
            ),
        }
    }

    /// Delete a branch
    ///
    /// Deleting a remote branch pushes a deletion to its remote; only local
    /// branches are removed as refs here.
    pub fn delete_branch(&self, branch: &Branch) -> String {
        match branch {
            Branch::Local(local) => {
                format!("{} branch -d {}", self.git_path, Self::quote(&local.name))
            }
            Branch::Remote(remote) => format!(
                "{} push {} --delete {}",
                self.git_path,
                Self::quote(&remote.remote),
                Self::quote(&remote.short_name)
            ),
        }
    }

    /// Merge the named branch into the current branch
    pub fn merge(&self, name: &str) -> String {
        format!("{} merge {}", self.git_path, Self::quote(name))
    }
}
