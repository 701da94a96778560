use crate::git::parser::{StatusEntry, WorkingStatus, describe_state};
use crate::git::repository::Repository;
use crate::views::{Category, Node};

/// Two-level tree of working-tree changes: category headers over file nodes
#[derive(Debug, Default)]
pub struct StatusView {
    status: Option<WorkingStatus>,
}

impl StatusView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop the cached status; the next root query fetches it again
    pub fn refresh(&mut self) {
        self.status = None;
    }

    /// Root nodes: the two category headers
    ///
    /// Fetches the status and caches it for the child queries that follow.
    pub async fn roots(&mut self, repo: &Repository<'_>) -> Vec<Node> {
        match repo.status().await {
            Ok(status) => {
                self.status = Some(status);
                vec![Node::Category(Category::Staged), Node::Category(Category::Changes)]
            }
            Err(_) => {
                self.status = None;
                vec![Node::Message(format!(
                    "Error fetching status for {}",
                    repo.path()
                ))]
            }
        }
    }

    /// Children of one category, answered from the cached status
    pub fn children(&self, category: Category) -> Vec<Node> {
        let Some(status) = &self.status else {
            return Vec::new();
        };

        match category {
            Category::Staged => status
                .staged
                .iter()
                .map(|entry| file_node(entry, entry.index_state))
                .collect(),
            Category::Changes => status
                .unstaged
                .iter()
                .map(|entry| file_node(entry, entry.worktree_state))
                .collect(),
            _ => Vec::new(),
        }
    }
}

fn file_node(entry: &StatusEntry, state: char) -> Node {
    Node::File {
        path: entry.path.clone(),
        state,
        description: describe_state(state),
    }
}
