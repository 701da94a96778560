use crate::git::parser::BranchList;
use crate::git::repository::Repository;
use crate::views::{Category, Node};

/// Two-level tree of branches: remote and local categories over branch nodes
#[derive(Debug, Default)]
pub struct BranchesView {
    branches: Option<BranchList>,
}

impl BranchesView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop the cached branch list; the next root query fetches it again
    pub fn refresh(&mut self) {
        self.branches = None;
    }

    /// Root nodes: the two location categories
    ///
    /// Fetches the branch list and caches it for the child queries.
    pub async fn roots(&mut self, repo: &Repository<'_>) -> Vec<Node> {
        match repo.branches().await {
            Ok(branches) => {
                self.branches = Some(branches);
                vec![
                    Node::Category(Category::RemoteBranches),
                    Node::Category(Category::LocalBranches),
                ]
            }
            Err(_) => {
                self.branches = None;
                vec![Node::Message(format!(
                    "Error fetching branches for {}",
                    repo.path()
                ))]
            }
        }
    }

    /// Children of one category, answered from the cached branch list
    pub fn children(&self, category: Category) -> Vec<Node> {
        let Some(branches) = &self.branches else {
            return Vec::new();
        };

        match category {
            Category::RemoteBranches => branches
                .remote
                .iter()
                .map(|branch| Node::RemoteBranch {
                    name: branch.name.clone(),
                })
                .collect(),
            Category::LocalBranches => branches
                .local
                .iter()
                .map(|branch| Node::LocalBranch {
                    name: branch.name.clone(),
                    checked_out: branch.checked_out,
                })
                .collect(),
            _ => Vec::new(),
        }
    }
}
