use crate::config::Settings;
use crate::git::repository::Repository;
use crate::views::Node;
use crate::views::commits::{DEFAULT_COMMIT_COUNT, commit_node};

/// Flat list of the commits that touched the file currently being viewed
///
/// The host sets the tracked file as the user switches editors; until one is
/// set the view shows a hint instead of history.
#[derive(Debug)]
pub struct FileHistoryView {
    current_file: Option<String>,
    limit: usize,
}

impl Default for FileHistoryView {
    fn default() -> Self {
        Self::new(DEFAULT_COMMIT_COUNT)
    }
}

impl FileHistoryView {
    pub fn new(limit: usize) -> Self {
        Self {
            current_file: None,
            limit,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.ui.max_commits_display)
    }

    /// Track a file, given its path relative to the repository root
    pub fn set_current_file(&mut self, path: impl Into<String>) {
        self.current_file = Some(path.into());
    }

    pub fn current_file(&self) -> Option<&str> {
        self.current_file.as_deref()
    }

    pub async fn roots(&self, repo: &Repository<'_>) -> Vec<Node> {
        let Some(file) = &self.current_file else {
            return vec![Node::Message("Open file to view history.".to_string())];
        };

        match repo.commits_for_file(self.limit, file).await {
            Ok(commits) => commits.into_iter().map(commit_node).collect(),
            Err(_) => vec![Node::Message(format!(
                "Error fetching commits for {}",
                repo.path()
            ))],
        }
    }
}
