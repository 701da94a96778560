pub mod commands;
pub mod parser;
pub mod repository;
pub mod version;

// Re-export commonly used types
pub use commands::GitCommands;
pub use parser::{
    Branch, BranchList, ChangedFile, CommitSummary, LocalBranch, RemoteBranch, StatusEntry,
    WorkingStatus, describe_state, parse_branches, parse_changed_files, parse_log, parse_status,
};
pub use repository::Repository;
pub use version::GitVersion;
