pub mod gitlibs;
pub mod settings;

pub use gitlibs::{GITLIBS_PATH, GitLibrary, find_for_library, find_for_repo, parse_gitlibs};
pub use settings::{BehaviorConfig, Settings, UiConfig};

use thiserror::Error;

/// Errors from loading or validating configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    SerializeError(#[from] toml::ser::Error),

    #[error("Config directory not found")]
    DirectoryNotFound,

    #[error(".gitlibs.json is in an incorrect format: {0}")]
    InvalidFormat(String),

    #[error("Invalid config value: {0}")]
    InvalidValue(String),
}
