use serde::Deserialize;

use crate::config::ConfigError;

/// Where the mapping document lives on the remote IFS
pub const GITLIBS_PATH: &str = "/.gitlibs.json";

/// One source-library-to-IFS-directory mapping from `.gitlibs.json`
///
/// Consumed by the member-sync feature to mirror edited source members into
/// the working tree. The document is optional; hosts without it simply get
/// no mirroring.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct GitLibrary {
    pub library: String,
    #[serde(rename = "ifsPath")]
    pub ifs_path: String,
    #[serde(default)]
    pub asp: Option<String>,
}

/// Parse and shape-check the `.gitlibs.json` document
///
/// A document that is not a JSON array of `{library, ifsPath}` records is
/// rejected as a whole; the caller reports the invalid format and carries on
/// without mappings.
pub fn parse_gitlibs(json: &str) -> Result<Vec<GitLibrary>, ConfigError> {
    let libraries: Vec<GitLibrary> =
        serde_json::from_str(json).map_err(|err| ConfigError::InvalidFormat(err.to_string()))?;

    for library in &libraries {
        if library.library.is_empty() || library.ifs_path.is_empty() {
            return Err(ConfigError::InvalidFormat(
                "library and ifsPath must be non-empty strings".to_string(),
            ));
        }
    }

    Ok(libraries)
}

/// Find the mapping whose IFS directory lies at or under the repository root
///
/// IFS path comparison is case-insensitive, like the host filesystem.
pub fn find_for_repo<'a>(libraries: &'a [GitLibrary], repo_path: &str) -> Option<&'a GitLibrary> {
    let repo_upper = repo_path.to_uppercase();
    libraries
        .iter()
        .find(|library| library.ifs_path.to_uppercase().starts_with(&repo_upper))
}

/// Find the mapping for a source library name, compared case-insensitively
pub fn find_for_library<'a>(libraries: &'a [GitLibrary], name: &str) -> Option<&'a GitLibrary> {
    libraries
        .iter()
        .find(|library| library.library.eq_ignore_ascii_case(name))
}
