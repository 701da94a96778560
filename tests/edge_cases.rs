use ifsgit::config::{ConfigError, parse_gitlibs};
use ifsgit::error::GitError;
use ifsgit::git::parser::*;

/// Test parsing completely empty git output
#[test]
fn test_parse_empty_outputs() {
    assert_eq!(parse_status("").unwrap(), WorkingStatus::default());
    assert_eq!(parse_log("").unwrap().len(), 0);
    assert_eq!(parse_changed_files("", "abc").unwrap().len(), 0);
    assert_eq!(parse_branches("").unwrap(), BranchList::default());
}

/// Blank-only input is the same as empty input
#[test]
fn test_parse_blank_only_outputs() {
    assert_eq!(parse_status("\n\n   \n").unwrap(), WorkingStatus::default());
    assert_eq!(parse_log("\n\n").unwrap().len(), 0);
    assert_eq!(parse_branches("\n \n").unwrap(), BranchList::default());
}

/// Every staged/unstaged combination of short-status codes
#[test]
fn test_status_code_pair_placement() {
    for index in ['M', 'A', 'D', 'R', 'C', 'U', ' '] {
        for worktree in ['M', 'D', 'U', ' '] {
            if index == ' ' && worktree == ' ' {
                continue;
            }

            let line = format!("{index}{worktree} file.txt");
            let status = parse_status(&line).unwrap();

            assert_eq!(
                !status.staged.is_empty(),
                index != ' ',
                "index {index:?} worktree {worktree:?}"
            );
            assert_eq!(
                !status.unstaged.is_empty(),
                worktree != ' ',
                "index {index:?} worktree {worktree:?}"
            );
        }
    }

    // Untracked is the exception: both characters set, unstaged only
    let status = parse_status("?? file.txt").unwrap();
    assert!(status.staged.is_empty());
    assert_eq!(status.unstaged.len(), 1);
}

/// Fixed-width slicing keeps whitespace-heavy paths intact
#[test]
fn test_status_path_with_spaces_and_rename_arrow() {
    let status = parse_status("R  old name.txt -> new name.txt").unwrap();

    assert_eq!(status.staged.len(), 1);
    assert_eq!(status.staged[0].path, "old name.txt -> new name.txt");
}

/// A path that begins after exactly three columns, even when it starts oddly
#[test]
fn test_status_path_starting_with_dash() {
    let status = parse_status("A  --weird-name").unwrap();
    assert_eq!(status.staged[0].path, "--weird-name");
}

#[test]
fn test_status_malformed_lines_are_surfaced() {
    assert!(matches!(parse_status("x"), Err(GitError::ParseError(_))));
    assert!(matches!(parse_status("MMfile"), Err(GitError::ParseError(_))));
}

/// Subjects keep every pipe after the third delimiter
#[test]
fn test_log_subject_with_pipes_and_quotes() {
    let commits =
        parse_log(r#"abc1234|Jane|2 days ago|Use "a|b" syntax in CL"#).unwrap();

    assert_eq!(commits.len(), 1);
    assert_eq!(commits[0].subject, r#"Use "a|b" syntax in CL"#);
}

#[test]
fn test_log_short_line_is_surfaced() {
    assert!(matches!(
        parse_log("abc1234|Jane|2 days ago"),
        Err(GitError::ParseError(_))
    ));
}

/// An empty subject is still a subject
#[test]
fn test_log_empty_subject() {
    let commits = parse_log("abc1234|Jane|2 days ago|").unwrap();
    assert_eq!(commits[0].subject, "");
}

#[test]
fn test_changed_files_skip_blank_lines() {
    let files = parse_changed_files("a.txt\n\nb.txt\n\n", "abc").unwrap();
    assert_eq!(files.len(), 2);
}

/// Branch names may nest arbitrarily below the remote segment
#[test]
fn test_branch_listing_with_nested_names() {
    let output = "* feature/login\n  remotes/upstream/feature/login\n";
    let branches = parse_branches(output).unwrap();

    assert_eq!(branches.local[0].name, "feature/login");
    assert!(branches.local[0].checked_out);
    assert_eq!(branches.remote[0].remote, "upstream");
    assert_eq!(branches.remote[0].short_name, "feature/login");
}

#[test]
fn test_branch_listing_artifacts_are_skipped() {
    let output = "* (HEAD detached at 1a2b3c4)\n  remotes/origin/HEAD -> origin/main\n";
    let branches = parse_branches(output).unwrap();

    assert_eq!(branches, BranchList::default());
}

#[test]
fn test_gitlibs_document_shape_errors() {
    // Not an array
    assert!(matches!(
        parse_gitlibs(r#"{"library": "DEVLIB", "ifsPath": "/home"}"#),
        Err(ConfigError::InvalidFormat(_))
    ));

    // Array of non-objects
    assert!(matches!(
        parse_gitlibs(r#"["DEVLIB"]"#),
        Err(ConfigError::InvalidFormat(_))
    ));

    // Missing required field
    assert!(matches!(
        parse_gitlibs(r#"[{"library": "DEVLIB"}]"#),
        Err(ConfigError::InvalidFormat(_))
    ));

    // Truncated document
    assert!(matches!(
        parse_gitlibs(r#"[{"library": "DEVLIB", "#),
        Err(ConfigError::InvalidFormat(_))
    ));
}

#[test]
fn test_gitlibs_empty_array_is_valid() {
    assert_eq!(parse_gitlibs("[]").unwrap().len(), 0);
}
