use git2::{DiffFormat, DiffOptions, Repository};

use crate::error::GitError;

/// check if there are any staged changes in the repository
pub fn has_staged_changes(repo_path: &str) -> Result<bool, GitError> {
    let repo = Repository::discover(repo_path).map_err(GitError::OpenRepository)?;

    // a repository without commits yet has no HEAD tree; staged files
    // then live only in the index
    if repo.head().is_err() {
        let index = repo.index().map_err(GitError::ReadIndex)?;
        return Ok(!index.is_empty());
    }

    let diff = staged_diff(&repo)?;
    Ok(diff.deltas().count() > 0)
}

/// get the list of staged file paths, in the order git reports them
pub fn get_staged_files(repo_path: &str) -> Result<Vec<String>, GitError> {
    let repo = Repository::discover(repo_path).map_err(GitError::OpenRepository)?;

    if repo.head().is_err() {
        // no commits yet: every index entry is a staged file
        let index = repo.index().map_err(GitError::ReadIndex)?;
        return Ok(index
            .iter()
            .map(|entry| String::from_utf8_lossy(&entry.path).into_owned())
            .collect());
    }

    let diff = staged_diff(&repo)?;
    let mut staged_files = Vec::new();
    for delta in diff.deltas() {
        if let Some(path) = delta.new_file().path() {
            staged_files.push(path.to_string_lossy().to_string());
        }
    }
    Ok(staged_files)
}

/// render the staged changes as unified-diff text.
///
/// the analyzer's line counting depends on the usual textual shape:
/// content lines prefixed with a single `+`/`-` and file headers with
/// `+++`/`---`, which `DiffFormat::Patch` produces.
pub fn get_staged_diff(repo_path: &str) -> Result<String, GitError> {
    let repo = Repository::discover(repo_path).map_err(GitError::OpenRepository)?;
    let diff = staged_diff(&repo)?;

    let mut text = String::new();
    diff.print(DiffFormat::Patch, |_delta, _hunk, line| {
        match line.origin() {
            '+' | '-' | ' ' => text.push(line.origin()),
            _ => {}
        }
        text.push_str(&decode_line_content(line.content()));
        true
    })
    .map_err(GitError::StagedDiff)?;

    Ok(text)
}

/// get the current branch name, or an empty string when it cannot be
/// determined (detached HEAD, unborn branch, not a repository)
pub fn current_branch(repo_path: &str) -> String {
    let Ok(repo) = Repository::discover(repo_path) else {
        return String::new();
    };
    match repo.head() {
        Ok(head) => head.shorthand().unwrap_or("").to_string(),
        Err(_) => String::new(),
    }
}

/// run `git commit -m <message>` in the given repository
pub fn run_commit(repo_path: &str, message: &str) -> Result<(), GitError> {
    let output = std::process::Command::new("git")
        .current_dir(repo_path)
        .args(["commit", "-m", message])
        .output()
        .map_err(GitError::CommitSpawn)?;

    if output.status.success() {
        Ok(())
    } else {
        Err(GitError::CommitFailed {
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        })
    }
}

/// diff of HEAD tree (or the empty tree for unborn HEAD) against the index
fn staged_diff(repo: &Repository) -> Result<git2::Diff<'_>, GitError> {
    let head_tree = repo.head().ok().and_then(|head| head.peel_to_tree().ok());

    let mut diff_opts = DiffOptions::new();
    diff_opts.show_binary(false);

    repo.diff_tree_to_index(head_tree.as_ref(), None, Some(&mut diff_opts))
        .map_err(GitError::StagedDiff)
}

/// decode line content with appropriate encoding
fn decode_line_content(content: &[u8]) -> String {
    let (cow, _encoding_used, had_errors) = encoding_rs::UTF_8.decode(content);

    if had_errors {
        // fall back to lossy conversion if there were decoding errors
        String::from_utf8_lossy(content).to_string()
    } else {
        cow.to_string()
    }
}
