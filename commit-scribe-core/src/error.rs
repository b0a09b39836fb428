// error types for the analysis pipeline and the git collaborator

use thiserror::Error;

/// errors from the staged-change analysis pipeline
#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("no staged changes found. use 'git add' to stage changes first")]
    NoStagedChanges,
}

/// errors from git operations
#[derive(Error, Debug)]
pub enum GitError {
    #[error("failed to open git repository: {0}")]
    OpenRepository(#[source] git2::Error),

    #[error("failed to read the repository index: {0}")]
    ReadIndex(#[source] git2::Error),

    #[error("failed to build the staged diff: {0}")]
    StagedDiff(#[source] git2::Error),

    #[error("failed to execute git commit: {0}")]
    CommitSpawn(#[source] std::io::Error),

    #[error("git commit command failed: {stderr}")]
    CommitFailed { stderr: String },
}
