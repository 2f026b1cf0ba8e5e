//! Error types for rewrite-git

/// Result type for rewrite-git operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in rewrite-git operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Git error: {0}")]
    Git(#[from] git2::Error),

    #[error("Rewrite detection error: {0}")]
    Core(#[from] rewrite_core::Error),

    #[error("No commit with summary '{summary}' reachable from HEAD")]
    CommitNotFound { summary: String },

    #[error("Invalid value '{value}' for git config key '{key}'")]
    InvalidConfig { key: String, value: String },
}
