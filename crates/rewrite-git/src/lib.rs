//! git2 backend for rewrite detection
//!
//! Turns git trees and commits into [`ChangeSet`](rewrite_core::ChangeSet)s
//! and reads rename tracking settings from git configuration.

pub mod changes;
pub mod commits;
pub mod config;
pub mod error;

pub use changes::{commit_changes, tree_changes};
pub use commits::{CommitInfo, CommitRewrites, detect_history, find_commit_by_summary};
pub use config::{rewrites_for_repo, rewrites_from_git_config};
pub use error::{Error, Result};
