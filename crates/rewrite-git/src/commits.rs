//! Commit lookup and per-commit rewrite detection over history.

use chrono::{DateTime, TimeZone, Utc};
use git2::{Commit, Repository, Sort};
use rewrite_core::{DetectionResult, RenameDetector};

use crate::changes::commit_changes;
use crate::{Error, Result};

/// Information about a single commit.
#[derive(Debug, Clone, PartialEq)]
pub struct CommitInfo {
    /// Short commit hash (7 characters)
    pub hash: String,

    /// First line of the commit message
    pub message: String,

    /// Commit author name
    pub author: String,

    /// Commit timestamp
    pub timestamp: DateTime<Utc>,
}

impl CommitInfo {
    pub fn from_commit(commit: &Commit<'_>) -> Self {
        let timestamp: DateTime<Utc> = Utc
            .timestamp_opt(commit.time().seconds(), 0)
            .single()
            .unwrap_or_default();

        let message = commit
            .message()
            .unwrap_or("")
            .lines()
            .next()
            .unwrap_or("")
            .to_string();

        let author = commit.author();
        let author_name = author.name().unwrap_or("Unknown").to_string();

        Self {
            hash: format!("{:.7}", commit.id()),
            message,
            author: author_name,
            timestamp,
        }
    }
}

/// Rewrites detected in one commit.
#[derive(Debug, Clone)]
pub struct CommitRewrites {
    pub commit: CommitInfo,
    pub result: DetectionResult,
    /// Paths changed in place; never rename candidates
    pub modified: Vec<String>,
}

/// Find the newest commit reachable from HEAD whose summary is `summary`.
pub fn find_commit_by_summary<'repo>(
    repo: &'repo Repository,
    summary: &str,
) -> Result<Commit<'repo>> {
    let mut revwalk = repo.revwalk()?;
    revwalk.push_head()?;
    revwalk.set_sorting(Sort::TOPOLOGICAL | Sort::TIME)?;

    for oid_result in revwalk {
        let commit = repo.find_commit(oid_result?)?;
        if commit.summary() == Some(summary) {
            return Ok(commit);
        }
    }

    Err(Error::CommitNotFound {
        summary: summary.to_string(),
    })
}

/// Run `detector` on the last `max_count` commits of HEAD's first-parent
/// history.
///
/// Returns commits most recent first. Each commit is compared to its first
/// parent; the root commit to the empty tree.
pub fn detect_history(
    repo: &Repository,
    detector: &RenameDetector,
    max_count: usize,
) -> Result<Vec<CommitRewrites>> {
    let mut revwalk = repo.revwalk()?;
    revwalk.push_head()?;
    revwalk.simplify_first_parent()?;
    revwalk.set_sorting(Sort::TOPOLOGICAL | Sort::TIME)?;

    let mut history = Vec::with_capacity(max_count.min(64));

    for oid_result in revwalk.take(max_count) {
        let commit = repo.find_commit(oid_result?)?;
        let changes = commit_changes(repo, &commit)?;
        let result = detector.detect(&changes);
        let info = CommitInfo::from_commit(&commit);

        tracing::debug!(
            commit = %info.hash,
            renames = result.renames.len(),
            "Detected rewrites"
        );

        history.push(CommitRewrites {
            commit: info,
            result,
            modified: changes.modified().keys().cloned().collect(),
        });
    }

    Ok(history)
}
