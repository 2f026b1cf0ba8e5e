//! Change sets from git tree diffs

use git2::{Commit, Delta, DiffFile, DiffOptions, FileMode, Repository, Tree};
use rewrite_core::{Blob, BlobId, ChangeSet};

use crate::Result;

/// Compute the changes needed to turn `old` into `new`.
///
/// `old = None` compares against the empty tree. Only file entries (regular,
/// executable, symlink) are recorded; trees and submodules are skipped. The
/// content of every recorded blob is loaded into the change set, keyed by
/// its git object id. Rename detection is left to the caller.
pub fn tree_changes(repo: &Repository, old: Option<&Tree<'_>>, new: &Tree<'_>) -> Result<ChangeSet> {
    let mut opts = DiffOptions::new();
    opts.ignore_submodules(true);
    let diff = repo.diff_tree_to_tree(old, Some(new), Some(&mut opts))?;

    let mut changes = ChangeSet::new();
    for delta in diff.deltas() {
        match delta.status() {
            Delta::Added => {
                if let Some((path, id)) = load_entry(repo, &delta.new_file(), &mut changes)? {
                    changes.record_addition(path, id);
                }
            }
            Delta::Deleted => {
                if let Some((path, id)) = load_entry(repo, &delta.old_file(), &mut changes)? {
                    changes.record_removal(path, id);
                }
            }
            Delta::Modified | Delta::Typechange => {
                let old = load_entry(repo, &delta.old_file(), &mut changes)?;
                let new = load_entry(repo, &delta.new_file(), &mut changes)?;
                match (old, new) {
                    (Some((path, old)), Some((_, new))) => {
                        changes.record_modification(path, old, new);
                    }
                    (Some((path, old)), None) => {
                        changes.record_removal(path, old);
                    }
                    (None, Some((path, new))) => {
                        changes.record_addition(path, new);
                    }
                    (None, None) => {}
                }
            }
            status => tracing::debug!(?status, "Ignoring delta"),
        }
    }

    tracing::debug!(
        removed = changes.removed().len(),
        added = changes.added().len(),
        modified = changes.modified().len(),
        "Collected tree changes"
    );
    Ok(changes)
}

/// Changes introduced by `commit` relative to its first parent.
///
/// Root commits are compared against the empty tree.
pub fn commit_changes(repo: &Repository, commit: &Commit<'_>) -> Result<ChangeSet> {
    let parent_tree = if commit.parent_count() > 0 {
        Some(commit.parent(0)?.tree()?)
    } else {
        None
    };
    tree_changes(repo, parent_tree.as_ref(), &commit.tree()?)
}

/// Path and id of a file entry, storing its content in `changes`.
fn load_entry(
    repo: &Repository,
    file: &DiffFile<'_>,
    changes: &mut ChangeSet,
) -> Result<Option<(String, BlobId)>> {
    if !matches!(
        file.mode(),
        FileMode::Blob | FileMode::BlobExecutable | FileMode::Link
    ) {
        return Ok(None);
    }
    let Some(path) = file.path() else {
        return Ok(None);
    };

    let id = BlobId::from_hex(file.id().to_string());
    if changes.blob(&id).is_none() {
        let blob = repo.find_blob(file.id())?;
        changes.insert_blob(Blob::with_id(id.clone(), blob.content()));
    }
    Ok(Some((path.to_string_lossy().into_owned(), id)))
}
