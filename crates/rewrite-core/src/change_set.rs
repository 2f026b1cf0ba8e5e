//! The paths removed, added and modified between two snapshots

use std::collections::{BTreeMap, HashMap};

use crate::blob::{Blob, BlobId};

/// Old and new content of a path that exists on both sides of a change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Modification {
    pub old: BlobId,
    pub new: BlobId,
}

/// Path to content mappings describing one change.
///
/// A path sits in at most one of `removed`, `added` and `modified`: recording
/// an addition for a removed path (or the reverse) turns it into a
/// modification, later records for a modified path update that modification,
/// and a path that ends up with its original content disappears entirely.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChangeSet {
    removed: BTreeMap<String, BlobId>,
    added: BTreeMap<String, BlobId>,
    modified: BTreeMap<String, Modification>,
    blobs: HashMap<BlobId, Blob>,
}

impl ChangeSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `blob` so that similarity scoring can read its content.
    pub fn insert_blob(&mut self, blob: Blob) -> BlobId {
        let id = blob.id().clone();
        self.blobs.entry(id.clone()).or_insert(blob);
        id
    }

    /// Record that `path` with content `id` no longer exists.
    ///
    /// If `path` was already added or modified, `id` becomes the old side of
    /// its modification.
    pub fn record_removal(&mut self, path: impl Into<String>, id: BlobId) -> &mut Self {
        let path = path.into();
        if let Some(new) = self.added.remove(&path) {
            return self.record_modification(path, id, new);
        }
        if let Some(modification) = self.modified.remove(&path) {
            return self.record_modification(path, id, modification.new);
        }
        self.removed.insert(path, id);
        self
    }

    /// Record that `path` with content `id` appeared.
    ///
    /// If `path` was already removed or modified, `id` becomes the new side
    /// of its modification.
    pub fn record_addition(&mut self, path: impl Into<String>, id: BlobId) -> &mut Self {
        let path = path.into();
        if let Some(old) = self.removed.remove(&path) {
            return self.record_modification(path, old, id);
        }
        if let Some(modification) = self.modified.remove(&path) {
            return self.record_modification(path, modification.old, id);
        }
        self.added.insert(path, id);
        self
    }

    /// Record that `path` changed its content from `old` to `new`.
    ///
    /// Replaces any removal or addition recorded for `path`.
    pub fn record_modification(
        &mut self,
        path: impl Into<String>,
        old: BlobId,
        new: BlobId,
    ) -> &mut Self {
        let path = path.into();
        self.removed.remove(&path);
        self.added.remove(&path);
        if old == new {
            self.modified.remove(&path);
        } else {
            self.modified.insert(path, Modification { old, new });
        }
        self
    }

    /// Builder form of [`record_removal`](Self::record_removal) taking raw content.
    pub fn with_removed(mut self, path: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        let id = self.insert_blob(Blob::new(content));
        self.record_removal(path, id);
        self
    }

    /// Builder form of [`record_addition`](Self::record_addition) taking raw content.
    pub fn with_added(mut self, path: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        let id = self.insert_blob(Blob::new(content));
        self.record_addition(path, id);
        self
    }

    /// Builder form of [`record_modification`](Self::record_modification) taking raw content.
    pub fn with_modified(
        mut self,
        path: impl Into<String>,
        old: impl Into<Vec<u8>>,
        new: impl Into<Vec<u8>>,
    ) -> Self {
        let old = self.insert_blob(Blob::new(old));
        let new = self.insert_blob(Blob::new(new));
        self.record_modification(path, old, new);
        self
    }

    pub fn removed(&self) -> &BTreeMap<String, BlobId> {
        &self.removed
    }

    pub fn added(&self) -> &BTreeMap<String, BlobId> {
        &self.added
    }

    pub fn modified(&self) -> &BTreeMap<String, Modification> {
        &self.modified
    }

    /// Content for `id`, if the producer of this change set supplied it.
    pub fn blob(&self, id: &BlobId) -> Option<&Blob> {
        self.blobs.get(id)
    }

    /// True if nothing was removed, added or modified.
    pub fn is_empty(&self) -> bool {
        self.removed.is_empty() && self.added.is_empty() && self.modified.is_empty()
    }
}
