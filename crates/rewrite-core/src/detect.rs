//! Pairing removed and added paths into renames and copies

use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::blob::BlobId;
use crate::change_set::ChangeSet;
use crate::error::Result;
use crate::rewrites::{Copies, Rewrites, fuzzy};
use crate::similarity::similarity;

/// A removed path and an added path judged to be the same file.
#[derive(Debug, Clone, PartialEq)]
pub struct RenamePair {
    pub old_path: String,
    pub new_path: String,
    /// `1.0` for identical content
    pub similarity: f32,
    /// True if the content changed along with the path
    pub content_changed: bool,
}

/// An added path whose content was taken from a changed file.
#[derive(Debug, Clone, PartialEq)]
pub struct CopyPair {
    pub source_path: String,
    pub new_path: String,
    pub similarity: f32,
    pub content_changed: bool,
}

/// Outcome of rewrite detection for one change set.
///
/// Every removed path is either the `old_path` of a rename or a pure delete.
/// Every added path is the `new_path` of a rename, the `new_path` of a copy,
/// or a pure add.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DetectionResult {
    /// Sorted by `old_path`
    pub renames: Vec<RenamePair>,
    /// Sorted by `new_path`; always empty unless copy tracking is enabled
    pub copies: Vec<CopyPair>,
    pub pure_adds: BTreeSet<String>,
    pub pure_deletes: BTreeSet<String>,
}

impl DetectionResult {
    pub fn is_empty(&self) -> bool {
        self.renames.is_empty()
            && self.copies.is_empty()
            && self.pure_adds.is_empty()
            && self.pure_deletes.is_empty()
    }

    /// The rename that produced `new_path`, if any.
    pub fn rename_to(&self, new_path: &str) -> Option<&RenamePair> {
        self.renames.iter().find(|pair| pair.new_path == new_path)
    }

    /// `(old_path, new_path)` of every rename, in result order.
    pub fn rename_paths(&self) -> Vec<(&str, &str)> {
        self.renames
            .iter()
            .map(|pair| (pair.old_path.as_str(), pair.new_path.as_str()))
            .collect()
    }
}

/// Detect renames in `changes` using the default settings and the given
/// minimum similarity.
///
/// Fails only if `similarity_threshold` is outside `(0, 1]`.
pub fn detect(changes: &ChangeSet, similarity_threshold: f32) -> Result<DetectionResult> {
    let detector = RenameDetector::new(Rewrites::with_threshold(similarity_threshold)?)?;
    Ok(detector.detect(changes))
}

/// Pairs removed and added paths according to a set of [`Rewrites`].
///
/// Detection is a pure function of the change set; one detector can be
/// shared between threads working on independent changes.
#[derive(Debug, Clone, Default)]
pub struct RenameDetector {
    rewrites: Rewrites,
}

impl RenameDetector {
    pub fn new(rewrites: Rewrites) -> Result<Self> {
        rewrites.validate()?;
        Ok(Self { rewrites })
    }

    pub fn rewrites(&self) -> &Rewrites {
        &self.rewrites
    }

    /// Classify every removed and added path of `changes`.
    ///
    /// 1. Identical content is paired first. Within a group of removed and
    ///    added paths sharing one blob, both sides are sorted and paired
    ///    positionally; leftovers continue to the next pass.
    /// 2. Remaining pairs are scored and accepted greedily by descending
    ///    similarity, ties broken by `(old_path, new_path)`. Scores below the
    ///    threshold are never accepted; a score equal to it is.
    /// 3. If copy tracking is enabled, unpaired additions are matched against
    ///    the removed and modified files.
    pub fn detect(&self, changes: &ChangeSet) -> DetectionResult {
        let mut pending = Pending::new(changes);
        let mut renames = Vec::new();

        if !pending.removed.is_empty() && !pending.added.is_empty() {
            pending.pair_identical(&mut renames);
            if let Some(threshold) = self.rewrites.fuzzy_percentage() {
                self.pair_similar(&mut pending, threshold, &mut renames);
            }
        }
        renames.sort_by(|a, b| a.old_path.cmp(&b.old_path));

        let copies = match self.rewrites.copies {
            Some(copies) if !pending.added.is_empty() => self.find_copies(&mut pending, copies),
            _ => Vec::new(),
        };

        let result = DetectionResult {
            renames,
            copies,
            pure_adds: pending.added.into_iter().map(str::to_owned).collect(),
            pure_deletes: pending.removed.into_iter().map(str::to_owned).collect(),
        };
        tracing::debug!(
            renames = result.renames.len(),
            copies = result.copies.len(),
            adds = result.pure_adds.len(),
            deletes = result.pure_deletes.len(),
            "Rewrite detection finished"
        );
        result
    }

    fn pair_similar<'a>(
        &self,
        pending: &mut Pending<'a>,
        threshold: f32,
        renames: &mut Vec<RenamePair>,
    ) {
        if pending.removed.is_empty() || pending.added.is_empty() {
            return;
        }
        if !self
            .rewrites
            .within_limit(pending.removed.len(), pending.added.len())
        {
            tracing::warn!(
                sources = pending.removed.len(),
                destinations = pending.added.len(),
                limit = self.rewrites.limit,
                "Too many rename candidates, skipping similarity detection"
            );
            return;
        }

        let changes = pending.changes;
        let sources: Vec<&'a str> = pending.removed.iter().copied().collect();
        let destinations: Vec<&'a str> = pending.added.iter().copied().collect();

        let mut candidates = Vec::new();
        for &old in &sources {
            for &new in &destinations {
                let score = pending.score(&changes.removed()[old], &changes.added()[new]);
                if let Some(score) = score.filter(|score| *score >= threshold) {
                    candidates.push((score, old, new));
                }
            }
        }
        candidates.sort_by(|a, b| {
            b.0.total_cmp(&a.0)
                .then_with(|| a.1.cmp(b.1))
                .then_with(|| a.2.cmp(b.2))
        });

        for (score, old, new) in candidates {
            if !pending.removed.contains(old) || !pending.added.contains(new) {
                continue;
            }
            pending.removed.remove(old);
            pending.added.remove(new);
            renames.push(RenamePair {
                old_path: old.to_owned(),
                new_path: new.to_owned(),
                similarity: score,
                content_changed: changes.removed()[old] != changes.added()[new],
            });
        }
    }

    fn find_copies(&self, pending: &mut Pending<'_>, copies: Copies) -> Vec<CopyPair> {
        let changes = pending.changes;
        let mut sources: BTreeMap<&str, &BlobId> = changes
            .removed()
            .iter()
            .map(|(path, id)| (path.as_str(), id))
            .collect();
        sources.extend(
            changes
                .modified()
                .iter()
                .map(|(path, modification)| (path.as_str(), &modification.old)),
        );
        if sources.is_empty() {
            return Vec::new();
        }

        let mut threshold = fuzzy(copies.percentage);
        if threshold.is_some() && !self.rewrites.within_limit(sources.len(), pending.added.len()) {
            tracing::warn!(
                sources = sources.len(),
                destinations = pending.added.len(),
                limit = self.rewrites.limit,
                "Too many copy candidates, only tracking identical copies"
            );
            threshold = None;
        }

        let destinations: Vec<&str> = pending.added.iter().copied().collect();
        let mut found = Vec::new();
        for new in destinations {
            let new_id = &changes.added()[new];
            let mut best = sources
                .iter()
                .find(|(_, id)| **id == new_id)
                .map(|(path, _)| (*path, 1.0));

            if let (None, Some(threshold)) = (best, threshold) {
                for (&path, &id) in &sources {
                    let Some(score) = pending.score(id, new_id) else {
                        continue;
                    };
                    if score >= threshold && best.is_none_or(|(_, current)| score > current) {
                        best = Some((path, score));
                    }
                }
            }

            if let Some((source, score)) = best {
                pending.added.remove(new);
                found.push(CopyPair {
                    source_path: source.to_owned(),
                    new_path: new.to_owned(),
                    similarity: score,
                    content_changed: sources[source] != new_id,
                });
            }
        }
        found
    }
}

/// Paths not yet paired, plus a cache of similarity scores by blob pair.
struct Pending<'a> {
    changes: &'a ChangeSet,
    removed: BTreeSet<&'a str>,
    added: BTreeSet<&'a str>,
    scores: HashMap<(&'a BlobId, &'a BlobId), Option<f32>>,
}

impl<'a> Pending<'a> {
    fn new(changes: &'a ChangeSet) -> Self {
        Self {
            changes,
            removed: changes.removed().keys().map(String::as_str).collect(),
            added: changes.added().keys().map(String::as_str).collect(),
            scores: HashMap::new(),
        }
    }

    fn pair_identical(&mut self, renames: &mut Vec<RenamePair>) {
        let changes = self.changes;
        let mut groups: BTreeMap<&'a BlobId, (Vec<&'a str>, Vec<&'a str>)> = BTreeMap::new();
        for &path in &self.removed {
            groups.entry(&changes.removed()[path]).or_default().0.push(path);
        }
        for &path in &self.added {
            groups.entry(&changes.added()[path]).or_default().1.push(path);
        }

        let before = renames.len();
        // both sides are already in path order
        for (sources, destinations) in groups.into_values() {
            for (old, new) in sources.into_iter().zip(destinations) {
                self.removed.remove(old);
                self.added.remove(new);
                renames.push(RenamePair {
                    old_path: old.to_owned(),
                    new_path: new.to_owned(),
                    similarity: 1.0,
                    content_changed: false,
                });
            }
        }
        tracing::debug!(pairs = renames.len() - before, "Paired identical content");
    }

    /// Similarity of two blobs, `None` if either has no content available.
    fn score(&mut self, a: &'a BlobId, b: &'a BlobId) -> Option<f32> {
        if a == b {
            return Some(1.0);
        }
        let key = if a <= b { (a, b) } else { (b, a) };
        let changes = self.changes;
        *self
            .scores
            .entry(key)
            .or_insert_with(|| match (changes.blob(key.0), changes.blob(key.1)) {
                (Some(old), Some(new)) => Some(similarity(old, new)),
                _ => None,
            })
    }
}
