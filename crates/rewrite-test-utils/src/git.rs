//! A scratch git repository for building commit histories in tests.

use std::fs;
use std::path::Path;

use git2::{Commit, IndexAddOption, Oid, Repository, Signature};
use tempfile::TempDir;

/// A temporary git repository whose working tree is edited through plain
/// file operations and snapshotted with [`commit`](Self::commit).
///
/// # Example
///
/// ```rust,no_run
/// use rewrite_test_utils::FixtureRepo;
///
/// let repo = FixtureRepo::new();
/// repo.write("a", "a\n");
/// repo.commit("c1");
/// repo.rename("a", "dir/a-moved");
/// repo.commit("r1-identity");
/// ```
///
/// # Panics
/// Every method panics with a descriptive message if the underlying
/// filesystem or git operation fails.
pub struct FixtureRepo {
    temp_dir: TempDir,
    repo: Repository,
}

impl Default for FixtureRepo {
    fn default() -> Self {
        Self::new()
    }
}

impl FixtureRepo {
    /// Initialise an empty repository in a fresh temporary directory.
    pub fn new() -> Self {
        let temp_dir = TempDir::new()
            .unwrap_or_else(|e| panic!("FixtureRepo::new: failed to create temp dir: {e}"));
        let repo = Repository::init(temp_dir.path()).unwrap_or_else(|e| {
            panic!(
                "FixtureRepo::new: failed to init repository at {}: {e}",
                temp_dir.path().display()
            )
        });
        Self { temp_dir, repo }
    }

    /// Return the root of the working tree.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn repo(&self) -> &Repository {
        &self.repo
    }

    /// Create or overwrite `path` (relative to the root), creating parent
    /// directories as needed.
    pub fn write(&self, path: &str, content: &str) {
        let full_path = self.root().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)
                .unwrap_or_else(|e| panic!("FixtureRepo::write: failed to create {}: {e}", parent.display()));
        }
        fs::write(&full_path, content)
            .unwrap_or_else(|e| panic!("FixtureRepo::write: failed to write {path}: {e}"));
    }

    /// Append `content` to the existing file at `path`.
    pub fn append(&self, path: &str, content: &str) {
        let full_path = self.root().join(path);
        let mut existing = fs::read_to_string(&full_path)
            .unwrap_or_else(|e| panic!("FixtureRepo::append: failed to read {path}: {e}"));
        existing.push_str(content);
        fs::write(&full_path, existing)
            .unwrap_or_else(|e| panic!("FixtureRepo::append: failed to write {path}: {e}"));
    }

    /// Move `from` to `to`, creating parent directories of `to` as needed.
    pub fn rename(&self, from: &str, to: &str) {
        let target = self.root().join(to);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)
                .unwrap_or_else(|e| panic!("FixtureRepo::rename: failed to create {}: {e}", parent.display()));
        }
        fs::rename(self.root().join(from), &target)
            .unwrap_or_else(|e| panic!("FixtureRepo::rename: failed to move {from} to {to}: {e}"));
    }

    /// Delete the file at `path`.
    pub fn remove(&self, path: &str) {
        fs::remove_file(self.root().join(path))
            .unwrap_or_else(|e| panic!("FixtureRepo::remove: failed to remove {path}: {e}"));
    }

    /// Stage every change in the working tree (additions, modifications and
    /// deletions) and commit it on top of HEAD.
    pub fn commit(&self, message: &str) -> Oid {
        let fail = |step: &str, e: git2::Error| -> ! {
            panic!("FixtureRepo::commit: failed to {step} for '{message}': {e}")
        };

        let mut index = self.repo.index().unwrap_or_else(|e| fail("open index", e));
        index
            .add_all(["*"], IndexAddOption::DEFAULT, None)
            .unwrap_or_else(|e| fail("stage files", e));
        index
            .update_all(["*"], None)
            .unwrap_or_else(|e| fail("stage deletions", e));
        index.write().unwrap_or_else(|e| fail("write index", e));

        let tree_id = index.write_tree().unwrap_or_else(|e| fail("write tree", e));
        let tree = self
            .repo
            .find_tree(tree_id)
            .unwrap_or_else(|e| fail("find tree", e));
        let signature = Signature::now("Test User", "test@test.com")
            .unwrap_or_else(|e| fail("create signature", e));

        let parent: Option<Commit<'_>> = match self.repo.head() {
            Ok(head) => Some(
                head.peel_to_commit()
                    .unwrap_or_else(|e| fail("resolve HEAD", e)),
            ),
            Err(_) => None,
        };
        let parents: Vec<&Commit<'_>> = parent.iter().collect();

        self.repo
            .commit(Some("HEAD"), &signature, &signature, message, &tree, &parents)
            .unwrap_or_else(|e| fail("create commit", e))
    }
}
