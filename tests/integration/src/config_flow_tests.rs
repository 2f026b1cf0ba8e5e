//! Settings loaded from TOML or git config driving detection on the fixture

use std::fs;

use rewrite_core::{RenameDetector, RewritesConfig};
use rewrite_git::{commit_changes, find_commit_by_summary, rewrites_for_repo};
use rewrite_test_utils::diff_fixture;
use tempfile::TempDir;

#[test]
fn test_toml_settings_control_fuzzy_threshold() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("rewrites.toml");
    fs::write(&path, "[diff]\nsimilarity = 0.8\n").unwrap();
    let rewrites = RewritesConfig::load(&path).unwrap().unwrap();
    let detector = RenameDetector::new(rewrites).unwrap();

    let fixture = diff_fixture();
    let repo = fixture.repo();
    let r3 = find_commit_by_summary(repo, "r3").unwrap();
    let result = detector.detect(&commit_changes(repo, &r3).unwrap());

    assert!(result.renames.is_empty());
    assert!(result.pure_adds.contains("dir/c-moved"));
}

#[test]
fn test_git_config_disables_tracking() {
    let fixture = diff_fixture();
    let repo = fixture.repo();
    repo.config()
        .unwrap()
        .set_bool("diff.renames", false)
        .unwrap();

    assert!(rewrites_for_repo(repo, false).unwrap().is_none());
}

#[test]
fn test_git_config_copies_on_fixture() {
    let fixture = diff_fixture();
    fixture.write("dir/a-copy", "a\na1\n");
    fixture.commit("c5 - copy a");

    let repo = fixture.repo();
    repo.config()
        .unwrap()
        .set_str("diff.renames", "copies")
        .unwrap();
    let rewrites = rewrites_for_repo(repo, false).unwrap().unwrap();
    let detector = RenameDetector::new(rewrites).unwrap();

    let commit = find_commit_by_summary(repo, "c5 - copy a").unwrap();
    let result = detector.detect(&commit_changes(repo, &commit).unwrap());

    // dir/a-moved is unchanged in this commit, so it is not a copy source
    assert!(result.copies.is_empty());
    assert!(result.pure_adds.contains("dir/a-copy"));
}
