//! End-to-end rename detection over the scripted fixture history
//!
//! Each scenario diffs a fixture commit against its parent through the git
//! backend and runs the detector on the resulting change set.

use pretty_assertions::assert_eq;
use rewrite_core::{ChangeSet, DetectionResult, RenameDetector, Rewrites};
use rewrite_git::{commit_changes, find_commit_by_summary};
use rewrite_test_utils::{FixtureRepo, diff_fixture};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn changes_of(fixture: &FixtureRepo, summary: &str) -> ChangeSet {
    let repo = fixture.repo();
    let commit = find_commit_by_summary(repo, summary).unwrap();
    commit_changes(repo, &commit).unwrap()
}

fn detect_with(changes: &ChangeSet, percentage: Option<f32>) -> DetectionResult {
    RenameDetector::new(Rewrites {
        percentage,
        ..Default::default()
    })
    .unwrap()
    .detect(changes)
}

#[test]
fn test_modification_only_commit_has_no_rewrites() {
    init_tracing();
    let fixture = diff_fixture();
    let changes = changes_of(&fixture, "c3");

    let result = detect_with(&changes, Some(0.5));

    assert!(result.is_empty());
    assert_eq!(changes.modified().len(), 1);
}

#[test]
fn test_rename_identity() {
    init_tracing();
    let fixture = diff_fixture();

    for (summary, expected, assert_msg) in [
        (
            "r1-identity",
            vec![("a", "dir/a-moved")],
            "one rename and nothing else",
        ),
        (
            "r2-ambiguous",
            vec![("s1", "b1"), ("s2", "b2"), ("s3", "z")],
            "multiple possible sources decide by ordering everything lexicographically",
        ),
        (
            "c4 - add identical files",
            vec![],
            "not having any renames is OK as well",
        ),
    ] {
        let changes = changes_of(&fixture, summary);
        for percentage in [None, Some(0.5)] {
            let result = detect_with(&changes, percentage);
            assert_eq!(result.rename_paths(), expected, "{assert_msg}");
            assert!(
                result.renames.iter().all(|pair| !pair.content_changed),
                "{assert_msg}"
            );
        }
    }
}

#[test]
fn test_identical_files_added_together_are_pure_adds() {
    let fixture = diff_fixture();
    let changes = changes_of(&fixture, "c4 - add identical files");

    let result = detect_with(&changes, Some(0.5));

    assert_eq!(
        result.pure_adds.iter().map(String::as_str).collect::<Vec<_>>(),
        vec!["s1", "s2", "s3"]
    );
    assert!(result.pure_deletes.is_empty());
}

#[test]
fn test_rename_fuzzy() {
    init_tracing();
    let fixture = diff_fixture();
    let changes = changes_of(&fixture, "r3");

    // 0.76 is just above the similarity of the moved file
    for percentage in [None, Some(0.76)] {
        let result = detect_with(&changes, percentage);
        assert!(result.renames.is_empty());
        assert_eq!(
            result.pure_adds.iter().map(String::as_str).collect::<Vec<_>>(),
            vec!["dir/c-moved"]
        );
        assert_eq!(
            result.pure_deletes.iter().map(String::as_str).collect::<Vec<_>>(),
            vec!["dir/c"]
        );
        assert_eq!(
            changes.modified().keys().map(String::as_str).collect::<Vec<_>>(),
            vec!["b"]
        );
    }

    let result = detect_with(&changes, Some(0.75));
    assert_eq!(
        result.rename_paths(),
        vec![("dir/c", "dir/c-moved")],
        "the cut-off point itself is accepted"
    );
    let pair = &result.renames[0];
    assert_eq!(pair.similarity, 0.75);
    assert!(pair.content_changed);
    assert!(result.pure_adds.is_empty());
    assert!(result.pure_deletes.is_empty());
}

#[test]
fn test_copy_of_modified_file() {
    let fixture = diff_fixture();
    fixture.write("b-copy", "b\nb1\n");
    fixture.append("b", "b2\n");
    fixture.commit("c5 - copy b");
    let changes = changes_of(&fixture, "c5 - copy b");

    let detector = RenameDetector::new(Rewrites {
        copies: Some(rewrite_core::Copies {
            percentage: Some(0.5),
            ..Default::default()
        }),
        ..Default::default()
    })
    .unwrap();
    let result = detector.detect(&changes);

    assert!(result.renames.is_empty());
    assert_eq!(result.copies.len(), 1);
    assert_eq!(result.copies[0].source_path, "b");
    assert_eq!(result.copies[0].new_path, "b-copy");
    assert_eq!(result.copies[0].similarity, 1.0);
}
