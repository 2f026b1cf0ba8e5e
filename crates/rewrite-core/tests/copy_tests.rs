//! Tests for copy tracking among changed files

use pretty_assertions::assert_eq;
use rewrite_core::{ChangeSet, Copies, CopyPair, RenameDetector, Rewrites};

fn copy_detector(percentage: Option<f32>) -> RenameDetector {
    RenameDetector::new(Rewrites {
        copies: Some(Copies {
            percentage,
            ..Default::default()
        }),
        ..Default::default()
    })
    .unwrap()
}

#[test]
fn test_identical_copy_of_modified_file() {
    let changes = ChangeSet::new()
        .with_modified("b", "b\n", "b\nb1\n")
        .with_added("b-copy", "b\n");

    let result = copy_detector(None).detect(&changes);

    assert!(result.renames.is_empty());
    assert_eq!(
        result.copies,
        vec![CopyPair {
            source_path: "b".to_string(),
            new_path: "b-copy".to_string(),
            similarity: 1.0,
            content_changed: false,
        }]
    );
    assert!(result.pure_adds.is_empty());
}

#[test]
fn test_rename_source_can_also_be_copied() {
    let changes = ChangeSet::new()
        .with_removed("a", "a\n")
        .with_added("a1", "a\n")
        .with_added("a2", "a\n");

    let result = copy_detector(None).detect(&changes);

    assert_eq!(result.rename_paths(), vec![("a", "a1")]);
    assert_eq!(result.copies.len(), 1);
    assert_eq!(result.copies[0].source_path, "a");
    assert_eq!(result.copies[0].new_path, "a2");
    assert!(result.pure_adds.is_empty());
    assert!(result.pure_deletes.is_empty());
}

#[test]
fn test_similar_copy_picks_best_source() {
    let changes = ChangeSet::new()
        .with_modified("far", "p\nq\nx\ny\n", "changed\n")
        .with_modified("near", "p\nq\nr\ns\n", "changed too\n")
        .with_added("copy", "p\nq\nr\nt\n");

    let result = copy_detector(Some(0.5)).detect(&changes);

    assert_eq!(result.copies.len(), 1);
    let copy = &result.copies[0];
    assert_eq!(copy.source_path, "near");
    assert_eq!(copy.similarity, 0.75);
    assert!(copy.content_changed);
}

#[test]
fn test_identity_only_copies_ignore_similar_content() {
    let changes = ChangeSet::new()
        .with_modified("near", "p\nq\nr\ns\n", "changed\n")
        .with_added("copy", "p\nq\nr\nt\n");

    let result = copy_detector(None).detect(&changes);

    assert!(result.copies.is_empty());
    assert_eq!(result.pure_adds.iter().collect::<Vec<_>>(), vec!["copy"]);
}

#[test]
fn test_copies_disabled_by_default() {
    let changes = ChangeSet::new()
        .with_modified("b", "b\n", "b\nb1\n")
        .with_added("b-copy", "b\n");

    let result = RenameDetector::default().detect(&changes);

    assert!(result.copies.is_empty());
    assert_eq!(result.pure_adds.iter().collect::<Vec<_>>(), vec!["b-copy"]);
}

#[test]
fn test_copies_without_sources() {
    let changes = ChangeSet::new().with_added("new", "n\n");

    let result = copy_detector(Some(0.5)).detect(&changes);

    assert!(result.copies.is_empty());
    assert_eq!(result.pure_adds.len(), 1);
}

#[test]
fn test_modified_path_is_never_its_own_copy() {
    let changes = ChangeSet::new()
        .with_modified("a", "x\n", "y\n")
        .with_added("a", "x\ny\n")
        .with_added("a-copy", "x\n");

    let result = copy_detector(Some(0.5)).detect(&changes);

    assert!(result.copies.iter().all(|copy| copy.new_path != copy.source_path));
    assert_eq!(
        result
            .copies
            .iter()
            .map(|copy| (copy.source_path.as_str(), copy.new_path.as_str()))
            .collect::<Vec<_>>(),
        vec![("a", "a-copy")]
    );
    assert!(result.pure_adds.is_empty());
}
