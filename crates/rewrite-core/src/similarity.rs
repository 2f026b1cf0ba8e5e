//! Line-based content similarity

use similar::{Algorithm, DiffOp, TextDiff};

use crate::blob::Blob;

/// Similarity of two blobs in `[0, 1]`.
///
/// Both blobs are split into lines (terminators included) and diffed with
/// Myers. The score is the number of unchanged lines divided by the line
/// count of the longer blob, so appending one line to a three line file
/// scores `0.75`. Identical ids score `1.0` without diffing.
///
/// The pair is ordered by id before diffing, making the score independent
/// of argument order.
pub fn similarity(a: &Blob, b: &Blob) -> f32 {
    if a.id() == b.id() {
        return 1.0;
    }
    let (old, new) = if a.id() <= b.id() { (a, b) } else { (b, a) };

    let diff = TextDiff::configure()
        .algorithm(Algorithm::Myers)
        .diff_lines(old.data(), new.data());

    let total = diff.old_slices().len().max(diff.new_slices().len());
    if total == 0 {
        return 1.0;
    }

    let unchanged: usize = diff
        .ops()
        .iter()
        .map(|op| match *op {
            DiffOp::Equal { len, .. } => len,
            _ => 0,
        })
        .sum();

    unchanged as f32 / total as f32
}
