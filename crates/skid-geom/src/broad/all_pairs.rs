// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use crate::types::Aabb;

/// Finds every colliding pair within one box set.
///
/// Returns each unordered pair at most once as `(i, j)` with `i < j`,
/// ordered by `i` ascending then `j` ascending. Indices are positions in
/// `boxes`. Touching boxes count as colliding (inclusive faces).
///
/// # Examples
/// ```
/// use skid_geom::{overlaps, Aabb};
/// let boxes = [
///     Aabb::from_corners(0.0, 0.0, 1.0, 1.0),
///     Aabb::from_corners(0.5, 0.5, 1.5, 1.5),
///     Aabb::from_corners(3.0, 3.0, 4.0, 4.0),
/// ];
/// assert_eq!(overlaps(&boxes), vec![(0, 1)]);
/// ```
#[must_use]
pub fn overlaps(boxes: &[Aabb]) -> Vec<(usize, usize)> {
    let mut out: Vec<(usize, usize)> = Vec::new();
    for (i, a) in boxes.iter().enumerate() {
        for (j, b) in boxes.iter().enumerate().skip(i + 1) {
            if a.overlaps(b) {
                out.push((i, j)); // canonical since i < j
            }
        }
    }
    out
}

/// Finds every colliding pair between two box sets.
///
/// Evaluates the full cross product: `i` indexes `first`, `j` indexes
/// `second`, so swapping the arguments transposes the result. Output is
/// row-major: `i` ascending, then `j` ascending.
#[must_use]
pub fn overlaps_between(first: &[Aabb], second: &[Aabb]) -> Vec<(usize, usize)> {
    let mut out: Vec<(usize, usize)> = Vec::new();
    for (i, a) in first.iter().enumerate() {
        for (j, b) in second.iter().enumerate() {
            if a.overlaps(b) {
                out.push((i, j));
            }
        }
    }
    out
}
