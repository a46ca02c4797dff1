// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! All-pairs overlap detection over box sets.
//!
//! Determinism contract:
//! - Single-set pair identity is canonical `(i, j)` with `i < j`; no
//!   self-pairs, no mirrored duplicates.
//! - Emitted pair lists are ordered by `i` ascending, then `j` ascending
//!   (row-major over the pair matrix).
//! - Overlap is inclusive on faces (touching AABBs are reported).
//!
//! This is a brute-force `O(n·m)` scan by design. Acceleration structures
//! (grids, trees, sweep-and-prune) are out of scope for this library;
//! callers with large worlds should prune candidates before handing boxes
//! over.

#[doc = "Brute-force pair scans over one or two box sets."]
pub mod all_pairs;

pub use all_pairs::{overlaps, overlaps_between};
