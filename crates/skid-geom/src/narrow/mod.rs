// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Narrow-phase slide resolution.
//!
//! Resolution contract:
//! - Exactly one pair per call; sequencing across many pairs belongs to the
//!   caller (rank candidates with [`crate::temporal`] first if order
//!   matters).
//! - The axis comparison is strict `<`; ties resolve to the x-correction
//!   branch.
//! - An axis with zero velocity and an open gap gets the `-1e90` crossing
//!   sentinel and therefore never blocks.
//!
//! These rules are boundary-sensitive (exact edge alignment, one-axis-still
//! motion) and are pinned by tests; do not relax the comparisons to
//! epsilon-based ones.

#[doc = "Slide resolution for one moving box against one static box."]
pub mod slide;

pub use slide::{slide, SlideResponse};
