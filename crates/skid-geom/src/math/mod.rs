// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Deterministic 2D math primitives.
//!
//! Determinism notes:
//! - Plain `f64` arithmetic without fused multiply-add, so identical inputs
//!   produce identical results across platforms.
//! - No ambient RNG, no epsilon thresholds; exact comparisons are left to
//!   the call sites where they are contractual.

#[doc = "Deterministic 2D vector."]
pub mod vec2;

pub use vec2::Vec2;
