// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Core geometry types.
//!
//! Determinism notes:
//! - Overlap semantics are inclusive on faces so that contact boundaries do
//!   not churn pairs in and out of the broad-phase result.
//! - Boxes are immutable values; resolution returns translated copies and
//!   never mutates caller-owned data.

#[doc = "Axis-aligned bounding boxes (world space)."]
pub mod aabb;

pub use aabb::Aabb;
