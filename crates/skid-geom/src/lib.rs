// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! skid-geom: deterministic 2D AABB collision resolution.
//!
//! This crate provides:
//! - A 2D axis-aligned bounding box (`Aabb`) and vector (`Vec2`).
//! - Brute-force all-pairs overlap detection over one or two box sets.
//! - A "slide" narrow-phase resolver for one moving/static pair.
//! - Per-pair impact timing for ordering multiple candidate collisions.
//!
//! Design notes:
//! - Deterministic: pure functions of their inputs; pair output ordering is
//!   canonical (`i` ascending, then `j`).
//! - Overlap is inclusive on faces; touching boxes count as colliding.
//! - Float64 throughout; the impact-time sentinel (`-1e90`) is not
//!   representable in `f32`, so the whole surface commits to double
//!   precision.
#![forbid(unsafe_code)]
#![deny(missing_docs, rust_2018_idioms, unused_must_use)]
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::cargo,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro,
    clippy::print_stdout,
    clippy::print_stderr
)]
#![allow(
    clippy::must_use_candidate,
    clippy::return_self_not_must_use,
    clippy::unreadable_literal,
    clippy::missing_const_for_fn,
    clippy::suboptimal_flops,
    clippy::many_single_char_names,
    clippy::module_name_repetitions,
    clippy::similar_names
)]
// Exact comparison against zero is contractual in the slide/impact logic
// (`overlap == 0`, `velocity == 0`); see the narrow module docs.
#![allow(clippy::float_cmp)]

/// All-pairs overlap detection (broad phase).
pub mod broad;
/// Deterministic 2D math primitives.
pub mod math;
/// Slide resolution for a single colliding pair (narrow phase).
pub mod narrow;
/// Impact timing used to order candidate collisions.
pub mod temporal;
/// Foundational geometric types.
pub mod types;

pub use broad::all_pairs::{overlaps, overlaps_between};
pub use math::vec2::Vec2;
pub use narrow::slide::{slide, SlideResponse};
pub use temporal::impact::{time_to_collisions, ImpactError};
pub use types::aabb::Aabb;
