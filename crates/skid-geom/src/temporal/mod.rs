// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Impact timing used to rank candidate collisions before resolution.
//!
//! Timing contract:
//! - Each pair's estimate is the smaller of its two per-axis crossing
//!   times, both measured in units of the x component of that pair's
//!   relative velocity (the two axis times share one scale).
//! - More-negative values crossed longer ago and sort first; `-1e90` marks
//!   an axis that cannot close its gap under the given component.

#[doc = "Per-pair time-since-crossing estimates and their validation error."]
pub mod impact;

pub use impact::{time_to_collisions, ImpactError};
