// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use thiserror::Error;

use crate::math::Vec2;
use crate::narrow::slide::{axis_crossing_time, directed_overlap};
use crate::types::Aabb;

/// Errors surfaced by [`time_to_collisions`] input validation.
///
/// Validation is caller-fatal: a failed call returns no partial results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ImpactError {
    /// The relative-velocity list does not pair up with the collision list.
    #[error("velocity count does not match pair count")]
    VelocityCountMismatch {
        /// Number of candidate pairs supplied.
        pairs: usize,
        /// Number of relative velocities supplied.
        velocities: usize,
    },
    /// A candidate pair names a box index outside the box set.
    #[error("pair index out of range")]
    PairOutOfRange {
        /// Position of the offending pair in the pair list.
        pair: usize,
        /// Number of boxes supplied.
        boxes: usize,
    },
}

/// Estimates a signed crossing time for each candidate pair.
///
/// For each pair `(i, j)`, taken in lockstep with its relative velocity,
/// `boxes[i]` is treated as the moving box and `boxes[j]` as the static
/// one. The directed face gaps are built exactly as in
/// [`crate::narrow::slide`]; both axis crossing times are then measured
/// against the x component of the relative velocity, and the smaller of
/// the two is reported. More-negative values crossed longer ago and should
/// be resolved first. With a zero x component, any still-open gap yields
/// the `-1e90` sentinel, which then wins the min.
///
/// # Errors
/// [`ImpactError::VelocityCountMismatch`] if the two lockstep lists differ
/// in length; [`ImpactError::PairOutOfRange`] if a pair indexes outside
/// `boxes`.
pub fn time_to_collisions(
    boxes: &[Aabb],
    pairs: &[(usize, usize)],
    relative_velocities: &[Vec2],
) -> Result<Vec<f64>, ImpactError> {
    if pairs.len() != relative_velocities.len() {
        return Err(ImpactError::VelocityCountMismatch {
            pairs: pairs.len(),
            velocities: relative_velocities.len(),
        });
    }

    let mut out = Vec::with_capacity(pairs.len());
    for (k, (&(i, j), velocity)) in pairs.iter().zip(relative_velocities).enumerate() {
        if i >= boxes.len() || j >= boxes.len() {
            return Err(ImpactError::PairOutOfRange {
                pair: k,
                boxes: boxes.len(),
            });
        }
        let (ox, oy) = directed_overlap(&boxes[i], &boxes[j], *velocity);
        let [vx, _] = velocity.to_array();
        // Both axes share the x-component time scale; the earlier crossing
        // ranks the pair.
        let time_since_x = axis_crossing_time(ox, vx);
        let time_since_y = axis_crossing_time(oy, vx);
        out.push(time_since_x.min(time_since_y));
    }
    Ok(out)
}
