// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use crate::math::Vec2;
use crate::types::Aabb;

/// Crossing time assigned to an axis whose velocity is zero while a gap to
/// the boundary remains. Large and negative so the axis can never be the
/// most recent crossing and therefore never blocks.
pub(crate) const NEVER: f64 = -1e90;

/// Result of one slide resolution: the corrected box and velocity.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SlideResponse {
    aabb: Aabb,
    velocity: Vec2,
}

impl SlideResponse {
    const fn new(aabb: Aabb, velocity: Vec2) -> Self {
        Self { aabb, velocity }
    }

    /// Returns the corrected box.
    #[must_use]
    pub fn aabb(&self) -> Aabb {
        self.aabb
    }

    /// Returns the corrected velocity.
    #[must_use]
    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }
}

/// Resolves a collision between `moving` and `obstacle` with a slide
/// response.
///
/// A slide zeroes the velocity component perpendicular to the struck face
/// and preserves the component parallel to it. The box is translated onto
/// the struck face along the zeroed axis only; the surviving velocity
/// component passes through bit-identically.
///
/// With zero `velocity` there is no motion to attribute the overlap to:
/// the box is popped out along the single axis with the smaller separation
/// and the returned velocity is zero. Separation ties push toward +axis;
/// an axis tie pops out along y.
///
/// # Examples
/// ```
/// use skid_geom::{slide, Aabb, Vec2};
///
/// // Moving right and climbing, the box has sunk into a wall ahead of it.
/// let moving = Aabb::from_corners(1.0, 0.25, 2.0, 1.25);
/// let wall = Aabb::from_corners(1.5, 0.5, 2.5, 1.5);
/// let resp = slide(moving, wall, Vec2::new(1.0, 0.25));
/// assert_eq!(resp.aabb(), Aabb::from_corners(0.5, 0.25, 1.5, 1.25));
/// assert_eq!(resp.velocity(), Vec2::new(0.0, 0.25));
/// ```
pub fn slide(moving: Aabb, obstacle: Aabb, velocity: Vec2) -> SlideResponse {
    if velocity == Vec2::ZERO {
        return pop_out_minimum_direction(moving, obstacle);
    }

    let [vx, vy] = velocity.to_array();
    let (ox, oy) = directed_overlap(&moving, &obstacle, velocity);

    let time_since_x = axis_crossing_time(ox, vx);
    let time_since_y = axis_crossing_time(oy, vy);

    // Whichever axis crossed its boundary more recently is the blocking
    // one; the other axis keeps its motion.
    if time_since_x < time_since_y {
        return SlideResponse::new(
            moving.translated(Vec2::new(0.0, oy)),
            Vec2::new(vx, 0.0),
        );
    }
    SlideResponse::new(moving.translated(Vec2::new(ox, 0.0)), Vec2::new(0.0, vy))
}

/// Signed gap from each of `moving`'s leading faces to the `obstacle` face
/// it is moving toward. Positive while the boundary is still ahead,
/// negative once it has been passed by that amount. A zero axis velocity
/// reads as "moving toward -axis" for face selection.
pub(crate) fn directed_overlap(moving: &Aabb, obstacle: &Aabb, velocity: Vec2) -> (f64, f64) {
    let [ax1, ay1] = moving.min().to_array();
    let [ax2, ay2] = moving.max().to_array();
    let [bx1, by1] = obstacle.min().to_array();
    let [bx2, by2] = obstacle.max().to_array();
    let [vx, vy] = velocity.to_array();

    let ox = if vx > 0.0 { bx1 - ax2 } else { bx2 - ax1 };
    let oy = if vy > 0.0 { by1 - ay2 } else { by2 - ay1 };
    (ox, oy)
}

/// Signed time since (negative) or until (positive) the axis boundary
/// crossing, in units of the axis velocity.
///
/// Exactly zero overlap means the box sits exactly on the boundary now;
/// zero velocity with a gap open yields the [`NEVER`] sentinel.
pub(crate) fn axis_crossing_time(overlap: f64, velocity: f64) -> f64 {
    if overlap == 0.0 {
        return 0.0;
    }
    if velocity == 0.0 {
        return NEVER;
    }
    overlap / velocity
}

/// Moves `moving` the minimum single-axis distance that separates it from
/// `obstacle`. Not the true 2D minimum-translation vector: only one axis
/// changes.
fn pop_out_minimum_direction(moving: Aabb, obstacle: Aabb) -> SlideResponse {
    let [ax1, ay1] = moving.min().to_array();
    let [ax2, ay2] = moving.max().to_array();
    let [bx1, by1] = obstacle.min().to_array();
    let [bx2, by2] = obstacle.max().to_array();

    let (push_left, push_right) = (bx1 - ax2, bx2 - ax1);
    let ox = if push_left.abs() < push_right.abs() {
        push_left
    } else {
        push_right
    };

    let (push_down, push_up) = (by1 - ay2, by2 - ay1);
    let oy = if push_down.abs() < push_up.abs() {
        push_down
    } else {
        push_up
    };

    if ox.abs() < oy.abs() {
        return SlideResponse::new(moving.translated(Vec2::new(ox, 0.0)), Vec2::ZERO);
    }
    SlideResponse::new(moving.translated(Vec2::new(0.0, oy)), Vec2::ZERO)
}
