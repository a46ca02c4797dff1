// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use crate::math::Vec2;

/// Axis-aligned bounding box in world coordinates.
///
/// Invariants:
/// - `min` components are less than or equal to `max` components.
///   Zero-width or zero-height boxes are valid.
/// - Corners are `(x1, y1)` lower-left and `(x2, y2)` upper-right.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Aabb {
    min: Vec2,
    max: Vec2,
}

impl Aabb {
    /// Constructs an AABB from its minimum and maximum corners.
    ///
    /// # Panics
    /// Panics if any component of `min` is greater than its counterpart in
    /// `max`.
    #[must_use]
    pub fn new(min: Vec2, max: Vec2) -> Self {
        let a = min.to_array();
        let b = max.to_array();
        assert!(a[0] <= b[0] && a[1] <= b[1], "invalid AABB: min > max");
        Self { min, max }
    }

    /// Constructs an AABB from corner scalars `(x1, y1)`, `(x2, y2)`.
    ///
    /// # Panics
    /// Panics if `x1 > x2` or `y1 > y2`.
    #[must_use]
    pub fn from_corners(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self::new(Vec2::new(x1, y1), Vec2::new(x2, y2))
    }

    /// Builds an AABB centered at `center` with half-extents `hx, hy`.
    #[must_use]
    pub fn from_center_half_extents(center: Vec2, hx: f64, hy: f64) -> Self {
        let he = Vec2::new(hx, hy);
        Self::new(center - he, center + he)
    }

    /// Returns the minimum corner.
    #[must_use]
    pub fn min(&self) -> Vec2 {
        self.min
    }

    /// Returns the maximum corner.
    #[must_use]
    pub fn max(&self) -> Vec2 {
        self.max
    }

    /// Returns `true` if this AABB overlaps another (inclusive on faces).
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        let a_min = self.min.to_array();
        let a_max = self.max.to_array();
        let b_min = other.min.to_array();
        let b_max = other.max.to_array();
        // Inclusive so touching faces count as contact.
        a_min[0] <= b_max[0]
            && a_max[0] >= b_min[0]
            && a_min[1] <= b_max[1]
            && a_max[1] >= b_min[1]
    }

    /// Returns this box translated by `offset`.
    #[must_use]
    pub fn translated(&self, offset: Vec2) -> Self {
        Self { min: self.min + offset, max: self.max + offset }
    }
}
