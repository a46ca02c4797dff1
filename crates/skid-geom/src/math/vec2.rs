// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// Deterministic 2D vector used for positions, extents, and velocities.
///
/// * Arithmetic is plain `f64`; callers must ensure values are finite.
/// * Whether a value is a point offset or a velocity depends on the calling
///   context.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Vec2 {
    data: [f64; 2],
}

impl Vec2 {
    /// The zero vector.
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Creates a vector from components.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { data: [x, y] }
    }

    /// Returns the components as an `[x, y]` array.
    pub fn to_array(self) -> [f64; 2] {
        self.data
    }
}

impl Add for Vec2 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.data[0] + rhs.data[0], self.data[1] + rhs.data[1])
    }
}

impl AddAssign for Vec2 {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for Vec2 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.data[0] - rhs.data[0], self.data[1] - rhs.data[1])
    }
}

impl SubAssign for Vec2 {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Mul<f64> for Vec2 {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self::new(self.data[0] * rhs, self.data[1] * rhs)
    }
}

impl Mul<Vec2> for f64 {
    type Output = Vec2;

    fn mul(self, rhs: Vec2) -> Vec2 {
        rhs * self
    }
}

impl MulAssign<f64> for Vec2 {
    fn mul_assign(&mut self, rhs: f64) {
        *self = *self * rhs;
    }
}

impl Neg for Vec2 {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.data[0], -self.data[1])
    }
}

/// Converts a 2-element `[f64; 2]` array into a `Vec2` interpreted as `(x, y)`.
///
/// # Examples
/// ```
/// use skid_geom::Vec2;
/// let v = Vec2::from([1.0, 2.0]);
/// assert_eq!(v.to_array(), [1.0, 2.0]);
/// ```
impl From<[f64; 2]> for Vec2 {
    fn from(value: [f64; 2]) -> Self {
        Self { data: value }
    }
}
