//! 2D affine transform value type

use std::f64::consts::TAU;
use std::ops::Mul;

use glam::DAffine2;

use crate::types::Point;

/// An immutable 2D affine transform.
///
/// Builder-style methods return a new value composed by right-multiplication,
/// so `Affine::IDENTITY.translate(c).rotate(a).translate(-c)` reads in the
/// same order as the operations applied to a point, last call first.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Affine(DAffine2);

impl Affine {
    pub const IDENTITY: Affine = Affine(DAffine2::IDENTITY);

    pub fn translation(offset: Point) -> Self {
        Affine(DAffine2::from_translation(offset))
    }

    /// Rotation by `angle` radians about the origin.
    pub fn rotation(angle: f64) -> Self {
        Affine(DAffine2::from_angle(angle))
    }

    /// Rotation by `angle` radians about `pivot`.
    pub fn rotation_about(pivot: Point, angle: f64) -> Self {
        Self::IDENTITY.translate(pivot).rotate(angle).translate(-pivot)
    }

    /// Rotation by `turns` full turns about `pivot`.
    pub fn turn_about(pivot: Point, turns: f64) -> Self {
        Self::rotation_about(pivot, turns * TAU)
    }

    pub fn translate(self, offset: Point) -> Self {
        self * Self::translation(offset)
    }

    pub fn rotate(self, angle: f64) -> Self {
        self * Self::rotation(angle)
    }

    /// Apply `self` after `first`.
    pub fn then(self, first: Affine) -> Self {
        self * first
    }

    #[inline]
    pub fn transform_point(&self, point: Point) -> Point {
        self.0.transform_point2(point)
    }

    pub fn abs_diff_eq(&self, other: Affine, max_abs_diff: f64) -> bool {
        self.0.abs_diff_eq(other.0, max_abs_diff)
    }

    pub fn as_daffine2(&self) -> DAffine2 {
        self.0
    }
}

impl Default for Affine {
    fn default() -> Self {
        Affine::IDENTITY
    }
}

impl Mul for Affine {
    type Output = Affine;
    fn mul(self, rhs: Affine) -> Affine {
        Affine(self.0 * rhs.0)
    }
}

impl From<DAffine2> for Affine {
    fn from(value: DAffine2) -> Self {
        Affine(value)
    }
}
