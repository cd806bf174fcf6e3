//! Unit quaternion value type and the geodesic distance kernel.
//!
//! A quaternion and its negation represent the same 3-D rotation (the double
//! cover of SO(3)), so all distances here are computed on the absolute value
//! of the inner product, which collapses the q / −q ambiguity.

use std::f64::consts::{FRAC_PI_2, PI};
use std::ops::Neg;

/// A rotation represented as a (nominally unit) quaternion.
///
/// Component order is scalar-first: `(w, x, y, z)`. Unit norm is the
/// caller's responsibility; nothing here renormalizes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quaternion {
    /// Scalar component.
    pub w: f64,
    /// First vector component.
    pub x: f64,
    /// Second vector component.
    pub y: f64,
    /// Third vector component.
    pub z: f64,
}

impl Quaternion {
    /// Construct from components.
    #[must_use]
    pub const fn new(w: f64, x: f64, y: f64, z: f64) -> Self {
        Self { w, x, y, z }
    }

    /// Construct from a `[w, x, y, z]` array.
    #[must_use]
    pub const fn from_array(q: [f64; 4]) -> Self {
        Self::new(q[0], q[1], q[2], q[3])
    }

    /// Components as a `[w, x, y, z]` array.
    #[must_use]
    pub const fn to_array(self) -> [f64; 4] {
        [self.w, self.x, self.y, self.z]
    }

    /// The identity rotation.
    #[must_use]
    pub const fn identity() -> Self {
        Self::new(1.0, 0.0, 0.0, 0.0)
    }

    /// Rotation of `angle` radians about `axis`.
    ///
    /// The axis is normalized internally; a near-zero axis yields the
    /// identity rotation.
    #[must_use]
    pub fn from_axis_angle(axis: [f64; 3], angle: f64) -> Self {
        let norm = (axis[0] * axis[0] + axis[1] * axis[1] + axis[2] * axis[2]).sqrt();
        if norm < 1e-12 {
            return Self::identity();
        }
        let (s, c) = (angle / 2.0).sin_cos();
        Self::new(
            c,
            s * axis[0] / norm,
            s * axis[1] / norm,
            s * axis[2] / norm,
        )
    }

    /// Four-component inner product.
    #[must_use]
    #[inline]
    pub fn dot(&self, other: &Self) -> f64 {
        self.w * other.w + self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Euclidean norm of the four components.
    #[must_use]
    #[inline]
    pub fn norm(&self) -> f64 {
        self.dot(self).sqrt()
    }

    /// Unit-norm copy, or `None` if the norm is too small to divide by.
    #[must_use]
    pub fn normalized(&self) -> Option<Self> {
        let n = self.norm();
        if n < 1e-12 {
            return None;
        }
        Some(Self::new(self.w / n, self.x / n, self.y / n, self.z / n))
    }

    /// Whether all four components are finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.w.is_finite() && self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    /// Geodesic rotation distance to `other`, folded into `[0, π/2]`.
    ///
    /// See [`geodesic_from_dot`] for the distance definition.
    #[must_use]
    pub fn geodesic_distance(&self, other: &Self) -> f64 {
        geodesic_from_dot(self.dot(other))
    }
}

impl Neg for Quaternion {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.w, -self.x, -self.y, -self.z)
    }
}

/// Geodesic rotation distance from a quaternion inner product.
///
/// The steps, applied to the raw dot product of two unit quaternions:
///
/// 1. Take the absolute value, collapsing the q / −q double cover.
/// 2. Clamp to `[0, 1]` — rounding can push the magnitude marginally above
///    1, which would turn the `acos` into NaN.
/// 3. `d = 2·acos(|dot|)`, the rotation-angle distance in `[0, π]`.
/// 4. Fold `d > π/2` to `π − d`, accounting for projection ambiguity, so
///    the result lies in `[0, π/2]`.
#[must_use]
pub fn geodesic_from_dot(dot: f64) -> f64 {
    let cos = dot.abs().min(1.0);
    let d = 2.0 * cos.acos();
    if d > FRAC_PI_2 {
        PI - d
    } else {
        d
    }
}
