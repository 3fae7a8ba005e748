use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{format_component, parse_components, round_to, Point3, Vector2, TOLERANCE};
use crate::error::{Result, VecpathError};

/// A 3D vector value. Serializes as `[x, y, z]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 3]", into = "[f64; 3]")]
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector3 {
    /// The zero vector.
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    /// Creates a new vector from its components.
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Builds a vector from a plain `{x, y, z}` record.
    #[must_use]
    pub fn from_point(point: &Point3) -> Self {
        Self::new(point.x, point.y, point.z)
    }

    /// Returns the plain `{x, y, z}` record.
    #[must_use]
    pub fn to_point(self) -> Point3 {
        Point3::new(self.x, self.y, self.z)
    }

    /// Builds a vector from `[x, y, z]`.
    #[must_use]
    pub const fn from_array(array: [f64; 3]) -> Self {
        Self::new(array[0], array[1], array[2])
    }

    /// Returns `[x, y, z]`.
    #[must_use]
    pub const fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Drops the z component.
    #[must_use]
    pub const fn to_vector2(self) -> Vector2 {
        Vector2::new(self.x, self.y)
    }

    /// Multiplies every component by `factor`.
    #[must_use]
    pub fn scale(self, factor: f64) -> Self {
        Self::new(self.x * factor, self.y * factor, self.z * factor)
    }

    /// Divides every component by `divisor`.
    ///
    /// # Errors
    ///
    /// Returns [`VecpathError::DivisionByZero`] if `divisor` is exactly zero.
    pub fn divide(self, divisor: f64) -> Result<Self> {
        if divisor == 0.0 {
            return Err(VecpathError::DivisionByZero("Vector3"));
        }
        Ok(Self::new(self.x / divisor, self.y / divisor, self.z / divisor))
    }

    /// Dot product.
    #[must_use]
    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Right-handed cross product `self × other`.
    #[must_use]
    pub fn cross(self, other: Self) -> Self {
        let a = nalgebra::Vector3::<f64>::from(self);
        a.cross(&nalgebra::Vector3::<f64>::from(other)).into()
    }

    /// Euclidean length.
    #[must_use]
    pub fn length(self) -> f64 {
        self.length_squared().sqrt()
    }

    /// Squared length, avoiding the square root.
    #[must_use]
    pub fn length_squared(self) -> f64 {
        self.dot(self)
    }

    /// Euclidean distance to `point`, a vector or a [`Point3`] record.
    #[must_use]
    pub fn distance_to<P: Into<Self> + Copy>(self, point: &P) -> f64 {
        self.distance_squared_to(point).sqrt()
    }

    /// Squared distance to `point`.
    #[must_use]
    pub fn distance_squared_to<P: Into<Self> + Copy>(self, point: &P) -> f64 {
        (self - (*point).into()).length_squared()
    }

    /// Returns the unit vector in the same direction.
    ///
    /// Unlike [`Vector2::normalize`], a zero-length vector is returned
    /// unchanged rather than replaced by a fresh zero.
    #[must_use]
    pub fn normalize(self) -> Self {
        let len = self.length();
        if len == 0.0 {
            return self;
        }
        Self::new(self.x / len, self.y / len, self.z / len)
    }

    /// Linear interpolation: `t = 0` gives `self`, `t = 1` gives `target`.
    #[must_use]
    pub fn lerp(self, target: Self, t: f64) -> Self {
        self + (target - self).scale(t)
    }

    /// Rounds each component to `decimals` decimal places.
    ///
    /// Follows the same rules as [`Vector2::round`].
    #[must_use]
    pub fn round(self, decimals: i32) -> Self {
        Self::new(
            round_to(self.x, decimals),
            round_to(self.y, decimals),
            round_to(self.z, decimals),
        )
    }

    /// Floors each component.
    #[must_use]
    pub fn floor(self) -> Self {
        Self::new(self.x.floor(), self.y.floor(), self.z.floor())
    }

    /// Component-wise comparison within [`TOLERANCE`].
    #[must_use]
    pub fn approx_eq(self, other: Self) -> bool {
        (self - other).to_array().iter().all(|d| d.abs() < TOLERANCE)
    }

    /// Arithmetic mean of `vectors`.
    ///
    /// # Errors
    ///
    /// Returns [`VecpathError::EmptyInput`] if `vectors` is empty.
    #[allow(clippy::cast_precision_loss)]
    pub fn center(vectors: &[Self]) -> Result<Self> {
        if vectors.is_empty() {
            return Err(VecpathError::EmptyInput(
                "cannot compute the center of zero vectors",
            ));
        }
        let sum = vectors.iter().fold(Self::ZERO, |acc, &v| acc + v);
        Ok(sum.scale(1.0 / vectors.len() as f64))
    }

    /// Returns the candidate nearest to `self`; first wins on ties.
    #[must_use]
    pub fn closest<'a>(self, candidates: &'a [Self]) -> Option<&'a Self> {
        let mut best: Option<(&Self, f64)> = None;
        for candidate in candidates {
            let d = self.distance_squared_to(candidate);
            match best {
                Some((_, best_d)) if d >= best_d => {}
                _ => best = Some((candidate, d)),
            }
        }
        best.map(|(v, _)| v)
    }
}

impl Add for Vector3 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vector3 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f64> for Vector3 {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        self.scale(rhs)
    }
}

impl Neg for Vector3 {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl From<[f64; 3]> for Vector3 {
    fn from(array: [f64; 3]) -> Self {
        Self::from_array(array)
    }
}

impl From<Vector3> for [f64; 3] {
    fn from(v: Vector3) -> Self {
        v.to_array()
    }
}

impl From<Point3> for Vector3 {
    fn from(p: Point3) -> Self {
        Self::from_point(&p)
    }
}

impl From<Vector3> for Point3 {
    fn from(v: Vector3) -> Self {
        v.to_point()
    }
}

impl From<Vector2> for Vector3 {
    fn from(v: Vector2) -> Self {
        v.to_vector3(0.0)
    }
}

impl From<nalgebra::Vector3<f64>> for Vector3 {
    fn from(v: nalgebra::Vector3<f64>) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<Vector3> for nalgebra::Vector3<f64> {
    fn from(v: Vector3) -> Self {
        nalgebra::Vector3::new(v.x, v.y, v.z)
    }
}

impl From<nalgebra::Point3<f64>> for Vector3 {
    fn from(p: nalgebra::Point3<f64>) -> Self {
        Self::new(p.x, p.y, p.z)
    }
}

impl From<Vector3> for nalgebra::Point3<f64> {
    fn from(v: Vector3) -> Self {
        nalgebra::Point3::new(v.x, v.y, v.z)
    }
}

impl TryFrom<&[f64]> for Vector3 {
    type Error = VecpathError;

    fn try_from(slice: &[f64]) -> Result<Self> {
        match slice {
            [x, y, z] => Ok(Self::new(*x, *y, *z)),
            _ => Err(VecpathError::Parse(format!(
                "expected 3 coordinates, got {}",
                slice.len()
            ))),
        }
    }
}

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{},{}",
            format_component(self.x),
            format_component(self.y),
            format_component(self.z)
        )
    }
}

impl FromStr for Vector3 {
    type Err = VecpathError;

    fn from_str(s: &str) -> Result<Self> {
        parse_components::<3>(s).map(Self::from_array)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn cross_of_basis_vectors() {
        let x = Vector3::new(1.0, 0.0, 0.0);
        let y = Vector3::new(0.0, 1.0, 0.0);
        assert_eq!(x.cross(y), Vector3::new(0.0, 0.0, 1.0));
        assert_eq!(y.cross(x), Vector3::new(0.0, 0.0, -1.0));
    }

    #[test]
    fn length_and_distance() {
        let v = Vector3::new(2.0, 3.0, 6.0);
        assert_abs_diff_eq!(v.length(), 7.0);
        assert_abs_diff_eq!(v.distance_to(&Vector3::ZERO), 7.0);
        assert_abs_diff_eq!(v.distance_squared_to(&Vector3::new(2.0, 3.0, 0.0)), 36.0);
    }

    #[test]
    fn distance_to_point_record() {
        let v = Vector3::new(1.0, 2.0, 2.0);
        assert_abs_diff_eq!(v.distance_to(&Point3::new(0.0, 0.0, 0.0)), 3.0);
        assert_abs_diff_eq!(v.distance_squared_to(&Point3::new(1.0, 2.0, 0.0)), 4.0);
        assert_abs_diff_eq!(v.distance_to(&Vector3::ZERO), 3.0);
    }

    #[test]
    fn round_extreme_precision_is_finite() {
        let v = Vector3::new(1.5, -2.0, 0.25);
        assert_eq!(v.round(400), v);
        assert_eq!(v.round(-400), Vector3::ZERO);
        assert_eq!(
            Vector3::new(1e300, 1.0, -1e300).round(20),
            Vector3::new(1e300, 1.0, -1e300)
        );
    }

    #[test]
    fn normalize_unit_length() {
        let n = Vector3::new(0.0, 3.0, 4.0).normalize();
        assert!(n.approx_eq(Vector3::new(0.0, 0.6, 0.8)), "n={n:?}");
    }

    #[test]
    fn normalize_zero_returns_self() {
        let zero = Vector3::new(0.0, -0.0, 0.0);
        let n = zero.normalize();
        assert!(n.y.is_sign_negative());
        assert_eq!(n.to_array().map(f64::to_bits), zero.to_array().map(f64::to_bits));
    }

    #[test]
    fn divide_by_zero_fails() {
        assert_eq!(
            Vector3::new(1.0, 2.0, 3.0).divide(0.0),
            Err(VecpathError::DivisionByZero("Vector3"))
        );
        assert_eq!(
            Vector3::new(2.0, 4.0, 6.0).divide(2.0).unwrap(),
            Vector3::new(1.0, 2.0, 3.0)
        );
    }

    #[test]
    fn lerp_round_floor() {
        let a = Vector3::ZERO;
        let b = Vector3::new(2.0, 4.0, -6.0);
        assert_eq!(a.lerp(b, 0.5), Vector3::new(1.0, 2.0, -3.0));
        assert_eq!(
            Vector3::new(1.005, 2.449, -0.5).round(1),
            Vector3::new(1.0, 2.4, -0.5)
        );
        assert_eq!(Vector3::new(1.5, -1.5, 0.0).floor(), Vector3::new(1.0, -2.0, 0.0));
    }

    #[test]
    fn center_and_closest() {
        let vs = [Vector3::new(0.0, 0.0, 0.0), Vector3::new(2.0, 2.0, 2.0)];
        assert_eq!(Vector3::center(&vs).unwrap(), Vector3::new(1.0, 1.0, 1.0));
        assert!(Vector3::center(&[]).is_err());
        assert_eq!(Vector3::new(1.5, 1.5, 1.5).closest(&vs), Some(&vs[1]));
        assert_eq!(Vector3::ZERO.closest(&[]), None);
    }

    #[test]
    fn two_d_conversions() {
        let v = Vector3::new(1.0, 2.0, 3.0);
        assert_eq!(v.to_vector2(), Vector2::new(1.0, 2.0));
        assert_eq!(Vector3::from(Vector2::new(1.0, 2.0)), Vector3::new(1.0, 2.0, 0.0));
    }

    #[test]
    fn encodings() {
        let v = Vector3::new(1.0, -2.0, 0.5);
        assert_eq!(Vector3::from_point(&v.to_point()), v);
        assert_eq!(Vector3::from_array(v.to_array()), v);
        assert_eq!(v.to_string(), "1,-2,0.5");
        assert_eq!("1,-2,0.5".parse::<Vector3>().unwrap(), v);
        assert_eq!(serde_json::to_string(&v).unwrap(), "[1.0,-2.0,0.5]");
        assert!(Vector3::try_from(&[1.0, 2.0][..]).is_err());
    }
}
