use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{
    format_component, parse_components, round_to, Point2, PointLike, Vector3, TOLERANCE,
};
use crate::error::{Result, VecpathError};

/// A 2D vector value.
///
/// Every operation returns a fresh value except [`Vector2::translate`],
/// which shifts the vector in place. Serializes as the pair `[x, y]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Vector2 {
    pub x: f64,
    pub y: f64,
}

impl Vector2 {
    /// The zero vector.
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Creates a new vector from its components.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Builds a vector from any point-like value, dropping extra fields.
    #[must_use]
    pub fn from_point(point: &impl PointLike) -> Self {
        Self::new(point.x(), point.y())
    }

    /// Returns the plain `{x, y}` record.
    #[must_use]
    pub fn to_point(self) -> Point2 {
        Point2::new(self.x, self.y)
    }

    /// Builds a vector from the pair `[x, y]`.
    #[must_use]
    pub const fn from_array(array: [f64; 2]) -> Self {
        Self::new(array[0], array[1])
    }

    /// Returns the pair `[x, y]`.
    #[must_use]
    pub const fn to_array(self) -> [f64; 2] {
        [self.x, self.y]
    }

    /// Returns the unit vector pointing at `radians` from the positive x-axis.
    #[must_use]
    pub fn from_angle(radians: f64) -> Self {
        let (sin, cos) = radians.sin_cos();
        Self::new(cos, sin)
    }

    /// Lifts this vector into 3D with the given `z`.
    #[must_use]
    pub const fn to_vector3(self, z: f64) -> Vector3 {
        Vector3::new(self.x, self.y, z)
    }

    /// Multiplies both components by `factor`.
    #[must_use]
    pub fn scale(self, factor: f64) -> Self {
        Self::new(self.x * factor, self.y * factor)
    }

    /// Divides both components by `divisor`.
    ///
    /// # Errors
    ///
    /// Returns [`VecpathError::DivisionByZero`] if `divisor` is exactly zero.
    pub fn divide(self, divisor: f64) -> Result<Self> {
        if divisor == 0.0 {
            return Err(VecpathError::DivisionByZero("Vector2"));
        }
        Ok(Self::new(self.x / divisor, self.y / divisor))
    }

    /// Dot product.
    #[must_use]
    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Z component of the 3D cross product `self × other`.
    ///
    /// Positive when `other` lies counter-clockwise of `self`.
    #[must_use]
    pub fn cross(self, other: Self) -> f64 {
        self.x * other.y - self.y * other.x
    }

    /// Returns the vector rotated a quarter turn counter-clockwise.
    #[must_use]
    pub fn perpendicular(self) -> Self {
        Self::new(-self.y, self.x)
    }

    /// Euclidean length.
    #[must_use]
    pub fn length(self) -> f64 {
        self.length_squared().sqrt()
    }

    /// Squared length, avoiding the square root.
    #[must_use]
    pub fn length_squared(self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    /// Euclidean distance to `point`.
    #[must_use]
    pub fn distance_to(self, point: &impl PointLike) -> f64 {
        self.distance_squared_to(point).sqrt()
    }

    /// Squared distance to `point`.
    #[must_use]
    pub fn distance_squared_to(self, point: &impl PointLike) -> f64 {
        let dx = self.x - point.x();
        let dy = self.y - point.y();
        dx * dx + dy * dy
    }

    /// Returns the unit vector in the same direction.
    ///
    /// The zero vector normalizes to [`Vector2::ZERO`].
    #[must_use]
    pub fn normalize(self) -> Self {
        let len = self.length();
        if len == 0.0 {
            return Self::ZERO;
        }
        Self::new(self.x / len, self.y / len)
    }

    /// Linear interpolation: `t = 0` gives `self`, `t = 1` gives `target`.
    #[must_use]
    pub fn lerp(self, target: Self, t: f64) -> Self {
        Self::new(
            self.x + (target.x - self.x) * t,
            self.y + (target.y - self.y) * t,
        )
    }

    /// Rotates counter-clockwise about the origin by `radians`.
    #[must_use]
    pub fn rotate(self, radians: f64) -> Self {
        let rotated = nalgebra::Rotation2::new(radians) * nalgebra::Vector2::<f64>::from(self);
        rotated.into()
    }

    /// Rounds each component to `decimals` decimal places.
    ///
    /// Halfway cases round away from zero, as [`f64::round`] does. A
    /// precision too fine to represent leaves the component unchanged.
    #[must_use]
    pub fn round(self, decimals: i32) -> Self {
        Self::new(round_to(self.x, decimals), round_to(self.y, decimals))
    }

    /// Floors each component.
    #[must_use]
    pub fn floor(self) -> Self {
        Self::new(self.x.floor(), self.y.floor())
    }

    /// Angle from the positive x-axis in `(-π, π]`.
    #[must_use]
    pub fn angle(self) -> f64 {
        self.y.atan2(self.x)
    }

    /// Angle of the vector pointing from `self` to `target`.
    #[must_use]
    pub fn angle_to(self, target: &impl PointLike) -> f64 {
        (target.y() - self.y).atan2(target.x() - self.x)
    }

    /// Shifts this vector in place by raw deltas.
    ///
    /// This is the only mutating operation on the type.
    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.x += dx;
        self.y += dy;
    }

    /// Component-wise comparison within [`TOLERANCE`].
    #[must_use]
    pub fn approx_eq(self, other: Self) -> bool {
        (self.x - other.x).abs() < TOLERANCE && (self.y - other.y).abs() < TOLERANCE
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

    /// Returns the candidate nearest to `self` by squared distance.
    ///
    /// Scans every candidate; the first of several equally near candidates wins.
    /// Returns `None` for an empty slice.
    #[must_use]
    pub fn closest<'a, P: PointLike>(self, candidates: &'a [P]) -> Option<&'a P> {
        let mut best: Option<(&P, f64)> = None;
        for candidate in candidates {
            let d = self.distance_squared_to(candidate);
            match best {
                Some((_, best_d)) if d >= best_d => {}
                _ => best = Some((candidate, d)),
            }
        }
        best.map(|(p, _)| p)
    }
}

impl Add for Vector2 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vector2 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Vector2 {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        self.scale(rhs)
    }
}

impl Neg for Vector2 {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl From<[f64; 2]> for Vector2 {
    fn from(array: [f64; 2]) -> Self {
        Self::from_array(array)
    }
}

impl From<Vector2> for [f64; 2] {
    fn from(v: Vector2) -> Self {
        v.to_array()
    }
}

impl From<Point2> for Vector2 {
    fn from(p: Point2) -> Self {
        Self::new(p.x, p.y)
    }
}

impl From<Vector2> for Point2 {
    fn from(v: Vector2) -> Self {
        v.to_point()
    }
}

impl From<nalgebra::Vector2<f64>> for Vector2 {
    fn from(v: nalgebra::Vector2<f64>) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Vector2> for nalgebra::Vector2<f64> {
    fn from(v: Vector2) -> Self {
        nalgebra::Vector2::new(v.x, v.y)
    }
}

impl From<nalgebra::Point2<f64>> for Vector2 {
    fn from(p: nalgebra::Point2<f64>) -> Self {
        Self::new(p.x, p.y)
    }
}

impl From<Vector2> for nalgebra::Point2<f64> {
    fn from(v: Vector2) -> Self {
        nalgebra::Point2::new(v.x, v.y)
    }
}

impl TryFrom<&[f64]> for Vector2 {
    type Error = VecpathError;

    fn try_from(slice: &[f64]) -> Result<Self> {
        match slice {
            [x, y] => Ok(Self::new(*x, *y)),
            _ => Err(VecpathError::Parse(format!(
                "expected 2 coordinates, got {}",
                slice.len()
            ))),
        }
    }
}

/// Textual encoding `x,y`, the same string [`Vector2Set`](crate::collections::Vector2Set) keys by.
impl fmt::Display for Vector2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", format_component(self.x), format_component(self.y))
    }
}

impl FromStr for Vector2 {
    type Err = VecpathError;

    fn from_str(s: &str) -> Result<Self> {
        parse_components::<2>(s).map(Self::from_array)
    }
}
