pub mod distance_2d;
pub mod scalar;
pub mod vector2;
pub mod vector3;

use serde::{Deserialize, Serialize};

pub use vector2::Vector2;
pub use vector3::Vector3;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Plain 2D coordinate record with no behavior.
///
/// This is the interchange shape for code that does not need vector
/// operations. It serializes as `{"x": .., "y": ..}`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

impl Point2 {
    /// Creates a new point record.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Plain 3D coordinate record with no behavior.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3 {
    /// Creates a new point record.
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// Anything exposing planar `x` and `y` coordinates.
///
/// Generic operations such as path simplification accept any `PointLike`
/// and hand the caller's values back untouched, so extra fields on the
/// implementing type survive the round trip.
pub trait PointLike {
    fn x(&self) -> f64;
    fn y(&self) -> f64;
}

impl PointLike for Point2 {
    fn x(&self) -> f64 {
        self.x
    }

    fn y(&self) -> f64 {
        self.y
    }
}

impl PointLike for Point3 {
    fn x(&self) -> f64 {
        self.x
    }

    fn y(&self) -> f64 {
        self.y
    }
}

impl PointLike for Vector2 {
    fn x(&self) -> f64 {
        self.x
    }

    fn y(&self) -> f64 {
        self.y
    }
}

impl PointLike for Vector3 {
    fn x(&self) -> f64 {
        self.x
    }

    fn y(&self) -> f64 {
        self.y
    }
}

impl PointLike for (f64, f64) {
    fn x(&self) -> f64 {
        self.0
    }

    fn y(&self) -> f64 {
        self.1
    }
}

impl PointLike for [f64; 2] {
    fn x(&self) -> f64 {
        self[0]
    }

    fn y(&self) -> f64 {
        self[1]
    }
}

impl PointLike for nalgebra::Point2<f64> {
    fn x(&self) -> f64 {
        self.x
    }

    fn y(&self) -> f64 {
        self.y
    }
}

impl<P: PointLike + ?Sized> PointLike for &P {
    fn x(&self) -> f64 {
        (**self).x()
    }

    fn y(&self) -> f64 {
        (**self).y()
    }
}

/// Writes one coordinate in the canonical textual form.
///
/// Uses the shortest representation that round-trips through `f64::from_str`.
/// Negative zero is written as `0` so that `0.0` and `-0.0` share one key.
pub(crate) fn format_component(value: f64) -> String {
    if value == 0.0 {
        "0".to_owned()
    } else {
        value.to_string()
    }
}

/// Rounds `value` to `decimals` decimal places, halfway cases away from zero.
///
/// When `10^decimals` overflows, or `value` scaled by it does, `value` is
/// already exact at that precision and is returned unchanged. When
/// `10^decimals` underflows to zero, every finite `value` rounds to `0`.
pub(crate) fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    if factor == 0.0 {
        return if value.is_finite() { 0.0 } else { value };
    }
    let scaled = value * factor;
    if !factor.is_finite() || !scaled.is_finite() {
        return value;
    }
    scaled.round() / factor
}

/// Parses a comma separated list of exactly `N` coordinates.
pub(crate) fn parse_components<const N: usize>(s: &str) -> crate::Result<[f64; N]> {
    let mut out = [0.0; N];
    let mut parts = s.split(',');
    for slot in &mut out {
        let part = parts
            .next()
            .ok_or_else(|| crate::VecpathError::Parse(format!("expected {N} components in {s:?}")))?;
        *slot = part
            .trim()
            .parse::<f64>()
            .map_err(|e| crate::VecpathError::Parse(format!("{part:?}: {e}")))?;
    }
    if parts.next().is_some() {
        return Err(crate::VecpathError::Parse(format!(
            "expected {N} components in {s:?}"
        )));
    }
    Ok(out)
}
