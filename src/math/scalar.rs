//! Scalar helpers shared by the vector types and by callers.

use std::f64::consts::TAU;

use super::{Point2, PointLike};

/// Median of `values`.
///
/// Even-length input averages the two middle values. Empty input yields `0.0`.
/// NaN values sort after every number.
#[must_use]
pub fn median(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}

/// Per-axis median of `points`. Not the geometric median.
///
/// Empty input yields the origin.
#[must_use]
pub fn median_point<P: PointLike>(points: &[P]) -> Point2 {
    let xs: Vec<f64> = points.iter().map(PointLike::x).collect();
    let ys: Vec<f64> = points.iter().map(PointLike::y).collect();
    Point2::new(median(&xs), median(&ys))
}

#[must_use]
pub fn deg_to_rad(degrees: f64) -> f64 {
    degrees.to_radians()
}

#[must_use]
pub fn rad_to_deg(radians: f64) -> f64 {
    radians.to_degrees()
}

/// Converts degrees to radians wrapped into `[0, 2π)`.
#[must_use]
pub fn deg_to_rad_normalized(degrees: f64) -> f64 {
    wrap(deg_to_rad(degrees), TAU)
}

/// Converts radians to degrees wrapped into `[0, 360)`.
#[must_use]
pub fn rad_to_deg_normalized(radians: f64) -> f64 {
    wrap(rad_to_deg(radians), 360.0)
}

/// Wraps `value` into `[0, period)`.
fn wrap(value: f64, period: f64) -> f64 {
    let wrapped = value.rem_euclid(period);
    // rem_euclid can return `period` itself for tiny negative inputs.
    if wrapped >= period {
        0.0
    } else {
        wrapped
    }
}

#[must_use]
pub fn distance_squared(a: &impl PointLike, b: &impl PointLike) -> f64 {
    let dx = a.x() - b.x();
    let dy = a.y() - b.y();
    dx * dx + dy * dy
}

#[must_use]
pub fn distance(a: &impl PointLike, b: &impl PointLike) -> f64 {
    distance_squared(a, b).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Vector2;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::PI;

    #[test]
    fn median_odd_even_empty() {
        assert_abs_diff_eq!(median(&[3.0, 1.0, 2.0]), 2.0);
        assert_abs_diff_eq!(median(&[4.0, 1.0, 3.0, 2.0]), 2.5);
        assert_abs_diff_eq!(median(&[7.0]), 7.0);
        assert_abs_diff_eq!(median(&[]), 0.0);
    }

    #[test]
    fn median_point_is_per_axis() {
        let pts = [
            Point2::new(0.0, 10.0),
            Point2::new(5.0, 0.0),
            Point2::new(1.0, 3.0),
        ];
        assert_eq!(median_point(&pts), Point2::new(1.0, 3.0));
        let empty: [Point2; 0] = [];
        assert_eq!(median_point(&empty), Point2::new(0.0, 0.0));
    }

    #[test]
    fn angle_conversions() {
        assert_abs_diff_eq!(deg_to_rad(180.0), PI);
        assert_abs_diff_eq!(rad_to_deg(PI / 2.0), 90.0);
    }

    #[test]
    fn normalized_conversions_wrap() {
        assert_abs_diff_eq!(deg_to_rad_normalized(-90.0), 1.5 * PI, epsilon = 1e-12);
        assert_abs_diff_eq!(deg_to_rad_normalized(360.0), 0.0);
        assert_abs_diff_eq!(rad_to_deg_normalized(-PI / 2.0), 270.0, epsilon = 1e-9);
        assert_abs_diff_eq!(rad_to_deg_normalized(5.0 * PI), 180.0, epsilon = 1e-9);
        let r = rad_to_deg_normalized(-1e-300);
        assert!((0.0..360.0).contains(&r), "r={r}");
    }

    #[test]
    fn distance_helpers_match_vector() {
        let a = Point2::new(1.0, 1.0);
        let b = Vector2::new(4.0, 5.0);
        assert_abs_diff_eq!(distance_squared(&a, &b), 25.0);
        assert_abs_diff_eq!(distance(&a, &b), 5.0);
        assert_abs_diff_eq!(distance_squared(&a, &b), b.distance_squared_to(&a));
    }
}
