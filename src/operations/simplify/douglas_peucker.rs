use crate::error::{Result, VecpathError};
use crate::math::distance_2d::perpendicular_distance;
use crate::math::PointLike;

/// Tolerance used by [`DouglasPeucker::default`].
pub const DEFAULT_TOLERANCE: f64 = 0.5;

/// Reduces a path with the Douglas–Peucker algorithm.
///
/// The first and last points are always kept. Within each span, the
/// interior point furthest from the line through the span's endpoints is
/// kept if its perpendicular distance is strictly greater than the
/// tolerance, and the two halves on either side of it are simplified in
/// turn. A span whose interior stays within tolerance collapses to its
/// endpoints. On equal distances the earliest point is chosen.
///
/// Output points are clones of the input points, so any extra fields on
/// the caller's point type are preserved.
#[derive(Debug, Clone, Copy)]
pub struct DouglasPeucker {
    tolerance: f64,
}

impl DouglasPeucker {
    /// Creates a simplifier with the given tolerance.
    ///
    /// # Errors
    ///
    /// Returns [`VecpathError::InvalidTolerance`] if `tolerance` is negative or NaN.
    pub fn new(tolerance: f64) -> Result<Self> {
        if tolerance.is_nan() || tolerance < 0.0 {
            return Err(VecpathError::InvalidTolerance(tolerance));
        }
        Ok(Self { tolerance })
    }

    /// Returns the maximum allowed deviation.
    #[must_use]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Simplifies `points`. Paths shorter than three points are returned as-is.
    #[must_use]
    pub fn execute<P: PointLike + Clone>(&self, points: &[P]) -> Vec<P> {
        let n = points.len();
        if n < 3 {
            return points.to_vec();
        }

        let mut keep = vec![false; n];
        keep[0] = true;
        keep[n - 1] = true;

        // Spans still to examine, as inclusive (first, last) index pairs.
        let mut spans = vec![(0, n - 1)];
        while let Some((first, last)) = spans.pop() {
            if last - first < 2 {
                continue;
            }
            let (furthest, max_dist) = furthest_point(points, first, last);
            if max_dist > self.tolerance {
                tracing::trace!(first, last, furthest, max_dist, "split span");
                keep[furthest] = true;
                spans.push((furthest, last));
                spans.push((first, furthest));
            }
        }

        let simplified: Vec<P> = points
            .iter()
            .zip(&keep)
            .filter(|&(_, &kept)| kept)
            .map(|(p, _)| p.clone())
            .collect();
        tracing::debug!(
            input = n,
            output = simplified.len(),
            tolerance = self.tolerance,
            "simplified path"
        );
        simplified
    }
}

impl Default for DouglasPeucker {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

/// Returns the interior index in `first..last` furthest from the line
/// `points[first]`–`points[last]`, and its distance. Earliest index wins ties.
fn furthest_point<P: PointLike>(points: &[P], first: usize, last: usize) -> (usize, f64) {
    let a = &points[first];
    let b = &points[last];
    let mut furthest = first + 1;
    let mut max_dist = perpendicular_distance(&points[furthest], a, b);
    for (i, p) in points.iter().enumerate().take(last).skip(first + 2) {
        let d = perpendicular_distance(p, a, b);
        if d > max_dist {
            furthest = i;
            max_dist = d;
        }
    }
    (furthest, max_dist)
}

/// Simplifies `points` with the given tolerance.
///
/// Unlike [`DouglasPeucker::new`] the tolerance is not validated: a negative
/// tolerance keeps every point, and NaN collapses every span to its endpoints.
#[must_use]
pub fn simplify<P: PointLike + Clone>(points: &[P], tolerance: f64) -> Vec<P> {
    DouglasPeucker { tolerance }.execute(points)
}
