use super::PointLike;

/// Returns the distance from `point` to the infinite line through `a` and `b`.
///
/// Uses `|(by-ay)px - (bx-ax)py + bx*ay - by*ax| / |b - a|`. When `a` and
/// `b` coincide the line is undefined and the Euclidean distance from
/// `point` to `a` is returned instead.
#[must_use]
pub fn perpendicular_distance(
    point: &impl PointLike,
    a: &impl PointLike,
    b: &impl PointLike,
) -> f64 {
    let (px, py) = (point.x(), point.y());
    let (ax, ay) = (a.x(), a.y());
    let (bx, by) = (b.x(), b.y());
    let dx = bx - ax;
    let dy = by - ay;
    let len_sq = dx * dx + dy * dy;

    if len_sq == 0.0 {
        tracing::trace!(ax, ay, "zero-length reference segment, using point distance");
        return ((px - ax).powi(2) + (py - ay).powi(2)).sqrt();
    }

    (dy * px - dx * py + bx * ay - by * ax).abs() / len_sq.sqrt()
}
