use crate::math::{cross_2d, Point2, TOLERANCE};
use crate::shape::Polygon;

/// Convex hull of a point set as a counter-clockwise polygon.
///
/// Gift-wrapping (Jarvis march): starting at the leftmost-then-lowest
/// point, repeatedly keep the candidate every other point lies to the
/// left of. Collinear candidates resolve to the farthest point, so the
/// hull carries no interior collinear vertices. Fewer than three points
/// are returned as-is.
#[must_use]
pub fn convex_hull(points: &[Point2]) -> Polygon {
    if points.len() < 3 {
        return Polygon::new(points.to_vec());
    }

    let start = leftmost_bottom(points);
    let mut hull = Vec::new();
    let mut current = start;
    loop {
        hull.push(points[current]);
        let mut candidate = (current + 1) % points.len();
        for (i, p) in points.iter().enumerate() {
            if i == current {
                continue;
            }
            let base = points[candidate] - points[current];
            let cross = cross_2d(&base, &(p - points[current]));
            let farther =
                (p - points[current]).norm_squared() > base.norm_squared() + TOLERANCE;
            if cross < -TOLERANCE || (cross.abs() <= TOLERANCE && farther) {
                candidate = i;
            }
        }
        current = candidate;
        // Guard against cycling on duplicate or degenerate input.
        if current == start || hull.len() > points.len() {
            break;
        }
    }
    Polygon::new(hull)
}

fn leftmost_bottom(points: &[Point2]) -> usize {
    let mut best = 0;
    for (i, p) in points.iter().enumerate() {
        let b = points[best];
        if p.x < b.x - TOLERANCE || ((p.x - b.x).abs() <= TOLERANCE && p.y < b.y) {
            best = i;
        }
    }
    best
}
