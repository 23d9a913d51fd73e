pub mod closest;
pub mod intersect;
pub mod overlap;

use crate::math::{Point2, Vector2};

/// The atomic result of a geometric query: a point and a unit normal.
///
/// Absence of a result is expressed by `Option<CollisionPoint>` or an
/// empty `Vec<CollisionPoint>`, never by a sentinel point value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionPoint {
    pub point: Point2,
    pub normal: Vector2,
}

impl CollisionPoint {
    #[must_use]
    pub fn new(point: Point2, normal: Vector2) -> Self {
        Self { point, normal }
    }

    /// Copy with the normal reversed.
    #[must_use]
    pub fn flipped(&self) -> Self {
        Self {
            point: self.point,
            normal: -self.normal,
        }
    }
}

/// Nearest point pair between two shapes.
///
/// The index fields identify which edge of a compound shape produced the
/// result (`None` for analytic primitives), letting callers recover the
/// winning sub-feature.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClosestPointResult {
    /// Closest point on the queried shape, with its boundary normal.
    pub self_point: CollisionPoint,
    /// Closest point on the other shape, with its boundary normal.
    pub other_point: CollisionPoint,
    /// Squared distance between the two points.
    pub distance_squared: f64,
    /// Winning edge index on the queried shape, if compound.
    pub self_index: Option<usize>,
    /// Winning edge index on the other shape, if compound.
    pub other_index: Option<usize>,
}

impl ClosestPointResult {
    #[must_use]
    pub fn new(self_point: CollisionPoint, other_point: CollisionPoint) -> Self {
        let distance_squared = (self_point.point - other_point.point).norm_squared();
        Self {
            self_point,
            other_point,
            distance_squared,
            self_index: None,
            other_index: None,
        }
    }

    #[must_use]
    pub fn with_indices(mut self, self_index: Option<usize>, other_index: Option<usize>) -> Self {
        self.self_index = self_index;
        self.other_index = other_index;
        self
    }

    /// The same result seen from the other shape's perspective.
    #[must_use]
    pub fn swapped(&self) -> Self {
        Self {
            self_point: self.other_point,
            other_point: self.self_point,
            distance_squared: self.distance_squared,
            self_index: self.other_index,
            other_index: self.self_index,
        }
    }

    /// Euclidean distance (square root taken on demand only).
    #[must_use]
    pub fn distance(&self) -> f64 {
        self.distance_squared.sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::TOLERANCE;

    #[test]
    fn result_distance_matches_points() {
        let a = CollisionPoint::new(Point2::origin(), Vector2::new(1.0, 0.0));
        let b = CollisionPoint::new(Point2::new(3.0, 4.0), Vector2::new(-1.0, 0.0));
        let r = ClosestPointResult::new(a, b);
        assert!((r.distance_squared - 25.0).abs() < TOLERANCE);
        assert!((r.distance() - 5.0).abs() < TOLERANCE);
    }

    #[test]
    fn swapped_exchanges_sides() {
        let a = CollisionPoint::new(Point2::origin(), Vector2::new(1.0, 0.0));
        let b = CollisionPoint::new(Point2::new(1.0, 0.0), Vector2::new(-1.0, 0.0));
        let r = ClosestPointResult::new(a, b).with_indices(Some(2), None);
        let s = r.swapped();
        assert_eq!(s.other_index, Some(2));
        assert_eq!(s.self_index, None);
        assert!((s.self_point.point - b.point).norm() < TOLERANCE);
    }

    #[test]
    fn flipped_reverses_normal() {
        let p = CollisionPoint::new(Point2::origin(), Vector2::new(0.0, 1.0));
        assert!((p.flipped().normal - Vector2::new(0.0, -1.0)).norm() < TOLERANCE);
    }
}
