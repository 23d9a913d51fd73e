use rand::Rng;

use crate::math::linear_2d::{Domain, Linear};
use crate::math::{left_normal, right_normal, try_normalize, Point2, Vector2, TOLERANCE};

/// A bounded line segment between two endpoints.
///
/// The derived normal is the right perpendicular of `start -> end`
/// (outward for counter-clockwise wound shapes), or the left perpendicular
/// when constructed with a flipped normal. A zero-length segment is valid
/// and is treated as a point by every algorithm.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start: Point2,
    pub end: Point2,
    flipped_normal: bool,
}

impl Segment {
    #[must_use]
    pub fn new(start: Point2, end: Point2) -> Self {
        Self {
            start,
            end,
            flipped_normal: false,
        }
    }

    /// Creates a segment whose normal points to the left of `start -> end`.
    #[must_use]
    pub fn with_flipped_normal(start: Point2, end: Point2) -> Self {
        Self {
            start,
            end,
            flipped_normal: true,
        }
    }

    /// Endpoint difference `end - start` (unnormalized).
    #[must_use]
    pub fn direction(&self) -> Vector2 {
        self.end - self.start
    }

    /// Unit direction, or `None` for a zero-length segment.
    #[must_use]
    pub fn unit_direction(&self) -> Option<Vector2> {
        try_normalize(&self.direction())
    }

    /// Unit normal perpendicular to the segment.
    ///
    /// Returns the zero vector for a degenerate segment.
    #[must_use]
    pub fn normal(&self) -> Vector2 {
        match self.unit_direction() {
            Some(dir) if self.flipped_normal => left_normal(&dir),
            Some(dir) => right_normal(&dir),
            None => Vector2::zeros(),
        }
    }

    #[must_use]
    pub fn length(&self) -> f64 {
        self.direction().norm()
    }

    #[must_use]
    pub fn length_squared(&self) -> f64 {
        self.direction().norm_squared()
    }

    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.length_squared() < TOLERANCE * TOLERANCE
    }

    /// Evaluates `start + t * (end - start)`.
    #[must_use]
    pub fn point_at(&self, t: f64) -> Point2 {
        self.start + self.direction() * t
    }

    #[must_use]
    pub fn midpoint(&self) -> Point2 {
        self.point_at(0.5)
    }

    /// Closest point on the segment to `p`, with its parameter.
    #[must_use]
    pub fn closest_point_to(&self, p: &Point2) -> (Point2, f64) {
        let l = self.as_linear();
        let t = l.closest_param(p);
        (l.point_at(t), t)
    }

    /// Returns a copy with swapped endpoints (normal orientation preserved
    /// relative to the new direction).
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self {
            start: self.end,
            end: self.start,
            flipped_normal: self.flipped_normal,
        }
    }

    /// Uniform random point on the segment.
    pub fn random_point<R: Rng>(&self, rng: &mut R) -> Point2 {
        self.point_at(rng.gen::<f64>())
    }

    #[must_use]
    pub(crate) fn as_linear(&self) -> Linear {
        Linear::new(self.start, self.direction(), Domain::Segment)
    }

    pub(crate) fn has_flipped_normal(&self) -> bool {
        self.flipped_normal
    }
}
