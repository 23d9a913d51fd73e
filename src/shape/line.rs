use crate::error::{GeometryError, Result};
use crate::math::linear_2d::{Domain, Linear};
use crate::math::{left_normal, right_normal, Point2, Vector2, TOLERANCE};

/// An infinite line: `P(t) = origin + t * direction`, `t` unrestricted.
///
/// The direction is normalized at construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    origin: Point2,
    direction: Vector2,
    flipped_normal: bool,
}

impl Line {
    /// Creates a new line, normalizing the direction.
    ///
    /// # Errors
    ///
    /// Returns an error if the direction vector is zero-length.
    pub fn new(origin: Point2, direction: Vector2) -> Result<Self> {
        let len = direction.norm();
        if len < TOLERANCE {
            return Err(GeometryError::ZeroVector.into());
        }
        Ok(Self {
            origin,
            direction: direction / len,
            flipped_normal: false,
        })
    }

    /// Creates a line whose normal points to the left of the direction.
    ///
    /// # Errors
    ///
    /// Returns an error if the direction vector is zero-length.
    pub fn with_flipped_normal(origin: Point2, direction: Vector2) -> Result<Self> {
        let mut line = Self::new(origin, direction)?;
        line.flipped_normal = true;
        Ok(line)
    }

    /// Line through two points.
    ///
    /// # Errors
    ///
    /// Returns an error if the points coincide.
    pub fn through(a: Point2, b: Point2) -> Result<Self> {
        Self::new(a, b - a)
    }

    #[must_use]
    pub fn origin(&self) -> &Point2 {
        &self.origin
    }

    /// Unit direction of the line.
    #[must_use]
    pub fn direction(&self) -> &Vector2 {
        &self.direction
    }

    /// Unit normal perpendicular to the direction.
    #[must_use]
    pub fn normal(&self) -> Vector2 {
        if self.flipped_normal {
            left_normal(&self.direction)
        } else {
            right_normal(&self.direction)
        }
    }

    /// Evaluates `origin + t * direction`.
    #[must_use]
    pub fn point_at(&self, t: f64) -> Point2 {
        self.origin + self.direction * t
    }

    /// Closest point on the line to `p` (perpendicular projection).
    #[must_use]
    pub fn closest_point_to(&self, p: &Point2) -> (Point2, f64) {
        let l = self.as_linear();
        let t = l.closest_param(p);
        (l.point_at(t), t)
    }

    #[must_use]
    pub(crate) fn as_linear(&self) -> Linear {
        Linear::new(self.origin, self.direction, Domain::Line)
    }

    /// Rebuilds from an already-unit direction, preserving the normal
    /// orientation. Used by rigid transforms, which keep unit length.
    pub(crate) fn from_unit(origin: Point2, direction: Vector2, flipped_normal: bool) -> Self {
        Self {
            origin,
            direction,
            flipped_normal,
        }
    }

    pub(crate) fn has_flipped_normal(&self) -> bool {
        self.flipped_normal
    }
}
