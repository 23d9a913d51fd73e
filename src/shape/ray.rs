use crate::error::{GeometryError, Result};
use crate::math::linear_2d::{Domain, Linear};
use crate::math::{left_normal, right_normal, Point2, Vector2, TOLERANCE};

/// A half-infinite ray: `P(t) = origin + t * direction`, `t >= 0`.
///
/// The direction is normalized at construction. The normal is the right
/// perpendicular of the direction unless flipped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    origin: Point2,
    direction: Vector2,
    flipped_normal: bool,
}

impl Ray {
    /// Creates a new ray, normalizing the direction.
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

    /// Creates a ray whose normal points to the left of the direction.
    ///
    /// # Errors
    ///
    /// Returns an error if the direction vector is zero-length.
    pub fn with_flipped_normal(origin: Point2, direction: Vector2) -> Result<Self> {
        let mut ray = Self::new(origin, direction)?;
        ray.flipped_normal = true;
        Ok(ray)
    }

    #[must_use]
    pub fn origin(&self) -> &Point2 {
        &self.origin
    }

    /// Unit direction of the ray.
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

    /// Closest point on the ray to `p`.
    #[must_use]
    pub fn closest_point_to(&self, p: &Point2) -> (Point2, f64) {
        let l = self.as_linear();
        let t = l.closest_param(p);
        (l.point_at(t), t)
    }

    #[must_use]
    pub(crate) fn as_linear(&self) -> Linear {
        Linear::new(self.origin, self.direction, Domain::Ray)
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

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn direction_is_normalized() {
        let r = Ray::new(Point2::origin(), Vector2::new(3.0, 4.0)).unwrap();
        assert!((r.direction().norm() - 1.0).abs() < TOLERANCE);
        assert!((r.direction().x - 0.6).abs() < TOLERANCE);
    }

    #[test]
    fn zero_direction_rejected() {
        assert!(Ray::new(Point2::origin(), Vector2::zeros()).is_err());
    }

    #[test]
    fn closest_point_clamps_behind_origin() {
        let r = Ray::new(Point2::origin(), Vector2::new(1.0, 0.0)).unwrap();
        let (p, t) = r.closest_point_to(&Point2::new(-3.0, 2.0));
        assert!((p - Point2::origin()).norm() < TOLERANCE);
        assert!(t.abs() < TOLERANCE);
        let (p, _) = r.closest_point_to(&Point2::new(7.0, 2.0));
        assert!((p - Point2::new(7.0, 0.0)).norm() < TOLERANCE);
    }

    #[test]
    fn normal_orientation() {
        let r = Ray::new(Point2::origin(), Vector2::new(1.0, 0.0)).unwrap();
        assert!((r.normal() - Vector2::new(0.0, -1.0)).norm() < TOLERANCE);
        let f = Ray::with_flipped_normal(Point2::origin(), Vector2::new(1.0, 0.0)).unwrap();
        assert!((f.normal() - Vector2::new(0.0, 1.0)).norm() < TOLERANCE);
    }
}
