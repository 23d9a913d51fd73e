use std::f64::consts::{PI, TAU};

use rand::Rng;

use crate::math::{approx_eq, Point2, Vector2, TOLERANCE};

use super::quad::Rect;

/// A circle defined by a center and a non-negative radius.
///
/// A zero-radius circle is valid and behaves as a point in every query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub center: Point2,
    pub radius: f64,
}

impl Circle {
    #[must_use]
    pub fn new(center: Point2, radius: f64) -> Self {
        Self { center, radius }
    }

    /// Whether a point lies inside or on the circle (squared-distance test).
    #[must_use]
    pub fn contains_point(&self, p: &Point2) -> bool {
        (p - self.center).norm_squared() <= self.radius * self.radius + TOLERANCE
    }

    #[must_use]
    pub fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }

    #[must_use]
    pub fn circumference(&self) -> f64 {
        TAU * self.radius
    }

    /// Point on the circle at the given angle (radians, from +X, CCW).
    #[must_use]
    pub fn point_at(&self, angle: f64) -> Point2 {
        self.center + Vector2::new(angle.cos(), angle.sin()) * self.radius
    }

    /// Outward unit normal at a point on (or near) the circle.
    ///
    /// Returns `None` when `p` coincides with the center.
    #[must_use]
    pub fn normal_at(&self, p: &Point2) -> Option<Vector2> {
        crate::math::try_normalize(&(p - self.center))
    }

    #[must_use]
    pub fn bounding_box(&self) -> Rect {
        Rect::new(
            self.center.x - self.radius,
            self.center.y - self.radius,
            2.0 * self.radius,
            2.0 * self.radius,
        )
    }

    /// Uniform random point inside the circle (area-uniform sampling).
    pub fn random_point<R: Rng>(&self, rng: &mut R) -> Point2 {
        let r = self.radius * rng.gen::<f64>().sqrt();
        let angle = rng.gen::<f64>() * TAU;
        self.center + Vector2::new(angle.cos(), angle.sin()) * r
    }

    /// Equality with an exact center and a tolerance-compared radius.
    #[must_use]
    pub fn approx_eq(&self, other: &Circle) -> bool {
        self.center == other.center && approx_eq(self.radius, other.radius)
    }

    /// Whether this circle degenerates to a point.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.radius < TOLERANCE
    }
}
