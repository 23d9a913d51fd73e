use rand::Rng;

use crate::math::{Point2, Vector2, TOLERANCE};

use super::quad::Rect;
use super::triangle::Triangle;

/// A collection of triangles decomposing some region.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Triangulation {
    pub triangles: Vec<Triangle>,
}

impl Triangulation {
    #[must_use]
    pub fn new(triangles: Vec<Triangle>) -> Self {
        Self { triangles }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.triangles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Total (unsigned) area of all triangles.
    #[must_use]
    pub fn area(&self) -> f64 {
        self.triangles.iter().map(Triangle::area).sum()
    }

    /// Copy keeping only triangles with at least `min_area`.
    #[must_use]
    pub fn filtered_by_area(&self, min_area: f64) -> Self {
        Self::new(
            self.triangles
                .iter()
                .filter(|t| t.area() >= min_area)
                .copied()
                .collect(),
        )
    }

    /// One round of subdivision: each triangle is split into three at a
    /// uniformly sampled interior point.
    pub fn subdivide<R: Rng>(&self, rng: &mut R) -> Self {
        let mut out = Vec::with_capacity(self.triangles.len() * 3);
        for tri in &self.triangles {
            out.extend(tri.split_at(tri.random_point(rng)));
        }
        Self::new(out)
    }

    /// Area-weighted random triangle; `None` for an empty or zero-area
    /// triangulation.
    pub fn random_triangle<R: Rng>(&self, rng: &mut R) -> Option<Triangle> {
        let total = self.area();
        if total < TOLERANCE {
            return None;
        }
        let mut pick = rng.gen::<f64>() * total;
        for tri in &self.triangles {
            pick -= tri.area();
            if pick <= 0.0 {
                return Some(*tri);
            }
        }
        self.triangles.last().copied()
    }

    #[must_use]
    pub fn bounding_box(&self) -> Option<Rect> {
        Rect::from_points(
            self.triangles
                .iter()
                .flat_map(|t| [t.a, t.b, t.c]),
        )
    }

    /// Translates every triangle in place.
    pub fn translate(&mut self, offset: Vector2) {
        for t in &mut self.triangles {
            t.translate(offset);
        }
    }

    /// Copy-producing variant of [`Self::translate`].
    #[must_use]
    pub fn translated(&self, offset: Vector2) -> Self {
        let mut c = self.clone();
        c.translate(offset);
        c
    }

    /// Rotates every triangle around `pivot` in place.
    pub fn rotate(&mut self, pivot: Point2, angle: f64) {
        let rot = crate::math::Rotation2::new(angle);
        for t in &mut self.triangles {
            t.a = pivot + rot * (t.a - pivot);
            t.b = pivot + rot * (t.b - pivot);
            t.c = pivot + rot * (t.c - pivot);
        }
    }

    /// Copy-producing variant of [`Self::rotate`].
    #[must_use]
    pub fn rotated(&self, pivot: Point2, angle: f64) -> Self {
        let mut c = self.clone();
        c.rotate(pivot, angle);
        c
    }

    /// Scales every triangle away from `pivot` in place.
    pub fn scale(&mut self, pivot: Point2, factor: f64) {
        for t in &mut self.triangles {
            t.a = pivot + (t.a - pivot) * factor;
            t.b = pivot + (t.b - pivot) * factor;
            t.c = pivot + (t.c - pivot) * factor;
        }
    }

    /// Copy-producing variant of [`Self::scale`].
    #[must_use]
    pub fn scaled(&self, pivot: Point2, factor: f64) -> Self {
        let mut c = self.clone();
        c.scale(pivot, factor);
        c
    }
}
