use rand::Rng;

use crate::math::{cross_2d, Point2, Vector2, TOLERANCE};

use super::circle::Circle;
use super::quad::Rect;
use super::segment::Segment;

/// A triangle over corners `a`, `b`, `c`.
///
/// Counter-clockwise winding is the library convention: a valid triangle
/// has positive signed area, and its edge normals then point outward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub a: Point2,
    pub b: Point2,
    pub c: Point2,
}

impl Triangle {
    #[must_use]
    pub fn new(a: Point2, b: Point2, c: Point2) -> Self {
        Self { a, b, c }
    }

    /// Signed area: positive for counter-clockwise winding.
    #[must_use]
    pub fn signed_area(&self) -> f64 {
        cross_2d(&(self.b - self.a), &(self.c - self.a)) * 0.5
    }

    #[must_use]
    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    /// Whether the triangle is non-degenerate and wound counter-clockwise.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.signed_area() > TOLERANCE
    }

    /// Reverses the winding if the triangle is clockwise.
    pub fn fix_winding_order(&mut self) {
        if self.signed_area() < 0.0 {
            std::mem::swap(&mut self.b, &mut self.c);
        }
    }

    /// Copy-producing variant of [`Self::fix_winding_order`].
    #[must_use]
    pub fn fixed_winding(&self) -> Self {
        let mut t = *self;
        t.fix_winding_order();
        t
    }

    #[must_use]
    pub fn centroid(&self) -> Point2 {
        Point2::new(
            (self.a.x + self.b.x + self.c.x) / 3.0,
            (self.a.y + self.b.y + self.c.y) / 3.0,
        )
    }

    /// The three edges `a->b`, `b->c`, `c->a` (outward normals for CCW).
    #[must_use]
    pub fn edges(&self) -> [Segment; 3] {
        [
            Segment::new(self.a, self.b),
            Segment::new(self.b, self.c),
            Segment::new(self.c, self.a),
        ]
    }

    /// Strict point containment via three half-plane cross tests.
    ///
    /// All three cross products must share a strict sign, so points
    /// exactly on an edge are excluded. This is the documented boundary
    /// policy, consistent for either winding.
    #[must_use]
    pub fn contains_point(&self, p: &Point2) -> bool {
        let d1 = cross_2d(&(self.b - self.a), &(p - self.a));
        let d2 = cross_2d(&(self.c - self.b), &(p - self.b));
        let d3 = cross_2d(&(self.a - self.c), &(p - self.c));
        (d1 > 0.0 && d2 > 0.0 && d3 > 0.0) || (d1 < 0.0 && d2 < 0.0 && d3 < 0.0)
    }

    #[must_use]
    pub fn bounding_box(&self) -> Rect {
        let min_x = self.a.x.min(self.b.x).min(self.c.x);
        let min_y = self.a.y.min(self.b.y).min(self.c.y);
        let max_x = self.a.x.max(self.b.x).max(self.c.x);
        let max_y = self.a.y.max(self.b.y).max(self.c.y);
        Rect::new(min_x, min_y, max_x - min_x, max_y - min_y)
    }

    /// Circumscribed circle through the three corners.
    ///
    /// Returns `None` for (near-)collinear corners.
    #[must_use]
    pub fn circumcircle(&self) -> Option<Circle> {
        let (ax, ay) = (self.a.x, self.a.y);
        let (bx, by) = (self.b.x, self.b.y);
        let (cx, cy) = (self.c.x, self.c.y);
        let d = 2.0 * (ax * (by - cy) + bx * (cy - ay) + cx * (ay - by));
        if d.abs() < TOLERANCE {
            return None;
        }
        let a_sq = ax * ax + ay * ay;
        let b_sq = bx * bx + by * by;
        let c_sq = cx * cx + cy * cy;
        let ux = (a_sq * (by - cy) + b_sq * (cy - ay) + c_sq * (ay - by)) / d;
        let uy = (a_sq * (cx - bx) + b_sq * (ax - cx) + c_sq * (bx - ax)) / d;
        let center = Point2::new(ux, uy);
        Some(Circle::new(center, (self.a - center).norm()))
    }

    /// Smallest corner-angle sine, a narrowness measure.
    ///
    /// Near zero for sliver triangles regardless of which corner is sharp.
    #[must_use]
    pub fn min_angle_sine(&self) -> f64 {
        let corner = |v: Point2, p: Point2, n: Point2| -> f64 {
            let e0 = p - v;
            let e1 = n - v;
            let denom = e0.norm() * e1.norm();
            if denom < TOLERANCE {
                return 0.0;
            }
            (cross_2d(&e0, &e1) / denom).abs()
        };
        corner(self.a, self.c, self.b)
            .min(corner(self.b, self.a, self.c))
            .min(corner(self.c, self.b, self.a))
    }

    /// Uniform random point inside the triangle (barycentric sampling).
    pub fn random_point<R: Rng>(&self, rng: &mut R) -> Point2 {
        let mut u = rng.gen::<f64>();
        let mut v = rng.gen::<f64>();
        if u + v > 1.0 {
            u = 1.0 - u;
            v = 1.0 - v;
        }
        self.a + (self.b - self.a) * u + (self.c - self.a) * v
    }

    /// Splits the triangle into three at an interior point.
    ///
    /// The point is not validated; callers pass a centroid or a sampled
    /// interior point.
    #[must_use]
    pub fn split_at(&self, p: Point2) -> [Triangle; 3] {
        [
            Triangle::new(self.a, self.b, p),
            Triangle::new(self.b, self.c, p),
            Triangle::new(self.c, self.a, p),
        ]
    }

    /// Whether any corner coincides with one of the given points.
    #[must_use]
    pub fn shares_vertex_with(&self, points: &[Point2]) -> bool {
        points.iter().any(|p| {
            (self.a - p).norm_squared() < TOLERANCE * TOLERANCE
                || (self.b - p).norm_squared() < TOLERANCE * TOLERANCE
                || (self.c - p).norm_squared() < TOLERANCE * TOLERANCE
        })
    }

    pub(crate) fn translate(&mut self, offset: Vector2) {
        self.a += offset;
        self.b += offset;
        self.c += offset;
    }
}
