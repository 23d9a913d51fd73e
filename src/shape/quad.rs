use crate::math::{cross_2d, Point2, Rotation2, Vector2, TOLERANCE};

use super::segment::Segment;

/// An arbitrary quadrilateral over corners `a`, `b`, `c`, `d`.
///
/// Counter-clockwise winding is the library convention. Constructed from
/// a center (or an arbitrary anchor), a size, and a rotation it is always
/// a rotated rectangle, but the corners are free to be set directly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quad {
    pub a: Point2,
    pub b: Point2,
    pub c: Point2,
    pub d: Point2,
}

impl Quad {
    #[must_use]
    pub fn new(a: Point2, b: Point2, c: Point2, d: Point2) -> Self {
        Self { a, b, c, d }
    }

    /// Rotated rectangle centered at `center`.
    #[must_use]
    pub fn from_center(center: Point2, size: Vector2, rotation: f64) -> Self {
        Self::from_anchor(center, size, rotation, Vector2::new(0.5, 0.5))
    }

    /// Rotated rectangle positioned by a relative anchor.
    ///
    /// `anchor` is in unit coordinates over the rectangle: `(0, 0)` puts
    /// `position` at the bottom-left corner, `(0.5, 0.5)` at the center,
    /// `(1, 1)` at the top-right corner.
    #[must_use]
    pub fn from_anchor(position: Point2, size: Vector2, rotation: f64, anchor: Vector2) -> Self {
        let rot = Rotation2::new(rotation);
        let offset = Vector2::new(-anchor.x * size.x, -anchor.y * size.y);
        let local = [
            offset,
            offset + Vector2::new(size.x, 0.0),
            offset + Vector2::new(size.x, size.y),
            offset + Vector2::new(0.0, size.y),
        ];
        Self {
            a: position + rot * local[0],
            b: position + rot * local[1],
            c: position + rot * local[2],
            d: position + rot * local[3],
        }
    }

    #[must_use]
    pub fn corners(&self) -> [Point2; 4] {
        [self.a, self.b, self.c, self.d]
    }

    /// The four edges `a->b`, `b->c`, `c->d`, `d->a`.
    #[must_use]
    pub fn edges(&self) -> [Segment; 4] {
        [
            Segment::new(self.a, self.b),
            Segment::new(self.b, self.c),
            Segment::new(self.c, self.d),
            Segment::new(self.d, self.a),
        ]
    }

    /// Strict point containment via four half-plane cross tests.
    ///
    /// Same policy as [`super::triangle::Triangle::contains_point`]:
    /// boundary points are excluded.
    #[must_use]
    pub fn contains_point(&self, p: &Point2) -> bool {
        let corners = self.corners();
        let mut pos = 0;
        let mut neg = 0;
        for i in 0..4 {
            let v = corners[i];
            let w = corners[(i + 1) % 4];
            let d = cross_2d(&(w - v), &(p - v));
            if d > 0.0 {
                pos += 1;
            } else if d < 0.0 {
                neg += 1;
            } else {
                return false;
            }
        }
        pos == 4 || neg == 4
    }

    /// Area via the shoelace sum over the four corners.
    #[must_use]
    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    #[must_use]
    pub fn signed_area(&self) -> f64 {
        let c = self.corners();
        let mut sum = 0.0;
        for i in 0..4 {
            let j = (i + 1) % 4;
            sum += c[i].x * c[j].y - c[j].x * c[i].y;
        }
        sum * 0.5
    }

    #[must_use]
    pub fn centroid(&self) -> Point2 {
        let c = self.corners();
        let area = self.signed_area();
        if area.abs() < TOLERANCE {
            // Degenerate: fall back to the corner mean.
            return Point2::new(
                (c[0].x + c[1].x + c[2].x + c[3].x) / 4.0,
                (c[0].y + c[1].y + c[2].y + c[3].y) / 4.0,
            );
        }
        let mut cx = 0.0;
        let mut cy = 0.0;
        for i in 0..4 {
            let j = (i + 1) % 4;
            let w = c[i].x * c[j].y - c[j].x * c[i].y;
            cx += (c[i].x + c[j].x) * w;
            cy += (c[i].y + c[j].y) * w;
        }
        Point2::new(cx / (6.0 * area), cy / (6.0 * area))
    }

    #[must_use]
    pub fn bounding_box(&self) -> Rect {
        // Four corners always exist, so the bound is never empty.
        Rect::from_points(self.corners().iter().copied()).unwrap_or(Rect::new(0.0, 0.0, 0.0, 0.0))
    }
}

/// An axis-aligned rectangle: bottom-left corner plus extents.
///
/// Shares the [`Quad`] query surface through its corner decomposition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[must_use]
    pub fn from_center(center: Point2, size: Vector2) -> Self {
        Self::new(
            center.x - size.x * 0.5,
            center.y - size.y * 0.5,
            size.x,
            size.y,
        )
    }

    /// Smallest rectangle containing all points; `None` for an empty input.
    pub fn from_points<I: IntoIterator<Item = Point2>>(points: I) -> Option<Self> {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let (mut min_x, mut min_y) = (first.x, first.y);
        let (mut max_x, mut max_y) = (first.x, first.y);
        for p in iter {
            min_x = min_x.min(p.x);
            min_y = min_y.min(p.y);
            max_x = max_x.max(p.x);
            max_y = max_y.max(p.y);
        }
        Some(Self::new(min_x, min_y, max_x - min_x, max_y - min_y))
    }

    #[must_use]
    pub fn center(&self) -> Point2 {
        Point2::new(self.x + self.width * 0.5, self.y + self.height * 0.5)
    }

    #[must_use]
    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Corners in counter-clockwise order, starting bottom-left.
    #[must_use]
    pub fn corners(&self) -> [Point2; 4] {
        [
            Point2::new(self.x, self.y),
            Point2::new(self.x + self.width, self.y),
            Point2::new(self.x + self.width, self.y + self.height),
            Point2::new(self.x, self.y + self.height),
        ]
    }

    #[must_use]
    pub fn edges(&self) -> [Segment; 4] {
        self.to_quad().edges()
    }

    #[must_use]
    pub fn to_quad(&self) -> Quad {
        let [a, b, c, d] = self.corners();
        Quad::new(a, b, c, d)
    }

    /// Strict interior test (boundary excluded, matching the quad policy).
    #[must_use]
    pub fn contains_point(&self, p: &Point2) -> bool {
        p.x > self.x && p.x < self.x + self.width && p.y > self.y && p.y < self.y + self.height
    }

    /// Smallest rectangle containing both rectangles.
    #[must_use]
    pub fn union(&self, other: &Rect) -> Rect {
        let min_x = self.x.min(other.x);
        let min_y = self.y.min(other.y);
        let max_x = (self.x + self.width).max(other.x + other.width);
        let max_y = (self.y + self.height).max(other.y + other.height);
        Rect::new(min_x, min_y, max_x - min_x, max_y - min_y)
    }
}
