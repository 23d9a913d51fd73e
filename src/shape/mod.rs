pub mod circle;
pub mod container;
pub mod line;
pub mod points;
pub mod polygon;
pub mod polyline;
pub mod quad;
pub mod ray;
pub mod segment;
pub mod segments;
pub mod triangle;
pub mod triangulation;

use crate::math::linear_2d::Linear;
use crate::math::{Point2, Vector2};
use crate::query::{closest, intersect, overlap, ClosestPointResult, CollisionPoint};

pub use circle::Circle;
pub use container::{ShapeContainer, Transform2};
pub use line::Line;
pub use points::Points;
pub use polygon::Polygon;
pub use polyline::Polyline;
pub use quad::{Quad, Rect};
pub use ray::Ray;
pub use segment::Segment;
pub use segments::Segments;
pub use triangle::Triangle;
pub use triangulation::Triangulation;

/// Discriminator for the closed set of shape kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Circle,
    Segment,
    Ray,
    Line,
    Triangle,
    Quad,
    Rect,
    Polygon,
    Polyline,
    Segments,
}

/// The closed union of all queryable shapes.
///
/// Every pairwise query (`overlap`, `intersect`, `closest_point`) is
/// dispatched through a canonical decomposition — circle, parametric
/// linear, or edge list — rather than a hand-written method per shape
/// pair, so each analytic kernel exists exactly once.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Circle(Circle),
    Segment(Segment),
    Ray(Ray),
    Line(Line),
    Triangle(Triangle),
    Quad(Quad),
    Rect(Rect),
    Polygon(Polygon),
    Polyline(Polyline),
    Segments(Segments),
}

/// Canonical query form of a shape.
pub(crate) enum Canon {
    /// Analytic circle.
    Circle(Circle),
    /// Unbounded linear primitive with its reporting normal.
    Linear(Linear, Vector2),
    /// Bounded shape decomposed into segments.
    Edges(Vec<Segment>),
}

impl Shape {
    #[must_use]
    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Circle(_) => ShapeKind::Circle,
            Shape::Segment(_) => ShapeKind::Segment,
            Shape::Ray(_) => ShapeKind::Ray,
            Shape::Line(_) => ShapeKind::Line,
            Shape::Triangle(_) => ShapeKind::Triangle,
            Shape::Quad(_) => ShapeKind::Quad,
            Shape::Rect(_) => ShapeKind::Rect,
            Shape::Polygon(_) => ShapeKind::Polygon,
            Shape::Polyline(_) => ShapeKind::Polyline,
            Shape::Segments(_) => ShapeKind::Segments,
        }
    }

    /// Boolean overlap test; symmetric in its arguments.
    #[must_use]
    pub fn overlap(&self, other: &Shape) -> bool {
        overlap::overlap(self, other)
    }

    /// Exact intersection points with normals taken from `other`'s
    /// boundary at each point. Empty when the shapes do not intersect.
    #[must_use]
    pub fn intersect(&self, other: &Shape) -> Vec<CollisionPoint> {
        intersect::intersect(self, other)
    }

    /// Nearest point pair between the two shapes.
    ///
    /// `None` only when either shape is empty (a compound shape with no
    /// vertices or segments).
    #[must_use]
    pub fn closest_point(&self, other: &Shape) -> Option<ClosestPointResult> {
        closest::closest_point(self, other)
    }

    /// Point containment for region shapes.
    ///
    /// Open shapes (segment, ray, line, polyline, segment soup) contain
    /// no points.
    #[must_use]
    pub fn contains_point(&self, p: &Point2) -> bool {
        match self {
            Shape::Circle(c) => c.contains_point(p),
            Shape::Triangle(t) => t.contains_point(p),
            Shape::Quad(q) => q.contains_point(p),
            Shape::Rect(r) => r.contains_point(p),
            Shape::Polygon(poly) => poly.contains_point(p),
            Shape::Segment(_)
            | Shape::Ray(_)
            | Shape::Line(_)
            | Shape::Polyline(_)
            | Shape::Segments(_) => false,
        }
    }

    /// Whether every boundary point of `other` lies inside this shape.
    ///
    /// Region containment: true when `other`'s representative vertices
    /// are contained and the boundaries do not cross.
    #[must_use]
    pub fn contains_shape(&self, other: &Shape) -> bool {
        let Some(rep) = other.representative_point() else {
            return false;
        };
        self.contains_point(&rep) && self.intersect(other).is_empty()
    }

    /// Axis-aligned bounding box; `None` for unbounded (ray, line) or
    /// empty shapes.
    #[must_use]
    pub fn bounding_box(&self) -> Option<Rect> {
        match self {
            Shape::Circle(c) => Some(c.bounding_box()),
            Shape::Segment(s) => Rect::from_points([s.start, s.end]),
            Shape::Ray(_) | Shape::Line(_) => None,
            Shape::Triangle(t) => Some(t.bounding_box()),
            Shape::Quad(q) => Some(q.bounding_box()),
            Shape::Rect(r) => Some(*r),
            Shape::Polygon(p) => p.bounding_box(),
            Shape::Polyline(p) => p.bounding_box(),
            Shape::Segments(s) => s.bounding_box(),
        }
    }

    /// A cheap representative point used for containment pre-checks.
    #[must_use]
    pub(crate) fn representative_point(&self) -> Option<Point2> {
        match self {
            Shape::Circle(c) => Some(c.center),
            Shape::Segment(s) => Some(s.start),
            Shape::Ray(r) => Some(*r.origin()),
            Shape::Line(l) => Some(*l.origin()),
            Shape::Triangle(t) => Some(t.a),
            Shape::Quad(q) => Some(q.a),
            Shape::Rect(r) => Some(Point2::new(r.x, r.y)),
            Shape::Polygon(p) => p.vertices.first().copied(),
            Shape::Polyline(p) => p.vertices.first().copied(),
            Shape::Segments(s) => s.items.first().map(|e| e.start),
        }
    }

    /// Whether edge indices in query results are meaningful for this
    /// shape (compound shapes only).
    pub(crate) fn is_compound(&self) -> bool {
        !matches!(
            self,
            Shape::Circle(_) | Shape::Segment(_) | Shape::Ray(_) | Shape::Line(_)
        )
    }

    pub(crate) fn canon(&self) -> Canon {
        match self {
            Shape::Circle(c) => Canon::Circle(*c),
            Shape::Ray(r) => Canon::Linear(r.as_linear(), r.normal()),
            Shape::Line(l) => Canon::Linear(l.as_linear(), l.normal()),
            Shape::Segment(s) => Canon::Edges(vec![*s]),
            Shape::Triangle(t) => Canon::Edges(t.edges().to_vec()),
            Shape::Quad(q) => Canon::Edges(q.edges().to_vec()),
            Shape::Rect(r) => Canon::Edges(r.edges().to_vec()),
            Shape::Polygon(p) => Canon::Edges(p.edges().items),
            Shape::Polyline(p) => Canon::Edges(p.edges().items),
            Shape::Segments(s) => Canon::Edges(s.items.clone()),
        }
    }
}

impl From<Circle> for Shape {
    fn from(c: Circle) -> Self {
        Shape::Circle(c)
    }
}

impl From<Segment> for Shape {
    fn from(s: Segment) -> Self {
        Shape::Segment(s)
    }
}

impl From<Ray> for Shape {
    fn from(r: Ray) -> Self {
        Shape::Ray(r)
    }
}

impl From<Line> for Shape {
    fn from(l: Line) -> Self {
        Shape::Line(l)
    }
}

impl From<Triangle> for Shape {
    fn from(t: Triangle) -> Self {
        Shape::Triangle(t)
    }
}

impl From<Quad> for Shape {
    fn from(q: Quad) -> Self {
        Shape::Quad(q)
    }
}

impl From<Rect> for Shape {
    fn from(r: Rect) -> Self {
        Shape::Rect(r)
    }
}

impl From<Polygon> for Shape {
    fn from(p: Polygon) -> Self {
        Shape::Polygon(p)
    }
}

impl From<Polyline> for Shape {
    fn from(p: Polyline) -> Self {
        Shape::Polyline(p)
    }
}

impl From<Segments> for Shape {
    fn from(s: Segments) -> Self {
        Shape::Segments(s)
    }
}
