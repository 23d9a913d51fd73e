use crate::math::{Point2, Rotation2, Vector2, TOLERANCE};

use super::{Circle, Line, Polygon, Polyline, Quad, Ray, Rect, Segment, Segments, Shape, Triangle};

/// A uniform similarity transform: scale about the origin, then rotate,
/// then translate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform2 {
    pub position: Vector2,
    pub rotation: f64,
    pub scale: f64,
}

impl Default for Transform2 {
    fn default() -> Self {
        Self {
            position: Vector2::zeros(),
            rotation: 0.0,
            scale: 1.0,
        }
    }
}

impl Transform2 {
    #[must_use]
    pub fn new(position: Vector2, rotation: f64, scale: f64) -> Self {
        Self {
            position,
            rotation,
            scale,
        }
    }

    /// Maps a point through scale, rotation and translation.
    #[must_use]
    pub fn apply(&self, p: &Point2) -> Point2 {
        let rot = Rotation2::new(self.rotation);
        Point2::from(rot * (p.coords * self.scale) + self.position)
    }

    /// Maps a unit direction: rotation only, reversed under negative scale.
    #[must_use]
    pub fn apply_unit(&self, dir: &Vector2) -> Vector2 {
        let rotated = Rotation2::new(self.rotation) * dir;
        if self.scale < 0.0 {
            -rotated
        } else {
            rotated
        }
    }
}

impl Shape {
    /// A copy of the shape mapped through `t`.
    ///
    /// An axis-aligned rectangle stays a `Rect` only under a (near-)zero
    /// rotation; otherwise it comes back as the equivalent [`Quad`].
    #[must_use]
    pub fn transformed(&self, t: &Transform2) -> Shape {
        match self {
            Shape::Circle(c) => {
                Circle::new(t.apply(&c.center), c.radius * t.scale.abs()).into()
            }
            Shape::Segment(s) => transformed_segment(s, t).into(),
            Shape::Ray(r) => {
                Ray::from_unit(t.apply(r.origin()), t.apply_unit(r.direction()), r.has_flipped_normal()).into()
            }
            Shape::Line(l) => {
                Line::from_unit(t.apply(l.origin()), t.apply_unit(l.direction()), l.has_flipped_normal()).into()
            }
            Shape::Triangle(tri) => {
                Triangle::new(t.apply(&tri.a), t.apply(&tri.b), t.apply(&tri.c)).into()
            }
            Shape::Quad(q) => {
                Quad::new(t.apply(&q.a), t.apply(&q.b), t.apply(&q.c), t.apply(&q.d)).into()
            }
            Shape::Rect(r) => {
                if t.rotation.abs() < TOLERANCE {
                    Rect::from_points(r.corners().iter().map(|p| t.apply(p)))
                        .unwrap_or(Rect::new(0.0, 0.0, 0.0, 0.0))
                        .into()
                } else {
                    Shape::Quad(r.to_quad()).transformed(t)
                }
            }
            Shape::Polygon(p) => {
                Polygon::new(p.vertices.iter().map(|v| t.apply(v)).collect()).into()
            }
            Shape::Polyline(p) => {
                Polyline::new(p.vertices.iter().map(|v| t.apply(v)).collect()).into()
            }
            Shape::Segments(s) => s
                .items
                .iter()
                .map(|e| transformed_segment(e, t))
                .collect::<Segments>()
                .into(),
        }
    }
}

fn transformed_segment(s: &Segment, t: &Transform2) -> Segment {
    if s.has_flipped_normal() {
        Segment::with_flipped_normal(t.apply(&s.start), t.apply(&s.end))
    } else {
        Segment::new(t.apply(&s.start), t.apply(&s.end))
    }
}

/// A shape placed in the world by a transform.
///
/// Stores the local-space shape and its transform, and caches the
/// world-space shape so queries never re-derive it. `enabled` is a
/// caller-owned flag for broad-phase filtering; no query consults it.
#[derive(Debug, Clone)]
pub struct ShapeContainer {
    local: Shape,
    transform: Transform2,
    world: Shape,
    pub enabled: bool,
}

impl ShapeContainer {
    #[must_use]
    pub fn new(shape: Shape) -> Self {
        Self::with_transform(shape, Transform2::default())
    }

    #[must_use]
    pub fn with_transform(shape: Shape, transform: Transform2) -> Self {
        let world = shape.transformed(&transform);
        Self {
            local: shape,
            transform,
            world,
            enabled: true,
        }
    }

    /// The world-space shape all queries should run against.
    #[must_use]
    pub fn shape(&self) -> &Shape {
        &self.world
    }

    #[must_use]
    pub fn local_shape(&self) -> &Shape {
        &self.local
    }

    #[must_use]
    pub fn transform(&self) -> &Transform2 {
        &self.transform
    }

    /// Replaces the transform and recomputes the world-space shape.
    pub fn set_transform(&mut self, transform: Transform2) {
        self.transform = transform;
        self.world = self.local.transformed(&self.transform);
    }

    /// Replaces the local shape and recomputes the world-space shape.
    pub fn set_shape(&mut self, shape: Shape) {
        self.world = shape.transformed(&self.transform);
        self.local = shape;
    }
}
