use rand::Rng;

use crate::math::{Point2, Rotation2, Vector2, TOLERANCE};
use crate::tessellation::{delaunay, ear_clip};

use super::circle::Circle;
use super::points::Points;
use super::quad::Rect;
use super::segment::Segment;
use super::segments::Segments;
use super::triangulation::Triangulation;

/// A simple closed polygon over a counter-clockwise vertex sequence.
///
/// Simplicity (no self-intersection) and winding are caller-enforced
/// invariants: they are not validated at the API boundary, and queries on
/// malformed polygons are best-effort. [`Self::fix_winding_order`]
/// corrects a clockwise sequence.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Polygon {
    pub vertices: Vec<Point2>,
}

impl Polygon {
    #[must_use]
    pub fn new(vertices: Vec<Point2>) -> Self {
        Self { vertices }
    }

    #[must_use]
    pub fn from_points(points: &Points) -> Self {
        Self {
            vertices: points.items.clone(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Signed area via the shoelace formula: positive for counter-clockwise.
    #[must_use]
    pub fn signed_area(&self) -> f64 {
        let n = self.vertices.len();
        if n < 3 {
            return 0.0;
        }
        let mut sum = 0.0;
        for i in 0..n {
            let j = (i + 1) % n;
            sum += self.vertices[i].x * self.vertices[j].y
                - self.vertices[j].x * self.vertices[i].y;
        }
        sum * 0.5
    }

    #[must_use]
    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    #[must_use]
    pub fn is_clockwise(&self) -> bool {
        self.signed_area() < 0.0
    }

    /// Reverses the vertex order if the polygon is wound clockwise.
    pub fn fix_winding_order(&mut self) {
        if self.is_clockwise() {
            self.vertices.reverse();
        }
    }

    /// Copy-producing variant of [`Self::fix_winding_order`].
    #[must_use]
    pub fn fixed_winding(&self) -> Self {
        let mut p = self.clone();
        p.fix_winding_order();
        p
    }

    /// Area-weighted centroid (the polygon-centroid formula, not the
    /// vertex mean, for accuracy on non-uniform vertex density).
    ///
    /// Falls back to the vertex mean for degenerate (zero-area) input;
    /// `None` when the polygon has no vertices.
    #[must_use]
    pub fn centroid(&self) -> Option<Point2> {
        let n = self.vertices.len();
        if n == 0 {
            return None;
        }
        let area = self.signed_area();
        if area.abs() < TOLERANCE {
            return Points::new(self.vertices.clone()).mean();
        }
        let mut cx = 0.0;
        let mut cy = 0.0;
        for i in 0..n {
            let j = (i + 1) % n;
            let (vi, vj) = (self.vertices[i], self.vertices[j]);
            let w = vi.x * vj.y - vj.x * vi.y;
            cx += (vi.x + vj.x) * w;
            cy += (vi.y + vj.y) * w;
        }
        Some(Point2::new(cx / (6.0 * area), cy / (6.0 * area)))
    }

    /// Even-odd point-in-polygon test.
    ///
    /// Casts a ray along -X and counts edge crossings, with strict
    /// y-ordering on the edge endpoints so a vertex exactly on the
    /// scanline is never counted twice.
    #[must_use]
    pub fn contains_point(&self, p: &Point2) -> bool {
        let n = self.vertices.len();
        if n < 3 {
            return false;
        }
        let mut inside = false;
        let mut j = n - 1;
        for i in 0..n {
            let vi = self.vertices[i];
            let vj = self.vertices[j];
            if (vi.y < p.y && vj.y >= p.y) || (vj.y < p.y && vi.y >= p.y) {
                let cross_x = vi.x + (p.y - vi.y) / (vj.y - vi.y) * (vj.x - vi.x);
                if cross_x < p.x {
                    inside = !inside;
                }
            }
            j = i;
        }
        inside
    }

    /// Wrap-around edge decomposition (outward normals for CCW winding).
    #[must_use]
    pub fn edges(&self) -> Segments {
        let n = self.vertices.len();
        match n {
            0 | 1 => Segments::default(),
            2 => Segments::new(vec![Segment::new(self.vertices[0], self.vertices[1])]),
            _ => Segments::new(
                (0..n)
                    .map(|i| Segment::new(self.vertices[i], self.vertices[(i + 1) % n]))
                    .collect(),
            ),
        }
    }

    #[must_use]
    pub fn bounding_box(&self) -> Option<Rect> {
        Rect::from_points(self.vertices.iter().copied())
    }

    /// Circle around the vertex mean reaching the farthest vertex.
    #[must_use]
    pub fn bounding_circle(&self) -> Option<Circle> {
        let center = Points::new(self.vertices.clone()).mean()?;
        let radius = self
            .vertices
            .iter()
            .map(|v| (v - center).norm())
            .fold(0.0, f64::max);
        Some(Circle::new(center, radius))
    }

    /// Translates all vertices in place.
    pub fn translate(&mut self, offset: Vector2) {
        for v in &mut self.vertices {
            *v += offset;
        }
    }

    /// Copy-producing variant of [`Self::translate`].
    #[must_use]
    pub fn translated(&self, offset: Vector2) -> Self {
        let mut p = self.clone();
        p.translate(offset);
        p
    }

    /// Rotates all vertices around `pivot` in place.
    pub fn rotate(&mut self, pivot: Point2, angle: f64) {
        let rot = Rotation2::new(angle);
        for v in &mut self.vertices {
            *v = pivot + rot * (*v - pivot);
        }
    }

    /// Copy-producing variant of [`Self::rotate`].
    #[must_use]
    pub fn rotated(&self, pivot: Point2, angle: f64) -> Self {
        let mut p = self.clone();
        p.rotate(pivot, angle);
        p
    }

    /// Scales all vertices away from `pivot` in place.
    pub fn scale(&mut self, pivot: Point2, factor: f64) {
        for v in &mut self.vertices {
            *v = pivot + (*v - pivot) * factor;
        }
    }

    /// Copy-producing variant of [`Self::scale`].
    #[must_use]
    pub fn scaled(&self, pivot: Point2, factor: f64) -> Self {
        let mut p = self.clone();
        p.scale(pivot, factor);
        p
    }

    /// Ear-clipping triangulation with the deterministic ear rule.
    #[must_use]
    pub fn triangulate(&self) -> Triangulation {
        ear_clip::triangulate(self)
    }

    /// Ear-clipping triangulation with randomized ear selection.
    pub fn triangulate_with<R: Rng>(&self, rng: &mut R) -> Triangulation {
        ear_clip::triangulate_with(self, rng)
    }

    /// Delaunay triangulation of the vertex set (Bowyer-Watson).
    ///
    /// Triangulates the vertices as a point cloud; the polygon boundary
    /// is not constrained.
    #[must_use]
    pub fn triangulate_delaunay(&self) -> Triangulation {
        delaunay::triangulate_delaunay(&self.vertices)
    }

    /// Uniform random interior point, sampled area-weighted over the
    /// ear-clipping triangulation. `None` for degenerate polygons.
    pub fn random_point<R: Rng>(&self, rng: &mut R) -> Option<Point2> {
        let triangulation = self.triangulate();
        let total = triangulation.area();
        if total < TOLERANCE {
            return None;
        }
        let mut pick = rng.gen::<f64>() * total;
        for tri in &triangulation.triangles {
            pick -= tri.area();
            if pick <= 0.0 {
                return Some(tri.random_point(rng));
            }
        }
        triangulation.triangles.last().map(|t| t.random_point(rng))
    }

    /// Uniform random vertex; `None` when empty.
    pub fn random_vertex<R: Rng>(&self, rng: &mut R) -> Option<Point2> {
        if self.vertices.is_empty() {
            None
        } else {
            Some(self.vertices[rng.gen_range(0..self.vertices.len())])
        }
    }

    /// Uniform random edge; `None` for fewer than two vertices.
    pub fn random_edge<R: Rng>(&self, rng: &mut R) -> Option<Segment> {
        let edges = self.edges();
        if edges.is_empty() {
            None
        } else {
            Some(edges.items[rng.gen_range(0..edges.len())])
        }
    }
}
