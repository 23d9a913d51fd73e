use crate::math::{Point2, Rotation2, Vector2};

use super::quad::Rect;
use super::segment::Segment;
use super::segments::Segments;

/// An open chain of vertices: no wrap-around edge between last and first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Polyline {
    pub vertices: Vec<Point2>,
}

impl Polyline {
    #[must_use]
    pub fn new(vertices: Vec<Point2>) -> Self {
        Self { vertices }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Total chain length.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.vertices
            .windows(2)
            .map(|w| (w[1] - w[0]).norm())
            .sum()
    }

    /// Consecutive-vertex edge decomposition (n - 1 segments).
    #[must_use]
    pub fn edges(&self) -> Segments {
        Segments::new(
            self.vertices
                .windows(2)
                .map(|w| Segment::new(w[0], w[1]))
                .collect(),
        )
    }

    #[must_use]
    pub fn bounding_box(&self) -> Option<Rect> {
        Rect::from_points(self.vertices.iter().copied())
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
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::TOLERANCE;

    fn chain() -> Polyline {
        Polyline::new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(3.0, 0.0),
            Point2::new(3.0, 4.0),
        ])
    }

    #[test]
    fn no_wrap_around_edge() {
        let edges = chain().edges();
        assert_eq!(edges.len(), 2);
        assert!((edges.items[1].end - Point2::new(3.0, 4.0)).norm() < TOLERANCE);
    }

    #[test]
    fn length_sums_segments() {
        assert!((chain().length() - 7.0).abs() < TOLERANCE);
        assert!(Polyline::default().length().abs() < TOLERANCE);
    }

    #[test]
    fn translated_leaves_original() {
        let c = chain();
        let moved = c.translated(Vector2::new(1.0, 1.0));
        assert!((moved.vertices[0] - Point2::new(1.0, 1.0)).norm() < TOLERANCE);
        assert!((c.vertices[0] - Point2::origin()).norm() < TOLERANCE);
    }
}
