use rand::Rng;

use crate::math::{Point2, Rotation2, Vector2};

use super::quad::Rect;
use super::segment::Segment;

/// A collection of independent segments (edge soup).
///
/// The segments need not chain end-to-end; this is both the edge
/// decomposition of the closed shapes and a queryable shape of its own.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Segments {
    pub items: Vec<Segment>,
}

impl Segments {
    #[must_use]
    pub fn new(items: Vec<Segment>) -> Self {
        Self { items }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Segment> {
        self.items.iter()
    }

    pub fn push(&mut self, s: Segment) {
        self.items.push(s);
    }

    #[must_use]
    pub fn bounding_box(&self) -> Option<Rect> {
        Rect::from_points(
            self.items
                .iter()
                .flat_map(|s| [s.start, s.end]),
        )
    }

    /// Uniform random segment of the collection; `None` when empty.
    pub fn random_segment<R: Rng>(&self, rng: &mut R) -> Option<Segment> {
        if self.items.is_empty() {
            None
        } else {
            Some(self.items[rng.gen_range(0..self.items.len())])
        }
    }

    /// Translates every segment in place.
    pub fn translate(&mut self, offset: Vector2) {
        for s in &mut self.items {
            s.start += offset;
            s.end += offset;
        }
    }

    /// Copy-producing variant of [`Self::translate`].
    #[must_use]
    pub fn translated(&self, offset: Vector2) -> Self {
        let mut c = self.clone();
        c.translate(offset);
        c
    }

    /// Rotates every segment around `pivot` in place.
    pub fn rotate(&mut self, pivot: Point2, angle: f64) {
        let rot = Rotation2::new(angle);
        for s in &mut self.items {
            s.start = pivot + rot * (s.start - pivot);
            s.end = pivot + rot * (s.end - pivot);
        }
    }

    /// Copy-producing variant of [`Self::rotate`].
    #[must_use]
    pub fn rotated(&self, pivot: Point2, angle: f64) -> Self {
        let mut c = self.clone();
        c.rotate(pivot, angle);
        c
    }

    /// Scales every segment away from `pivot` in place.
    pub fn scale(&mut self, pivot: Point2, factor: f64) {
        for s in &mut self.items {
            s.start = pivot + (s.start - pivot) * factor;
            s.end = pivot + (s.end - pivot) * factor;
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

impl FromIterator<Segment> for Segments {
    fn from_iter<I: IntoIterator<Item = Segment>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::TOLERANCE;
    use std::f64::consts::FRAC_PI_2;

    fn soup() -> Segments {
        Segments::new(vec![
            Segment::new(Point2::new(0.0, 0.0), Point2::new(1.0, 0.0)),
            Segment::new(Point2::new(3.0, 3.0), Point2::new(3.0, 5.0)),
        ])
    }

    #[test]
    fn bounding_box_spans_all_endpoints() {
        let bb = soup().bounding_box();
        assert!(bb.is_some());
        if let Some(bb) = bb {
            assert!((bb.x).abs() < TOLERANCE);
            assert!((bb.width - 3.0).abs() < TOLERANCE);
            assert!((bb.height - 5.0).abs() < TOLERANCE);
        }
        assert!(Segments::default().bounding_box().is_none());
    }

    #[test]
    fn rotate_quarter_turn() {
        let mut s = soup();
        s.rotate(Point2::origin(), FRAC_PI_2);
        assert!((s.items[0].end - Point2::new(0.0, 1.0)).norm() < 1e-9);
    }

    #[test]
    fn scaled_copy_leaves_original() {
        let s = soup();
        let doubled = s.scaled(Point2::origin(), 2.0);
        assert!((doubled.items[1].end - Point2::new(6.0, 10.0)).norm() < TOLERANCE);
        assert!((s.items[1].end - Point2::new(3.0, 5.0)).norm() < TOLERANCE);
    }
}
