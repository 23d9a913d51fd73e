use rand::Rng;

use crate::math::{Point2, Rotation2, Vector2};

use super::quad::Rect;

/// An ordered sequence of 2D points.
///
/// No uniqueness or winding guarantee; the base storage type behind the
/// compound shapes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Points {
    pub items: Vec<Point2>,
}

impl Points {
    #[must_use]
    pub fn new(items: Vec<Point2>) -> Self {
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

    pub fn iter(&self) -> std::slice::Iter<'_, Point2> {
        self.items.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Point2] {
        &self.items
    }

    pub fn push(&mut self, p: Point2) {
        self.items.push(p);
    }

    /// Mean of the points; `None` when empty.
    #[must_use]
    pub fn mean(&self) -> Option<Point2> {
        if self.items.is_empty() {
            return None;
        }
        let mut sum = Vector2::zeros();
        for p in &self.items {
            sum += p.coords;
        }
        #[allow(clippy::cast_precision_loss)]
        Some(Point2::from(sum / self.items.len() as f64))
    }

    #[must_use]
    pub fn bounding_box(&self) -> Option<Rect> {
        Rect::from_points(self.items.iter().copied())
    }

    /// Uniform random point of the set; `None` when empty.
    pub fn random_point<R: Rng>(&self, rng: &mut R) -> Option<Point2> {
        self.random_index(rng).map(|i| self.items[i])
    }

    /// Uniform random index into the set; `None` when empty.
    pub fn random_index<R: Rng>(&self, rng: &mut R) -> Option<usize> {
        if self.items.is_empty() {
            None
        } else {
            Some(rng.gen_range(0..self.items.len()))
        }
    }

    /// Translates every point in place.
    pub fn translate(&mut self, offset: Vector2) {
        for p in &mut self.items {
            *p += offset;
        }
    }

    /// Rotates every point around `pivot` in place.
    pub fn rotate(&mut self, pivot: Point2, angle: f64) {
        let rot = Rotation2::new(angle);
        for p in &mut self.items {
            *p = pivot + rot * (*p - pivot);
        }
    }

    /// Scales every point away from `pivot` in place.
    pub fn scale(&mut self, pivot: Point2, factor: f64) {
        for p in &mut self.items {
            *p = pivot + (*p - pivot) * factor;
        }
    }
}

impl FromIterator<Point2> for Points {
    fn from_iter<I: IntoIterator<Item = Point2>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}
