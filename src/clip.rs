use crate::shape::Polygon;

/// Boolean operations on polygon regions, supplied by the caller.
///
/// Fracturing and other region arithmetic delegate the actual clipping
/// to an implementation of this trait; the crate ships none of its own.
/// Implementations may return multiple disjoint pieces per operation and
/// should return an empty vector when the result region is empty.
pub trait PolygonClip {
    /// Region covered by both `subject` and `clip`.
    fn intersection(&self, subject: &Polygon, clip: &Polygon) -> Vec<Polygon>;

    /// Region of `subject` not covered by `clip`.
    fn difference(&self, subject: &Polygon, clip: &Polygon) -> Vec<Polygon>;

    /// Region covered by either polygon.
    fn union(&self, subject: &Polygon, clip: &Polygon) -> Vec<Polygon>;
}
