use crate::math::circle_2d::{circle_circle_intersect, circle_linear_intersect};
use crate::math::linear_2d::{intersect_params, Linear};
use crate::math::{try_normalize, Vector2};
use crate::shape::{Canon, Circle, Segment, Shape};

use super::CollisionPoint;

/// Exact intersection points between any two shapes.
///
/// Each returned point carries the outward normal of the *second* shape's
/// boundary at that point. Compound results are the union of all pairwise
/// edge intersections in iteration order; coincident points arising at a
/// shared vertex between adjacent edges are not deduplicated.
#[must_use]
pub fn intersect(a: &Shape, b: &Shape) -> Vec<CollisionPoint> {
    match (a.canon(), b.canon()) {
        (Canon::Circle(c0), Canon::Circle(c1)) => {
            circle_circle_intersect(&c0.center, c0.radius, &c1.center, c1.radius)
                .into_iter()
                .map(|p| CollisionPoint::new(p, circle_normal(&c1, &p)))
                .collect()
        }
        (Canon::Circle(c), Canon::Linear(l, n)) => {
            circle_linear_intersect(&c.center, c.radius, &l)
                .into_iter()
                .map(|(p, _)| CollisionPoint::new(p, n))
                .collect()
        }
        (Canon::Linear(l, _), Canon::Circle(c)) => {
            circle_linear_intersect(&c.center, c.radius, &l)
                .into_iter()
                .map(|(p, _)| CollisionPoint::new(p, circle_normal(&c, &p)))
                .collect()
        }
        (Canon::Circle(c), Canon::Edges(edges)) => edges
            .iter()
            .flat_map(|e| {
                let n = e.normal();
                circle_linear_intersect(&c.center, c.radius, &e.as_linear())
                    .into_iter()
                    .map(move |(p, _)| CollisionPoint::new(p, n))
            })
            .collect(),
        (Canon::Edges(edges), Canon::Circle(c)) => edges
            .iter()
            .flat_map(|e| {
                circle_linear_intersect(&c.center, c.radius, &e.as_linear())
                    .into_iter()
                    .map(|(p, _)| CollisionPoint::new(p, circle_normal(&c, &p)))
            })
            .collect(),
        (Canon::Linear(la, _), Canon::Linear(lb, nb)) => intersect_params(&la, &lb)
            .map(|(t, _)| CollisionPoint::new(la.point_at(t), nb))
            .into_iter()
            .collect(),
        (Canon::Linear(l, _), Canon::Edges(edges)) => edges
            .iter()
            .filter_map(|e| linear_segment_point(&l, e).map(|p| (p, e.normal())))
            .map(|(p, n)| CollisionPoint::new(p, n))
            .collect(),
        (Canon::Edges(edges), Canon::Linear(l, n)) => edges
            .iter()
            .filter_map(|e| linear_segment_point(&l, e))
            .map(|p| CollisionPoint::new(p, n))
            .collect(),
        (Canon::Edges(ea), Canon::Edges(eb)) => {
            let mut points = Vec::new();
            for sa in &ea {
                for sb in &eb {
                    if let Some(p) = segment_segment_point(sa, sb) {
                        points.push(CollisionPoint::new(p, sb.normal()));
                    }
                }
            }
            points
        }
    }
}

fn linear_segment_point(l: &Linear, e: &Segment) -> Option<crate::math::Point2> {
    if e.is_degenerate() {
        return None;
    }
    intersect_params(l, &e.as_linear()).map(|(t, _)| l.point_at(t))
}

fn segment_segment_point(a: &Segment, b: &Segment) -> Option<crate::math::Point2> {
    if a.is_degenerate() || b.is_degenerate() {
        return None;
    }
    intersect_params(&a.as_linear(), &b.as_linear()).map(|(t, _)| a.as_linear().point_at(t))
}

fn circle_normal(c: &Circle, p: &crate::math::Point2) -> Vector2 {
    try_normalize(&(p - c.center)).unwrap_or_else(Vector2::zeros)
}
