use crate::math::circle_2d::circle_circle_overlap;
use crate::math::linear_2d::{intersect_params, Linear};
use crate::math::TOLERANCE;
use crate::shape::{Canon, Circle, Segment, Shape};

/// Boolean overlap between any two shapes.
///
/// Dispatches on the canonical forms and favors early-exit analytic
/// shortcuts: region-containment pre-checks fire before any edge pair is
/// examined, and no intersection points are materialized.
#[must_use]
pub fn overlap(a: &Shape, b: &Shape) -> bool {
    match (a.canon(), b.canon()) {
        (Canon::Circle(c0), Canon::Circle(c1)) => {
            circle_circle_overlap(&c0.center, c0.radius, &c1.center, c1.radius)
        }
        (Canon::Circle(c), Canon::Linear(l, _)) | (Canon::Linear(l, _), Canon::Circle(c)) => {
            circle_linear_overlap(&c, &l)
        }
        (Canon::Circle(c), Canon::Edges(edges)) => circle_edge_shape_overlap(&c, b, &edges),
        (Canon::Edges(edges), Canon::Circle(c)) => circle_edge_shape_overlap(&c, a, &edges),
        (Canon::Linear(la, _), Canon::Linear(lb, _)) => intersect_params(&la, &lb).is_some(),
        (Canon::Linear(l, _), Canon::Edges(edges))
        | (Canon::Edges(edges), Canon::Linear(l, _)) => {
            edges.iter().any(|e| segment_linear_overlap(e, &l))
        }
        (Canon::Edges(ea), Canon::Edges(eb)) => {
            // Containment pre-check: one shape entirely inside the other
            // crosses no edges.
            if let Some(rep) = b.representative_point() {
                if a.contains_point(&rep) {
                    return true;
                }
            }
            if let Some(rep) = a.representative_point() {
                if b.contains_point(&rep) {
                    return true;
                }
            }
            ea.iter()
                .any(|s| eb.iter().any(|t| segment_segment_overlap(s, t)))
        }
    }
}

/// Distance-to-carrier test: closest domain-clamped point within radius.
fn circle_linear_overlap(c: &Circle, l: &Linear) -> bool {
    let closest = l.closest_point(&c.center);
    (closest - c.center).norm_squared() <= c.radius * c.radius + TOLERANCE
}

fn circle_edge_shape_overlap(c: &Circle, shape: &Shape, edges: &[Segment]) -> bool {
    if shape.contains_point(&c.center) {
        return true;
    }
    edges.iter().any(|e| {
        let (p, _) = e.closest_point_to(&c.center);
        (p - c.center).norm_squared() <= c.radius * c.radius + TOLERANCE
    })
}

fn segment_linear_overlap(e: &Segment, l: &Linear) -> bool {
    if e.is_degenerate() {
        // Zero-length segment acts as a point.
        return (l.closest_point(&e.start) - e.start).norm_squared() < TOLERANCE;
    }
    intersect_params(&e.as_linear(), l).is_some()
}

fn segment_segment_overlap(s: &Segment, t: &Segment) -> bool {
    match (s.is_degenerate(), t.is_degenerate()) {
        (true, true) => (s.start - t.start).norm_squared() < TOLERANCE,
        (true, false) => {
            let (p, _) = t.closest_point_to(&s.start);
            (p - s.start).norm_squared() < TOLERANCE
        }
        (false, true) => {
            let (p, _) = s.closest_point_to(&t.start);
            (p - t.start).norm_squared() < TOLERANCE
        }
        (false, false) => intersect_params(&s.as_linear(), &t.as_linear()).is_some(),
    }
}
