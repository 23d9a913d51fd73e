use crate::math::circle_2d::{circle_circle_intersect, circle_linear_intersect};
use crate::math::linear_2d::{closest_params, Linear};
use crate::math::{try_normalize, Point2, Vector2};
use crate::shape::{Canon, Circle, Segment, Shape};

use super::{ClosestPointResult, CollisionPoint};

/// Nearest point pair between any two shapes.
///
/// Compound shapes reduce over their edge decomposition with a strict
/// `<` comparison, so the first edge encountered in iteration order wins
/// ties. That ordering is preserved source behavior, not a geometric
/// guarantee. Returns `None` only for empty compound shapes.
#[must_use]
pub fn closest_point(a: &Shape, b: &Shape) -> Option<ClosestPointResult> {
    let result = match (a.canon(), b.canon()) {
        (Canon::Circle(c0), Canon::Circle(c1)) => Some(circle_circle_closest(&c0, &c1)),
        (Canon::Circle(c), Canon::Linear(l, n)) => Some(circle_linear_closest(&c, &l, n)),
        (Canon::Linear(l, n), Canon::Circle(c)) => {
            Some(circle_linear_closest(&c, &l, n).swapped())
        }
        (Canon::Circle(c), Canon::Edges(edges)) => circle_edges_closest(&c, &edges),
        (Canon::Edges(edges), Canon::Circle(c)) => {
            circle_edges_closest(&c, &edges).map(|r| r.swapped())
        }
        (Canon::Linear(la, na), Canon::Linear(lb, nb)) => {
            Some(linear_linear_closest(&la, na, &lb, nb))
        }
        (Canon::Linear(l, n), Canon::Edges(edges)) => linear_edges_closest(&l, n, &edges),
        (Canon::Edges(edges), Canon::Linear(l, n)) => {
            linear_edges_closest(&l, n, &edges).map(|r| r.swapped())
        }
        (Canon::Edges(ea), Canon::Edges(eb)) => edges_edges_closest(&ea, &eb),
    }?;

    // Edge indices are only meaningful on compound shapes.
    let self_index = if a.is_compound() { result.self_index } else { None };
    let other_index = if b.is_compound() { result.other_index } else { None };
    Some(result.with_indices(self_index, other_index))
}

fn circle_circle_closest(c0: &Circle, c1: &Circle) -> ClosestPointResult {
    // Crossing boundaries touch: report the shared point at distance zero.
    if let Some(&p) = circle_circle_intersect(&c0.center, c0.radius, &c1.center, c1.radius).first()
    {
        let sp = CollisionPoint::new(p, outward_or(c0, &p, Vector2::new(1.0, 0.0)));
        // A point-sized circle touching at its own center has no outward
        // direction; oppose the other side's normal.
        let op = c1
            .normal_at(&p)
            .map_or_else(|| sp.flipped(), |n| CollisionPoint::new(p, n));
        return ClosestPointResult::new(sp, op);
    }

    let d = (c1.center - c0.center).norm();
    let dir = try_normalize(&(c1.center - c0.center)).unwrap_or(Vector2::new(1.0, 0.0));

    let (sp, op) = if d > c0.radius + c1.radius {
        // Separated: facing boundary points.
        (c0.center + dir * c0.radius, c1.center - dir * c1.radius)
    } else if d + c1.radius <= c0.radius {
        // c1 inside c0: both boundary points on the far side of c1.
        (c0.center + dir * c0.radius, c1.center + dir * c1.radius)
    } else {
        // c0 inside c1.
        (c0.center - dir * c0.radius, c1.center - dir * c1.radius)
    };
    let n0 = outward_or(c0, &sp, dir);
    let n1 = outward_or(c1, &op, -dir);
    ClosestPointResult::new(CollisionPoint::new(sp, n0), CollisionPoint::new(op, n1))
}

fn circle_linear_closest(c: &Circle, l: &Linear, normal: Vector2) -> ClosestPointResult {
    // A crossing means the boundaries touch.
    if let Some((p, _)) = circle_linear_intersect(&c.center, c.radius, l).first() {
        let n = outward_or(c, p, normal);
        return ClosestPointResult::new(CollisionPoint::new(*p, n), CollisionPoint::new(*p, normal));
    }

    let op = l.closest_point(&c.center);
    let dir = try_normalize(&(op - c.center)).unwrap_or(normal);
    let sp = c.center + dir * c.radius;
    ClosestPointResult::new(
        CollisionPoint::new(sp, dir),
        CollisionPoint::new(op, normal),
    )
}

fn linear_linear_closest(la: &Linear, na: Vector2, lb: &Linear, nb: Vector2) -> ClosestPointResult {
    let (t, u) = closest_params(la, lb);
    ClosestPointResult::new(
        CollisionPoint::new(la.point_at(t), na),
        CollisionPoint::new(lb.point_at(u), nb),
    )
}

fn circle_edges_closest(c: &Circle, edges: &[Segment]) -> Option<ClosestPointResult> {
    let mut best: Option<ClosestPointResult> = None;
    for (i, edge) in edges.iter().enumerate() {
        let candidate = circle_linear_closest(c, &edge.as_linear(), edge_normal(edge, c.center))
            .with_indices(None, Some(i));
        if best
            .as_ref()
            .is_none_or(|b| candidate.distance_squared < b.distance_squared)
        {
            best = Some(candidate);
        }
    }
    best
}

fn linear_edges_closest(
    l: &Linear,
    normal: Vector2,
    edges: &[Segment],
) -> Option<ClosestPointResult> {
    let mut best: Option<ClosestPointResult> = None;
    for (i, edge) in edges.iter().enumerate() {
        let (t, u) = closest_params(l, &edge.as_linear());
        let sp = l.point_at(t);
        let op = edge.as_linear().point_at(u);
        let candidate = ClosestPointResult::new(
            CollisionPoint::new(sp, normal),
            CollisionPoint::new(op, edge_normal(edge, sp)),
        )
        .with_indices(None, Some(i));
        if best
            .as_ref()
            .is_none_or(|b| candidate.distance_squared < b.distance_squared)
        {
            best = Some(candidate);
        }
    }
    best
}

fn edges_edges_closest(ea: &[Segment], eb: &[Segment]) -> Option<ClosestPointResult> {
    let mut best: Option<ClosestPointResult> = None;
    for (i, sa) in ea.iter().enumerate() {
        for (j, sb) in eb.iter().enumerate() {
            let (t, u) = closest_params(&sa.as_linear(), &sb.as_linear());
            let sp = sa.as_linear().point_at(t);
            let op = sb.as_linear().point_at(u);
            let candidate = ClosestPointResult::new(
                CollisionPoint::new(sp, edge_normal(sa, op)),
                CollisionPoint::new(op, edge_normal(sb, sp)),
            )
            .with_indices(Some(i), Some(j));
            if best
                .as_ref()
                .is_none_or(|b| candidate.distance_squared < b.distance_squared)
            {
                best = Some(candidate);
            }
        }
    }
    best
}

/// Unit right-perpendicular of the edge direction; a degenerate edge
/// falls back to the direction toward `toward`.
fn edge_normal(edge: &Segment, toward: Point2) -> Vector2 {
    let n = edge.normal();
    if n.norm_squared() > 0.0 {
        n
    } else {
        try_normalize(&(toward - edge.start)).unwrap_or_else(Vector2::zeros)
    }
}

/// Outward circle normal at `p`, with a fallback for a point at the center.
fn outward_or(c: &Circle, p: &Point2, fallback: Vector2) -> Vector2 {
    c.normal_at(p).unwrap_or(fallback)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::TOLERANCE;
    use crate::shape::{Polygon, Ray};

    fn square(x: f64, y: f64, side: f64) -> Shape {
        Polygon::new(vec![
            Point2::new(x, y),
            Point2::new(x + side, y),
            Point2::new(x + side, y + side),
            Point2::new(x, y + side),
        ])
        .into()
    }

    #[test]
    fn circle_circle_separated() {
        let a: Shape = Circle::new(Point2::origin(), 1.0).into();
        let b: Shape = Circle::new(Point2::new(10.0, 0.0), 2.0).into();
        let r = closest_point(&a, &b).unwrap();
        assert!((r.self_point.point - Point2::new(1.0, 0.0)).norm() < TOLERANCE);
        assert!((r.other_point.point - Point2::new(8.0, 0.0)).norm() < TOLERANCE);
        assert!((r.distance_squared - 49.0).abs() < 1e-9);
        assert_eq!(r.self_index, None);
        assert_eq!(r.other_index, None);
    }

    #[test]
    fn distance_matches_returned_points() {
        let a: Shape = Circle::new(Point2::new(-3.0, 2.0), 1.5).into();
        let b = square(2.0, 2.0, 3.0);
        let r = closest_point(&a, &b).unwrap();
        let d = (r.self_point.point - r.other_point.point).norm_squared();
        assert!((r.distance_squared - d).abs() < 1e-9);
        assert!(r.distance_squared >= 0.0);
    }

    #[test]
    fn touching_shapes_zero_distance() {
        let a: Shape = Circle::new(Point2::origin(), 5.0).into();
        let b: Shape = Circle::new(Point2::new(10.0, 0.0), 5.0).into();
        let r = closest_point(&a, &b).unwrap();
        assert!(r.distance_squared < TOLERANCE);
        assert!((r.self_point.point - Point2::new(5.0, 0.0)).norm() < 1e-9);
    }

    #[test]
    fn crossing_segments_zero_distance() {
        let a: Shape = Segment::new(Point2::new(0.0, 0.0), Point2::new(2.0, 2.0)).into();
        let b: Shape = Segment::new(Point2::new(0.0, 2.0), Point2::new(2.0, 0.0)).into();
        let r = closest_point(&a, &b).unwrap();
        assert!(r.distance_squared < TOLERANCE);
    }

    #[test]
    fn polygon_edge_index_reported() {
        // Point-sized circle below the square: bottom edge (index 0) wins.
        let c: Shape = Circle::new(Point2::new(1.5, -2.0), 0.0).into();
        let sq = square(0.0, 0.0, 3.0);
        let r = closest_point(&sq, &c).unwrap();
        assert_eq!(r.self_index, Some(0));
        assert_eq!(r.other_index, None);
        assert!((r.self_point.point - Point2::new(1.5, 0.0)).norm() < TOLERANCE);
        // Outward (downward) normal of the bottom edge.
        assert!((r.self_point.normal - Vector2::new(0.0, -1.0)).norm() < TOLERANCE);
    }

    #[test]
    fn first_edge_wins_ties() {
        // A point equidistant from two polygon edges: the lower-indexed
        // edge must win under the strict `<` reduction.
        let sq = square(0.0, 0.0, 2.0);
        let c: Shape = Circle::new(Point2::new(1.0, 1.0), 0.0).into();
        let r = closest_point(&sq, &c).unwrap();
        assert_eq!(r.self_index, Some(0));
    }

    #[test]
    fn ray_to_segment_behind_origin() {
        let ray: Shape = Ray::new(Point2::origin(), Vector2::new(1.0, 0.0))
            .unwrap()
            .into();
        let seg: Shape = Segment::new(Point2::new(-4.0, 3.0), Point2::new(-4.0, -3.0)).into();
        let r = closest_point(&ray, &seg).unwrap();
        // Closest approach is at the ray origin.
        assert!((r.self_point.point - Point2::origin()).norm() < TOLERANCE);
        assert!((r.other_point.point - Point2::new(-4.0, 0.0)).norm() < TOLERANCE);
        assert!((r.distance_squared - 16.0).abs() < 1e-9);
    }

    #[test]
    fn point_circle_on_boundary_opposing_normals() {
        // Zero-radius circle sitting exactly on the boundary: contact at
        // distance zero, normals opposing.
        let a: Shape = Circle::new(Point2::origin(), 5.0).into();
        let b: Shape = Circle::new(Point2::new(5.0, 0.0), 0.0).into();
        let r = closest_point(&a, &b).unwrap();
        assert!(r.distance_squared < TOLERANCE);
        assert!((r.self_point.normal - Vector2::new(1.0, 0.0)).norm() < TOLERANCE);
        assert!((r.other_point.normal - Vector2::new(-1.0, 0.0)).norm() < TOLERANCE);
    }

    #[test]
    fn contained_circle_nearest_boundary() {
        let outer: Shape = Circle::new(Point2::origin(), 10.0).into();
        let inner: Shape = Circle::new(Point2::new(3.0, 0.0), 1.0).into();
        let r = closest_point(&outer, &inner).unwrap();
        // Outer boundary at (10, 0), inner far side at (4, 0).
        assert!((r.self_point.point - Point2::new(10.0, 0.0)).norm() < 1e-9);
        assert!((r.other_point.point - Point2::new(4.0, 0.0)).norm() < 1e-9);
    }

    #[test]
    fn empty_polygon_yields_none() {
        let empty: Shape = Polygon::default().into();
        let c: Shape = Circle::new(Point2::origin(), 1.0).into();
        assert!(closest_point(&empty, &c).is_none());
        assert!(closest_point(&c, &empty).is_none());
    }

    #[test]
    fn symmetric_distance() {
        let a = square(0.0, 0.0, 2.0);
        let b: Shape = Segment::new(Point2::new(5.0, 0.0), Point2::new(5.0, 2.0)).into();
        let r_ab = closest_point(&a, &b).unwrap();
        let r_ba = closest_point(&b, &a).unwrap();
        assert!((r_ab.distance_squared - r_ba.distance_squared).abs() < 1e-9);
    }
}
