use std::collections::HashMap;

use crate::math::{Point2, TOLERANCE};
use crate::shape::{Rect, Triangle, Triangulation};

/// Delaunay triangulation of a point set via Bowyer-Watson insertion.
///
/// Points are inserted one at a time into a supra-triangle large enough
/// to enclose the whole set; triangles whose circumcircle contains the
/// new point are removed and their boundary is re-stitched to it. Any
/// triangle still touching a supra-triangle corner at the end is
/// discarded. Fewer than three input points yield an empty result.
#[must_use]
pub fn triangulate_delaunay(points: &[Point2]) -> Triangulation {
    if points.len() < 3 {
        return Triangulation::default();
    }

    let supra = bounding_triangle(points);
    let mut all = vec![supra.a, supra.b, supra.c];
    all.extend_from_slice(points);

    // Index triples into `all`; 0..3 are the supra corners.
    let mut tris: Vec<[usize; 3]> = vec![[0, 1, 2]];

    for p_idx in 3..all.len() {
        let p = all[p_idx];
        let mut edge_count: HashMap<(usize, usize), usize> = HashMap::new();
        let mut kept = Vec::with_capacity(tris.len());
        for tri in tris {
            if circumcircle_contains(&all, tri, &p) {
                for (i, j) in [(tri[0], tri[1]), (tri[1], tri[2]), (tri[2], tri[0])] {
                    let key = if i < j { (i, j) } else { (j, i) };
                    *edge_count.entry(key).or_insert(0) += 1;
                }
            } else {
                kept.push(tri);
            }
        }
        // Edges seen once form the boundary of the removed cavity.
        for ((i, j), count) in edge_count {
            if count == 1 {
                kept.push([i, j, p_idx]);
            }
        }
        tris = kept;
    }

    let triangles = tris
        .into_iter()
        .filter(|tri| tri.iter().all(|&i| i >= 3))
        .map(|tri| Triangle::new(all[tri[0]], all[tri[1]], all[tri[2]]).fixed_winding())
        .collect();
    Triangulation::new(triangles)
}

/// A triangle guaranteed to strictly enclose every input point.
///
/// Built around the bounding box, scaled far past it so no input point
/// lands on a supra edge.
#[must_use]
pub fn bounding_triangle(points: &[Point2]) -> Triangle {
    let bbox = Rect::from_points(points.iter().copied())
        .unwrap_or_else(|| Rect::new(0.0, 0.0, 1.0, 1.0));
    let center = bbox.center();
    let m = bbox.width.max(bbox.height).max(1.0) * 20.0;
    Triangle::new(
        Point2::new(center.x - 2.0 * m, center.y - m),
        Point2::new(center.x + 2.0 * m, center.y - m),
        Point2::new(center.x, center.y + 2.0 * m),
    )
}

fn circumcircle_contains(all: &[Point2], tri: [usize; 3], p: &Point2) -> bool {
    let t = Triangle::new(all[tri[0]], all[tri[1]], all[tri[2]]);
    match t.circumcircle() {
        Some(c) => (p - c.center).norm_squared() <= c.radius * c.radius + TOLERANCE,
        // Collinear triangle has no circumcircle; treat it as bad so it
        // gets re-stitched away.
        None => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::Polygon;

    #[test]
    fn too_few_points_empty() {
        assert!(triangulate_delaunay(&[]).is_empty());
        assert!(triangulate_delaunay(&[Point2::origin(), Point2::new(1.0, 0.0)]).is_empty());
    }

    #[test]
    fn supra_triangle_encloses_points() {
        let points = vec![
            Point2::new(-3.0, 2.0),
            Point2::new(7.0, -1.0),
            Point2::new(4.0, 9.0),
        ];
        let supra = bounding_triangle(&points);
        for p in &points {
            assert!(supra.contains_point(p));
        }
    }

    #[test]
    fn triangle_count_matches_euler() {
        // Convex position: every point is a hull vertex, so the count is
        // 2n - 2 - k with k == n.
        let points: Vec<Point2> = (0..8)
            .map(|i| {
                let a = f64::from(i) * std::f64::consts::TAU / 8.0;
                Point2::new(a.cos() * 5.0, a.sin() * 5.0)
            })
            .collect();
        let t = triangulate_delaunay(&points);
        assert_eq!(t.len(), 2 * points.len() - 2 - points.len());
    }

    #[test]
    fn interior_point_adds_triangles() {
        let mut points = vec![
            Point2::new(0.0, 0.0),
            Point2::new(10.0, 0.0),
            Point2::new(10.0, 10.0),
            Point2::new(0.0, 10.0),
        ];
        points.push(Point2::new(4.0, 5.0));
        // n = 5, hull size k = 4: 2*5 - 2 - 4 = 4 triangles.
        let t = triangulate_delaunay(&points);
        assert_eq!(t.len(), 4);
        let square = Polygon::new(points[..4].to_vec());
        assert!((t.area() - square.area()).abs() < 1e-9);
    }

    #[test]
    fn empty_circumcircle_property() {
        let points = vec![
            Point2::new(0.0, 0.0),
            Point2::new(6.0, 1.0),
            Point2::new(3.0, 7.0),
            Point2::new(-2.0, 5.0),
            Point2::new(2.5, 3.0),
        ];
        let t = triangulate_delaunay(&points);
        for tri in &t.triangles {
            let circ = match tri.circumcircle() {
                Some(c) => c,
                None => continue,
            };
            for p in &points {
                if tri.shares_vertex_with(&[*p]) {
                    continue;
                }
                let d = (p - circ.center).norm_squared();
                assert!(d >= circ.radius * circ.radius - 1e-6);
            }
        }
    }

    #[test]
    fn output_triangles_are_ccw() {
        let points = vec![
            Point2::new(0.0, 0.0),
            Point2::new(5.0, 1.0),
            Point2::new(2.0, 6.0),
            Point2::new(-3.0, 4.0),
        ];
        for tri in &triangulate_delaunay(&points).triangles {
            assert!(tri.signed_area() > 0.0);
        }
    }
}
