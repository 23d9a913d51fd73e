use rand::Rng;

use crate::math::{cross_2d, Point2, TOLERANCE};
use crate::shape::{Polygon, Triangle, Triangulation};

/// Ear-clipping triangulation with deterministic ear selection.
///
/// Always clips the ear with the smallest interior angle, so output is
/// reproducible for a given vertex sequence. Input winding is corrected
/// to counter-clockwise before clipping; polygons with fewer than three
/// vertices yield an empty triangulation.
#[must_use]
pub fn triangulate(polygon: &Polygon) -> Triangulation {
    clip_ears(polygon, |ears, remaining, verts| {
        let mut best = 0;
        let mut best_angle = f64::INFINITY;
        for (k, &pos) in ears.iter().enumerate() {
            let angle = interior_angle(pos, remaining, verts);
            if angle < best_angle {
                best_angle = angle;
                best = k;
            }
        }
        best
    })
}

/// Ear-clipping triangulation with randomized ear selection.
///
/// Picking a random valid ear each round avoids the adversarial fan
/// patterns the deterministic rule can produce; output is not
/// deterministic for a given input unless the RNG is seeded.
pub fn triangulate_with<R: Rng>(polygon: &Polygon, rng: &mut R) -> Triangulation {
    clip_ears(polygon, |ears, _, _| rng.gen_range(0..ears.len()))
}

fn clip_ears<F>(polygon: &Polygon, mut select: F) -> Triangulation
where
    F: FnMut(&[usize], &[usize], &[Point2]) -> usize,
{
    let poly = polygon.fixed_winding();
    let verts = &poly.vertices;
    let n = verts.len();
    if n < 3 {
        return Triangulation::default();
    }

    let mut remaining: Vec<usize> = (0..n).collect();
    let mut triangles = Vec::with_capacity(n - 2);

    while remaining.len() > 3 {
        let ears = find_ears(&remaining, verts);
        let cut = if ears.is_empty() {
            // Degenerate or self-intersecting input: fall back to any
            // convex vertex, or stop with a partial (best-effort) result.
            match first_convex(&remaining, verts) {
                Some(pos) => pos,
                None => break,
            }
        } else {
            ears[select(&ears, &remaining, verts)]
        };

        let m = remaining.len();
        let prev = verts[remaining[(cut + m - 1) % m]];
        let v = verts[remaining[cut]];
        let next = verts[remaining[(cut + 1) % m]];
        triangles.push(Triangle::new(prev, v, next));
        remaining.remove(cut);
    }

    if remaining.len() == 3 {
        triangles.push(Triangle::new(
            verts[remaining[0]],
            verts[remaining[1]],
            verts[remaining[2]],
        ));
    }
    Triangulation::new(triangles)
}

/// Positions (into `remaining`) of every valid ear vertex.
///
/// An ear is a convex vertex whose adjacent-edge triangle contains no
/// other remaining polygon vertex.
fn find_ears(remaining: &[usize], verts: &[Point2]) -> Vec<usize> {
    let m = remaining.len();
    let mut ears = Vec::new();
    for pos in 0..m {
        if !is_convex(pos, remaining, verts) {
            continue;
        }
        let prev = verts[remaining[(pos + m - 1) % m]];
        let v = verts[remaining[pos]];
        let next = verts[remaining[(pos + 1) % m]];
        let ear = Triangle::new(prev, v, next);
        let blocked = remaining.iter().enumerate().any(|(other, &vi)| {
            other != pos
                && other != (pos + m - 1) % m
                && other != (pos + 1) % m
                && ear.contains_point(&verts[vi])
        });
        if !blocked {
            ears.push(pos);
        }
    }
    ears
}

fn is_convex(pos: usize, remaining: &[usize], verts: &[Point2]) -> bool {
    let m = remaining.len();
    let prev = verts[remaining[(pos + m - 1) % m]];
    let v = verts[remaining[pos]];
    let next = verts[remaining[(pos + 1) % m]];
    cross_2d(&(v - prev), &(next - v)) > TOLERANCE
}

fn first_convex(remaining: &[usize], verts: &[Point2]) -> Option<usize> {
    (0..remaining.len()).find(|&pos| is_convex(pos, remaining, verts))
}

fn interior_angle(pos: usize, remaining: &[usize], verts: &[Point2]) -> f64 {
    let m = remaining.len();
    let prev = verts[remaining[(pos + m - 1) % m]];
    let v = verts[remaining[pos]];
    let next = verts[remaining[(pos + 1) % m]];
    let e0 = prev - v;
    let e1 = next - v;
    let denom = e0.norm() * e1.norm();
    if denom < TOLERANCE {
        return 0.0;
    }
    (e0.dot(&e1) / denom).clamp(-1.0, 1.0).acos()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn square() -> Polygon {
        Polygon::new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(4.0, 0.0),
            Point2::new(4.0, 4.0),
            Point2::new(0.0, 4.0),
        ])
    }

    fn l_shape() -> Polygon {
        Polygon::new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(4.0, 0.0),
            Point2::new(4.0, 2.0),
            Point2::new(2.0, 2.0),
            Point2::new(2.0, 4.0),
            Point2::new(0.0, 4.0),
        ])
    }

    #[test]
    fn square_two_triangles() {
        let t = triangulate(&square());
        assert_eq!(t.len(), 2);
        assert_relative_eq!(t.area(), 16.0, epsilon = 1e-9);
    }

    #[test]
    fn concave_area_conserved() {
        let poly = l_shape();
        let t = triangulate(&poly);
        assert_eq!(t.len(), poly.len() - 2);
        assert_relative_eq!(t.area(), poly.area(), epsilon = 1e-9);
    }

    #[test]
    fn clockwise_input_corrected() {
        let mut cw = square();
        cw.vertices.reverse();
        let t = triangulate(&cw);
        assert_relative_eq!(t.area(), 16.0, epsilon = 1e-9);
    }

    #[test]
    fn randomized_variant_conserves_area() {
        let poly = l_shape();
        let mut rng = StdRng::seed_from_u64(9);
        for _ in 0..10 {
            let t = poly.triangulate_with(&mut rng);
            assert_eq!(t.len(), poly.len() - 2);
            assert_relative_eq!(t.area(), poly.area(), epsilon = 1e-9);
        }
    }

    #[test]
    fn deterministic_variant_reproducible() {
        let poly = l_shape();
        assert_eq!(triangulate(&poly), triangulate(&poly));
    }

    #[test]
    fn triangles_are_ccw() {
        for tri in &triangulate(&l_shape()).triangles {
            assert!(tri.signed_area() > 0.0);
        }
    }

    #[test]
    fn too_few_vertices_empty() {
        let line = Polygon::new(vec![Point2::origin(), Point2::new(1.0, 0.0)]);
        assert!(triangulate(&line).is_empty());
    }
}
