use super::linear_2d::Linear;
use super::{approx_eq, Point2, TOLERANCE};

/// Intersection of a circle with a linear primitive.
///
/// Substitutes the parametric line equation into the circle equation and
/// solves the quadratic. Returns each root's point and parameter, filtered
/// by the primitive's domain: zero points (miss), one (tangent, within
/// tolerance), or two.
#[must_use]
pub fn circle_linear_intersect(
    center: &Point2,
    radius: f64,
    linear: &Linear,
) -> Vec<(Point2, f64)> {
    let mut results = Vec::new();
    if radius < 0.0 {
        return results;
    }

    let a = linear.dir.norm_squared();
    if a < TOLERANCE * TOLERANCE {
        // Degenerate direction: the primitive is a point.
        return results;
    }

    let f = linear.origin - center;
    let b = 2.0 * f.dot(&linear.dir);
    let c = f.norm_squared() - radius * radius;
    let discriminant = b * b - 4.0 * a * c;

    if discriminant < -TOLERANCE {
        return results;
    }
    let disc_sqrt = discriminant.max(0.0).sqrt();

    let roots = if disc_sqrt < TOLERANCE {
        // Tangent case: single root.
        vec![-b / (2.0 * a)]
    } else {
        vec![(-b - disc_sqrt) / (2.0 * a), (-b + disc_sqrt) / (2.0 * a)]
    };

    for t in roots {
        if linear.domain.contains(t) {
            let t = linear.domain.clamp(t);
            results.push((linear.point_at(t), t));
        }
    }
    results
}

/// Intersection points of two circles via the chord construction.
///
/// Early-outs: coincident circles (infinitely many points, reported as
/// none), circles too far apart, and one circle strictly containing the
/// other. A tangent contact yields a single point, otherwise two.
#[must_use]
pub fn circle_circle_intersect(
    c0: &Point2,
    r0: f64,
    c1: &Point2,
    r1: f64,
) -> Vec<Point2> {
    let mut results = Vec::new();

    let delta = c1 - c0;
    let dist_sq = delta.norm_squared();
    let dist = dist_sq.sqrt();

    if dist < TOLERANCE {
        // Concentric: coincident circles have no discrete intersection.
        return results;
    }
    if dist > r0 + r1 + TOLERANCE || dist < (r0 - r1).abs() - TOLERANCE {
        return results;
    }

    // Distance from c0 along c0->c1 to the radical line, and the half-chord.
    let a = (r0 * r0 - r1 * r1 + dist_sq) / (2.0 * dist);
    let h_sq = r0 * r0 - a * a;
    if h_sq < -TOLERANCE {
        return results;
    }
    let h = h_sq.max(0.0).sqrt();

    let mid = c0 + delta * (a / dist);
    if h < TOLERANCE {
        results.push(mid);
    } else {
        let perp = super::left_normal(&(delta / dist)) * h;
        results.push(mid + perp);
        results.push(mid - perp);
    }
    results
}

/// Boolean overlap test for two circles (discs).
///
/// Compares the squared center distance against the sum of radii, with
/// explicit degenerate branches: a zero-radius circle reduces to point
/// containment, coincident centers compare radii only.
#[must_use]
pub fn circle_circle_overlap(c0: &Point2, r0: f64, c1: &Point2, r1: f64) -> bool {
    let dist_sq = (c1 - c0).norm_squared();
    if dist_sq < TOLERANCE * TOLERANCE {
        return true;
    }
    if r0 < TOLERANCE {
        return dist_sq <= r1 * r1 + TOLERANCE;
    }
    if r1 < TOLERANCE {
        return dist_sq <= r0 * r0 + TOLERANCE;
    }
    let sum = r0 + r1;
    dist_sq <= sum * sum + TOLERANCE
}

/// Whether two circles are equal: exact centers, radii within tolerance.
#[must_use]
pub fn circle_approx_eq(c0: &Point2, r0: f64, c1: &Point2, r1: f64) -> bool {
    c0 == c1 && approx_eq(r0, r1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::linear_2d::Domain;
    use crate::math::Vector2;
    use approx::assert_relative_eq;

    #[test]
    fn tangent_circles_single_point() {
        // Center (0,0) r 5 and center (10,0) r 5 touch at (5,0).
        let pts = circle_circle_intersect(&Point2::origin(), 5.0, &Point2::new(10.0, 0.0), 5.0);
        assert_eq!(pts.len(), 1);
        assert_relative_eq!(pts[0].x, 5.0, epsilon = 1e-9);
        assert_relative_eq!(pts[0].y, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn overlapping_circles_two_points() {
        // Center (0,0) r 5 and center (6,0) r 5 cross at x = 3.
        let pts = circle_circle_intersect(&Point2::origin(), 5.0, &Point2::new(6.0, 0.0), 5.0);
        assert_eq!(pts.len(), 2);
        for p in &pts {
            assert_relative_eq!(p.x, 3.0, epsilon = 1e-9);
        }
        // Symmetric about the x axis.
        assert_relative_eq!(pts[0].y, -pts[1].y, epsilon = 1e-9);
    }

    #[test]
    fn separated_circles_no_points() {
        let pts = circle_circle_intersect(&Point2::origin(), 1.0, &Point2::new(5.0, 0.0), 1.0);
        assert!(pts.is_empty());
    }

    #[test]
    fn contained_circle_no_points() {
        let pts = circle_circle_intersect(&Point2::origin(), 5.0, &Point2::new(1.0, 0.0), 1.0);
        assert!(pts.is_empty());
    }

    #[test]
    fn coincident_circles_no_points() {
        let pts = circle_circle_intersect(&Point2::origin(), 2.0, &Point2::origin(), 2.0);
        assert!(pts.is_empty());
    }

    #[test]
    fn line_through_circle_two_points() {
        let l = Linear::new(Point2::new(-5.0, 0.0), Vector2::new(1.0, 0.0), Domain::Line);
        let pts = circle_linear_intersect(&Point2::origin(), 2.0, &l);
        assert_eq!(pts.len(), 2);
        let mut xs: Vec<f64> = pts.iter().map(|(p, _)| p.x).collect();
        xs.sort_by(f64::total_cmp);
        assert_relative_eq!(xs[0], -2.0, epsilon = 1e-9);
        assert_relative_eq!(xs[1], 2.0, epsilon = 1e-9);
    }

    #[test]
    fn tangent_line_single_point() {
        let l = Linear::new(Point2::new(-5.0, 1.0), Vector2::new(1.0, 0.0), Domain::Line);
        let pts = circle_linear_intersect(&Point2::origin(), 1.0, &l);
        assert_eq!(pts.len(), 1);
        assert!((pts[0].0 - Point2::new(0.0, 1.0)).norm() < 1e-6);
    }

    #[test]
    fn segment_domain_filters_roots() {
        // The carrier line crosses the circle twice, the segment reaches
        // only the first crossing.
        let l = Linear::new(Point2::new(-5.0, 0.0), Vector2::new(4.0, 0.0), Domain::Segment);
        let pts = circle_linear_intersect(&Point2::origin(), 2.0, &l);
        assert_eq!(pts.len(), 1);
        assert!((pts[0].0 - Point2::new(-2.0, 0.0)).norm() < 1e-9);
    }

    #[test]
    fn ray_domain_filters_roots() {
        // Ray starts inside the circle: exactly one exit point.
        let l = Linear::new(Point2::origin(), Vector2::new(1.0, 0.0), Domain::Ray);
        let pts = circle_linear_intersect(&Point2::origin(), 3.0, &l);
        assert_eq!(pts.len(), 1);
        assert!((pts[0].0 - Point2::new(3.0, 0.0)).norm() < 1e-9);
    }

    #[test]
    fn overlap_degenerate_zero_radius() {
        // Zero-radius circle reduces to point containment.
        assert!(circle_circle_overlap(&Point2::new(1.0, 0.0), 0.0, &Point2::origin(), 2.0));
        assert!(!circle_circle_overlap(&Point2::new(3.0, 0.0), 0.0, &Point2::origin(), 2.0));
    }

    #[test]
    fn overlap_coincident_centers() {
        assert!(circle_circle_overlap(&Point2::origin(), 1.0, &Point2::origin(), 3.0));
    }

    #[test]
    fn circle_equality_tolerant_radius() {
        let c = Point2::new(1.0, 2.0);
        assert!(circle_approx_eq(&c, 1.0, &c, 1.0 + TOLERANCE / 2.0));
        assert!(!circle_approx_eq(&c, 1.0, &Point2::new(1.0 + 1e-6, 2.0), 1.0));
    }
}
