pub mod circle_2d;
pub mod linear_2d;

use std::f64::consts::{PI, TAU};

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// 2D rotation type.
pub type Rotation2 = nalgebra::Rotation2<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Floating-point equality within [`TOLERANCE`].
#[must_use]
pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < TOLERANCE
}

/// 2D cross product (z component of the 3D cross).
///
/// Positive when `b` lies counter-clockwise of `a`.
#[must_use]
pub fn cross_2d(a: &Vector2, b: &Vector2) -> f64 {
    a.x * b.y - a.y * b.x
}

/// Returns the left-pointing perpendicular of a direction vector.
#[must_use]
pub fn left_normal(dir: &Vector2) -> Vector2 {
    Vector2::new(-dir.y, dir.x)
}

/// Returns the right-pointing perpendicular of a direction vector.
///
/// For counter-clockwise wound shapes this is the outward edge normal.
#[must_use]
pub fn right_normal(dir: &Vector2) -> Vector2 {
    Vector2::new(dir.y, -dir.x)
}

/// Normalizes a vector, returning `None` for zero-length input.
#[must_use]
pub fn try_normalize(v: &Vector2) -> Option<Vector2> {
    let len = v.norm();
    if len < TOLERANCE {
        None
    } else {
        Some(v / len)
    }
}

/// Wraps an angle into `(-pi, pi]`.
#[must_use]
pub fn wrap_angle(angle: f64) -> f64 {
    let mut a = angle % TAU;
    if a <= -PI {
        a += TAU;
    } else if a > PI {
        a -= TAU;
    }
    a
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn cross_sign() {
        let x = Vector2::new(1.0, 0.0);
        let y = Vector2::new(0.0, 1.0);
        assert!(cross_2d(&x, &y) > 0.0);
        assert!(cross_2d(&y, &x) < 0.0);
        assert!(cross_2d(&x, &x).abs() < TOLERANCE);
    }

    #[test]
    fn normals_are_perpendicular() {
        let dir = Vector2::new(3.0, 4.0);
        assert!(dir.dot(&left_normal(&dir)).abs() < TOLERANCE);
        assert!(dir.dot(&right_normal(&dir)).abs() < TOLERANCE);
        // Left normal is CCW of the direction, right normal CW.
        assert!(cross_2d(&dir, &left_normal(&dir)) > 0.0);
        assert!(cross_2d(&dir, &right_normal(&dir)) < 0.0);
    }

    #[test]
    fn try_normalize_zero() {
        assert!(try_normalize(&Vector2::new(0.0, 0.0)).is_none());
    }

    #[test]
    fn try_normalize_unit() {
        let n = try_normalize(&Vector2::new(3.0, 4.0));
        assert!(n.is_some());
        if let Some(n) = n {
            assert!((n.x - 0.6).abs() < TOLERANCE);
            assert!((n.y - 0.8).abs() < TOLERANCE);
        }
    }

    #[test]
    fn wrap_angle_range() {
        assert!((wrap_angle(TAU + FRAC_PI_2) - FRAC_PI_2).abs() < TOLERANCE);
        assert!((wrap_angle(-TAU - FRAC_PI_2) + FRAC_PI_2).abs() < TOLERANCE);
        assert!((wrap_angle(PI) - PI).abs() < TOLERANCE);
        assert!((wrap_angle(-PI) - PI).abs() < TOLERANCE);
    }
}
