use super::{cross_2d, Point2, Vector2, TOLERANCE};

/// Parameter domain of a linear primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Domain {
    /// `t` restricted to `[0, 1]` (a bounded segment).
    Segment,
    /// `t` restricted to `[0, +inf)` (a half-infinite ray).
    Ray,
    /// `t` unrestricted (an infinite line).
    Line,
}

impl Domain {
    /// Whether a parameter lies in this domain, with endpoint tolerance.
    #[must_use]
    pub fn contains(self, t: f64) -> bool {
        match self {
            Domain::Segment => t >= -TOLERANCE && t <= 1.0 + TOLERANCE,
            Domain::Ray => t >= -TOLERANCE,
            Domain::Line => true,
        }
    }

    /// Clamps a parameter into this domain.
    #[must_use]
    pub fn clamp(self, t: f64) -> f64 {
        match self {
            Domain::Segment => t.clamp(0.0, 1.0),
            Domain::Ray => t.max(0.0),
            Domain::Line => t,
        }
    }

    /// Boundary parameters of the domain (candidates for closest-point search).
    fn anchors(self) -> &'static [f64] {
        match self {
            Domain::Segment => &[0.0, 1.0],
            Domain::Ray => &[0.0],
            Domain::Line => &[],
        }
    }
}

/// A linear primitive in parametric form `P(t) = origin + t * dir`.
///
/// Segments carry an unnormalized `dir` (endpoint difference, `t` in
/// `[0, 1]`); rays and lines carry a unit `dir`. A zero-length `dir`
/// degenerates gracefully: every solver treats it as a point at `origin`.
#[derive(Debug, Clone, Copy)]
pub struct Linear {
    pub origin: Point2,
    pub dir: Vector2,
    pub domain: Domain,
}

impl Linear {
    #[must_use]
    pub fn new(origin: Point2, dir: Vector2, domain: Domain) -> Self {
        Self { origin, dir, domain }
    }

    /// Evaluates `origin + t * dir`.
    #[must_use]
    pub fn point_at(&self, t: f64) -> Point2 {
        self.origin + self.dir * t
    }

    /// Unclamped projection parameter of a point onto the carrier line.
    ///
    /// Returns `0` for a degenerate (zero-direction) primitive.
    #[must_use]
    pub fn project(&self, p: &Point2) -> f64 {
        let len_sq = self.dir.norm_squared();
        if len_sq < TOLERANCE * TOLERANCE {
            return 0.0;
        }
        (p - self.origin).dot(&self.dir) / len_sq
    }

    /// Parameter of the closest point to `p` within the domain.
    #[must_use]
    pub fn closest_param(&self, p: &Point2) -> f64 {
        self.domain.clamp(self.project(p))
    }

    /// Closest point to `p` within the domain.
    #[must_use]
    pub fn closest_point(&self, p: &Point2) -> Point2 {
        self.point_at(self.closest_param(p))
    }
}

/// Parametric intersection of two linear primitives.
///
/// Solves the 2x2 system from the direction cross products. Returns
/// `None` when the directions are parallel (`|denominator| < TOLERANCE`)
/// or when either parameter falls outside its primitive's domain.
#[must_use]
pub fn intersect_params(a: &Linear, b: &Linear) -> Option<(f64, f64)> {
    let denom = cross_2d(&a.dir, &b.dir);
    if denom.abs() < TOLERANCE {
        return None;
    }
    let d = b.origin - a.origin;
    let t = cross_2d(&d, &b.dir) / denom;
    let u = cross_2d(&d, &a.dir) / denom;
    if a.domain.contains(t) && b.domain.contains(u) {
        Some((a.domain.clamp(t), b.domain.clamp(u)))
    } else {
        None
    }
}

/// Parameters of the closest point pair between two linear primitives.
///
/// If the primitives intersect within their domains the crossing
/// parameters are returned (distance zero). Otherwise the minimum is
/// attained at a domain boundary of one primitive projected onto the
/// other, or at `t = 0` for a pair of parallel lines; all candidates
/// are enumerated and the best kept. Ties keep the first candidate.
#[must_use]
pub fn closest_params(a: &Linear, b: &Linear) -> (f64, f64) {
    if let Some(hit) = intersect_params(a, b) {
        return hit;
    }

    let mut best_t = 0.0;
    let mut best_u = b.closest_param(&a.point_at(0.0));
    let mut best_dist = (a.point_at(best_t) - b.point_at(best_u)).norm_squared();

    let mut consider = |t: f64, u: f64| {
        let d = (a.point_at(t) - b.point_at(u)).norm_squared();
        if d < best_dist {
            best_dist = d;
            best_t = t;
            best_u = u;
        }
    };

    for &t in a.domain.anchors() {
        let u = b.closest_param(&a.point_at(t));
        consider(t, u);
        // Re-project the boundary point back for mutual refinement.
        let t2 = a.closest_param(&b.point_at(u));
        consider(t2, u);
    }
    for &u in b.domain.anchors() {
        let t = a.closest_param(&b.point_at(u));
        consider(t, u);
        let u2 = b.closest_param(&a.point_at(t));
        consider(t, u2);
    }

    (best_t, best_u)
}
