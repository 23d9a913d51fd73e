use rand::Rng;

use crate::clip::PolygonClip;
use crate::shape::{Polygon, Triangle, Triangulation};

const MAX_SPLIT_DEPTH: usize = 16;

/// Tuning knobs for [`fracture`].
#[derive(Debug, Clone, Copy)]
pub struct FractureSettings {
    /// Shards below this area are kept as-is, never split further.
    pub min_area: f64,
    /// Shards above this area are always split.
    pub max_area: f64,
    /// Probability that a mid-sized shard survives a round unsplit.
    pub keep_chance: f64,
    /// Minimum corner-angle sine below which a sliver is kept as-is.
    pub narrow_value: f64,
}

impl Default for FractureSettings {
    fn default() -> Self {
        Self {
            min_area: 0.1,
            max_area: 10.0,
            keep_chance: 0.5,
            narrow_value: 0.1,
        }
    }
}

/// Result of fracturing a polygon against a cutting region.
#[derive(Debug, Clone, Default)]
pub struct FractureInfo {
    /// Pieces of the shape covered by the cut region.
    pub cutouts: Vec<Polygon>,
    /// Pieces of the shape left untouched by the cut region.
    pub remaining: Vec<Polygon>,
    /// Randomly refined triangles covering the cutouts.
    pub shards: Triangulation,
}

/// Fractures `shape` along `cut` into shards plus the surviving region.
///
/// The cut region is carved out with the supplied clipper, each cutout
/// piece is ear-clipped, and the resulting triangles are recursively
/// split at random interior points. Slivers and shards under
/// `min_area` stop splitting; shards over `max_area` always split; the
/// rest survive a round with probability `keep_chance`.
pub fn fracture<C: PolygonClip, R: Rng>(
    shape: &Polygon,
    cut: &Polygon,
    clipper: &C,
    settings: &FractureSettings,
    rng: &mut R,
) -> FractureInfo {
    let cutouts = clipper.intersection(shape, cut);
    let remaining = clipper.difference(shape, cut);

    let mut shards = Vec::new();
    for piece in &cutouts {
        for tri in piece.triangulate_with(rng).triangles {
            refine(tri, settings, rng, 0, &mut shards);
        }
    }

    FractureInfo {
        cutouts,
        remaining,
        shards: Triangulation::new(shards),
    }
}

fn refine<R: Rng>(
    tri: Triangle,
    settings: &FractureSettings,
    rng: &mut R,
    depth: usize,
    out: &mut Vec<Triangle>,
) {
    let small = tri.area() < settings.min_area;
    let narrow = tri.min_angle_sine() < settings.narrow_value;
    if small || narrow || depth >= MAX_SPLIT_DEPTH {
        out.push(tri);
        return;
    }
    let must_split = tri.area() > settings.max_area;
    if must_split || rng.gen::<f64>() > settings.keep_chance {
        let at = tri.random_point(rng);
        for part in tri.split_at(at) {
            refine(part, settings, rng, depth + 1, out);
        }
    } else {
        out.push(tri);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Point2;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    /// Axis-aligned test clipper: handles the rectangle-on-rectangle
    /// cases these tests use, nothing more.
    struct RectClip;

    fn bounds(p: &Polygon) -> (f64, f64, f64, f64) {
        let xs: Vec<f64> = p.vertices.iter().map(|v| v.x).collect();
        let ys: Vec<f64> = p.vertices.iter().map(|v| v.y).collect();
        let min = |s: &[f64]| s.iter().copied().fold(f64::INFINITY, f64::min);
        let max = |s: &[f64]| s.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        (min(&xs), min(&ys), max(&xs), max(&ys))
    }

    fn rect_poly(x0: f64, y0: f64, x1: f64, y1: f64) -> Polygon {
        Polygon::new(vec![
            Point2::new(x0, y0),
            Point2::new(x1, y0),
            Point2::new(x1, y1),
            Point2::new(x0, y1),
        ])
    }

    impl PolygonClip for RectClip {
        fn intersection(&self, subject: &Polygon, clip: &Polygon) -> Vec<Polygon> {
            let (ax0, ay0, ax1, ay1) = bounds(subject);
            let (bx0, by0, bx1, by1) = bounds(clip);
            let (x0, y0) = (ax0.max(bx0), ay0.max(by0));
            let (x1, y1) = (ax1.min(bx1), ay1.min(by1));
            if x0 >= x1 || y0 >= y1 {
                return Vec::new();
            }
            vec![rect_poly(x0, y0, x1, y1)]
        }

        fn difference(&self, subject: &Polygon, clip: &Polygon) -> Vec<Polygon> {
            // Only the half-overlap layout used below: cut covers the
            // right half of the subject.
            let (ax0, ay0, ax1, ay1) = bounds(subject);
            let (bx0, _, _, _) = bounds(clip);
            if bx0 <= ax0 {
                return Vec::new();
            }
            vec![rect_poly(ax0, ay0, bx0.min(ax1), ay1)]
        }

        fn union(&self, subject: &Polygon, _clip: &Polygon) -> Vec<Polygon> {
            vec![subject.clone()]
        }
    }

    #[test]
    fn shards_cover_cutout_area() {
        let shape = rect_poly(0.0, 0.0, 10.0, 10.0);
        let cut = rect_poly(5.0, 0.0, 15.0, 10.0);
        let mut rng = StdRng::seed_from_u64(3);
        let info = fracture(&shape, &cut, &RectClip, &FractureSettings::default(), &mut rng);

        assert_eq!(info.cutouts.len(), 1);
        assert_eq!(info.remaining.len(), 1);
        let cutout_area: f64 = info.cutouts.iter().map(Polygon::area).sum();
        assert!((cutout_area - 50.0).abs() < 1e-9);
        assert!((info.shards.area() - cutout_area).abs() < 1e-9);
        assert!(!info.shards.is_empty());
    }

    #[test]
    fn max_area_forces_splitting() {
        let shape = rect_poly(0.0, 0.0, 10.0, 10.0);
        let cut = rect_poly(5.0, 0.0, 15.0, 10.0);
        let settings = FractureSettings {
            max_area: 5.0,
            ..FractureSettings::default()
        };
        let mut rng = StdRng::seed_from_u64(7);
        let info = fracture(&shape, &cut, &RectClip, &settings, &mut rng);
        for tri in &info.shards.triangles {
            // Oversized shards only survive as slivers or at depth limit.
            assert!(
                tri.area() <= settings.max_area
                    || tri.min_angle_sine() < settings.narrow_value
            );
        }
    }

    #[test]
    fn disjoint_cut_leaves_shape_whole() {
        let shape = rect_poly(0.0, 0.0, 4.0, 4.0);
        let cut = rect_poly(100.0, 100.0, 104.0, 104.0);
        let mut rng = StdRng::seed_from_u64(1);
        let info = fracture(&shape, &cut, &RectClip, &FractureSettings::default(), &mut rng);
        assert!(info.cutouts.is_empty());
        assert!(info.shards.is_empty());
    }

    #[test]
    fn high_min_area_keeps_coarse_shards() {
        let shape = rect_poly(0.0, 0.0, 10.0, 10.0);
        let cut = rect_poly(5.0, 0.0, 15.0, 10.0);
        let settings = FractureSettings {
            min_area: 1_000.0,
            ..FractureSettings::default()
        };
        let mut rng = StdRng::seed_from_u64(5);
        let info = fracture(&shape, &cut, &RectClip, &settings, &mut rng);
        // Every initial triangle is below min_area, so none split.
        assert_eq!(info.shards.len(), 2);
    }
}
