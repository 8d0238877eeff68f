use super::point::{direction_degrees, Point2f, Point2i};

/// A rotated rectangle enclosing a point set.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Mbr {
    /// The four corners in order, consecutive corners meeting at right angles.
    pub corners: [Point2f; 4],
    /// Side length along the hull edge the rectangle is aligned with.
    pub width: f64,
    /// Side length perpendicular to `width`.
    pub height: f64,
    /// Area of the rectangle.
    pub surface: f64,
    /// Angle of the `width` side in degrees, within `(-90, 90]`.
    pub angle: f64,
}

impl Mbr {
    /// Ratio of the short side to the long side, in `[0, 1]`.
    pub fn aspect_ratio(&self) -> f64 {
        let (short, long) = if self.width < self.height {
            (self.width, self.height)
        } else {
            (self.height, self.width)
        };
        if long == 0.0 {
            0.0
        } else {
            short / long
        }
    }
}

/// Computes the minimum area rectangle enclosing a convex hull.
///
/// Every hull edge orientation is tried and the rectangle with the smallest
/// area wins. With fewer than two distinct points all four corners collapse
/// onto the single point, or onto the origin for an empty input. Two points
/// give a zero area rectangle along the segment.
///
/// # Arguments
///
/// * `hull` - The hull vertices in order, as returned by
///   [`convex_hull`](super::convex_hull).
pub fn minimum_bounding_rectangle(hull: &[Point2i]) -> Mbr {
    let Some(&first) = hull.first() else {
        return Mbr::default();
    };
    let first = Point2f::from(first);

    let mut best: Option<Mbr> = None;
    let n = hull.len();
    for i in 0..n {
        let a = Point2f::from(hull[i]);
        let b = Point2f::from(hull[(i + 1) % n]);
        let edge = b - a;
        let edge_len = edge.norm();
        if edge_len == 0.0 {
            continue;
        }

        // orthonormal frame aligned with the edge
        let u = edge * (1.0 / edge_len);
        let v = u.perp();

        let (mut min_u, mut max_u) = (f64::INFINITY, f64::NEG_INFINITY);
        let (mut min_v, mut max_v) = (f64::INFINITY, f64::NEG_INFINITY);
        for &p in hull {
            let p = Point2f::from(p);
            let (pu, pv) = (p.dot(u), p.dot(v));
            min_u = min_u.min(pu);
            max_u = max_u.max(pu);
            min_v = min_v.min(pv);
            max_v = max_v.max(pv);
        }

        let (width, height) = (max_u - min_u, max_v - min_v);
        let surface = width * height;
        if best.map_or(true, |mbr| surface < mbr.surface) {
            let corner = |s: f64, t: f64| u * s + v * t;
            best = Some(Mbr {
                corners: [
                    corner(min_u, min_v),
                    corner(max_u, min_v),
                    corner(max_u, max_v),
                    corner(min_u, max_v),
                ],
                width,
                height,
                surface,
                angle: direction_degrees(u),
            });
        }
    }

    best.unwrap_or(Mbr {
        corners: [first; 4],
        ..Default::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::convex_hull;
    use approx::assert_relative_eq;

    fn assert_right_angles(mbr: &Mbr) {
        for i in 0..4 {
            let a = mbr.corners[i];
            let b = mbr.corners[(i + 1) % 4];
            let c = mbr.corners[(i + 2) % 4];
            assert_relative_eq!((b - a).dot(c - b), 0.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_mbr_degenerate() {
        assert_eq!(minimum_bounding_rectangle(&[]).corners, [Point2f::default(); 4]);

        let p = Point2i::new(3, 7);
        let mbr = minimum_bounding_rectangle(&[p]);
        assert_eq!(mbr.corners, [Point2f::from(p); 4]);
        assert_eq!(mbr.surface, 0.0);

        let mbr = minimum_bounding_rectangle(&[Point2i::new(0, 0), Point2i::new(3, 4)]);
        assert_relative_eq!(mbr.width, 5.0);
        assert_relative_eq!(mbr.height, 0.0);
        assert_relative_eq!(mbr.surface, 0.0);
    }

    #[test]
    fn test_mbr_axis_aligned() {
        let hull = [
            Point2i::new(1, 1),
            Point2i::new(5, 1),
            Point2i::new(5, 3),
            Point2i::new(1, 3),
        ];
        let mbr = minimum_bounding_rectangle(&hull);
        assert_relative_eq!(mbr.surface, 8.0, epsilon = 1e-9);
        assert_right_angles(&mbr);
        for corner in mbr.corners {
            assert!(hull
                .iter()
                .any(|&p| Point2f::from(p).distance(corner) < 1e-9));
        }
    }

    #[test]
    fn test_mbr_diamond() {
        // a square rotated by 45 degrees has itself as the minimal rectangle
        let hull = convex_hull(&[
            Point2i::new(2, 0),
            Point2i::new(4, 2),
            Point2i::new(2, 4),
            Point2i::new(0, 2),
        ]);
        let mbr = minimum_bounding_rectangle(&hull);
        assert_relative_eq!(mbr.surface, 8.0, epsilon = 1e-9);
        assert_relative_eq!(mbr.width, 8f64.sqrt(), epsilon = 1e-9);
        assert_relative_eq!(mbr.angle.abs(), 45.0, epsilon = 1e-9);
        assert_relative_eq!(mbr.aspect_ratio(), 1.0, epsilon = 1e-9);
        assert_right_angles(&mbr);
    }
}
