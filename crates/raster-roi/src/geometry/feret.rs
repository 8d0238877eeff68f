use raster_image::ImageSize;

use super::point::{direction_degrees, Point2f, Point2i};

/// One Feret diameter: the distance between two parallel support lines.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FeretDiameter {
    /// Distance between the support lines.
    pub length: f64,
    /// Angle of the segment between `points`, in degrees within `(-90, 90]`.
    pub angle: f64,
    /// The two points the diameter is measured between.
    pub points: [Point2f; 2],
    /// The two parallel support lines, clipped to the image rectangle.
    pub lines: [[Point2f; 2]; 2],
}

/// The minimum and maximum Feret diameters of a convex polygon.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Feret {
    /// The smallest caliper width over all orientations.
    pub min_diameter: FeretDiameter,
    /// The largest distance between two hull vertices.
    pub max_diameter: FeretDiameter,
    /// `min_diameter.length / max_diameter.length`, or 0 for an empty hull.
    pub aspect_ratio: f64,
}

impl Feret {
    /// Measures the Feret diameters of a convex hull.
    ///
    /// # Arguments
    ///
    /// * `hull` - The hull vertices in order, as returned by
    ///   [`convex_hull`](super::convex_hull).
    /// * `image_size` - The image rectangle the support lines are clipped to.
    ///
    /// An empty hull yields zero diameters with every point at the origin.
    pub fn from_hull(hull: &[Point2i], image_size: ImageSize) -> Self {
        if hull.is_empty() {
            return Self::default();
        }

        let min_diameter = min_diameter(hull, image_size);
        let max_diameter = max_diameter(hull, image_size);
        let aspect_ratio = if max_diameter.length > 0.0 {
            min_diameter.length / max_diameter.length
        } else {
            0.0
        };

        Self {
            min_diameter,
            max_diameter,
            aspect_ratio,
        }
    }
}

/// Exhaustive pairwise scan over the hull vertices.
fn max_diameter(hull: &[Point2i], image_size: ImageSize) -> FeretDiameter {
    let mut best = (hull[0], hull[0]);
    let mut best_squared = 0i64;
    for (i, &a) in hull.iter().enumerate() {
        for &b in &hull[i + 1..] {
            let squared = a.distance_squared(b);
            if squared > best_squared {
                best_squared = squared;
                best = (a, b);
            }
        }
    }

    let (a, b) = (Point2f::from(best.0), Point2f::from(best.1));
    let normal = (b - a).perp();

    FeretDiameter {
        length: (best_squared as f64).sqrt(),
        angle: direction_degrees(b - a),
        points: [a, b],
        lines: [
            clip_line(a, normal, image_size),
            clip_line(b, normal, image_size),
        ],
    }
}

/// Rotating calipers: the minimal spread of the hull perpendicular to one of its edges.
fn min_diameter(hull: &[Point2i], image_size: ImageSize) -> FeretDiameter {
    let n = hull.len();
    let first = Point2f::from(hull[0]);

    // (spread, edge origin, edge direction, farthest point)
    let mut best: Option<(f64, Point2f, Point2f, Point2f)> = None;

    for i in 0..n {
        let a = Point2f::from(hull[i]);
        let b = Point2f::from(hull[(i + 1) % n]);
        let edge = b - a;
        let edge_len = edge.norm();
        if edge_len == 0.0 {
            continue;
        }

        let mut spread = 0.0;
        let mut farthest = a;
        for &p in hull {
            let p = Point2f::from(p);
            let distance = (edge.cross(p - a) / edge_len).abs();
            if distance > spread {
                spread = distance;
                farthest = p;
            }
        }

        if best.map_or(true, |(best_spread, ..)| spread < best_spread) {
            best = Some((spread, a, edge, farthest));
        }
    }

    let Some((length, origin, edge, farthest)) = best else {
        return FeretDiameter {
            points: [first, first],
            lines: [[first, first], [first, first]],
            ..Default::default()
        };
    };

    // foot of the perpendicular from the farthest point onto the edge line
    let t = (farthest - origin).dot(edge) / edge.dot(edge);
    let foot = origin + edge * t;

    FeretDiameter {
        length,
        angle: direction_degrees(farthest - foot),
        points: [foot, farthest],
        lines: [
            clip_line(origin, edge, image_size),
            clip_line(farthest, edge, image_size),
        ],
    }
}

/// Clips the infinite line through `point` along `direction` to the image rectangle.
///
/// A line that misses the rectangle, or a zero direction, collapses to `point`.
pub(crate) fn clip_line(point: Point2f, direction: Point2f, image_size: ImageSize) -> [Point2f; 2] {
    let bounds = [
        (point.x, direction.x, image_size.width as f64),
        (point.y, direction.y, image_size.height as f64),
    ];

    let mut t_min = f64::NEG_INFINITY;
    let mut t_max = f64::INFINITY;
    for (p, d, max) in bounds {
        if d == 0.0 {
            if p < 0.0 || p > max {
                return [point, point];
            }
            continue;
        }
        let t0 = (0.0 - p) / d;
        let t1 = (max - p) / d;
        t_min = t_min.max(t0.min(t1));
        t_max = t_max.min(t0.max(t1));
    }

    if !t_min.is_finite() || !t_max.is_finite() || t_min > t_max {
        return [point, point];
    }

    [point + direction * t_min, point + direction * t_max]
}
