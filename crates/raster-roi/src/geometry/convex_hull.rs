use super::point::{cross, Point2f, Point2i};

/// The convex hull of a region.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ConvexHull {
    /// Hull vertices, counter-clockwise when y points up.
    pub points: Vec<Point2i>,
    /// Enclosed area.
    pub surface: f64,
    /// Length of the closed outline.
    pub perimeter: f64,
}

impl ConvexHull {
    /// Builds the hull of `points` along with its area and outline length.
    pub fn from_points(points: &[Point2i]) -> Self {
        let points = convex_hull(points);
        let surface = polygon_area(&points);
        let perimeter = polygon_perimeter(&points);
        Self {
            points,
            surface,
            perimeter,
        }
    }
}

/// Computes the convex hull of a point set with the monotone chain algorithm.
///
/// Collinear points are dropped so every returned vertex is a strict turn.
///
/// # Returns
///
/// The hull vertices, counter-clockwise when y points up. Fewer than two
/// distinct input points give an empty hull. Two distinct points, or any
/// collinear set, give the two extreme points.
///
/// # Examples
///
/// ```
/// use raster_roi::geometry::{convex_hull, Point2i};
///
/// let points = [
///     Point2i::new(1, 0),
///     Point2i::new(0, 1),
///     Point2i::new(1, 1),
///     Point2i::new(2, 1),
///     Point2i::new(1, 2),
/// ];
/// assert_eq!(convex_hull(&points).len(), 4);
/// ```
pub fn convex_hull(points: &[Point2i]) -> Vec<Point2i> {
    let mut sorted = points.to_vec();
    sorted.sort_unstable();
    sorted.dedup();

    let n = sorted.len();
    if n < 2 {
        return Vec::new();
    }
    if n == 2 {
        return sorted;
    }

    let mut hull: Vec<Point2i> = Vec::with_capacity(2 * n);

    // lower chain
    for &p in sorted.iter() {
        while hull.len() >= 2 && cross(hull[hull.len() - 2], hull[hull.len() - 1], p) <= 0 {
            hull.pop();
        }
        hull.push(p);
    }

    // upper chain
    let lower_len = hull.len() + 1;
    for &p in sorted.iter().rev().skip(1) {
        while hull.len() >= lower_len && cross(hull[hull.len() - 2], hull[hull.len() - 1], p) <= 0
        {
            hull.pop();
        }
        hull.push(p);
    }

    // the last point repeats the first one
    hull.pop();

    hull
}

/// Area of a simple polygon given by its vertices, with the shoelace formula.
pub fn polygon_area(points: &[Point2i]) -> f64 {
    if points.len() < 3 {
        return 0.0;
    }
    let twice_area: i64 = points
        .iter()
        .zip(points.iter().cycle().skip(1))
        .map(|(a, b)| a.x as i64 * b.y as i64 - b.x as i64 * a.y as i64)
        .sum();
    twice_area.abs() as f64 / 2.0
}

/// Length of the closed outline through `points`.
pub fn polygon_perimeter(points: &[Point2i]) -> f64 {
    match points.len() {
        0 | 1 => 0.0,
        _ => points
            .iter()
            .zip(points.iter().cycle().skip(1))
            .map(|(&a, &b)| Point2f::from(a).distance(Point2f::from(b)))
            .sum(),
    }
}
