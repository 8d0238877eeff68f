use std::f64::consts::PI;

use super::point::{direction_degrees, Point2f};

/// Number of standard deviations spanned by each half axis.
const NUM_STD_DEV: f64 = 2.0;

/// One axis of a fitted ellipse.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EllipseAxis {
    /// The two ends of the axis.
    pub points: [Point2f; 2],
    /// Full length of the axis.
    pub length: f64,
    /// Angle of the axis in degrees, within `(-90, 90]`.
    pub angle: f64,
}

/// An ellipse matching the second moments of a point set.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Ellipse {
    /// The centroid of the points.
    pub center: Point2f,
    /// The longer axis.
    pub major_axis: EllipseAxis,
    /// The shorter axis, perpendicular to the major one.
    pub minor_axis: EllipseAxis,
    /// Area of the ellipse.
    pub surface: f64,
}

/// Fits an ellipse to a point set through its covariance matrix.
///
/// The eigenvectors of the covariance give the axis directions and each half
/// axis spans two standard deviations along its direction. For a uniformly
/// filled disk this recovers the disk itself. An empty input gives the
/// default ellipse.
pub fn fit_ellipse<I>(points: I) -> Ellipse
where
    I: IntoIterator<Item = Point2f>,
    I::IntoIter: Clone,
{
    let points = points.into_iter();

    let (count, sum) = points
        .clone()
        .fold((0usize, Point2f::default()), |(n, s), p| (n + 1, s + p));
    if count == 0 {
        return Ellipse::default();
    }
    let center = sum * (1.0 / count as f64);

    let (mut xx, mut yy, mut xy) = (0.0, 0.0, 0.0);
    for p in points {
        let d = p - center;
        xx += d.x * d.x;
        yy += d.y * d.y;
        xy += d.x * d.y;
    }
    let n = count as f64;
    let (xx, yy, xy) = (xx / n, yy / n, xy / n);

    // closed form eigen decomposition of the symmetric 2x2 covariance
    let mean = (xx + yy) / 2.0;
    let spread = (((xx - yy) / 2.0).powi(2) + xy * xy).sqrt();
    let major_var = mean + spread;
    let minor_var = (mean - spread).clamp(0.0, major_var);
    let theta = 0.5 * (2.0 * xy).atan2(xx - yy);

    let major_dir = Point2f::new(theta.cos(), theta.sin());
    let minor_dir = major_dir.perp();

    let major_half = NUM_STD_DEV * major_var.max(0.0).sqrt();
    let minor_half = NUM_STD_DEV * minor_var.sqrt();

    let axis = |dir: Point2f, half: f64| EllipseAxis {
        points: [center - dir * half, center + dir * half],
        length: 2.0 * half,
        angle: direction_degrees(dir),
    };

    Ellipse {
        center,
        major_axis: axis(major_dir, major_half),
        minor_axis: axis(minor_dir, minor_half),
        surface: PI * major_half * minor_half,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn grid(width: usize, height: usize) -> Vec<Point2f> {
        (0..height)
            .flat_map(|y| (0..width).map(move |x| Point2f::new(x as f64 + 0.5, y as f64 + 0.5)))
            .collect()
    }

    #[test]
    fn test_ellipse_empty() {
        assert_eq!(fit_ellipse(Vec::new()), Ellipse::default());
    }

    #[test]
    fn test_ellipse_single_point() {
        let ellipse = fit_ellipse(vec![Point2f::new(3.5, 4.5)]);
        assert_eq!(ellipse.center, Point2f::new(3.5, 4.5));
        assert_eq!(ellipse.major_axis.length, 0.0);
        assert_eq!(ellipse.minor_axis.length, 0.0);
        assert_eq!(ellipse.surface, 0.0);
    }

    #[test]
    fn test_ellipse_horizontal_bar() {
        let ellipse = fit_ellipse(grid(20, 4));
        assert_relative_eq!(ellipse.center.x, 10.0, epsilon = 1e-9);
        assert_relative_eq!(ellipse.center.y, 2.0, epsilon = 1e-9);
        assert_relative_eq!(ellipse.major_axis.angle, 0.0, epsilon = 1e-9);
        assert_relative_eq!(ellipse.minor_axis.angle, 90.0, epsilon = 1e-9);
        // variance of n consecutive integers is (n^2 - 1) / 12
        assert_relative_eq!(
            ellipse.major_axis.length,
            4.0 * (399.0f64 / 12.0).sqrt(),
            epsilon = 1e-9
        );
        assert_relative_eq!(
            ellipse.minor_axis.length,
            4.0 * (15.0f64 / 12.0).sqrt(),
            epsilon = 1e-9
        );
        assert!(ellipse.minor_axis.length <= ellipse.major_axis.length);
    }

    #[test]
    fn test_ellipse_diagonal() {
        let points: Vec<Point2f> = (0..10)
            .map(|i| Point2f::new(i as f64, i as f64))
            .collect();
        let ellipse = fit_ellipse(points);
        assert_relative_eq!(ellipse.major_axis.angle, 45.0, epsilon = 1e-9);
        assert_relative_eq!(ellipse.minor_axis.length, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn test_ellipse_disk_area() {
        let radius = 30.0;
        let points: Vec<Point2f> = grid(61, 61)
            .into_iter()
            .filter(|p| (p.x - 30.5).powi(2) + (p.y - 30.5).powi(2) <= radius * radius)
            .collect();
        let count = points.len() as f64;
        let ellipse = fit_ellipse(points);
        assert_relative_eq!(ellipse.surface, count, max_relative = 0.02);
        assert_relative_eq!(
            ellipse.major_axis.length,
            ellipse.minor_axis.length,
            max_relative = 0.01
        );
    }
}
