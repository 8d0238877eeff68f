use std::ops::{Add, Mul, Sub};

/// A point on the integer pixel lattice.
///
/// For a pixel, `(x, y)` is its column and row. For lattice corners, pixel
/// `(x, y)` spans `[x, x + 1] x [y, y + 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Point2i {
    /// The column.
    pub x: i32,
    /// The row.
    pub y: i32,
}

impl Point2i {
    /// Creates a new point.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Squared euclidean distance to `other`, exact in integers.
    pub fn distance_squared(self, other: Self) -> i64 {
        let dx = (other.x - self.x) as i64;
        let dy = (other.y - self.y) as i64;
        dx * dx + dy * dy
    }
}

/// Z component of `(a - o) x (b - o)`. Positive for a counter-clockwise turn
/// when y points up.
#[inline]
pub(crate) fn cross(o: Point2i, a: Point2i, b: Point2i) -> i64 {
    (a.x - o.x) as i64 * (b.y - o.y) as i64 - (a.y - o.y) as i64 * (b.x - o.x) as i64
}

/// A point or vector with real coordinates, in the same frame as [`Point2i`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point2f {
    /// The horizontal coordinate.
    pub x: f64,
    /// The vertical coordinate, growing downwards.
    pub y: f64,
}

impl Point2f {
    /// Creates a new point.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Dot product.
    pub fn dot(self, rhs: Self) -> f64 {
        self.x * rhs.x + self.y * rhs.y
    }

    /// Z component of the cross product.
    pub fn cross(self, rhs: Self) -> f64 {
        self.x * rhs.y - self.y * rhs.x
    }

    /// Euclidean length.
    pub fn norm(self) -> f64 {
        self.dot(self).sqrt()
    }

    /// Euclidean distance to `other`.
    pub fn distance(self, other: Self) -> f64 {
        (other - self).norm()
    }

    /// The vector rotated by 90 degrees.
    pub fn perp(self) -> Self {
        Self::new(-self.y, self.x)
    }
}

impl From<Point2i> for Point2f {
    fn from(p: Point2i) -> Self {
        Self::new(p.x as f64, p.y as f64)
    }
}

impl Add for Point2f {
    type Output = Point2f;

    fn add(self, rhs: Point2f) -> Self::Output {
        Point2f::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point2f {
    type Output = Point2f;

    fn sub(self, rhs: Point2f) -> Self::Output {
        Point2f::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Point2f {
    type Output = Point2f;

    fn mul(self, rhs: f64) -> Self::Output {
        Point2f::new(self.x * rhs, self.y * rhs)
    }
}

/// Angle of `v` against the horizontal axis in degrees, folded into `(-90, 90]`.
pub(crate) fn direction_degrees(v: Point2f) -> f64 {
    if v.x == 0.0 && v.y == 0.0 {
        return 0.0;
    }
    let mut angle = v.y.atan2(v.x).to_degrees();
    if angle > 90.0 {
        angle -= 180.0;
    } else if angle <= -90.0 {
        angle += 180.0;
    }
    angle
}
