/// lattice and real valued points.
pub mod point;

/// convex hull construction.
pub mod convex_hull;

/// Feret diameters with rotating calipers.
pub mod feret;

/// minimum area bounding rectangle.
pub mod mbr;

/// moment based ellipse fitting.
pub mod ellipse;

pub use convex_hull::{convex_hull, polygon_area, polygon_perimeter, ConvexHull};
pub use ellipse::{fit_ellipse, Ellipse, EllipseAxis};
pub use feret::{Feret, FeretDiameter};
pub use mbr::{minimum_bounding_rectangle, Mbr};
pub use point::{Point2f, Point2i};
