//! Shape descriptors of a region, computed from the label grid on demand.

use std::f64::consts::{PI, SQRT_2};

use crate::{
    border::{extended_border_points, LocalMask},
    geometry::{self, ConvexHull, Ellipse, Feret, Mbr, Point2f},
    region::Region,
};

/// Length of one side of a one pixel stair step. Two of them make a diagonal.
const STAIR_STEP: f64 = SQRT_2 / 2.0;

/// Length saved by rounding a right angle corner of the outline with a quarter
/// circle of radius 1/4.
const CORNER_ROUNDING: f64 = 0.25 * (2.0 - PI / 2.0);

/// The convex hull of the pixel area covered by the region.
///
/// Every outer border pixel contributes its four corners, so the hull encloses
/// whole pixels and a single pixel region has the unit square as hull.
pub fn convex_hull(region: &Region<'_>) -> ConvexHull {
    ConvexHull::from_points(&extended_border_points(region))
}

/// The Feret diameters of the region hull, with support lines clipped to the image.
pub fn feret(region: &Region<'_>) -> Feret {
    let hull = convex_hull(region);
    Feret::from_hull(&hull.points, region.region_map().size())
}

/// The minimum area rectangle enclosing the region hull.
pub fn minimum_bounding_rectangle(region: &Region<'_>) -> Mbr {
    geometry::minimum_bounding_rectangle(&convex_hull(region).points)
}

/// The ellipse matching the second moments of the region pixel centers.
pub fn ellipse(region: &Region<'_>) -> Ellipse {
    geometry::fit_ellipse(
        region
            .points()
            .map(|p| Point2f::new(p.x as f64 + 0.5, p.y as f64 + 0.5)),
    )
}

/// Estimates the length of the outer contour.
///
/// Holes are filled first, then the pixel outline of the region is walked side
/// by side. A side joining a convex and a concave outline corner is one half
/// of a stair step and counts for `sqrt(2) / 2`, any other side counts for 1.
/// Right angle corners between two such straight sides are rounded off.
///
/// A lone pixel measures `2 + pi / 2` and an `n x n` square
/// `4 * n - (2 - pi / 2)`, so squares always stay less compact than a disk.
pub fn perimeter(region: &Region<'_>) -> f64 {
    let local = LocalMask::from_region(region, true);
    let (width, height) = local.size();

    // number of region pixels around the outline vertex (x, y)
    let around = |x: isize, y: isize| [(x - 1, y - 1), (x, y - 1), (x - 1, y), (x, y)];
    let fill = |x: isize, y: isize| {
        around(x, y)
            .iter()
            .filter(|&&(px, py)| local.contains(px, py))
            .count()
    };
    // a convex corner (1 pixel) next to a concave one (3 pixels)
    let is_stair = |a: usize, b: usize| matches!((a, b), (1, 3) | (3, 1));

    let mut length = 0.0;
    for (x, y) in local.pixels() {
        // top, right, bottom, left, each with its two vertices
        let sides = [
            ((x, y - 1), (x, y), (x + 1, y)),
            ((x + 1, y), (x + 1, y), (x + 1, y + 1)),
            ((x, y + 1), (x, y + 1), (x + 1, y + 1)),
            ((x - 1, y), (x, y), (x, y + 1)),
        ];
        for ((nx, ny), a, b) in sides {
            if local.contains(nx, ny) {
                continue;
            }
            length += if is_stair(fill(a.0, a.1), fill(b.0, b.1)) {
                STAIR_STEP
            } else {
                1.0
            };
        }
    }

    let mut corners = 0usize;
    for vy in 0..=height as isize {
        for vx in 0..=width as isize {
            let k = fill(vx, vy);
            if k != 1 && k != 3 {
                continue;
            }
            // the odd pixel out tells which way the two outline sides run
            let Some(odd) = around(vx, vy)
                .iter()
                .position(|&(px, py)| local.contains(px, py) == (k == 1))
            else {
                continue;
            };
            let dx = if odd % 2 == 0 { -1 } else { 1 };
            let dy = if odd / 2 == 0 { -1 } else { 1 };
            if !is_stair(k, fill(vx + dx, vy)) && !is_stair(k, fill(vx, vy + dy)) {
                corners += 1;
            }
        }
    }

    length - corners as f64 * CORNER_ROUNDING
}

/// Surface over convex hull surface, within `(0, 1]` for a non empty region.
pub fn solidity(region: &Region<'_>) -> f64 {
    let hull = convex_hull(region);
    if hull.surface == 0.0 {
        return 0.0;
    }
    region.surface() as f64 / hull.surface
}

/// Perimeter of the circle with the region surface, over the region perimeter.
///
/// Close to 1 for round regions and smaller for elongated or ragged ones.
pub fn sphericity(region: &Region<'_>) -> f64 {
    let perimeter = perimeter(region);
    if perimeter == 0.0 {
        return 0.0;
    }
    2.0 * (PI * region.surface() as f64).sqrt() / perimeter
}
