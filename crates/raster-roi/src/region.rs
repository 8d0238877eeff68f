use raster_image::Mask;

use crate::{
    border::{self, BorderOptions},
    geometry::{ConvexHull, Ellipse, Feret, Mbr, Point2f, Point2i},
    manager::{BoundingBox, Polarity, RegionInfo, RegionMapManager},
    region_map::RegionMap,
    shape,
};

/// A connected component of a labeled mask.
///
/// A region is a view into the [`RegionMapManager`] that produced it: an id
/// plus the bounding box and surface gathered at labeling time. Every other
/// descriptor is computed from the label grid when requested.
#[derive(Clone, Copy)]
pub struct Region<'a> {
    manager: &'a RegionMapManager,
    id: i16,
    info: RegionInfo,
}

impl std::fmt::Debug for Region<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Region")
            .field("id", &self.id)
            .field("bounding_box", &self.info.bounding_box)
            .field("surface", &self.info.surface)
            .finish()
    }
}

impl<'a> Region<'a> {
    pub(crate) fn new(manager: &'a RegionMapManager, id: i16, info: RegionInfo) -> Self {
        Self { manager, id, info }
    }

    /// The region id. Positive for foreground, negative for background.
    pub fn id(&self) -> i16 {
        self.id
    }

    /// Whether the region is foreground or background.
    pub fn polarity(&self) -> Polarity {
        if self.id > 0 {
            Polarity::Positive
        } else {
            Polarity::Negative
        }
    }

    /// The smallest axis aligned box holding every pixel of the region.
    pub fn bounding_box(&self) -> BoundingBox {
        self.info.bounding_box
    }

    /// Number of pixels in the region.
    pub fn surface(&self) -> usize {
        self.info.surface
    }

    /// The label grid the region belongs to.
    pub fn region_map(&self) -> &'a RegionMap {
        self.manager.region_map()
    }

    /// Whether the pixel `(x, y)` of the image belongs to the region.
    #[inline]
    pub fn contains(&self, x: usize, y: usize) -> bool {
        self.region_map().get(x, y) == Some(self.id)
    }

    /// Iterates the region pixels in row-major order, in image coordinates.
    pub fn points(&self) -> impl Iterator<Item = Point2i> + Clone + 'a {
        let map = self.region_map();
        let id = self.id;
        let bbox = self.info.bounding_box;
        (bbox.row..bbox.row + bbox.height).flat_map(move |y| {
            (bbox.column..bbox.column + bbox.width).filter_map(move |x| {
                (map.get(x, y) == Some(id)).then_some(Point2i::new(x as i32, y as i32))
            })
        })
    }

    /// A bitmap the size of the bounding box, set where the region is.
    pub fn mask(&self) -> Mask {
        let bbox = self.info.bounding_box;
        let map = self.region_map();
        Mask::from_fn(bbox.size(), |x, y| {
            map.get(bbox.column + x, bbox.row + y) == Some(self.id)
        })
    }

    /// Mean position of the region pixels, using pixel centers.
    pub fn centroid(&self) -> Point2f {
        if self.info.surface == 0 {
            return Point2f::default();
        }
        let sum = self
            .points()
            .fold(Point2f::default(), |acc, p| acc + Point2f::from(p));
        let n = self.info.surface as f64;
        Point2f::new(sum.x / n + 0.5, sum.y / n + 0.5)
    }

    /// Bounding box width over height.
    pub fn ratio(&self) -> f64 {
        self.info.bounding_box.ratio()
    }

    /// The region pixels touching the outside of the region.
    pub fn border_points(&self, options: &BorderOptions) -> Vec<Point2i> {
        border::border_points(self, options)
    }

    /// The convex hull of the pixel area covered by the region.
    pub fn convex_hull(&self) -> ConvexHull {
        shape::convex_hull(self)
    }

    /// The minimum and maximum Feret diameters.
    pub fn feret(&self) -> Feret {
        shape::feret(self)
    }

    /// The minimum area rotated rectangle enclosing the region.
    pub fn minimum_bounding_rectangle(&self) -> Mbr {
        shape::minimum_bounding_rectangle(self)
    }

    /// The ellipse with the same second moments as the region.
    pub fn ellipse(&self) -> Ellipse {
        shape::ellipse(self)
    }

    /// Estimated length of the outer contour.
    pub fn perimeter(&self) -> f64 {
        shape::perimeter(self)
    }

    /// Surface over convex hull surface.
    pub fn solidity(&self) -> f64 {
        shape::solidity(self)
    }

    /// Perimeter of the equal area circle over the region perimeter.
    pub fn sphericity(&self) -> f64 {
        shape::sphericity(self)
    }

    /// Minimum over maximum Feret diameter.
    pub fn aspect_ratio(&self) -> f64 {
        self.feret().aspect_ratio
    }
}
