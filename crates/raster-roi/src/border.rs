use std::collections::VecDeque;

use crate::{
    geometry::Point2i,
    label::{neighbors, NEIGHBORS_4},
    region::Region,
};

/// Options for border tracing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BorderOptions {
    /// Also report pixels bordering holes inside the region.
    pub inner_borders: bool,
    /// Count diagonal neighbors when looking for the outside of the region.
    pub allow_corners: bool,
}

/// Region membership over the region bounding box.
pub(crate) struct LocalMask {
    origin: Point2i,
    width: usize,
    height: usize,
    data: Vec<bool>,
}

impl LocalMask {
    /// Copies the region membership, optionally filling its holes.
    pub fn from_region(region: &Region<'_>, fill_holes: bool) -> Self {
        let bbox = region.bounding_box();
        let map = region.region_map();
        let id = region.id();

        let mut data = Vec::with_capacity(bbox.width * bbox.height);
        for y in bbox.row..bbox.row + bbox.height {
            for x in bbox.column..bbox.column + bbox.width {
                data.push(map.get(x, y) == Some(id));
            }
        }

        let mut local = Self {
            origin: Point2i::new(bbox.column as i32, bbox.row as i32),
            width: bbox.width,
            height: bbox.height,
            data,
        };
        if fill_holes {
            local.fill_holes();
        }
        local
    }

    /// Width and height of the box.
    pub fn size(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Membership of a local coordinate. Anything outside the box is outside the region.
    #[inline]
    pub fn contains(&self, x: isize, y: isize) -> bool {
        x >= 0
            && y >= 0
            && (x as usize) < self.width
            && (y as usize) < self.height
            && self.data[y as usize * self.width + x as usize]
    }

    /// Iterates the local coordinates of the region pixels.
    pub fn pixels(&self) -> impl Iterator<Item = (isize, isize)> + '_ {
        self.data
            .iter()
            .enumerate()
            .filter(|(_, inside)| **inside)
            .map(|(i, _)| ((i % self.width) as isize, (i / self.width) as isize))
    }

    /// Converts a local coordinate to image coordinates.
    #[inline]
    pub fn to_image(&self, x: isize, y: isize) -> Point2i {
        Point2i::new(self.origin.x + x as i32, self.origin.y + y as i32)
    }

    /// Marks every non-region pixel not 4-reachable from outside the box as region.
    fn fill_holes(&mut self) {
        // one pixel of padding lets the flood start outside the box
        let padded_width = self.width + 2;
        let padded_height = self.height + 2;
        let mut outside = vec![false; padded_width * padded_height];
        let mut queue = VecDeque::from([0]);
        outside[0] = true;

        while let Some(index) = queue.pop_front() {
            let x = (index % padded_width) as isize;
            let y = (index / padded_width) as isize;

            for &(dx, dy) in &NEIGHBORS_4 {
                let (nx, ny) = (x + dx, y + dy);
                if nx < 0 || ny < 0 || nx >= padded_width as isize || ny >= padded_height as isize
                {
                    continue;
                }
                let neighbor = ny as usize * padded_width + nx as usize;
                if outside[neighbor] || self.contains(nx - 1, ny - 1) {
                    continue;
                }
                outside[neighbor] = true;
                queue.push_back(neighbor);
            }
        }

        for y in 0..self.height {
            for x in 0..self.width {
                if !outside[(y + 1) * padded_width + x + 1] {
                    self.data[y * self.width + x] = true;
                }
            }
        }
    }
}

/// Lists the border pixels of a region, in row-major order and image coordinates.
///
/// A region pixel is on the border when one of its neighbors is outside the
/// region or outside the image. Without `inner_borders` the holes of the
/// region are filled first, so only the outer contour is reported.
///
/// # Arguments
///
/// * `region` - The region to trace.
/// * `options` - Hole handling and neighborhood.
pub fn border_points(region: &Region<'_>, options: &BorderOptions) -> Vec<Point2i> {
    let local = LocalMask::from_region(region, !options.inner_borders);
    let offsets = neighbors(options.allow_corners);

    local
        .pixels()
        .filter(|&(x, y)| {
            offsets
                .iter()
                .any(|&(dx, dy)| !local.contains(x + dx, y + dy))
        })
        .map(|(x, y)| local.to_image(x, y))
        .collect()
}

/// Expands every outer border pixel into the four lattice corners it covers.
pub(crate) fn extended_border_points(region: &Region<'_>) -> Vec<Point2i> {
    border_points(region, &BorderOptions::default())
        .into_iter()
        .flat_map(|p| {
            [
                p,
                Point2i::new(p.x + 1, p.y),
                Point2i::new(p.x, p.y + 1),
                Point2i::new(p.x + 1, p.y + 1),
            ]
        })
        .collect()
}
