use std::str::FromStr;

use raster_image::ImageSize;
use rayon::prelude::*;

use crate::{error::RoiError, region::Region, region_map::RegionMap};

/// Which regions a query returns, by the sign of their id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Polarity {
    /// Foreground regions, with positive ids.
    #[default]
    Positive,
    /// Background regions, with negative ids.
    Negative,
    /// Both foreground and background regions.
    Both,
}

impl FromStr for Polarity {
    type Err = RoiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "white" | "positive" => Ok(Polarity::Positive),
            "black" | "negative" => Ok(Polarity::Negative),
            "bw" | "both" => Ok(Polarity::Both),
            other => Err(RoiError::InvalidOptions(format!(
                "unknown polarity {other:?}"
            ))),
        }
    }
}

/// Options to select regions from a [`RegionMapManager`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RegionFilter {
    /// The polarity of the returned regions.
    pub polarity: Polarity,
    /// Smallest accepted surface in pixels.
    pub min_surface: usize,
    /// Largest accepted surface in pixels, unbounded when `None`.
    pub max_surface: Option<usize>,
}

impl RegionFilter {
    /// A filter accepting every region of the given polarity.
    pub fn polarity(polarity: Polarity) -> Self {
        Self {
            polarity,
            ..Default::default()
        }
    }

    fn accepts(&self, surface: usize) -> bool {
        surface >= self.min_surface && self.max_surface.map_or(true, |max| surface <= max)
    }
}

/// An axis aligned box in pixel units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BoundingBox {
    /// Top row.
    pub row: usize,
    /// Leftmost column.
    pub column: usize,
    /// Number of columns covered.
    pub width: usize,
    /// Number of rows covered.
    pub height: usize,
}

impl BoundingBox {
    /// The box extent as an image size.
    pub fn size(&self) -> ImageSize {
        ImageSize {
            width: self.width,
            height: self.height,
        }
    }

    /// Width over height, or 0 for an empty box.
    pub fn ratio(&self) -> f64 {
        if self.height == 0 {
            return 0.0;
        }
        self.width as f64 / self.height as f64
    }
}

/// Per region metadata gathered right after labeling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct RegionInfo {
    pub bounding_box: BoundingBox,
    pub surface: usize,
    /// Row-major index of the first pixel, where labeling started the region.
    pub seed: usize,
}

#[derive(Clone, Copy)]
struct Extent {
    min_x: usize,
    min_y: usize,
    max_x: usize,
    max_y: usize,
    surface: usize,
    seed: usize,
}

impl Extent {
    const EMPTY: Extent = Extent {
        min_x: usize::MAX,
        min_y: usize::MAX,
        max_x: 0,
        max_y: 0,
        surface: 0,
        seed: 0,
    };

    #[inline]
    fn add(&mut self, index: usize, x: usize, y: usize) {
        if self.surface == 0 {
            self.seed = index;
        }
        self.min_x = self.min_x.min(x);
        self.min_y = self.min_y.min(y);
        self.max_x = self.max_x.max(x);
        self.max_y = self.max_y.max(y);
        self.surface += 1;
    }

    fn into_info(self) -> RegionInfo {
        if self.surface == 0 {
            return RegionInfo {
                bounding_box: BoundingBox::default(),
                surface: 0,
                seed: 0,
            };
        }
        RegionInfo {
            bounding_box: BoundingBox {
                row: self.min_y,
                column: self.min_x,
                width: self.max_x - self.min_x + 1,
                height: self.max_y - self.min_y + 1,
            },
            surface: self.surface,
            seed: self.seed,
        }
    }
}

/// Owns a [`RegionMap`] and answers region queries against it.
///
/// Regions handed out by the manager borrow it and index into its metadata
/// table, so they never copy the label grid.
#[derive(Debug, Clone)]
pub struct RegionMapManager {
    map: RegionMap,
    positive: Vec<RegionInfo>,
    negative: Vec<RegionInfo>,
}

impl RegionMapManager {
    /// Takes ownership of a labeled map and gathers the bounding box and
    /// surface of every region in one pass.
    pub fn new(map: RegionMap) -> Self {
        let mut positive = vec![Extent::EMPTY; map.positive_count()];
        let mut negative = vec![Extent::EMPTY; map.negative_count()];

        let width = map.width();
        for (i, &id) in map.as_slice().iter().enumerate() {
            let (x, y) = (i % width, i / width);
            match id {
                id if id > 0 => positive[id as usize - 1].add(i, x, y),
                id if id < 0 => negative[id.unsigned_abs() as usize - 1].add(i, x, y),
                _ => {}
            }
        }

        Self {
            map,
            positive: positive.into_iter().map(Extent::into_info).collect(),
            negative: negative.into_iter().map(Extent::into_info).collect(),
        }
    }

    /// The underlying label grid.
    pub fn region_map(&self) -> &RegionMap {
        &self.map
    }

    /// Get the size of the labeled image.
    pub fn size(&self) -> ImageSize {
        self.map.size()
    }

    /// Number of foreground regions.
    pub fn positive_count(&self) -> usize {
        self.map.positive_count()
    }

    /// Number of background regions.
    pub fn negative_count(&self) -> usize {
        self.map.negative_count()
    }

    /// Returns the regions accepted by `filter` in discovery order.
    ///
    /// Each polarity is ordered by id magnitude, `1, 2, ...` and `-1, -2, ...`.
    /// With [`Polarity::Both`] the two sequences are interleaved by the row-major
    /// position of the first pixel of each region.
    pub fn regions(&self, filter: &RegionFilter) -> Vec<Region<'_>> {
        let negatives = (1..=self.negative.len()).map(|n| -(n as i16));
        let positives = (1..=self.positive.len()).map(|n| n as i16);

        let ids: Vec<i16> = match filter.polarity {
            Polarity::Positive => positives.collect(),
            Polarity::Negative => negatives.collect(),
            Polarity::Both => {
                let mut ids: Vec<i16> = positives.chain(negatives).collect();
                ids.sort_unstable_by_key(|&id| self.info(id).seed);
                ids
            }
        };

        ids.into_iter()
            .map(|id| Region::new(self, id, self.info(id)))
            .filter(|region| filter.accepts(region.surface()))
            .collect()
    }

    /// Looks up a single region.
    ///
    /// # Errors
    ///
    /// Returns [`RoiError::InvalidId`] for the reserved id `0` and
    /// [`RoiError::NotFound`] when no region carries `id`.
    pub fn region_by_id(&self, id: i16) -> Result<Region<'_>, RoiError> {
        if id == 0 {
            return Err(RoiError::InvalidId);
        }
        if !self.map.contains_id(id) {
            return Err(RoiError::NotFound(id));
        }
        Ok(Region::new(self, id, self.info(id)))
    }

    /// Runs `f` on every region accepted by `filter` in parallel.
    ///
    /// The results keep the order of [`RegionMapManager::regions`].
    pub fn par_map_regions<R, F>(&self, filter: &RegionFilter, f: F) -> Vec<R>
    where
        F: Fn(&Region<'_>) -> R + Send + Sync,
        R: Send,
    {
        self.regions(filter).par_iter().map(f).collect()
    }

    /// Metadata of a valid id.
    fn info(&self, id: i16) -> RegionInfo {
        if id > 0 {
            self.positive[id as usize - 1]
        } else {
            self.negative[id.unsigned_abs() as usize - 1]
        }
    }
}
