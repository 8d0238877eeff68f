use raster_image::Mask;

use crate::{
    error::{CapacityKind, RoiError},
    manager::RegionMapManager,
    queue::RingQueue,
    region_map::{RegionMap, MAX_REGIONS},
};

/// Offsets of the 4-neighborhood.
pub(crate) const NEIGHBORS_4: [(isize, isize); 4] = [(0, -1), (-1, 0), (1, 0), (0, 1)];

/// Offsets of the 8-neighborhood.
pub(crate) const NEIGHBORS_8: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Returns the neighbor offsets for the requested connectivity.
#[inline]
pub(crate) fn neighbors(allow_corners: bool) -> &'static [(isize, isize)] {
    if allow_corners {
        &NEIGHBORS_8
    } else {
        &NEIGHBORS_4
    }
}

/// Configuration for connected component labeling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LabelConfig {
    /// Connect pixels through their corners (8-connectivity) instead of only
    /// through their sides (4-connectivity).
    pub allow_corners: bool,
    /// Number of pixels the flood fill frontier may hold at once. Rounded up to
    /// a power of two. When `None` the frontier is sized to the mask area.
    pub frontier_capacity: Option<usize>,
}

impl LabelConfig {
    /// Configuration with the given connectivity and the default frontier.
    pub fn with_corners(allow_corners: bool) -> Self {
        Self {
            allow_corners,
            ..Default::default()
        }
    }
}

/// Labels the connected components of a mask.
///
/// Foreground components get positive ids and background components negative
/// ids, both numbered in row-major discovery order starting at 1 and -1.
///
/// # Arguments
///
/// * `mask` - The binary input.
/// * `config` - The connectivity and frontier configuration.
///
/// # Errors
///
/// Returns [`RoiError::CapacityExceeded`] when either polarity has more than
/// [`MAX_REGIONS`] components or the frontier outgrows its capacity. No map is
/// returned in that case.
///
/// # Examples
///
/// ```
/// use raster_image::{ImageSize, Mask};
/// use raster_roi::{label, LabelConfig, RegionFilter};
///
/// let mask = Mask::new(ImageSize { width: 3, height: 1 }, vec![1, 0, 1]).unwrap();
/// let manager = label(&mask, &LabelConfig::default()).unwrap();
///
/// assert_eq!(manager.positive_count(), 2);
/// assert_eq!(manager.negative_count(), 1);
/// assert_eq!(manager.regions(&RegionFilter::default()).len(), 2);
/// ```
pub fn label(mask: &Mask, config: &LabelConfig) -> Result<RegionMapManager, RoiError> {
    let map = label_map(mask, config)?;
    Ok(RegionMapManager::new(map))
}

/// Runs the flood fill and returns the bare region map.
pub(crate) fn label_map(mask: &Mask, config: &LabelConfig) -> Result<RegionMap, RoiError> {
    let size = mask.size();
    let (width, height) = (size.width as isize, size.height as isize);
    let offsets = neighbors(config.allow_corners);

    let mut labels = vec![0i16; size.area()];
    let mut queue = RingQueue::with_capacity(config.frontier_capacity.unwrap_or(size.area()));

    let mut positive_count = 0usize;
    let mut negative_count = 0usize;

    for seed in 0..labels.len() {
        if labels[seed] != 0 {
            continue;
        }

        let foreground = mask.get_index(seed);
        let id = if foreground {
            positive_count = next_count(positive_count)?;
            positive_count as i16
        } else {
            negative_count = next_count(negative_count)?;
            -(negative_count as i16)
        };

        labels[seed] = id;
        queue.push(seed)?;

        while let Some(index) = queue.pop() {
            let x = (index % size.width) as isize;
            let y = (index / size.width) as isize;

            for &(dx, dy) in offsets {
                let (nx, ny) = (x + dx, y + dy);
                if nx < 0 || ny < 0 || nx >= width || ny >= height {
                    continue;
                }

                let neighbor = (ny * width + nx) as usize;
                if labels[neighbor] == 0 && mask.get_index(neighbor) == foreground {
                    // mark on enqueue so every pixel enters the frontier once
                    labels[neighbor] = id;
                    if let Err(err) = queue.push(neighbor) {
                        log::debug!("flood fill frontier overflowed while labeling region {id}");
                        return Err(err);
                    }
                }
            }
        }
    }

    log::debug!(
        "labeled {}x{} mask: {} positive and {} negative regions",
        size.width,
        size.height,
        positive_count,
        negative_count
    );

    Ok(RegionMap::new(size, labels, positive_count, negative_count))
}

#[inline]
fn next_count(count: usize) -> Result<usize, RoiError> {
    if count >= MAX_REGIONS {
        log::debug!("region budget of {} exhausted", MAX_REGIONS);
        return Err(RoiError::CapacityExceeded(CapacityKind::Regions));
    }
    Ok(count + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use raster_image::{ImageError, ImageSize};

    fn mask_from_rows(rows: &[&[u8]]) -> Result<Mask, ImageError> {
        let size = ImageSize {
            width: rows[0].len(),
            height: rows.len(),
        };
        Mask::new(size, rows.concat())
    }

    #[test]
    fn test_label_plus() -> Result<(), Box<dyn std::error::Error>> {
        #[rustfmt::skip]
        let mask = mask_from_rows(&[
            &[0, 1, 0],
            &[1, 1, 1],
            &[0, 1, 0],
        ])?;
        let map = label_map(&mask, &LabelConfig::default())?;

        assert_eq!(map.positive_count(), 1);
        // the four corners are isolated from each other
        assert_eq!(map.negative_count(), 4);

        #[rustfmt::skip]
        assert_eq!(map.as_slice(), &[
            -1, 1, -2,
             1, 1,  1,
            -3, 1, -4,
        ]);

        Ok(())
    }

    #[test]
    fn test_label_corners() -> Result<(), Box<dyn std::error::Error>> {
        #[rustfmt::skip]
        let mask = mask_from_rows(&[
            &[1, 0, 0],
            &[0, 1, 0],
            &[0, 0, 1],
        ])?;

        let map4 = label_map(&mask, &LabelConfig::with_corners(false))?;
        assert_eq!(map4.positive_count(), 3);
        assert_eq!(map4.negative_count(), 2);

        let map8 = label_map(&mask, &LabelConfig::with_corners(true))?;
        assert_eq!(map8.positive_count(), 1);
        // the background also connects across the diagonal
        assert_eq!(map8.negative_count(), 1);

        Ok(())
    }

    #[test]
    fn test_label_empty_mask() -> Result<(), Box<dyn std::error::Error>> {
        let mask = Mask::from_size_val(
            ImageSize {
                width: 0,
                height: 0,
            },
            false,
        );
        let map = label_map(&mask, &LabelConfig::default())?;
        assert_eq!(map.positive_count(), 0);
        assert_eq!(map.negative_count(), 0);

        Ok(())
    }

    #[test]
    fn test_frontier_overflow() -> Result<(), Box<dyn std::error::Error>> {
        let mask = Mask::from_size_val(
            ImageSize {
                width: 16,
                height: 16,
            },
            true,
        );
        let config = LabelConfig {
            allow_corners: false,
            frontier_capacity: Some(4),
        };
        let res = label_map(&mask, &config);
        assert_eq!(
            res,
            Err(RoiError::CapacityExceeded(CapacityKind::Frontier(4)))
        );

        // a frontier sized to the mask always suffices
        let map = label_map(&mask, &LabelConfig::default())?;
        assert_eq!(map.positive_count(), 1);

        Ok(())
    }

    fn checkerboard(size: ImageSize) -> Result<Mask, ImageError> {
        let data = (0..size.area())
            .map(|i| u8::from(((i % size.width) + (i / size.width)) % 2 == 0))
            .collect();
        Mask::new(size, data)
    }

    #[test]
    fn test_region_budget() -> Result<(), Box<dyn std::error::Error>> {
        // 32640 isolated pixels of each polarity still fit
        let mask = checkerboard(ImageSize {
            width: 256,
            height: 255,
        })?;
        let map = label_map(&mask, &LabelConfig::default())?;
        assert_eq!(map.positive_count(), 32640);
        assert_eq!(map.negative_count(), 32640);

        // 32768 do not
        let mask = checkerboard(ImageSize {
            width: 256,
            height: 256,
        })?;
        let res = label_map(&mask, &LabelConfig::default());
        assert_eq!(res, Err(RoiError::CapacityExceeded(CapacityKind::Regions)));

        // with corners the whole foreground is one region
        let map = label_map(&mask, &LabelConfig::with_corners(true))?;
        assert_eq!(map.positive_count(), 1);
        assert_eq!(map.negative_count(), 1);

        Ok(())
    }
}
