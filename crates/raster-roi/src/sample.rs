use num_traits::AsPrimitive;
use raster_image::{ops::crop_image, Image, ImageSize};

use crate::{
    error::RoiError,
    manager::{RegionFilter, RegionMapManager},
    region::Region,
};

/// Mean intensity of one region over a sequence of frames.
#[derive(Debug, Clone, PartialEq)]
pub struct RegionSeries {
    /// The region id.
    pub id: i16,
    /// One mean per frame, in frame order.
    pub means: Vec<f64>,
}

fn check_size(image: ImageSize, map: ImageSize) -> Result<(), RoiError> {
    if image != map {
        return Err(RoiError::ImageSizeMismatch(image, map));
    }
    Ok(())
}

/// Crops the bounding box of a region out of an image covering the same pixels.
///
/// # Errors
///
/// Returns [`RoiError::ImageSizeMismatch`] when the image and the region map
/// differ in size.
pub fn crop_region<T, const C: usize>(
    region: &Region<'_>,
    image: &Image<T, C>,
) -> Result<Image<T, C>, RoiError>
where
    T: Copy + Default + Send + Sync,
{
    check_size(image.size(), region.region_map().size())?;
    let bbox = region.bounding_box();
    Ok(crop_image(image, bbox.column, bbox.row, bbox.size())?)
}

/// Average of the image samples under the region pixels.
///
/// # Errors
///
/// Returns [`RoiError::ImageSizeMismatch`] when the image and the region map
/// differ in size.
pub fn mean_intensity<T>(region: &Region<'_>, image: &Image<T, 1>) -> Result<f64, RoiError>
where
    T: AsPrimitive<f64>,
{
    check_size(image.size(), region.region_map().size())?;
    Ok(region_mean(region, image))
}

fn region_mean<T>(region: &Region<'_>, image: &Image<T, 1>) -> f64
where
    T: AsPrimitive<f64>,
{
    if region.surface() == 0 {
        return 0.0;
    }
    let data = image.as_slice();
    let width = image.width();
    let sum: f64 = region
        .points()
        .map(|p| data[p.y as usize * width + p.x as usize].as_())
        .sum();
    sum / region.surface() as f64
}

/// Samples the mean intensity of every selected region on every frame.
///
/// The series follow the region order of [`RegionMapManager::regions`]. The
/// regions are processed in parallel.
///
/// # Arguments
///
/// * `manager` - The labeled regions.
/// * `filter` - Which regions to sample.
/// * `frames` - Grayscale frames with the size of the region map.
///
/// # Errors
///
/// Returns [`RoiError::ImageSizeMismatch`] for the first frame whose size
/// differs from the region map. Nothing is sampled in that case.
pub fn sample_stack<T>(
    manager: &RegionMapManager,
    filter: &RegionFilter,
    frames: &[Image<T, 1>],
) -> Result<Vec<RegionSeries>, RoiError>
where
    T: AsPrimitive<f64> + Send + Sync,
{
    for frame in frames {
        check_size(frame.size(), manager.size())?;
    }

    let series = manager.par_map_regions(filter, |region| RegionSeries {
        id: region.id(),
        means: frames
            .iter()
            .map(|frame| region_mean(region, frame))
            .collect(),
    });

    log::debug!(
        "sampled {} regions over {} frames",
        series.len(),
        frames.len()
    );

    Ok(series)
}
