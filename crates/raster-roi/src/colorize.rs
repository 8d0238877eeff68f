use raster_image::Image;
use rayon::prelude::*;

use crate::{error::RoiError, region_map::RegionMap};

/// Hue step between consecutive ids, the golden angle in degrees.
const HUE_STEP: f64 = 137.507_764;

/// How region ids are turned into colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Foreground in red and background in blue.
    #[default]
    Binary,
    /// One hue per id, so that neighboring regions stand apart.
    Label,
}

/// Options for [`colorize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ColorizeOptions {
    /// The coloring scheme.
    pub mode: ColorMode,
    /// Paint background regions too. When false they stay black.
    pub with_negative: bool,
}

impl ColorizeOptions {
    /// Options for the given mode, leaving the background black.
    pub fn mode(mode: ColorMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }
}

/// Renders a region map as an RGB image.
///
/// Every pixel gets the color of its region id. In [`ColorMode::Label`] the
/// color of an id is fixed, so two renders of the same map are identical, and
/// background regions are drawn at half brightness.
///
/// # Arguments
///
/// * `map` - The labeled grid.
/// * `options` - The coloring scheme.
///
/// # Errors
///
/// Returns an error if the output image cannot be allocated.
pub fn colorize(map: &RegionMap, options: &ColorizeOptions) -> Result<Image<u8, 3>, RoiError> {
    let mut dst = Image::<u8, 3>::from_size_val(map.size(), 0)?;
    if map.size().area() == 0 {
        return Ok(dst);
    }

    let width = map.width();
    map.as_slice()
        .par_chunks_exact(width)
        .zip(dst.as_slice_mut().par_chunks_exact_mut(width * 3))
        .for_each(|(labels, row)| {
            labels
                .iter()
                .zip(row.chunks_exact_mut(3))
                .for_each(|(&id, pixel)| pixel.copy_from_slice(&id_color(id, options)));
        });

    Ok(dst)
}

fn id_color(id: i16, options: &ColorizeOptions) -> [u8; 3] {
    if id < 0 && !options.with_negative {
        return [0, 0, 0];
    }
    match options.mode {
        ColorMode::Binary if id > 0 => [255, 0, 0],
        ColorMode::Binary => [0, 0, 255],
        ColorMode::Label => {
            let hue = (id.unsigned_abs() as f64 * HUE_STEP) % 360.0;
            let value = if id > 0 { 1.0 } else { 0.5 };
            hue_to_rgb(hue, value)
        }
    }
}

/// Fully saturated color of the given hue in degrees and brightness in `[0, 1]`.
fn hue_to_rgb(hue: f64, value: f64) -> [u8; 3] {
    let h = hue / 60.0;
    let x = 1.0 - (h % 2.0 - 1.0).abs();
    let (r, g, b) = match h as u32 {
        0 => (1.0, x, 0.0),
        1 => (x, 1.0, 0.0),
        2 => (0.0, 1.0, x),
        3 => (0.0, x, 1.0),
        4 => (x, 0.0, 1.0),
        _ => (1.0, 0.0, x),
    };
    [r, g, b].map(|c: f64| (c * value * 255.0).round() as u8)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{label, LabelConfig};
    use raster_image::{ImageSize, Mask};

    fn stripes() -> Result<crate::RegionMapManager, Box<dyn std::error::Error>> {
        // three vertical foreground stripes separated by background
        let mask = Mask::from_fn(ImageSize { width: 5, height: 2 }, |x, _| x % 2 == 0);
        Ok(label(&mask, &LabelConfig::default())?)
    }

    fn pixel(image: &Image<u8, 3>, x: usize, y: usize) -> [u8; 3] {
        let start = (y * image.width() + x) * 3;
        [
            image.as_slice()[start],
            image.as_slice()[start + 1],
            image.as_slice()[start + 2],
        ]
    }

    #[test]
    fn test_colorize_binary() -> Result<(), Box<dyn std::error::Error>> {
        let manager = stripes()?;
        let map = manager.region_map();

        let image = colorize(map, &ColorizeOptions::default())?;
        assert_eq!(image.size(), map.size());
        assert_eq!(pixel(&image, 0, 0), [255, 0, 0]);
        assert_eq!(pixel(&image, 1, 1), [0, 0, 0]);

        let options = ColorizeOptions {
            mode: ColorMode::Binary,
            with_negative: true,
        };
        let image = colorize(map, &options)?;
        assert_eq!(pixel(&image, 1, 1), [0, 0, 255]);

        Ok(())
    }

    #[test]
    fn test_colorize_label() -> Result<(), Box<dyn std::error::Error>> {
        let manager = stripes()?;
        let map = manager.region_map();

        let options = ColorizeOptions::mode(ColorMode::Label);
        let image = colorize(map, &options)?;

        // the same id gets the same color, different ids different ones
        assert_eq!(pixel(&image, 0, 0), pixel(&image, 0, 1));
        assert_ne!(pixel(&image, 0, 0), pixel(&image, 2, 0));
        assert_ne!(pixel(&image, 2, 0), pixel(&image, 4, 0));
        assert_eq!(pixel(&image, 3, 0), [0, 0, 0]);

        // foreground is always drawn at full brightness
        for x in [0, 2, 4] {
            assert_eq!(pixel(&image, x, 0).iter().max(), Some(&255));
        }

        assert_eq!(colorize(map, &options)?, image);

        Ok(())
    }

    #[test]
    fn test_hue_to_rgb() {
        assert_eq!(hue_to_rgb(0.0, 1.0), [255, 0, 0]);
        assert_eq!(hue_to_rgb(120.0, 1.0), [0, 255, 0]);
        assert_eq!(hue_to_rgb(240.0, 1.0), [0, 0, 255]);
        assert_eq!(hue_to_rgb(60.0, 0.5), [128, 128, 0]);
    }
}
