use rayon::{
    iter::{IndexedParallelIterator, ParallelIterator},
    slice::ParallelSliceMut,
};

use crate::{Image, ImageError, ImageSize, Mask};

/// Apply a binary threshold to a single channel image.
///
/// A pixel is foreground when its value is strictly greater than `threshold`.
///
/// # Examples
///
/// ```
/// use raster_image::{Image, ImageSize};
/// use raster_image::ops::threshold_binary;
///
/// let data = vec![100u8, 200, 50, 150, 200, 250];
/// let image = Image::<_, 1>::new(ImageSize { width: 2, height: 3 }, data).unwrap();
///
/// let mask = threshold_binary(&image, 100);
/// assert_eq!(mask.as_slice(), &[0, 1, 0, 1, 1, 1]);
/// ```
pub fn threshold_binary<T>(src: &Image<T, 1>, threshold: T) -> Mask
where
    T: Copy + PartialOrd,
{
    let data = src
        .as_slice()
        .iter()
        .map(|&v| u8::from(v > threshold))
        .collect();

    Mask(Image::from_size_vec_unchecked(src.size(), data))
}

/// Crop an image to a specified region.
///
/// # Arguments
///
/// * `src` - The source image to crop.
/// * `x` - The x-coordinate of the top-left corner of the region to crop.
/// * `y` - The y-coordinate of the top-left corner of the region to crop.
/// * `size` - The size of the region to crop.
///
/// # Errors
///
/// Returns an error if the region does not fit inside the source image.
///
/// # Examples
///
/// ```rust
/// use raster_image::{Image, ImageSize};
/// use raster_image::ops::crop_image;
///
/// let image = Image::<_, 1>::new(ImageSize { width: 4, height: 4 }, vec![
///     0u8, 1, 2, 3,
///     4u8, 5, 6, 7,
///     8u8, 9, 10, 11,
///     12u8, 13, 14, 15
/// ]).unwrap();
///
/// let cropped = crop_image(&image, 1, 1, ImageSize { width: 2, height: 2 }).unwrap();
///
/// assert_eq!(cropped.as_slice(), &[5u8, 6, 9, 10]);
/// ```
pub fn crop_image<T, const C: usize>(
    src: &Image<T, C>,
    x: usize,
    y: usize,
    size: ImageSize,
) -> Result<Image<T, C>, ImageError>
where
    T: Copy + Default + Send + Sync,
{
    if x + size.width > src.width() || y + size.height > src.height() {
        return Err(ImageError::InvalidCropRegion(x, y, size.width, size.height));
    }

    let mut dst = Image::from_size_val(size, T::default())?;
    if size.area() == 0 {
        return Ok(dst);
    }

    let dst_cols = size.width;
    let src_cols = src.cols();

    dst.as_slice_mut()
        .par_chunks_exact_mut(dst_cols * C)
        .enumerate()
        .for_each(|(i, dst_row)| {
            // get the slice at the top left corner
            let offset = (y + i) * src_cols * C + x * C;
            let src_slice = &src.as_slice()[offset..offset + dst_cols * C];

            dst_row.copy_from_slice(src_slice);
        });

    Ok(dst)
}
