use crate::{
    error::ImageError,
    image::{Image, ImageSize},
};

/// A binary bitmap.
///
/// Each pixel is stored as one byte holding either `0` (background) or `1`
/// (foreground).
#[derive(Clone, Debug, PartialEq)]
pub struct Mask(pub(crate) Image<u8, 1>);

impl Mask {
    /// Create a new mask from pixel data.
    ///
    /// Any nonzero byte is treated as foreground.
    ///
    /// # Examples
    ///
    /// ```
    /// use raster_image::{ImageSize, Mask};
    ///
    /// let mask = Mask::new(ImageSize { width: 2, height: 2 }, vec![0, 255, 1, 0]).unwrap();
    ///
    /// assert!(mask.get(1, 0));
    /// assert!(!mask.get(1, 1));
    /// assert_eq!(mask.count_ones(), 2);
    /// ```
    pub fn new(size: ImageSize, data: Vec<u8>) -> Result<Self, ImageError> {
        let data = data.into_iter().map(|v| u8::from(v != 0)).collect();
        Ok(Self(Image::new(size, data)?))
    }

    /// Create a mask with every pixel set to `val`.
    pub fn from_size_val(size: ImageSize, val: bool) -> Self {
        Self(Image::from_size_vec_unchecked(
            size,
            vec![u8::from(val); size.area()],
        ))
    }

    /// Create a mask by evaluating `f(x, y)` at every pixel.
    ///
    /// # Examples
    ///
    /// ```
    /// use raster_image::{ImageSize, Mask};
    ///
    /// let mask = Mask::from_fn(ImageSize { width: 3, height: 3 }, |x, y| x == y);
    /// assert_eq!(mask.count_ones(), 3);
    /// ```
    pub fn from_fn<F>(size: ImageSize, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> bool,
    {
        let mut data = Vec::with_capacity(size.area());
        for y in 0..size.height {
            for x in 0..size.width {
                data.push(u8::from(f(x, y)));
            }
        }
        Self(Image::from_size_vec_unchecked(size, data))
    }

    /// Get the size of the mask in pixels.
    pub fn size(&self) -> ImageSize {
        self.0.size()
    }

    /// Get the width of the mask in pixels.
    pub fn width(&self) -> usize {
        self.0.width()
    }

    /// Get the height of the mask in pixels.
    pub fn height(&self) -> usize {
        self.0.height()
    }

    /// Read the bit at `(x, y)`. Out of bounds coordinates read as background.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> bool {
        x < self.width() && y < self.height() && self.0.as_slice()[y * self.width() + x] != 0
    }

    /// Read the bit at a linear row-major index.
    #[inline]
    pub fn get_index(&self, index: usize) -> bool {
        self.0.as_slice()[index] != 0
    }

    /// Write the bit at `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns an error when the coordinate falls outside the mask.
    pub fn set(&mut self, x: usize, y: usize, val: bool) -> Result<(), ImageError> {
        self.0.set_pixel(x, y, [u8::from(val)])
    }

    /// Number of foreground pixels.
    pub fn count_ones(&self) -> usize {
        self.0.as_slice().iter().filter(|&&v| v != 0).count()
    }

    /// The underlying 0/1 bytes in row-major order.
    pub fn as_slice(&self) -> &[u8] {
        self.0.as_slice()
    }

    /// Return a copy with every bit flipped.
    pub fn invert(&self) -> Self {
        let data = self.0.as_slice().iter().map(|&v| v ^ 1).collect();
        Self(Image::from_size_vec_unchecked(self.size(), data))
    }
}

impl From<Mask> for Image<u8, 1> {
    fn from(mask: Mask) -> Self {
        mask.0
    }
}
