use raster_image::ImageSize;

/// Largest label magnitude a region map can hold, for either polarity.
pub const MAX_REGIONS: usize = i16::MAX as usize;

/// A dense grid of signed region labels.
///
/// Foreground pixels hold labels in `1..=positive_count` and background pixels
/// hold labels in `-negative_count..=-1`. Zero never appears in a finished map.
#[derive(Debug, Clone, PartialEq)]
pub struct RegionMap {
    size: ImageSize,
    labels: Vec<i16>,
    positive_count: usize,
    negative_count: usize,
}

impl RegionMap {
    pub(crate) fn new(
        size: ImageSize,
        labels: Vec<i16>,
        positive_count: usize,
        negative_count: usize,
    ) -> Self {
        debug_assert_eq!(labels.len(), size.area());
        Self {
            size,
            labels,
            positive_count,
            negative_count,
        }
    }

    /// Get the size of the map in pixels.
    pub fn size(&self) -> ImageSize {
        self.size
    }

    /// Get the width of the map in pixels.
    pub fn width(&self) -> usize {
        self.size.width
    }

    /// Get the height of the map in pixels.
    pub fn height(&self) -> usize {
        self.size.height
    }

    /// Number of foreground regions.
    pub fn positive_count(&self) -> usize {
        self.positive_count
    }

    /// Number of background regions.
    pub fn negative_count(&self) -> usize {
        self.negative_count
    }

    /// The label of pixel `(x, y)`, or `None` when out of bounds.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Option<i16> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        Some(self.labels[y * self.width() + x])
    }

    /// All labels in row-major order.
    pub fn as_slice(&self) -> &[i16] {
        &self.labels
    }

    /// Whether `id` names a region of this map.
    pub fn contains_id(&self, id: i16) -> bool {
        match id {
            0 => false,
            id if id > 0 => (id as usize) <= self.positive_count,
            id => (id.unsigned_abs() as usize) <= self.negative_count,
        }
    }
}
