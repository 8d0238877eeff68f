/// Which fixed budget was exhausted during labeling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapacityKind {
    /// More regions of one polarity than the label type can hold.
    Regions,
    /// The flood fill frontier outgrew its ring buffer of the given capacity.
    Frontier(usize),
}

impl std::fmt::Display for CapacityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            CapacityKind::Regions => write!(f, "too many regions of interest"),
            CapacityKind::Frontier(capacity) => {
                write!(f, "flood fill frontier exceeded its capacity of {capacity}")
            }
        }
    }
}

/// Errors that can occur when labeling a mask or querying its regions.
#[derive(Debug, thiserror::Error, Clone, PartialEq)]
pub enum RoiError {
    /// Error related to image.
    #[error(transparent)]
    ImageError(#[from] raster_image::ImageError),

    /// A fixed labeling budget was exceeded.
    #[error("Capacity exceeded: {0}")]
    CapacityExceeded(CapacityKind),

    /// The reserved id `0` was used to look up a region.
    #[error("Region id 0 is reserved and never assigned")]
    InvalidId,

    /// No region carries the requested id.
    #[error("No region with id {0}")]
    NotFound(i16),

    /// A filter option could not be understood.
    #[error("Invalid region filter option: {0}")]
    InvalidOptions(String),

    /// An image does not cover the same pixels as the region map.
    #[error("Image size {0} does not match the region map size {1}")]
    ImageSizeMismatch(raster_image::ImageSize, raster_image::ImageSize),
}
