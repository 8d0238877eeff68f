#![deny(missing_docs)]
//! Connected component labeling of binary masks and region shape descriptors

/// Error types for the region module.
pub mod error;

/// border tracing of regions.
pub mod border;

/// id to color visualization of region maps.
pub mod colorize;

/// geometric kernels on point sets.
pub mod geometry;

/// flood fill labeling of binary masks.
pub mod label;

/// region lookup and metadata.
pub mod manager;

/// region views over a labeled map.
pub mod region;

/// the labeled grid.
pub mod region_map;

/// intensity sampling and cropping by region.
pub mod sample;

pub mod shape;

mod queue;

pub use crate::border::BorderOptions;
pub use crate::colorize::{colorize, ColorMode, ColorizeOptions};
pub use crate::error::{CapacityKind, RoiError};
pub use crate::label::{label, LabelConfig};
pub use crate::manager::{BoundingBox, Polarity, RegionFilter, RegionMapManager};
pub use crate::region::Region;
pub use crate::region_map::{RegionMap, MAX_REGIONS};
pub use crate::sample::{crop_region, mean_intensity, sample_stack, RegionSeries};
