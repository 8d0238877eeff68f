#![deny(missing_docs)]
//! Image and binary mask types for raster region analysis

/// Error types for the image module.
pub mod error;

/// image representation for computer vision purposes.
pub mod image;

/// binary bitmap representation.
pub mod mask;

/// basic image operations.
pub mod ops;

pub use crate::error::ImageError;
pub use crate::image::{Image, ImageSize};
pub use crate::mask::Mask;
