#![deny(missing_docs)]
//! Pixel matrix types for 8-bit RGBA images

/// pixel matrix representation shared by all transforms.
pub mod image;

/// single RGBA pixel type.
pub mod pixel;

/// Error types for the image module.
pub mod error;

pub use crate::error::ImageError;
pub use crate::image::{ImageSize, PixelMatrix};
pub use crate::pixel::Pixel;
