#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Error types for I/O operations.
///
/// Defines [`IoError`] variants for file access, the PNG signature check and
/// encoding/decoding failures.
pub mod error;

/// PNG image encoding and decoding.
///
/// Read and write PNG images as 8-bit RGBA pixel matrices, from memory or
/// from files. See [`png::read_image_png_rgba8`].
pub mod png;

pub use crate::error::IoError;
