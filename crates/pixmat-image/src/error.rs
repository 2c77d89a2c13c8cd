/// An error type for the image module.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ImageError {
    /// Error when the pixel data length does not match the image size.
    #[error("Data length ({0}) does not match the image size ({1})")]
    InvalidDataLength(usize, usize),

    /// Error when the rows of a nested grid have different lengths.
    #[error("Row {row} has {found} pixels, expected {expected}")]
    JaggedRows {
        /// Index of the offending row.
        row: usize,
        /// Length of the first row.
        expected: usize,
        /// Length of the offending row.
        found: usize,
    },

    /// Error when the pixel coordinates are out of bounds.
    #[error("Pixel index ({0}, {1}) is out of bounds ({2}, {3})")]
    PixelIndexOutOfBounds(usize, usize, usize, usize),

    /// Error when a transform receives an image with zero height.
    #[error("Image is empty")]
    EmptyImage,

    /// Error when the kernel size is zero or even.
    #[error("Kernel size must be a positive odd number, got {0}")]
    InvalidKernelSize(usize),

    /// Error when the kernel weights do not fill a square of the given size.
    #[error("Kernel of size {0} needs {1} weights")]
    InvalidKernelShape(usize, usize),

    /// Error when the gaussian sigma is not a positive finite number.
    #[error("Sigma must be positive and finite, got {0}")]
    InvalidSigma(f64),
}
