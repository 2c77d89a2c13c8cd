use pixmat_image::{ImageError, PixelMatrix};

use super::{filter2d, kernels};

/// Blur an image using a gaussian filter
///
/// The kernel is a full 2D gaussian of side `kernel_size`. Pixels closer than
/// `kernel_size / 2` to any edge are left as `(0, 0, 0, 0)`, see [`filter2d`].
///
/// # Arguments
///
/// * `src` - The source image.
/// * `kernel_size` - The side length of the kernel. Must be odd.
/// * `sigma` - The sigma of the gaussian kernel.
///
/// # Returns
///
/// A new blurred image with the same size as `src`.
///
/// # Errors
///
/// Returns [`ImageError::EmptyImage`] if `src` has zero height, otherwise any
/// error of [`kernels::gaussian_kernel_2d`].
///
/// # Example
///
/// ```
/// use pixmat_image::{Pixel, PixelMatrix};
/// use pixmat_imgproc::filter::gaussian_filter;
///
/// let src = PixelMatrix::from_size_val([16, 9].into(), Pixel::new(10, 20, 30, 255));
/// let blurred = gaussian_filter(&src, 7, 10.5).unwrap();
///
/// assert_eq!(blurred.size(), src.size());
/// assert_eq!(blurred.get(2, 2), Some(&Pixel::TRANSPARENT));
/// ```
pub fn gaussian_filter(
    src: &PixelMatrix,
    kernel_size: usize,
    sigma: f64,
) -> Result<PixelMatrix, ImageError> {
    if src.height() == 0 {
        return Err(ImageError::EmptyImage);
    }

    kernels::validate_gaussian_params(kernel_size, sigma)?;

    // no pixel has a full neighborhood, the result is all border
    if kernel_size > src.width() || kernel_size > src.height() {
        log::debug!(
            "gaussian filter: kernel {} does not fit in {}",
            kernel_size,
            src.size()
        );
        return Ok(PixelMatrix::zeros(src.size()));
    }

    let kernel = kernels::gaussian_kernel_2d(kernel_size, sigma)?;
    log::debug!(
        "gaussian filter: {} with kernel {}x{} sigma {}",
        src.size(),
        kernel_size,
        kernel_size,
        sigma
    );

    filter2d(src, &kernel)
}
