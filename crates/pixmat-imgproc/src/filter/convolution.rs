use pixmat_image::{ImageError, Pixel, PixelMatrix};

use super::kernels::Kernel;
use crate::parallel;

/// Convolve a single interior pixel with the kernel.
///
/// The kernel is traversed in reverse relative to the neighborhood, i.e.
/// weight `(kx, ky)` multiplies the pixel at `(x + half - kx, y + half - ky)`.
///
/// PRECONDITION: the whole neighborhood lies inside `src`.
#[inline]
fn convolve_pixel(src: &PixelMatrix, kernel: &Kernel, x: usize, y: usize) -> Pixel {
    let size = kernel.size();
    let half = kernel.half_size();
    let cols = src.width();
    let data = src.as_slice();

    let mut sum = [0.0f64; 4];
    for ky in 0..size {
        let row_offset = (y + half - ky) * cols;
        for kx in 0..size {
            let pixel = data[row_offset + x + half - kx];
            let weight = kernel.get(kx, ky);
            for (acc, channel) in sum.iter_mut().zip(pixel.to_array()) {
                *acc += f64::from(channel) * weight;
            }
        }
    }

    Pixel::from_f64_saturating(sum)
}

fn is_interior(src: &PixelMatrix, half: usize, x: usize, y: usize) -> bool {
    x >= half && y >= half && x + half < src.width() && y + half < src.height()
}

/// Compute the convolution of `src` with `kernel` at a single pixel.
///
/// Each channel is accumulated in `f64`, then clamped to `[0, 255]` and
/// truncated.
///
/// # Arguments
///
/// * `src` - The source image.
/// * `kernel` - The convolution kernel.
/// * `x` - The column of the pixel.
/// * `y` - The row of the pixel.
///
/// # Errors
///
/// Returns [`ImageError::PixelIndexOutOfBounds`] if the kernel centered at
/// `(x, y)` does not fit inside the image.
pub fn apply_kernel(
    src: &PixelMatrix,
    kernel: &Kernel,
    x: usize,
    y: usize,
) -> Result<Pixel, ImageError> {
    if !is_interior(src, kernel.half_size(), x, y) {
        return Err(ImageError::PixelIndexOutOfBounds(
            x,
            y,
            src.width(),
            src.height(),
        ));
    }
    Ok(convolve_pixel(src, kernel, x, y))
}

/// Convolve an image with a square kernel.
///
/// Only pixels whose whole neighborhood lies inside the image are computed.
/// The border of width `kernel.half_size()` keeps the value `(0, 0, 0, 0)`;
/// no clamping, wrapping or reflection of the edges is performed. A kernel
/// larger than the image yields an image that is entirely border.
///
/// # Arguments
///
/// * `src` - The source image.
/// * `kernel` - The convolution kernel.
///
/// # Returns
///
/// A new image with the same size as `src`.
///
/// # Errors
///
/// Returns [`ImageError::EmptyImage`] if `src` has zero height.
///
/// # Example
///
/// ```
/// use pixmat_image::{Pixel, PixelMatrix};
/// use pixmat_imgproc::filter::{filter2d, Kernel};
///
/// let src = PixelMatrix::from_size_val([4, 4].into(), Pixel::new(8, 8, 8, 8));
///
/// let mut weights = vec![0.0; 9];
/// weights[4] = 1.0;
/// let identity = Kernel::new(3, weights).unwrap();
///
/// let dst = filter2d(&src, &identity).unwrap();
/// assert_eq!(dst.get(0, 0), Some(&Pixel::TRANSPARENT));
/// assert_eq!(dst.get(1, 1), Some(&Pixel::new(8, 8, 8, 8)));
/// ```
pub fn filter2d(src: &PixelMatrix, kernel: &Kernel) -> Result<PixelMatrix, ImageError> {
    if src.height() == 0 {
        return Err(ImageError::EmptyImage);
    }

    let half = kernel.half_size();
    let (cols, rows) = (src.width(), src.height());

    let mut dst = PixelMatrix::zeros(src.size());

    parallel::par_iter_rows_indexed(&mut dst, |y, dst_row| {
        if y < half || y + half >= rows {
            return;
        }
        for x in half..cols.saturating_sub(half) {
            dst_row[x] = convolve_pixel(src, kernel, x, y);
        }
    });

    Ok(dst)
}
