use crate::parallel;
use pixmat_image::{ImageError, Pixel, PixelMatrix};

/// Define the RGB weights for the grayscale conversion, in thousandths.
const RW: u32 = 299;
const GW: u32 = 587;
const BW: u32 = 114;
const W_SUM: u32 = RW + GW + BW;

/// Luminance of a pixel using the formula:
///
/// Y = floor(0.299 * R + 0.587 * G + 0.114 * B)
///
/// The sum is evaluated exactly in integer arithmetic, so a grey pixel
/// `(v, v, v)` always maps back to `v`.
pub fn luminance(pixel: &Pixel) -> u8 {
    let r = u32::from(pixel.r);
    let g = u32::from(pixel.g);
    let b = u32::from(pixel.b);
    // at most 255 * 1000 / 1000
    ((RW * r + GW * g + BW * b) / W_SUM) as u8
}

/// Convert an RGBA image to greyscale.
///
/// Every output pixel is `(Y, Y, Y, A)` where `Y` is the [`luminance`] of the
/// input pixel and `A` its alpha.
///
/// # Arguments
///
/// * `src` - The input RGBA image.
///
/// # Returns
///
/// A new greyscale image with the same size as `src`.
///
/// # Errors
///
/// Returns [`ImageError::EmptyImage`] if `src` has zero height.
///
/// # Example
///
/// ```
/// use pixmat_image::{Pixel, PixelMatrix};
/// use pixmat_imgproc::color::convert_to_greyscale;
///
/// let image = PixelMatrix::from_size_val([3, 3].into(), Pixel::new(100, 150, 200, 255));
///
/// let grey = convert_to_greyscale(&image).unwrap();
/// assert_eq!(grey.get(1, 1), Some(&Pixel::new(140, 140, 140, 255)));
/// ```
pub fn convert_to_greyscale(src: &PixelMatrix) -> Result<PixelMatrix, ImageError> {
    if src.height() == 0 {
        return Err(ImageError::EmptyImage);
    }

    let mut dst = PixelMatrix::zeros(src.size());

    // parallelize the greyscale conversion by rows
    parallel::par_iter_rows(src, &mut dst, |src_pixel, dst_pixel| {
        let y = luminance(src_pixel);
        *dst_pixel = Pixel::new(y, y, y, src_pixel.a);
    });

    Ok(dst)
}
