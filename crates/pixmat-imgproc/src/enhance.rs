use pixmat_image::{ImageError, Pixel, PixelMatrix};

use crate::parallel;

/// Adjust the contrast of an image.
///
/// Applies the linear map `g(u) = gain * u + offset` to the red, green and
/// blue channels:
///
/// dst(x,y,c) = clamp(gain * src(x,y,c) + offset, 0, 255)
///
/// The result is truncated to an integer and the alpha channel is copied
/// unchanged.
///
/// # Arguments
///
/// * `src` - The input image.
/// * `gain` - The multiplicative contrast factor `m`.
/// * `offset` - The additive brightness offset `b`.
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
/// use pixmat_imgproc::enhance::adjust_contrast;
///
/// let image = PixelMatrix::from_size_val([2, 2].into(), Pixel::new(200, 200, 200, 255));
///
/// let contrasted = adjust_contrast(&image, 1.2, 0.0).unwrap();
/// assert_eq!(contrasted.get(0, 0), Some(&Pixel::new(240, 240, 240, 255)));
/// ```
pub fn adjust_contrast(
    src: &PixelMatrix,
    gain: f64,
    offset: f64,
) -> Result<PixelMatrix, ImageError> {
    if src.height() == 0 {
        return Err(ImageError::EmptyImage);
    }

    let mut dst = PixelMatrix::zeros(src.size());

    let adjust = |v: u8| gain * f64::from(v) + offset;

    parallel::par_iter_rows(src, &mut dst, |src_pixel, dst_pixel| {
        *dst_pixel = Pixel::from_f64_saturating([
            adjust(src_pixel.r),
            adjust(src_pixel.g),
            adjust(src_pixel.b),
            f64::from(src_pixel.a),
        ]);
    });

    Ok(dst)
}

/// Adjust the luminosity of an image.
///
/// Adds `offset` to the red, green and blue channels:
///
/// dst(x,y,c) = clamp(src(x,y,c) + offset, 0, 255)
///
/// This is [`adjust_contrast`] with a gain of 1. The alpha channel is copied
/// unchanged.
///
/// # Arguments
///
/// * `src` - The input image.
/// * `offset` - The brightness offset to add to each channel.
///
/// # Returns
///
/// A new image with the same size as `src`.
///
/// # Errors
///
/// Returns [`ImageError::EmptyImage`] if `src` has zero height.
pub fn adjust_luminosity(src: &PixelMatrix, offset: f64) -> Result<PixelMatrix, ImageError> {
    adjust_contrast(src, 1.0, offset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    fn random_image(cols: usize, rows: usize) -> Result<PixelMatrix, ImageError> {
        let mut rng = rand::rng();
        let data = (0..cols * rows)
            .map(|_| Pixel::from(rng.random::<[u8; 4]>()))
            .collect();
        PixelMatrix::new([cols, rows].into(), data)
    }

    #[test]
    fn test_adjust_contrast() -> Result<(), ImageError> {
        let src = PixelMatrix::from_rows(vec![vec![
            Pixel::new(200, 200, 200, 255),
            Pixel::new(220, 220, 220, 255),
            Pixel::new(10, 100, 0, 7),
        ]])?;

        let dst = adjust_contrast(&src, 1.2, 0.0)?;

        assert_eq!(dst.get(0, 0), Some(&Pixel::new(240, 240, 240, 255)));
        // 264 is clamped
        assert_eq!(dst.get(1, 0), Some(&Pixel::new(255, 255, 255, 255)));
        assert_eq!(dst.get(2, 0), Some(&Pixel::new(12, 120, 0, 7)));

        Ok(())
    }

    #[test]
    fn test_adjust_contrast_offset_and_negative_gain() -> Result<(), ImageError> {
        let src = PixelMatrix::from_rows(vec![vec![
            Pixel::new(0, 50, 255, 128),
            Pixel::new(100, 100, 100, 0),
        ]])?;

        let dst = adjust_contrast(&src, 0.5, 20.0)?;
        assert_eq!(dst.get(0, 0), Some(&Pixel::new(20, 45, 147, 128)));
        assert_eq!(dst.get(1, 0), Some(&Pixel::new(70, 70, 70, 0)));

        // inverting gain clamps at zero
        let dst = adjust_contrast(&src, -1.0, 0.0)?;
        assert_eq!(dst.get(0, 0), Some(&Pixel::new(0, 0, 0, 128)));

        let dst = adjust_contrast(&src, -1.0, 255.0)?;
        assert_eq!(dst.get(0, 0), Some(&Pixel::new(255, 205, 0, 128)));

        Ok(())
    }

    #[test]
    fn test_adjust_contrast_random_is_valid() -> Result<(), ImageError> {
        let src = random_image(97, 61)?;

        for (gain, offset) in [(1.2, 0.0), (3.5, -40.0), (-2.0, 300.0), (0.0, 1e6)] {
            let dst = adjust_contrast(&src, gain, offset)?;
            assert_eq!(dst.size(), src.size());

            for (s, d) in src.as_slice().iter().zip(dst.as_slice()) {
                let expected = (gain * f64::from(s.r) + offset).clamp(0.0, 255.0) as u8;
                assert_eq!(d.r, expected);
                assert_eq!(d.a, s.a);
            }
        }

        Ok(())
    }

    #[test]
    fn test_adjust_luminosity() -> Result<(), ImageError> {
        let src = PixelMatrix::from_rows(vec![vec![
            Pixel::new(0, 100, 230, 50),
            Pixel::new(30, 60, 255, 255),
        ]])?;

        let brighter = adjust_luminosity(&src, 50.0)?;
        assert_eq!(brighter.get(0, 0), Some(&Pixel::new(50, 150, 255, 50)));
        assert_eq!(brighter.get(1, 0), Some(&Pixel::new(80, 110, 255, 255)));

        let darker = adjust_luminosity(&src, -40.0)?;
        assert_eq!(darker.get(0, 0), Some(&Pixel::new(0, 60, 190, 50)));
        assert_eq!(darker.get(1, 0), Some(&Pixel::new(0, 20, 215, 255)));

        Ok(())
    }

    #[test]
    fn test_adjust_luminosity_matches_unit_gain_contrast() -> Result<(), ImageError> {
        let src = random_image(33, 17)?;
        for offset in [-300.0, -12.5, 0.0, 50.0, 99.9] {
            assert_eq!(
                adjust_luminosity(&src, offset)?,
                adjust_contrast(&src, 1.0, offset)?
            );
        }
        Ok(())
    }

    #[test]
    fn test_adjust_empty() {
        let src = PixelMatrix::zeros([3, 0].into());
        assert_eq!(adjust_contrast(&src, 1.2, 0.0), Err(ImageError::EmptyImage));
        assert_eq!(adjust_luminosity(&src, 50.0), Err(ImageError::EmptyImage));
    }
}
