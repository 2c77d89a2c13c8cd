use rayon::prelude::*;

use pixmat_image::{Pixel, PixelMatrix};

/// Apply a function to each pixel in the image in parallel.
///
/// The work is split by rows; each call receives a source pixel and the
/// destination pixel at the same coordinates.
///
/// PRECONDITION: `src` and `dst` must have the same size.
pub fn par_iter_rows(
    src: &PixelMatrix,
    dst: &mut PixelMatrix,
    f: impl Fn(&Pixel, &mut Pixel) + Send + Sync,
) {
    debug_assert_eq!(src.size(), dst.size());

    // a zero-width image has no pixels, the chunk size only has to be non-zero
    let cols = src.width().max(1);

    src.as_slice()
        .par_chunks_exact(cols)
        .zip(dst.as_slice_mut().par_chunks_exact_mut(cols))
        .for_each(|(src_row, dst_row)| {
            src_row
                .iter()
                .zip(dst_row.iter_mut())
                .for_each(|(src_pixel, dst_pixel)| {
                    f(src_pixel, dst_pixel);
                });
        });
}

/// Apply a function to each row of the image in parallel.
///
/// The function receives the row index `y` and the mutable row.
pub fn par_iter_rows_indexed(dst: &mut PixelMatrix, f: impl Fn(usize, &mut [Pixel]) + Send + Sync) {
    let cols = dst.width().max(1);

    dst.as_slice_mut()
        .par_chunks_exact_mut(cols)
        .enumerate()
        .for_each(|(y, row)| f(y, row));
}
