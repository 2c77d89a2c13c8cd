use crate::{error::ImageError, pixel::Pixel};

/// Image size in pixels
///
/// A struct to represent the size of an image in pixels.
///
/// # Examples
///
/// ```
/// use pixmat_image::ImageSize;
///
/// let image_size = ImageSize {
///   width: 10,
///   height: 20,
/// };
///
/// assert_eq!(image_size.width, 10);
/// assert_eq!(image_size.height, 20);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ImageSize {
    /// Width of the image in pixels
    pub width: usize,
    /// Height of the image in pixels
    pub height: usize,
}

impl ImageSize {
    /// Number of pixels covered by the size.
    pub fn area(&self) -> usize {
        self.width * self.height
    }
}

impl std::fmt::Display for ImageSize {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "ImageSize {{ width: {}, height: {} }}",
            self.width, self.height
        )
    }
}

impl From<[usize; 2]> for ImageSize {
    fn from(size: [usize; 2]) -> Self {
        ImageSize {
            width: size[0],
            height: size[1],
        }
    }
}

/// A rectangular grid of RGBA pixels.
///
/// Pixels are stored row-major in a single buffer of `width * height`
/// elements, so every row has the same length. All access goes through
/// `(x, y)` coordinates, where `x` is the column and `y` the row.
///
/// # Examples
///
/// ```
/// use pixmat_image::{Pixel, PixelMatrix, ImageSize};
///
/// let mut image = PixelMatrix::zeros(ImageSize { width: 3, height: 2 });
/// image.set(2, 1, Pixel::new(255, 0, 0, 255)).unwrap();
///
/// assert_eq!(image.get(2, 1), Some(&Pixel::new(255, 0, 0, 255)));
/// assert_eq!(image.get(3, 1), None);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelMatrix {
    size: ImageSize,
    data: Vec<Pixel>,
}

impl PixelMatrix {
    /// Create a new image from pixel data.
    ///
    /// # Arguments
    ///
    /// * `size` - The size of the image in pixels.
    /// * `data` - The pixels of the image in row-major order.
    ///
    /// # Errors
    ///
    /// If the length of the pixel data does not match the image size, an error is returned.
    pub fn new(size: ImageSize, data: Vec<Pixel>) -> Result<Self, ImageError> {
        if data.len() != size.area() {
            return Err(ImageError::InvalidDataLength(data.len(), size.area()));
        }
        Ok(Self { size, data })
    }

    /// Create a new image with every pixel set to `val`.
    pub fn from_size_val(size: ImageSize, val: Pixel) -> Self {
        Self {
            size,
            data: vec![val; size.area()],
        }
    }

    /// Create a new image filled with transparent black pixels.
    pub fn zeros(size: ImageSize) -> Self {
        Self::from_size_val(size, Pixel::TRANSPARENT)
    }

    /// Create an image from nested rows, indexed as `rows[y][x]`.
    ///
    /// An empty list of rows gives a `0 x 0` image.
    ///
    /// # Errors
    ///
    /// Returns [`ImageError::JaggedRows`] if any row differs in length from the first one.
    ///
    /// # Examples
    ///
    /// ```
    /// use pixmat_image::{Pixel, PixelMatrix};
    ///
    /// let red = Pixel::new(255, 0, 0, 255);
    /// let image = PixelMatrix::from_rows(vec![vec![red; 4]; 2]).unwrap();
    ///
    /// assert_eq!(image.width(), 4);
    /// assert_eq!(image.height(), 2);
    /// ```
    pub fn from_rows(rows: Vec<Vec<Pixel>>) -> Result<Self, ImageError> {
        let width = rows.first().map_or(0, Vec::len);
        let height = rows.len();

        let mut data = Vec::with_capacity(width * height);
        for (y, row) in rows.into_iter().enumerate() {
            if row.len() != width {
                return Err(ImageError::JaggedRows {
                    row: y,
                    expected: width,
                    found: row.len(),
                });
            }
            data.extend(row);
        }

        Self::new(ImageSize { width, height }, data)
    }

    /// Create an image from interleaved 8-bit RGBA bytes in row-major order.
    ///
    /// # Errors
    ///
    /// If `buf` does not hold exactly `4 * width * height` bytes, an error is returned.
    pub fn from_raw_rgba8(size: ImageSize, buf: Vec<u8>) -> Result<Self, ImageError> {
        if buf.len() != size.area() * 4 {
            return Err(ImageError::InvalidDataLength(buf.len(), size.area() * 4));
        }

        let data = buf
            .chunks_exact(4)
            .map(|c| Pixel::new(c[0], c[1], c[2], c[3]))
            .collect();

        Ok(Self { size, data })
    }

    /// Interleaved 8-bit RGBA bytes in row-major order.
    pub fn to_raw_rgba8(&self) -> Vec<u8> {
        self.data.iter().flat_map(|p| p.to_array()).collect()
    }

    /// Get the size of the image in pixels.
    pub fn size(&self) -> ImageSize {
        self.size
    }

    /// Get the width of the image in pixels.
    pub fn width(&self) -> usize {
        self.size.width
    }

    /// Get the height of the image in pixels.
    pub fn height(&self) -> usize {
        self.size.height
    }

    /// Whether the image holds no pixels at all.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The pixels in row-major order.
    pub fn as_slice(&self) -> &[Pixel] {
        &self.data
    }

    /// The pixels in row-major order, mutably.
    pub fn as_slice_mut(&mut self) -> &mut [Pixel] {
        &mut self.data
    }

    /// Iterate over the rows of the image, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Pixel]> {
        // chunks_exact panics on zero, a zero-width image has no pixels anyway
        self.data.chunks_exact(self.size.width.max(1))
    }

    /// Get the pixel at column `x` and row `y`.
    ///
    /// Returns `None` if the coordinates are out of bounds.
    pub fn get(&self, x: usize, y: usize) -> Option<&Pixel> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        self.data.get(y * self.width() + x)
    }

    /// Set the pixel at column `x` and row `y`.
    ///
    /// # Errors
    ///
    /// Returns [`ImageError::PixelIndexOutOfBounds`] if the coordinates are out of bounds.
    pub fn set(&mut self, x: usize, y: usize, pixel: Pixel) -> Result<(), ImageError> {
        if x >= self.width() || y >= self.height() {
            return Err(ImageError::PixelIndexOutOfBounds(
                x,
                y,
                self.width(),
                self.height(),
            ));
        }
        let width = self.width();
        self.data[y * width + x] = pixel;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    fn random_image(size: ImageSize) -> PixelMatrix {
        let mut rng = rand::rng();
        let data = (0..size.area())
            .map(|_| Pixel::from(rng.random::<[u8; 4]>()))
            .collect();
        PixelMatrix { size, data }
    }

    #[test]
    fn image_size() {
        let image_size = ImageSize {
            width: 10,
            height: 20,
        };
        assert_eq!(image_size.width, 10);
        assert_eq!(image_size.height, 20);
        assert_eq!(image_size.area(), 200);
        assert_eq!(ImageSize::from([10, 20]), image_size);
        assert_eq!(image_size.to_string(), "ImageSize { width: 10, height: 20 }");
    }

    #[test]
    fn image_smoke() -> Result<(), ImageError> {
        let image = PixelMatrix::new(
            ImageSize {
                width: 10,
                height: 20,
            },
            vec![Pixel::default(); 10 * 20],
        )?;
        assert_eq!(image.size().width, 10);
        assert_eq!(image.size().height, 20);
        assert_eq!(image.as_slice().len(), 200);
        assert!(!image.is_empty());

        Ok(())
    }

    #[test]
    fn image_invalid_length() {
        let res = PixelMatrix::new([2, 2].into(), vec![Pixel::default(); 3]);
        assert_eq!(res, Err(ImageError::InvalidDataLength(3, 4)));
    }

    #[test]
    fn image_from_rows() -> Result<(), ImageError> {
        let a = Pixel::new(1, 2, 3, 4);
        let b = Pixel::new(5, 6, 7, 8);
        let image = PixelMatrix::from_rows(vec![vec![a, b, a], vec![b, a, b]])?;

        assert_eq!(image.size(), [3, 2].into());
        assert_eq!(image.get(1, 0), Some(&b));
        assert_eq!(image.get(1, 1), Some(&a));
        assert_eq!(image.get(2, 1), Some(&b));

        let rows = image.rows().collect::<Vec<_>>();
        assert_eq!(rows, vec![&[a, b, a][..], &[b, a, b][..]]);

        Ok(())
    }

    #[test]
    fn image_from_rows_empty() -> Result<(), ImageError> {
        let image = PixelMatrix::from_rows(vec![])?;
        assert_eq!(image.size(), ImageSize::default());
        assert!(image.is_empty());
        assert_eq!(image.rows().count(), 0);
        Ok(())
    }

    #[test]
    fn image_from_rows_jagged() {
        let p = Pixel::default();
        let res = PixelMatrix::from_rows(vec![vec![p; 3], vec![p; 3], vec![p; 2]]);
        assert_eq!(
            res,
            Err(ImageError::JaggedRows {
                row: 2,
                expected: 3,
                found: 2,
            })
        );
    }

    #[test]
    fn image_get_set() -> Result<(), ImageError> {
        let mut image = PixelMatrix::zeros([4, 3].into());
        let red = Pixel::new(255, 0, 0, 255);

        image.set(3, 0, red)?;
        assert_eq!(image.get(3, 0), Some(&red));
        // row-major: (x=3, y=0) is the fourth element
        assert_eq!(image.as_slice()[3], red);
        assert_eq!(image.get(0, 3), None);

        assert_eq!(
            image.set(4, 0, red),
            Err(ImageError::PixelIndexOutOfBounds(4, 0, 4, 3))
        );
        assert_eq!(
            image.set(0, 3, red),
            Err(ImageError::PixelIndexOutOfBounds(0, 3, 4, 3))
        );

        Ok(())
    }

    #[test]
    fn image_raw_rgba8() -> Result<(), ImageError> {
        let buf = vec![0u8, 1, 2, 3, 4, 5, 6, 7];
        let image = PixelMatrix::from_raw_rgba8([2, 1].into(), buf.clone())?;
        assert_eq!(image.get(1, 0), Some(&Pixel::new(4, 5, 6, 7)));
        assert_eq!(image.to_raw_rgba8(), buf);

        let res = PixelMatrix::from_raw_rgba8([2, 1].into(), vec![0u8; 7]);
        assert_eq!(res, Err(ImageError::InvalidDataLength(7, 8)));

        Ok(())
    }

    #[test]
    fn image_raw_rgba8_random() -> Result<(), ImageError> {
        let image = random_image([37, 23].into());
        let back = PixelMatrix::from_raw_rgba8(image.size(), image.to_raw_rgba8())?;
        assert_eq!(back, image);
        Ok(())
    }

    #[test]
    fn image_zero_width_rows() {
        let image = PixelMatrix::zeros([0, 5].into());
        assert!(image.is_empty());
        assert_eq!(image.height(), 5);
        assert_eq!(image.rows().count(), 0);
    }
}
