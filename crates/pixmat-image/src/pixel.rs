/// A single 8-bit RGBA pixel.
///
/// Channels are stored as `u8`, so every value is always within `[0, 255]`.
/// Arithmetic is carried out in `f64` and brought back with
/// [`Pixel::from_f64_saturating`].
///
/// # Examples
///
/// ```
/// use pixmat_image::Pixel;
///
/// let pixel = Pixel::new(10, 20, 30, 255);
/// assert_eq!(pixel.to_array(), [10, 20, 30, 255]);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Pixel {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Pixel {
    /// Fully transparent black, the value of freshly allocated matrices.
    pub const TRANSPARENT: Pixel = Pixel::new(0, 0, 0, 0);

    /// Create a new pixel from its channels.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Channels in `[r, g, b, a]` order.
    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Build a pixel from floating point channels.
    ///
    /// Each channel is clamped to `[0, 255]` and truncated towards zero.
    /// `NaN` becomes 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use pixmat_image::Pixel;
    ///
    /// let pixel = Pixel::from_f64_saturating([-3.0, 12.9, 264.0, 255.0]);
    /// assert_eq!(pixel, Pixel::new(0, 12, 255, 255));
    /// ```
    pub fn from_f64_saturating(channels: [f64; 4]) -> Self {
        let [r, g, b, a] = channels.map(saturate_channel);
        Self { r, g, b, a }
    }
}

impl From<[u8; 4]> for Pixel {
    fn from(channels: [u8; 4]) -> Self {
        let [r, g, b, a] = channels;
        Self { r, g, b, a }
    }
}

impl From<Pixel> for [u8; 4] {
    fn from(pixel: Pixel) -> Self {
        pixel.to_array()
    }
}

// `as` truncates towards zero and maps NaN to 0
#[inline]
fn saturate_channel(value: f64) -> u8 {
    value.clamp(0.0, 255.0) as u8
}
