use pixmat_image::ImageError;

/// A square convolution kernel with an odd side length.
///
/// Weights are stored row-major, `weights[ky * size + kx]`.
#[derive(Clone, Debug, PartialEq)]
pub struct Kernel {
    size: usize,
    weights: Vec<f64>,
}

impl Kernel {
    /// Create a kernel from its weights.
    ///
    /// # Arguments
    ///
    /// * `size` - The side length of the kernel. Must be odd.
    /// * `weights` - `size * size` weights in row-major order.
    ///
    /// # Errors
    ///
    /// Returns [`ImageError::InvalidKernelSize`] if `size` is zero, even or
    /// too large for `size * size` to fit in a `usize`, and
    /// [`ImageError::InvalidKernelShape`] if the number of weights is wrong.
    pub fn new(size: usize, weights: Vec<f64>) -> Result<Self, ImageError> {
        let area = kernel_area(size)?;
        if weights.len() != area {
            return Err(ImageError::InvalidKernelShape(size, area));
        }
        Ok(Self { size, weights })
    }

    /// The side length of the kernel.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Half the side length, rounded down.
    ///
    /// This is the width of the border a convolution leaves untouched.
    pub fn half_size(&self) -> usize {
        self.size / 2
    }

    /// Weight at column `kx` and row `ky`.
    ///
    /// PRECONDITION: `kx` and `ky` are smaller than [`Kernel::size`].
    #[inline]
    pub fn get(&self, kx: usize, ky: usize) -> f64 {
        self.weights[ky * self.size + kx]
    }

    /// The weights in row-major order.
    pub fn as_slice(&self) -> &[f64] {
        &self.weights
    }

    /// Sum of all the weights.
    pub fn sum(&self) -> f64 {
        self.weights.iter().sum()
    }
}

// number of weights of a kernel of side `size`
fn kernel_area(size: usize) -> Result<usize, ImageError> {
    if size == 0 || size % 2 == 0 {
        return Err(ImageError::InvalidKernelSize(size));
    }
    size.checked_mul(size).ok_or(ImageError::InvalidKernelSize(size))
}

/// Check the parameters of [`gaussian_kernel_2d`] without building the kernel.
///
/// Returns the number of weights the kernel would have.
pub(crate) fn validate_gaussian_params(
    kernel_size: usize,
    sigma: f64,
) -> Result<usize, ImageError> {
    let area = kernel_area(kernel_size)?;

    if !(sigma > 0.0 && (2.0 * sigma * sigma).is_normal()) {
        return Err(ImageError::InvalidSigma(sigma));
    }

    Ok(area)
}

/// Create a normalized 2D gaussian kernel.
///
/// Every entry is `exp(-(dx^2 + dy^2) / (2 * sigma^2))` at its offset
/// `(dx, dy)` from the center, divided by the sum of all entries. This equals
/// the normalized gaussian density, the `1 / (2 * pi * sigma^2)` factor
/// cancels out. The center entry is 1 before normalization, so the sum is
/// never zero and very large sigmas tend to a box filter.
///
/// # Arguments
///
/// * `kernel_size` - The side length of the kernel. Must be odd.
/// * `sigma` - The standard deviation of the gaussian.
///
/// # Errors
///
/// Returns [`ImageError::InvalidKernelSize`] for a zero, even or overflowing
/// size and [`ImageError::InvalidSigma`] when `sigma` is not positive or so extreme
/// that `2 * sigma^2` is not a normal float.
///
/// # Example
///
/// ```
/// use pixmat_imgproc::filter::kernels::gaussian_kernel_2d;
///
/// let kernel = gaussian_kernel_2d(5, 1.5).unwrap();
///
/// assert_eq!(kernel.size(), 5);
/// assert!((kernel.sum() - 1.0).abs() < 1e-9);
/// ```
pub fn gaussian_kernel_2d(kernel_size: usize, sigma: f64) -> Result<Kernel, ImageError> {
    let area = validate_gaussian_params(kernel_size, sigma)?;

    let two_sigma_sq = 2.0 * sigma * sigma;
    let half = (kernel_size / 2) as f64;

    let mut weights = Vec::with_capacity(area);
    for ky in 0..kernel_size {
        let dy = ky as f64 - half;
        for kx in 0..kernel_size {
            let dx = kx as f64 - half;
            weights.push((-(dx * dx + dy * dy) / two_sigma_sq).exp());
        }
    }

    // normalize the kernel
    let norm = weights.iter().sum::<f64>();
    weights.iter_mut().for_each(|w| *w /= norm);

    Kernel::new(kernel_size, weights)
}
