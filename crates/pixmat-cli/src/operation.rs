use std::{fmt, str::FromStr};

use pixmat::image::{ImageError, PixelMatrix};
use pixmat::imgproc::{color, enhance, filter};

use crate::error::CliError;

/// The transform selected by the user.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    /// Convert to greyscale.
    Greyscale,
    /// Gaussian blur.
    GaussianBlur,
    /// Linear contrast adjustment.
    Contrast,
    /// Brightness offset.
    Luminosity,
}

impl FromStr for Operation {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "1" | "greyscale" | "grayscale" => Ok(Self::Greyscale),
            "2" | "blur" | "gaussian" | "gaussian-blur" => Ok(Self::GaussianBlur),
            "3" | "contrast" => Ok(Self::Contrast),
            "4" | "luminosity" | "brightness" => Ok(Self::Luminosity),
            _ => Err(CliError::InvalidOperation(s.trim().to_string())),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Greyscale => "greyscale",
            Self::GaussianBlur => "gaussian blur",
            Self::Contrast => "contrast",
            Self::Luminosity => "luminosity",
        };
        write!(f, "{name}")
    }
}

/// An operation together with its parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Transform {
    /// See [`color::convert_to_greyscale`].
    Greyscale,
    /// See [`filter::gaussian_filter`].
    GaussianBlur {
        /// Side length of the kernel.
        kernel_size: usize,
        /// Standard deviation of the kernel.
        sigma: f64,
    },
    /// See [`enhance::adjust_contrast`].
    Contrast {
        /// Multiplicative factor `m`.
        gain: f64,
        /// Additive offset `b`.
        offset: f64,
    },
    /// See [`enhance::adjust_luminosity`].
    Luminosity {
        /// Additive offset `b`.
        offset: f64,
    },
}

impl Transform {
    /// Run the transform on `src`, returning a new image.
    pub fn apply(&self, src: &PixelMatrix) -> Result<PixelMatrix, ImageError> {
        match *self {
            Self::Greyscale => color::convert_to_greyscale(src),
            Self::GaussianBlur { kernel_size, sigma } => {
                filter::gaussian_filter(src, kernel_size, sigma)
            }
            Self::Contrast { gain, offset } => enhance::adjust_contrast(src, gain, offset),
            Self::Luminosity { offset } => enhance::adjust_luminosity(src, offset),
        }
    }
}
