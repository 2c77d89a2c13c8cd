//! Filter operations
//!
//! This module provides the kernel generator and the convolution engine.

/// Filter kernels
pub mod kernels;
pub use kernels::Kernel;

/// Convolution of a pixel matrix with a square kernel
mod convolution;
pub use convolution::*;

/// Filter operations
mod ops;
pub use ops::*;
