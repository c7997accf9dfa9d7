#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// grayscale image representation.
pub mod image;

/// convolution kernels and anchors.
pub mod kernel;

/// out-of-bounds sampling strategies.
pub mod border;

/// the 2D convolution engine.
pub mod convolution;

/// Error types for the core module.
pub mod error;

pub use crate::border::{BorderMode, BorderPolicy, BorderSample, ParseBorderModeError};
pub use crate::convolution::convolve;
pub use crate::error::{ConvolutionError, ImageError};
pub use crate::image::{GrayImage, ImageSize};
pub use crate::kernel::{Anchor, Kernel};
