use crate::kernel::Anchor;

/// An error type for image construction.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ImageError {
    /// Error when one of the image sides is zero.
    #[error("Image size must be non-zero, got {0}x{1}")]
    ZeroSize(usize, usize),

    /// Error when the pixel data does not match the image size.
    #[error("Data length ({0}) does not match the image size ({1})")]
    InvalidDataLength(usize, usize),
}

/// An error type for kernel construction and convolution.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ConvolutionError {
    /// The kernel has a zero width or height.
    #[error("Invalid kernel size {width}x{height}")]
    InvalidKernel {
        /// Kernel width.
        width: usize,
        /// Kernel height.
        height: usize,
    },

    /// The anchor lies outside the kernel.
    #[error("Anchor {anchor} is outside the {width}x{height} kernel")]
    InvalidAnchor {
        /// The offending anchor.
        anchor: Anchor,
        /// Kernel width.
        width: usize,
        /// Kernel height.
        height: usize,
    },

    /// The kernel weights do not match the kernel size.
    #[error("Kernel data length ({0}) does not match the kernel size ({1})")]
    KernelDataMismatch(usize, usize),
}
