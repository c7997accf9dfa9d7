use edgeconv_core::ConvolutionError;

/// An error type for the filter module.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum FilterError {
    /// The requested filter is not in the registry.
    #[error("Unknown filter: {0}")]
    UnknownFilter(String),

    /// The convolution engine rejected the kernel or anchor.
    #[error(transparent)]
    Convolution(#[from] ConvolutionError),
}
