use crate::error::ConvolutionError;

/// The kernel cell aligned with the output pixel being computed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Anchor {
    /// Column inside the kernel.
    pub x: usize,
    /// Row inside the kernel.
    pub y: usize,
}

impl Anchor {
    /// Create a new anchor at column `x` and row `y`.
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

impl From<(usize, usize)> for Anchor {
    fn from((x, y): (usize, usize)) -> Self {
        Self { x, y }
    }
}

impl std::fmt::Display for Anchor {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A 2D grid of real valued weights.
///
/// Weights are stored row-major and are never modified after construction,
/// so a kernel can be shared by reference between any number of concurrent
/// convolutions.
///
/// # Examples
///
/// ```
/// use edgeconv_core::{Anchor, Kernel};
///
/// let kernel = Kernel::from_rows([
///     [-1.0, 0.0, 1.0],
///     [-2.0, 0.0, 2.0],
///     [-1.0, 0.0, 1.0],
/// ]);
///
/// assert_eq!(kernel.width(), 3);
/// assert_eq!(kernel.get(2, 1), Some(2.0));
/// assert_eq!(kernel.center(), Anchor::new(1, 1));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Kernel {
    width: usize,
    height: usize,
    weights: Vec<f32>,
}

impl Kernel {
    /// Create a kernel from row-major weights.
    ///
    /// A kernel with a zero side may be built; it is rejected when used for
    /// convolution.
    ///
    /// # Errors
    ///
    /// Returns [`ConvolutionError::KernelDataMismatch`] if `weights` does not
    /// hold exactly `width * height` values.
    pub fn new(width: usize, height: usize, weights: Vec<f32>) -> Result<Self, ConvolutionError> {
        if weights.len() != width * height {
            return Err(ConvolutionError::KernelDataMismatch(
                weights.len(),
                width * height,
            ));
        }
        Ok(Self {
            width,
            height,
            weights,
        })
    }

    /// Create a kernel from a fixed size array of rows.
    pub fn from_rows<const W: usize, const H: usize>(rows: [[f32; W]; H]) -> Self {
        Self {
            width: W,
            height: H,
            weights: rows.iter().flatten().copied().collect(),
        }
    }

    /// Get the kernel width.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Get the kernel height.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Get the row-major kernel weights.
    #[inline]
    pub fn weights(&self) -> &[f32] {
        &self.weights
    }

    /// Get the weight at column `x` and row `y`.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Option<f32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.weights[y * self.width + x])
    }

    /// Sum of all weights. Zero for edge detectors, one for sharpening.
    pub fn sum(&self) -> f32 {
        self.weights.iter().sum()
    }

    /// The geometric center of the kernel.
    pub fn center(&self) -> Anchor {
        Anchor::new(self.width / 2, self.height / 2)
    }

    /// Check that the kernel is non-empty and that `anchor` lies inside it.
    pub fn validate_anchor(&self, anchor: Anchor) -> Result<(), ConvolutionError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConvolutionError::InvalidKernel {
                width: self.width,
                height: self.height,
            });
        }

        if anchor.x >= self.width || anchor.y >= self.height {
            return Err(ConvolutionError::InvalidAnchor {
                anchor,
                width: self.width,
                height: self.height,
            });
        }

        Ok(())
    }
}
