use crate::error::ImageError;

/// Image size in pixels
///
/// A struct to represent the size of an image in pixels.
///
/// # Examples
///
/// ```
/// use edgeconv_core::ImageSize;
///
/// let image_size = ImageSize {
///   width: 10,
///   height: 20,
/// };
///
/// assert_eq!(image_size.width, 10);
/// assert_eq!(image_size.height, 20);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ImageSize {
    /// Width of the image in pixels
    pub width: usize,
    /// Height of the image in pixels
    pub height: usize,
}

impl ImageSize {
    /// Whether the pixel coordinate lies inside the image.
    #[inline]
    pub fn contains(&self, x: isize, y: isize) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
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

/// An 8-bit single channel image.
///
/// The pixels are stored row-major. The image cannot be mutated once built;
/// every filter returns a freshly allocated image.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GrayImage {
    size: ImageSize,
    data: Vec<u8>,
}

impl GrayImage {
    /// Create a new image from pixel data.
    ///
    /// # Arguments
    ///
    /// * `size` - The size of the image in pixels.
    /// * `data` - The row-major pixel data of the image.
    ///
    /// # Errors
    ///
    /// If one side of the image is zero or the length of the pixel data does
    /// not match the image size, an error is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use edgeconv_core::{GrayImage, ImageSize};
    ///
    /// let image = GrayImage::new(
    ///     ImageSize {
    ///         width: 10,
    ///         height: 20,
    ///     },
    ///     vec![0u8; 10 * 20],
    /// ).unwrap();
    ///
    /// assert_eq!(image.width(), 10);
    /// assert_eq!(image.height(), 20);
    /// ```
    pub fn new(size: ImageSize, data: Vec<u8>) -> Result<Self, ImageError> {
        if size.width == 0 || size.height == 0 {
            return Err(ImageError::ZeroSize(size.width, size.height));
        }

        if data.len() != size.width * size.height {
            return Err(ImageError::InvalidDataLength(
                data.len(),
                size.width * size.height,
            ));
        }

        Ok(Self { size, data })
    }

    /// Wrap pixel data whose length is already known to match `size`.
    pub(crate) fn from_raw(size: ImageSize, data: Vec<u8>) -> Self {
        debug_assert_eq!(data.len(), size.width * size.height);
        Self { size, data }
    }

    /// Create a new image with every pixel set to `val`.
    pub fn from_size_val(size: ImageSize, val: u8) -> Result<Self, ImageError> {
        Self::new(size, vec![val; size.width * size.height])
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

    /// Get the number of columns of the image.
    pub fn cols(&self) -> usize {
        self.width()
    }

    /// Get the number of rows of the image.
    pub fn rows(&self) -> usize {
        self.height()
    }

    /// Get the pixel data of the image.
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// Get the pixel at `(x, y)` or `None` if it lies outside the image.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Option<u8> {
        if x >= self.size.width || y >= self.size.height {
            return None;
        }
        Some(self.data[y * self.size.width + x])
    }

    #[inline]
    pub(crate) fn get_unchecked(&self, x: usize, y: usize) -> u8 {
        self.data[y * self.size.width + x]
    }

    /// Consume the image and return its pixel data.
    pub fn into_vec(self) -> Vec<u8> {
        self.data
    }
}
