use edgeconv_core::{BorderPolicy, GrayImage};

use crate::error::FilterError;
use crate::registry::{standard_registry, FilterKind};

/// Apply a shipped filter selected by name.
///
/// Names are matched ignoring ASCII case, e.g. `"Sobel-X"` or `"laplacian-8"`.
/// The kernel is anchored at its center.
///
/// # Arguments
///
/// * `src` - The source image with shape (H, W).
/// * `name` - The filter name, see [`FilterKind::name`].
/// * `border` - The policy used for samples outside the image.
///
/// # Errors
///
/// Fails with [`FilterError::UnknownFilter`] if no filter has that name. No
/// output is allocated in that case.
///
/// # Examples
///
/// ```
/// use edgeconv_core::{BorderMode, GrayImage};
/// use edgeconv_filter::apply_named_filter;
///
/// let image = GrayImage::from_size_val([4, 4].into(), 80).unwrap();
/// let edges = apply_named_filter(&image, "laplacian-8", &BorderMode::Reflect).unwrap();
/// assert!(edges.as_slice().iter().all(|&v| v == 0));
/// ```
pub fn apply_named_filter<B: BorderPolicy + ?Sized>(
    src: &GrayImage,
    name: &str,
    border: &B,
) -> Result<GrayImage, FilterError> {
    standard_registry().apply(src, name, border)
}

/// Apply a shipped filter.
///
/// # Arguments
///
/// * `src` - The source image with shape (H, W).
/// * `kind` - The filter to apply.
/// * `border` - The policy used for samples outside the image.
pub fn apply_filter<B: BorderPolicy + ?Sized>(
    src: &GrayImage,
    kind: FilterKind,
    border: &B,
) -> Result<GrayImage, FilterError> {
    standard_registry().apply(src, kind.name(), border)
}
