use edgeconv_core::{convolve, BorderPolicy, GrayImage};
use rayon::prelude::*;

use crate::error::FilterError;
use crate::registry::{FilterKind, KernelRegistry};

/// Apply the filter registered under `name` to every image in parallel.
///
/// Each image is convolved on a single rayon worker; the outputs keep the
/// order of `images`. The name is resolved once, so an unknown filter fails
/// before any work is scheduled.
///
/// # Arguments
///
/// * `registry` - The registry holding the kernel.
/// * `images` - The source images.
/// * `name` - The filter name.
/// * `border` - The policy used for samples outside each image.
pub fn apply_registered_batch<B: BorderPolicy + ?Sized>(
    registry: &KernelRegistry,
    images: &[GrayImage],
    name: &str,
    border: &B,
) -> Result<Vec<GrayImage>, FilterError> {
    let entry = registry.lookup(name)?;
    log::trace!("applying {name} to a batch of {} images", images.len());

    images
        .par_iter()
        .map(|image| {
            convolve(image, &entry.kernel, entry.anchor, border).map_err(FilterError::from)
        })
        .collect()
}

/// Apply a shipped filter selected by name to every image in parallel.
///
/// See [`crate::apply_named_filter`] for the single image version.
pub fn apply_named_filter_batch<B: BorderPolicy + ?Sized>(
    images: &[GrayImage],
    name: &str,
    border: &B,
) -> Result<Vec<GrayImage>, FilterError> {
    apply_registered_batch(crate::standard_registry(), images, name, border)
}

/// Apply a shipped filter to every image in parallel.
pub fn apply_filter_batch<B: BorderPolicy + ?Sized>(
    images: &[GrayImage],
    kind: FilterKind,
    border: &B,
) -> Result<Vec<GrayImage>, FilterError> {
    apply_named_filter_batch(images, kind.name(), border)
}
